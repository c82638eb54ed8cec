//! Lexical rules of the C-family target: keywords, identifiers, operators
//! and literals.

use std::borrow::Cow;

use crate::model::{BinaryOperator, Expression, Literal, UnaryOperator};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.binary_search(&name).is_ok()
}

/// Whether `name` lexes as a single identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {}
        _ => return false,
    }
    chars.all(unicode_ident::is_xid_continue)
}

/// Name as it can appear in source.
///
/// Keywords get an `@` prefix; compiler-generated names that are not
/// identifiers are wrapped in backticks.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if !is_identifier(name) {
        Cow::Owned(format!("`{name}`"))
    } else if is_keyword(name) {
        Cow::Owned(format!("@{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Escape each dot-separated segment (explicit interface implementations).
pub fn escape_qualified(name: &str) -> String {
    name.split('.')
        .map(escape_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Drop the generic arity suffix of a metadata name: ``List`1`` → `List`.
pub fn strip_arity(name: &str) -> &str {
    match name.rfind('`') {
        Some(index) if index > 0 && name[index + 1..].bytes().all(|b| b.is_ascii_digit()) => {
            &name[..index]
        }
        _ => name,
    }
}

/// Keyword alias of a `System` primitive.
pub fn primitive_alias(namespace: &str, name: &str) -> Option<&'static str> {
    if namespace != "System" {
        return None;
    }
    Some(match name {
        "Void" => "void",
        "Boolean" => "bool",
        "Char" => "char",
        "SByte" => "sbyte",
        "Byte" => "byte",
        "Int16" => "short",
        "UInt16" => "ushort",
        "Int32" => "int",
        "UInt32" => "uint",
        "Int64" => "long",
        "UInt64" => "ulong",
        "Single" => "float",
        "Double" => "double",
        "Decimal" => "decimal",
        "String" => "string",
        "Object" => "object",
        _ => return None,
    })
}

// ============================================================================
// OPERATORS
// ============================================================================

pub const PRECEDENCE_LAMBDA: u8 = 1;
pub const PRECEDENCE_ASSIGNMENT: u8 = 2;
pub const PRECEDENCE_CONDITIONAL: u8 = 3;
pub const PRECEDENCE_NULL_COALESCING: u8 = 4;
pub const PRECEDENCE_RELATIONAL: u8 = 11;
pub const PRECEDENCE_UNARY: u8 = 15;
pub const PRECEDENCE_PRIMARY: u8 = 16;

pub fn binary_precedence(operator: BinaryOperator) -> u8 {
    use BinaryOperator::*;
    match operator {
        BooleanOr => 5,
        BooleanAnd => 6,
        BitwiseOr => 7,
        BitwiseExclusiveOr => 8,
        BitwiseAnd => 9,
        IdentityEquality | IdentityInequality | ValueEquality | ValueInequality => 10,
        LessThan | LessThanOrEqual | GreaterThan | GreaterThanOrEqual => PRECEDENCE_RELATIONAL,
        ShiftLeft | ShiftRight => 12,
        Add | Subtract => 13,
        Multiply | Divide | Modulus => 14,
    }
}

pub fn binary_token(operator: BinaryOperator) -> &'static str {
    use BinaryOperator::*;
    match operator {
        Add => "+",
        Subtract => "-",
        Multiply => "*",
        Divide => "/",
        Modulus => "%",
        ShiftLeft => "<<",
        ShiftRight => ">>",
        IdentityEquality | ValueEquality => "==",
        IdentityInequality | ValueInequality => "!=",
        BitwiseOr => "|",
        BitwiseAnd => "&",
        BitwiseExclusiveOr => "^",
        BooleanOr => "||",
        BooleanAnd => "&&",
        LessThan => "<",
        LessThanOrEqual => "<=",
        GreaterThan => ">",
        GreaterThanOrEqual => ">=",
    }
}

/// Operator token and whether it follows the operand.
pub fn unary_token(operator: UnaryOperator) -> (&'static str, bool) {
    match operator {
        UnaryOperator::Negate => ("-", false),
        UnaryOperator::BooleanNot => ("!", false),
        UnaryOperator::BitwiseNot => ("~", false),
        UnaryOperator::PreIncrement => ("++", false),
        UnaryOperator::PreDecrement => ("--", false),
        UnaryOperator::PostIncrement => ("++", true),
        UnaryOperator::PostDecrement => ("--", true),
    }
}

/// Binding strength of an expression; higher binds tighter.
pub fn precedence(expression: &Expression) -> u8 {
    match expression {
        Expression::Lambda(_) | Expression::AnonymousMethod(_) => PRECEDENCE_LAMBDA,
        Expression::Assign(_) => PRECEDENCE_ASSIGNMENT,
        Expression::Condition(_) => PRECEDENCE_CONDITIONAL,
        Expression::NullCoalescing(_) => PRECEDENCE_NULL_COALESCING,
        Expression::Binary(binary) => binary_precedence(binary.operator),
        Expression::TryCast(_) | Expression::CanCast(_) => PRECEDENCE_RELATIONAL,
        Expression::Unary(unary) if unary_token(unary.operator).1 => PRECEDENCE_PRIMARY,
        Expression::Unary(_)
        | Expression::Cast(_)
        | Expression::AddressOf(_)
        | Expression::AddressDereference(_)
        | Expression::AddressOut(_)
        | Expression::AddressReference(_) => PRECEDENCE_UNARY,
        _ => PRECEDENCE_PRIMARY,
    }
}

// ============================================================================
// LITERALS
// ============================================================================

fn push_escaped(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
        c => out.push(c),
    }
}

pub fn literal_text(literal: &Literal) -> String {
    match literal {
        Literal::Null => "null".to_string(),
        Literal::Boolean(value) => value.to_string(),
        Literal::Char(c) => {
            let mut out = String::from('\'');
            push_escaped(&mut out, *c, '\'');
            out.push('\'');
            out
        }
        Literal::String(text) => {
            let mut out = String::with_capacity(text.len() + 2);
            out.push('"');
            for c in text.chars() {
                push_escaped(&mut out, c, '"');
            }
            out.push('"');
            out
        }
        Literal::Int(value) => value.to_string(),
        Literal::UInt(value) => value.to_string(),
        Literal::Float(value) if value.is_nan() => "double.NaN".to_string(),
        Literal::Float(value) if value.is_infinite() => {
            if *value > 0.0 {
                "double.PositiveInfinity".to_string()
            } else {
                "double.NegativeInfinity".to_string()
            }
        }
        Literal::Float(value) => format!("{value:?}"),
    }
}
