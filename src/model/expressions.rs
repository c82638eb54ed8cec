//! Expression syntax tree.

use smol_str::SmolStr;

use super::ids::{EventId, FieldId, MethodId, PropertyId};
use super::kind::ExpressionKind;
use super::members::ParameterDecl;
use super::statements::{BlockStatement, VariableDecl};
use super::types::TypeSig;

/// A decompiled expression. The variant set is closed.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Literal(LiteralExpression),
    ArgumentReference(ArgumentReferenceExpression),
    VariableReference(VariableReferenceExpression),
    VariableDeclaration(VariableDeclarationExpression),
    ThisReference(ThisReferenceExpression),
    BaseReference(BaseReferenceExpression),
    TypeReference(TypeReferenceExpression),
    FieldReference(FieldReferenceExpression),
    PropertyReference(PropertyReferenceExpression),
    PropertyIndexer(PropertyIndexerExpression),
    EventReference(EventReferenceExpression),
    MethodReference(MethodReferenceExpression),
    MethodInvoke(MethodInvokeExpression),
    DelegateInvoke(DelegateInvokeExpression),
    ObjectCreate(ObjectCreateExpression),
    ArrayCreate(ArrayCreateExpression),
    ArrayIndexer(ArrayIndexerExpression),
    Block(BlockExpression),
    MemberInitializer(MemberInitializerExpression),
    Assign(AssignExpression),
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Cast(CastExpression),
    TryCast(TryCastExpression),
    CanCast(CanCastExpression),
    Condition(ConditionExpression),
    NullCoalescing(NullCoalescingExpression),
    TypeOf(TypeOfExpression),
    SizeOf(SizeOfExpression),
    GenericDefault(GenericDefaultExpression),
    DelegateCreate(DelegateCreateExpression),
    AnonymousMethod(AnonymousMethodExpression),
    Lambda(LambdaExpression),
    AddressOut(AddressOutExpression),
    AddressReference(AddressReferenceExpression),
    AddressOf(AddressOfExpression),
    AddressDereference(AddressDereferenceExpression),
    ArgumentList(ArgumentListExpression),
    StackAllocate(StackAllocateExpression),
    TypedReferenceCreate(TypedReferenceCreateExpression),
    TypeOfTypedReference(TypeOfTypedReferenceExpression),
    ValueOfTypedReference(ValueOfTypedReferenceExpression),
    Snippet(SnippetExpression),
    FieldOf(FieldOfExpression),
    MethodOf(MethodOfExpression),
}

impl Expression {
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Self::Literal(_) => ExpressionKind::Literal,
            Self::ArgumentReference(_) => ExpressionKind::ArgumentReference,
            Self::VariableReference(_) => ExpressionKind::VariableReference,
            Self::VariableDeclaration(_) => ExpressionKind::VariableDeclaration,
            Self::ThisReference(_) => ExpressionKind::ThisReference,
            Self::BaseReference(_) => ExpressionKind::BaseReference,
            Self::TypeReference(_) => ExpressionKind::TypeReference,
            Self::FieldReference(_) => ExpressionKind::FieldReference,
            Self::PropertyReference(_) => ExpressionKind::PropertyReference,
            Self::PropertyIndexer(_) => ExpressionKind::PropertyIndexer,
            Self::EventReference(_) => ExpressionKind::EventReference,
            Self::MethodReference(_) => ExpressionKind::MethodReference,
            Self::MethodInvoke(_) => ExpressionKind::MethodInvoke,
            Self::DelegateInvoke(_) => ExpressionKind::DelegateInvoke,
            Self::ObjectCreate(_) => ExpressionKind::ObjectCreate,
            Self::ArrayCreate(_) => ExpressionKind::ArrayCreate,
            Self::ArrayIndexer(_) => ExpressionKind::ArrayIndexer,
            Self::Block(_) => ExpressionKind::Block,
            Self::MemberInitializer(_) => ExpressionKind::MemberInitializer,
            Self::Assign(_) => ExpressionKind::Assign,
            Self::Binary(_) => ExpressionKind::Binary,
            Self::Unary(_) => ExpressionKind::Unary,
            Self::Cast(_) => ExpressionKind::Cast,
            Self::TryCast(_) => ExpressionKind::TryCast,
            Self::CanCast(_) => ExpressionKind::CanCast,
            Self::Condition(_) => ExpressionKind::Condition,
            Self::NullCoalescing(_) => ExpressionKind::NullCoalescing,
            Self::TypeOf(_) => ExpressionKind::TypeOf,
            Self::SizeOf(_) => ExpressionKind::SizeOf,
            Self::GenericDefault(_) => ExpressionKind::GenericDefault,
            Self::DelegateCreate(_) => ExpressionKind::DelegateCreate,
            Self::AnonymousMethod(_) => ExpressionKind::AnonymousMethod,
            Self::Lambda(_) => ExpressionKind::Lambda,
            Self::AddressOut(_) => ExpressionKind::AddressOut,
            Self::AddressReference(_) => ExpressionKind::AddressReference,
            Self::AddressOf(_) => ExpressionKind::AddressOf,
            Self::AddressDereference(_) => ExpressionKind::AddressDereference,
            Self::ArgumentList(_) => ExpressionKind::ArgumentList,
            Self::StackAllocate(_) => ExpressionKind::StackAllocate,
            Self::TypedReferenceCreate(_) => ExpressionKind::TypedReferenceCreate,
            Self::TypeOfTypedReference(_) => ExpressionKind::TypeOfTypedReference,
            Self::ValueOfTypedReference(_) => ExpressionKind::ValueOfTypedReference,
            Self::Snippet(_) => ExpressionKind::Snippet,
            Self::FieldOf(_) => ExpressionKind::FieldOf,
            Self::MethodOf(_) => ExpressionKind::MethodOf,
        }
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        Self::Literal(LiteralExpression {
            value: value.into(),
        })
    }

    pub fn null() -> Self {
        Self::literal(Literal::Null)
    }

    pub fn this() -> Self {
        Self::ThisReference(ThisReferenceExpression)
    }

    pub fn variable(name: impl Into<SmolStr>) -> Self {
        Self::VariableReference(VariableReferenceExpression {
            variable: name.into(),
        })
    }

    pub fn argument(name: impl Into<SmolStr>) -> Self {
        Self::ArgumentReference(ArgumentReferenceExpression {
            parameter: name.into(),
        })
    }

    pub fn field(target: Option<Expression>, field: FieldId) -> Self {
        Self::FieldReference(FieldReferenceExpression {
            target: target.map(Box::new),
            field,
        })
    }

    pub fn property(target: Option<Expression>, property: PropertyId) -> Self {
        Self::PropertyReference(PropertyReferenceExpression {
            target: target.map(Box::new),
            property,
        })
    }

    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Self::Binary(BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn assign(target: Expression, value: Expression) -> Self {
        Self::Assign(AssignExpression {
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    /// `target.method(arguments)`.
    pub fn call(target: Option<Expression>, method: MethodId, arguments: Vec<Expression>) -> Self {
        Self::MethodInvoke(MethodInvokeExpression {
            method: Box::new(Self::MethodReference(MethodReferenceExpression {
                target: target.map(Box::new),
                method,
            })),
            arguments,
        })
    }
}

// ============================================================================
// LITERALS AND NAMES
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Char(char),
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LiteralExpression {
    pub value: Literal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentReferenceExpression {
    pub parameter: SmolStr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableReferenceExpression {
    pub variable: SmolStr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclarationExpression {
    pub variable: VariableDecl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThisReferenceExpression;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseReferenceExpression;

#[derive(Clone, Debug, PartialEq)]
pub struct TypeReferenceExpression {
    pub ty: TypeSig,
}

// ============================================================================
// MEMBER ACCESS
// ============================================================================

/// `target.field`; a `None` target is a static access.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldReferenceExpression {
    pub target: Option<Box<Expression>>,
    pub field: FieldId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyReferenceExpression {
    pub target: Option<Box<Expression>>,
    pub property: PropertyId,
}

/// `target[indices]` through an indexer property.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyIndexerExpression {
    pub target: Box<Expression>,
    pub indices: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventReferenceExpression {
    pub target: Option<Box<Expression>>,
    pub event: EventId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodReferenceExpression {
    pub target: Option<Box<Expression>>,
    pub method: MethodId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodInvokeExpression {
    pub method: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DelegateInvokeExpression {
    pub target: Box<Expression>,
    pub arguments: Vec<Expression>,
}

// ============================================================================
// CREATION
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectCreateExpression {
    pub ty: TypeSig,
    pub constructor: Option<MethodId>,
    pub arguments: Vec<Expression>,
    pub initializer: Option<BlockExpression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayCreateExpression {
    pub element_type: TypeSig,
    pub dimensions: Vec<Expression>,
    pub initializer: Option<BlockExpression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayIndexerExpression {
    pub target: Box<Expression>,
    pub indices: Vec<Expression>,
}

/// Brace-delimited initializer list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockExpression {
    pub expressions: Vec<Expression>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberTarget {
    Field(FieldId),
    Property(PropertyId),
}

/// `Member = value` inside an object initializer.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberInitializerExpression {
    pub member: MemberTarget,
    pub value: Box<Expression>,
}

// ============================================================================
// OPERATORS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct AssignExpression {
    pub target: Box<Expression>,
    pub value: Box<Expression>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    ShiftLeft,
    ShiftRight,
    IdentityEquality,
    IdentityInequality,
    ValueEquality,
    ValueInequality,
    BitwiseOr,
    BitwiseAnd,
    BitwiseExclusiveOr,
    BooleanOr,
    BooleanAnd,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    BooleanNot,
    BitwiseNot,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CastExpression {
    pub target_type: TypeSig,
    pub expression: Box<Expression>,
}

/// `expression as T`.
#[derive(Clone, Debug, PartialEq)]
pub struct TryCastExpression {
    pub target_type: TypeSig,
    pub expression: Box<Expression>,
}

/// `expression is T`.
#[derive(Clone, Debug, PartialEq)]
pub struct CanCastExpression {
    pub target_type: TypeSig,
    pub expression: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConditionExpression {
    pub condition: Box<Expression>,
    pub then: Box<Expression>,
    pub otherwise: Box<Expression>,
}

/// `condition ?? expression`.
#[derive(Clone, Debug, PartialEq)]
pub struct NullCoalescingExpression {
    pub condition: Box<Expression>,
    pub expression: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeOfExpression {
    pub ty: TypeSig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SizeOfExpression {
    pub ty: TypeSig,
}

/// `default(T)`.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericDefaultExpression {
    pub ty: TypeSig,
}

// ============================================================================
// DELEGATES
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct DelegateCreateExpression {
    pub delegate_type: TypeSig,
    pub target: Box<Expression>,
    pub method: MethodId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnonymousMethodExpression {
    pub delegate_type: TypeSig,
    pub parameters: Vec<ParameterDecl>,
    pub body: BlockStatement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LambdaExpression {
    pub parameters: Vec<VariableDecl>,
    pub body: Box<Expression>,
}

// ============================================================================
// ADDRESSES AND UNMANAGED CONSTRUCTS
// ============================================================================

/// `out expression`.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressOutExpression {
    pub expression: Box<Expression>,
}

/// `ref expression`.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressReferenceExpression {
    pub expression: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AddressOfExpression {
    pub expression: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AddressDereferenceExpression {
    pub expression: Box<Expression>,
}

/// `__arglist` handle of a vararg method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArgumentListExpression;

#[derive(Clone, Debug, PartialEq)]
pub struct StackAllocateExpression {
    pub ty: TypeSig,
    pub count: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypedReferenceCreateExpression {
    pub expression: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeOfTypedReferenceExpression {
    pub expression: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueOfTypedReferenceExpression {
    pub target_type: TypeSig,
    pub expression: Box<Expression>,
}

/// Verbatim text the decompiler could not structure.
#[derive(Clone, Debug, PartialEq)]
pub struct SnippetExpression {
    pub text: String,
}

/// Runtime field handle (`ldtoken` on a field).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldOfExpression {
    pub field: FieldId,
}

/// Runtime method handle (`ldtoken` on a method).
#[derive(Clone, Debug, PartialEq)]
pub struct MethodOfExpression {
    pub method: MethodId,
}
