use super::*;
use crate::format::StyledFormatter;
use crate::resolve::VisibilityPolicy;

struct Fixture {
    builder: ModelBuilder,
    module: ModuleId,
    corlib: AssemblyRefId,
    object: TypeId,
    int32: TypeId,
    void: TypeId,
}

impl Fixture {
    fn new() -> Self {
        let mut builder = ModelBuilder::new();
        let assembly = builder.add_assembly(Assembly::new("Sample", Version::new(1, 0, 0, 0)));
        let module = builder.add_module(Module::new("Sample.dll", assembly));
        let corlib =
            builder.reference_assembly(assembly, AssemblyRef::new("mscorlib", Version::new(4, 0, 0, 0)));
        let mut system = |name: &str| {
            builder.add_type(TypeRef::new(name, Owner::Assembly(corlib)).with_namespace("System"))
        };
        let object = system("Object");
        let int32 = system("Int32");
        let void = system("Void");
        Self {
            builder,
            module,
            corlib,
            object,
            int32,
            void,
        }
    }

    fn system(&mut self, name: &str) -> TypeId {
        self.builder
            .add_type(TypeRef::new(name, Owner::Assembly(self.corlib)).with_namespace("System"))
    }

    fn class(&mut self, name: &str, visibility: TypeVisibility) -> TypeId {
        let object = self.object;
        self.builder.define_type(
            TypeRef::new(name, Owner::Module(self.module)).with_namespace("Demo"),
            TypeDecl::new(visibility).with_base_type(object),
        )
    }

    fn field(&mut self, owner: TypeId, name: &str, visibility: MemberVisibility) -> FieldId {
        let int32 = self.int32;
        self.builder
            .define_field(FieldRef::new(name, owner, int32), FieldDecl::new(visibility))
    }

    fn method(&mut self, owner: TypeId, name: &str, decl: MethodDecl) -> MethodId {
        let void = self.void;
        self.builder.define_method(MethodRef::new(name, owner, void), decl)
    }
}

fn render(model: &Model, root: Root, options: &EmitOptions) -> String {
    render_to_string(model, &root, options).unwrap()
}

fn expression(expression: Expression) -> String {
    let model = Model::default();
    render(&model, Root::Expression(expression), &EmitOptions::default())
}

fn statement(statement: Statement) -> String {
    let model = Model::default();
    render(&model, Root::Statement(statement), &EmitOptions::default())
}

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement::new(statements)
}

fn brk() -> Statement {
    Statement::Break(BreakStatement)
}

fn options(flags: &[&str]) -> EmitOptions {
    EmitOptions::from_config(flags.iter().map(|flag| (*flag, true)))
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

#[test]
fn test_parentheses_follow_precedence() {
    let sum = Expression::binary(var("a"), BinaryOperator::Add, var("b"));
    let product = Expression::binary(sum.clone(), BinaryOperator::Multiply, var("c"));
    assert_eq!(expression(product), "(a + b) * c");

    let product = Expression::binary(var("c"), BinaryOperator::Multiply, var("d"));
    let sum = Expression::binary(var("a"), BinaryOperator::Add, product);
    assert_eq!(expression(sum), "a + c * d");
}

#[test]
fn test_subtraction_is_left_associative() {
    let left = Expression::binary(
        Expression::binary(var("a"), BinaryOperator::Subtract, var("b")),
        BinaryOperator::Subtract,
        var("c"),
    );
    assert_eq!(expression(left), "a - b - c");

    let right = Expression::binary(
        var("a"),
        BinaryOperator::Subtract,
        Expression::binary(var("b"), BinaryOperator::Subtract, var("c")),
    );
    assert_eq!(expression(right), "a - (b - c)");
}

#[test]
fn test_nested_negation_keeps_tokens_apart() {
    let inner = Expression::Unary(UnaryExpression {
        operator: UnaryOperator::Negate,
        operand: Box::new(var("x")),
    });
    let outer = Expression::Unary(UnaryExpression {
        operator: UnaryOperator::Negate,
        operand: Box::new(inner),
    });
    assert_eq!(expression(outer), "- -x");

    let postfix = Expression::Unary(UnaryExpression {
        operator: UnaryOperator::PostIncrement,
        operand: Box::new(var("i")),
    });
    assert_eq!(expression(postfix), "i++");
}

#[test]
fn test_cast_parenthesizes_binary_operand() {
    let f = Fixture::new();
    let int32 = f.int32;
    let model = f.builder.build();
    let cast = Expression::Cast(CastExpression {
        target_type: int32.into(),
        expression: Box::new(Expression::binary(var("a"), BinaryOperator::Add, var("b"))),
    });

    assert_eq!(
        render(&model, Root::Expression(cast), &EmitOptions::default()),
        "(int)(a + b)"
    );
}

#[test]
fn test_lambda_parameter_lists() {
    let single = Expression::Lambda(LambdaExpression {
        parameters: vec![VariableDecl::new("x", TypeSig::type_parameter("T", 0))],
        body: Box::new(var("x")),
    });
    assert_eq!(expression(single), "x => x");

    let pair = Expression::Lambda(LambdaExpression {
        parameters: vec![
            VariableDecl::new("x", TypeSig::type_parameter("T", 0)),
            VariableDecl::new("y", TypeSig::type_parameter("T", 0)),
        ],
        body: Box::new(Expression::binary(var("x"), BinaryOperator::Add, var("y"))),
    });
    assert_eq!(expression(pair), "(x, y) => x + y");
}

#[test]
fn test_jagged_array_creation_puts_size_first() {
    let f = Fixture::new();
    let int32 = f.int32;
    let model = f.builder.build();
    let create = Expression::ArrayCreate(ArrayCreateExpression {
        element_type: TypeSig::array(int32.into()),
        dimensions: vec![Expression::literal(3)],
        initializer: None,
    });

    assert_eq!(
        render(&model, Root::Expression(create), &EmitOptions::default()),
        "new int[3][]"
    );
}

#[test]
fn test_keyword_names_are_escaped() {
    assert_eq!(expression(var("class")), "@class");
    assert_eq!(expression(var("<>c__0")), "`<>c__0`");
}

#[test]
fn test_static_member_of_other_type_is_qualified() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    let count = f.field(widget, "Count", MemberVisibility::Public);
    let model = f.builder.build();

    assert_eq!(
        render(&model, Root::Expression(Expression::field(None, count)), &EmitOptions::default()),
        "Widget.Count"
    );
    assert_eq!(
        render(
            &model,
            Root::Expression(Expression::field(Some(Expression::this()), count)),
            &EmitOptions::default()
        ),
        "this.Count"
    );
}

#[test]
fn test_negative_literal_target_is_parenthesized() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    let count = f.field(widget, "Count", MemberVisibility::Public);
    let model = f.builder.build();
    let member_of = |target: Expression| {
        render(&model, Root::Expression(Expression::field(Some(target), count)), &EmitOptions::default())
    };

    assert_eq!(member_of(Expression::literal(-1)), "(-1).Count");
    assert_eq!(member_of(Expression::literal(1)), "1.Count");
    assert_eq!(member_of(var("x")), "x.Count");
}

// ============================================================================
// STATEMENTS
// ============================================================================

#[test]
fn test_else_if_chain() {
    let nested = Statement::Condition(ConditionStatement {
        condition: var("b"),
        then: block(vec![Statement::Continue(ContinueStatement)]),
        otherwise: BlockStatement::default(),
    });
    let outer = Statement::Condition(ConditionStatement {
        condition: var("a"),
        then: block(vec![brk()]),
        otherwise: block(vec![nested]),
    });

    assert_eq!(
        statement(outer),
        "if (a)\n{\n    break;\n}\nelse if (b)\n{\n    continue;\n}\n"
    );
}

#[test]
fn test_do_while_closes_on_brace_line() {
    let stmt = Statement::Do(DoStatement {
        body: block(vec![brk()]),
        condition: var("c"),
    });
    assert_eq!(statement(stmt), "do\n{\n    break;\n} while (c);\n");
}

#[test]
fn test_switch_cases_are_indented() {
    let stmt = Statement::Switch(SwitchStatement {
        expression: var("x"),
        cases: vec![
            SwitchCase {
                label: Some(Expression::literal(1)),
                body: block(vec![brk()]),
            },
            SwitchCase {
                label: None,
                body: block(vec![Statement::ret(None)]),
            },
        ],
    });

    assert_eq!(
        statement(stmt),
        "switch (x)\n{\n    case 1:\n        break;\n    default:\n        return;\n}\n"
    );
}

#[test]
fn test_for_with_empty_clauses() {
    let stmt = Statement::For(ForStatement {
        initializer: None,
        condition: None,
        increment: None,
        body: block(vec![brk()]),
    });
    assert_eq!(statement(stmt), "for (;;)\n{\n    break;\n}\n");
}

#[test]
fn test_multiline_comment() {
    let stmt = Statement::Comment(CommentStatement {
        text: "first\nsecond".to_string(),
    });
    assert_eq!(statement(stmt), "// first\n// second\n");
}

// ============================================================================
// DEGRADATION
// ============================================================================

#[test]
fn test_unsupported_nodes_degrade_and_siblings_continue() {
    let f = Fixture::new();
    let int32 = f.int32;
    let model = f.builder.build();
    let address_of = Expression::AddressOf(AddressOfExpression {
        expression: Box::new(var("y")),
    });
    let fixed = Statement::Fixed(FixedStatement {
        variable: VariableDecl::new("p", TypeSig::pointer(int32.into())),
        expression: var("buffer"),
        body: block(vec![brk()]),
    });
    let stmt = Statement::Condition(ConditionStatement {
        condition: var("flag"),
        then: block(vec![
            Statement::expression(Expression::assign(var("x"), address_of)),
            fixed,
            Statement::expression(Expression::assign(var("z"), Expression::literal(2))),
        ]),
        otherwise: BlockStatement::default(),
    });

    let mut emitter = Emitter::new(&model, EmitOptions::default(), TextFormatter::new());
    emitter.emit_statement(&stmt).unwrap();
    assert_eq!(emitter.degraded(), 2);

    let text = emitter.into_formatter().into_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6, "{text}");
    assert_eq!(lines[0], "if (flag)");
    assert_eq!(lines[1], "{");
    assert!(lines[2].starts_with("    x = /* unsupported AddressOfExpression: "));
    assert!(lines[2].ends_with(" */;"));
    assert!(lines[3].starts_with("    /* unsupported FixedStatement: "));
    assert_eq!(lines[4], "    z = 2;");
    assert_eq!(lines[5], "}");
}

#[test]
fn test_unsupported_set_is_configurable() {
    let address_of = Expression::AddressOf(AddressOfExpression {
        expression: Box::new(var("y")),
    });
    let model = Model::default();
    let options = EmitOptions::new().with_unsupported(Vec::new());

    assert_eq!(
        render(&model, Root::Expression(address_of.clone()), &options),
        "&y"
    );

    let options =
        EmitOptions::new().with_unsupported([NodeKind::Expression(ExpressionKind::VariableReference)]);
    let text = render(&model, Root::Expression(var("x")), &options);
    assert!(text.starts_with("/* unsupported VariableReferenceExpression: "));
}

#[test]
fn test_unsupported_block_degrades_bodies() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    let run = f.method(
        widget,
        "Run",
        MethodDecl::new(MemberVisibility::Public).with_body(block(vec![Statement::ret(None)])),
    );
    let model = f.builder.build();
    let no_blocks = || {
        options(&[SHOW_METHOD_DECLARATION_BODY])
            .with_unsupported([NodeKind::Statement(StatementKind::Block)])
    };

    let mut emitter = Emitter::new(&model, no_blocks(), TextFormatter::new());
    emitter.emit(&Root::Method(run)).unwrap();
    assert_eq!(emitter.degraded(), 1);
    let text = emitter.into_formatter().into_string();
    assert!(text.starts_with("public void Run()\n/* unsupported BlockStatement: "), "{text}");
    assert!(!text.contains('{'), "{text}");

    let stmt = Statement::Condition(ConditionStatement {
        condition: var("flag"),
        then: block(vec![brk()]),
        otherwise: BlockStatement::default(),
    });
    let mut emitter = Emitter::new(&model, no_blocks(), TextFormatter::new());
    emitter.emit_statement(&stmt).unwrap();
    assert_eq!(emitter.degraded(), 1);
    let text = emitter.into_formatter().into_string();
    assert!(text.starts_with("if (flag)\n/* unsupported BlockStatement: "), "{text}");
}

#[test]
fn test_marker_dump_cannot_close_comment() {
    let snippet = Expression::Snippet(SnippetExpression {
        text: "a */ b".to_string(),
    });
    let text = expression(snippet);
    assert_eq!(text.matches("*/").count(), 1);
    assert!(text.ends_with("*/"));
}

// ============================================================================
// STRUCTURE
// ============================================================================

#[test]
fn test_type_summary_lists_counts() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    f.field(widget, "count", MemberVisibility::Private);
    f.method(widget, "Run", MethodDecl::new(MemberVisibility::Public));
    let model = f.builder.build();

    assert_eq!(
        render(&model, Root::Type(widget), &EmitOptions::default()),
        "public class Widget\n// Fields: 1\n// Methods: 1\n"
    );
}

#[test]
fn test_type_full_body() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    f.field(widget, "count", MemberVisibility::Private);
    f.method(
        widget,
        "Run",
        MethodDecl::new(MemberVisibility::Public).with_body(block(vec![Statement::ret(None)])),
    );
    let model = f.builder.build();

    let full = options(&[SHOW_TYPE_DECLARATION_BODY, SHOW_METHOD_DECLARATION_BODY]);
    assert_eq!(
        render(&model, Root::Type(widget), &full),
        "public class Widget\n{\n    private int count;\n\n    public void Run()\n    {\n        return;\n    }\n}\n"
    );

    let signatures = options(&[SHOW_TYPE_DECLARATION_BODY]);
    assert_eq!(
        render(&model, Root::Type(widget), &signatures),
        "public class Widget\n{\n    private int count;\n\n    public void Run();\n}\n"
    );
}

#[test]
fn test_members_render_in_sorted_order() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    f.field(widget, "zeta", MemberVisibility::Public);
    f.field(widget, "alpha", MemberVisibility::Public);
    let model = f.builder.build();

    let text = render(&model, Root::Type(widget), &options(&[SHOW_TYPE_DECLARATION_BODY]));
    let alpha = text.find("alpha").unwrap();
    let zeta = text.find("zeta").unwrap();
    assert!(alpha < zeta);
    assert_eq!(text, render(&model, Root::Type(widget), &options(&[SHOW_TYPE_DECLARATION_BODY])));
}

#[test]
fn test_visibility_policy_filters_members_and_types() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    let hidden = f.class("Hidden", TypeVisibility::Private);
    f.field(widget, "count", MemberVisibility::Private);
    f.method(widget, "Run", MethodDecl::new(MemberVisibility::Public));
    let model = f.builder.build();

    let public = EmitOptions::new().with_visibility(VisibilityPolicy::public_only());
    assert_eq!(
        render(&model, Root::Type(widget), &public),
        "public class Widget\n// Methods: 1\n"
    );
    assert_eq!(render(&model, Root::Type(hidden), &public), "");
    assert_eq!(
        render(&model, Root::Type(hidden), &EmitOptions::default()),
        "internal class Hidden\n"
    );
}

#[test]
fn test_method_modifiers() {
    let mut f = Fixture::new();
    let shape = f.builder.define_type(
        TypeRef::new("Shape", Owner::Module(f.module)).with_namespace("Demo"),
        TypeDecl::new(TypeVisibility::Public)
            .with_base_type(f.object)
            .mark_abstract(),
    );
    let draw = f.method(shape, "Draw", MethodDecl::new(MemberVisibility::Public).mark_abstract());
    let show = f.method(shape, "Show", MethodDecl::new(MemberVisibility::Family).mark_virtual());
    let hash = f.method(
        shape,
        "GetHashCode",
        MethodDecl::new(MemberVisibility::Public).mark_override().mark_final(),
    );
    let ctor = f.method(shape, ".ctor", MethodDecl::new(MemberVisibility::Family));
    let model = f.builder.build();

    let none = EmitOptions::default();
    assert_eq!(render(&model, Root::Type(shape), &none), "public abstract class Shape\n// Methods: 4\n");
    assert_eq!(render(&model, Root::Method(draw), &none), "public abstract void Draw();\n");
    assert_eq!(render(&model, Root::Method(show), &none), "protected virtual void Show();\n");
    assert_eq!(
        render(&model, Root::Method(hash), &none),
        "public sealed override void GetHashCode();\n"
    );
    assert_eq!(render(&model, Root::Method(ctor), &none), "protected Shape();\n");
}

#[test]
fn test_interface_members_have_no_modifiers() {
    let mut f = Fixture::new();
    let shape = f.builder.define_type(
        TypeRef::new("IShape", Owner::Module(f.module)).with_namespace("Demo"),
        TypeDecl::new(TypeVisibility::Public).mark_interface(),
    );
    let draw = f.method(shape, "Draw", MethodDecl::new(MemberVisibility::Public).mark_abstract());
    let model = f.builder.build();

    assert_eq!(
        render(&model, Root::Type(shape), &options(&[SHOW_TYPE_DECLARATION_BODY])),
        "public interface IShape\n{\n    void Draw();\n}\n"
    );
    assert_eq!(render(&model, Root::Method(draw), &EmitOptions::default()), "void Draw();\n");
}

#[test]
fn test_enum_members_skip_value_field() {
    let mut f = Fixture::new();
    let enum_type = f.system("Enum");
    let byte = f.system("Byte");
    let color = f.builder.define_type(
        TypeRef::new("Color", Owner::Module(f.module)).with_namespace("Demo"),
        TypeDecl::new(TypeVisibility::Public)
            .with_base_type(enum_type)
            .mark_sealed(),
    );
    f.builder.define_field(
        FieldRef::new("value__", color, byte),
        FieldDecl::new(MemberVisibility::Public),
    );
    for (name, value) in [("Red", 0), ("Green", 1)] {
        f.builder.define_field(
            FieldRef::new(name, color, color),
            FieldDecl::new(MemberVisibility::Public)
                .mark_literal()
                .with_initializer(Expression::literal(value)),
        );
    }
    let model = f.builder.build();

    assert_eq!(
        render(&model, Root::Type(color), &options(&[SHOW_TYPE_DECLARATION_BODY])),
        "public enum Color : byte\n{\n    Red = 0,\n    Green = 1,\n}\n"
    );
}

#[test]
fn test_delegate_renders_as_signature() {
    let mut f = Fixture::new();
    let multicast = f.system("MulticastDelegate");
    let int32 = f.int32;
    let handler = f.builder.define_type(
        TypeRef::new("Handler", Owner::Module(f.module)).with_namespace("Demo"),
        TypeDecl::new(TypeVisibility::Public)
            .with_base_type(multicast)
            .mark_sealed(),
    );
    f.builder.define_method(
        MethodRef::new("Invoke", handler, int32).with_parameters(vec![ParameterDecl::new("x", int32)]),
        MethodDecl::new(MemberVisibility::Public).mark_virtual(),
    );
    let model = f.builder.build();

    assert_eq!(
        render(&model, Root::Type(handler), &EmitOptions::full()),
        "public delegate int Handler(int x);\n"
    );
}

#[test]
fn test_property_accessors_show_differing_visibility() {
    let mut f = Fixture::new();
    let int32 = f.int32;
    let widget = f.class("Widget", TypeVisibility::Public);
    let get = f.builder.define_method(
        MethodRef::new("get_Size", widget, int32),
        MethodDecl::new(MemberVisibility::Public).mark_special_name(),
    );
    let set = f.method(
        widget,
        "set_Size",
        MethodDecl::new(MemberVisibility::Private).mark_special_name(),
    );
    let size = f.builder.define_property(
        PropertyRef::new("Size", widget, int32),
        PropertyDecl::new(Some(get), Some(set)),
    );
    let model = f.builder.build();

    assert_eq!(
        render(&model, Root::Property(size), &EmitOptions::default()),
        "public int Size { get; private set; }\n"
    );
}

#[test]
fn test_indexer_renders_this() {
    let mut f = Fixture::new();
    let int32 = f.int32;
    let widget = f.class("Widget", TypeVisibility::Public);
    let get = f.builder.define_method(
        MethodRef::new("get_Item", widget, int32).with_parameters(vec![ParameterDecl::new("i", int32)]),
        MethodDecl::new(MemberVisibility::Public).mark_special_name(),
    );
    let item = f.builder.define_property(
        PropertyRef::new("Item", widget, int32).with_parameters(vec![ParameterDecl::new("i", int32)]),
        PropertyDecl::new(Some(get), None),
    );
    let model = f.builder.build();

    assert_eq!(
        render(&model, Root::Property(item), &EmitOptions::default()),
        "public int this[int i] { get; }\n"
    );
}

#[test]
fn test_assembly_summary_header() {
    let f = Fixture::new();
    let model = f.builder.build();

    assert_eq!(
        render(&model, Root::Assembly(AssemblyId::new(0)), &EmitOptions::default()),
        "// Assembly Sample, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null\n\
         // Modules: 1\n\
         // References: 1\n\
         // Resources: 0\n"
    );
}

#[test]
fn test_namespace_full_wraps_types() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    let gadget = f.class("Gadget", TypeVisibility::Public);
    let model = f.builder.build();
    let namespace = Namespace::new("Demo", vec![widget, gadget]);

    assert_eq!(
        render(&model, Root::Namespace(namespace.clone()), &options(&[SHOW_NAMESPACE_BODY])),
        "namespace Demo\n{\n    public class Widget\n\n    public class Gadget\n}\n"
    );
    assert_eq!(
        render(&model, Root::Namespace(namespace), &EmitOptions::default()),
        "// Namespace Demo\n// Types: 2\n"
    );
}

// ============================================================================
// ERRORS AND STYLING
// ============================================================================

#[test]
fn test_dangling_reference_reports_path() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    let dangling = Expression::field(Some(Expression::this()), FieldId::new(99));
    f.method(
        widget,
        "Run",
        MethodDecl::new(MemberVisibility::Public)
            .with_body(block(vec![Statement::expression(dangling)])),
    );
    let model = f.builder.build();

    let full = options(&[SHOW_TYPE_DECLARATION_BODY, SHOW_METHOD_DECLARATION_BODY]);
    let mut emitter = Emitter::new(&model, full, TextFormatter::new());
    let err = emitter.emit_type(widget).unwrap_err();

    assert_eq!(err.path(), "Demo.Widget > Run()");
    assert_eq!(err.model_error(), &ModelError::dangling(EntityKind::Field, 99));
    assert_eq!(emitter.formatter().indent_level().depth(), 0);
    assert!(emitter.formatter().as_str().ends_with('}'));
}

#[test]
fn test_styled_output_links_references() {
    let mut f = Fixture::new();
    let widget = f.class("Widget", TypeVisibility::Public);
    let count = f.field(widget, "count", MemberVisibility::Public);
    let model = f.builder.build();

    let mut emitter = Emitter::new(&model, EmitOptions::default(), StyledFormatter::new());
    emitter
        .emit_expression(&Expression::field(Some(Expression::this()), count))
        .unwrap();
    let styled = emitter.into_formatter();

    assert_eq!(styled.text(), "this.count");
    let references: Vec<_> = styled.references().collect();
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].target, Some(ReferenceTarget::Field(count)));
    assert_eq!(references[0].tooltip.as_deref(), Some("Demo.Widget.count"));
}

#[test]
fn test_render_many_keeps_input_order() {
    let roots = vec![
        Root::Expression(var("a")),
        Root::Expression(var("b")),
        Root::Expression(Expression::field(None, FieldId::new(5))),
    ];
    let model = Model::default();
    let results = render_many(&model, &roots, &EmitOptions::default());

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_deref(), Ok("a"));
    assert_eq!(results[1].as_deref(), Ok("b"));
    assert!(results[2].is_err());
}
