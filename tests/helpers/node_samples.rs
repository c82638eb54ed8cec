//! One representative node per statement and expression kind.
//!
//! Samples only reference entities of [`SAMPLE`](super::model_fixtures::SAMPLE)
//! and never nest a node of a kind that is unsupported by default inside a
//! node that is supported.

use ilview::model::*;

use super::model_fixtures::SAMPLE;

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn int(value: i32) -> Expression {
    Expression::literal(value)
}

fn boxed(expression: Expression) -> Box<Expression> {
    Box::new(expression)
}

fn body() -> BlockStatement {
    BlockStatement::new(vec![Statement::Break(BreakStatement)])
}

pub fn sample_expression(kind: ExpressionKind) -> Expression {
    let sample = &*SAMPLE;
    let int32 = TypeSig::from(sample.int32);
    let widget = TypeSig::from(sample.widget);
    match kind {
        ExpressionKind::Literal => int(1),
        ExpressionKind::ArgumentReference => Expression::argument("value"),
        ExpressionKind::VariableReference => var("x"),
        ExpressionKind::VariableDeclaration => {
            Expression::VariableDeclaration(VariableDeclarationExpression {
                variable: VariableDecl::new("x", int32),
            })
        }
        ExpressionKind::ThisReference => Expression::this(),
        ExpressionKind::BaseReference => Expression::BaseReference(BaseReferenceExpression),
        ExpressionKind::TypeReference => {
            Expression::TypeReference(TypeReferenceExpression { ty: widget })
        }
        ExpressionKind::FieldReference => Expression::field(Some(Expression::this()), sample.count),
        ExpressionKind::PropertyReference => {
            Expression::property(Some(Expression::this()), sample.size)
        }
        ExpressionKind::PropertyIndexer => Expression::PropertyIndexer(PropertyIndexerExpression {
            target: boxed(Expression::this()),
            indices: vec![int(0)],
        }),
        ExpressionKind::EventReference => Expression::EventReference(EventReferenceExpression {
            target: Some(boxed(Expression::this())),
            event: sample.changed,
        }),
        ExpressionKind::MethodReference => Expression::MethodReference(MethodReferenceExpression {
            target: Some(boxed(Expression::this())),
            method: sample.run,
        }),
        ExpressionKind::MethodInvoke => Expression::call(Some(Expression::this()), sample.run, vec![]),
        ExpressionKind::DelegateInvoke => Expression::DelegateInvoke(DelegateInvokeExpression {
            target: boxed(var("callback")),
            arguments: vec![int(1)],
        }),
        ExpressionKind::ObjectCreate => Expression::ObjectCreate(ObjectCreateExpression {
            ty: widget,
            constructor: None,
            arguments: vec![],
            initializer: None,
        }),
        ExpressionKind::ArrayCreate => Expression::ArrayCreate(ArrayCreateExpression {
            element_type: int32,
            dimensions: vec![int(3)],
            initializer: None,
        }),
        ExpressionKind::ArrayIndexer => Expression::ArrayIndexer(ArrayIndexerExpression {
            target: boxed(var("items")),
            indices: vec![int(0)],
        }),
        ExpressionKind::Block => Expression::Block(BlockExpression {
            expressions: vec![int(1), int(2)],
        }),
        ExpressionKind::MemberInitializer => {
            Expression::MemberInitializer(MemberInitializerExpression {
                member: MemberTarget::Field(sample.count),
                value: boxed(int(1)),
            })
        }
        ExpressionKind::Assign => Expression::assign(var("x"), int(1)),
        ExpressionKind::Binary => Expression::binary(var("a"), BinaryOperator::Add, int(1)),
        ExpressionKind::Unary => Expression::Unary(UnaryExpression {
            operator: UnaryOperator::BooleanNot,
            operand: boxed(var("done")),
        }),
        ExpressionKind::Cast => Expression::Cast(CastExpression {
            target_type: int32,
            expression: boxed(var("x")),
        }),
        ExpressionKind::TryCast => Expression::TryCast(TryCastExpression {
            target_type: widget,
            expression: boxed(var("x")),
        }),
        ExpressionKind::CanCast => Expression::CanCast(CanCastExpression {
            target_type: widget,
            expression: boxed(var("x")),
        }),
        ExpressionKind::Condition => Expression::Condition(ConditionExpression {
            condition: boxed(var("ok")),
            then: boxed(int(1)),
            otherwise: boxed(int(2)),
        }),
        ExpressionKind::NullCoalescing => Expression::NullCoalescing(NullCoalescingExpression {
            condition: boxed(var("x")),
            expression: boxed(var("fallback")),
        }),
        ExpressionKind::TypeOf => Expression::TypeOf(TypeOfExpression { ty: widget }),
        ExpressionKind::SizeOf => Expression::SizeOf(SizeOfExpression { ty: int32 }),
        ExpressionKind::GenericDefault => Expression::GenericDefault(GenericDefaultExpression {
            ty: TypeSig::type_parameter("T", 0),
        }),
        ExpressionKind::DelegateCreate => Expression::DelegateCreate(DelegateCreateExpression {
            delegate_type: TypeSig::from(sample.handler),
            target: boxed(Expression::this()),
            method: sample.run,
        }),
        ExpressionKind::AnonymousMethod => Expression::AnonymousMethod(AnonymousMethodExpression {
            delegate_type: TypeSig::from(sample.handler),
            parameters: vec![ParameterDecl::new("x", int32)],
            body: BlockStatement::new(vec![Statement::ret(None)]),
        }),
        ExpressionKind::Lambda => Expression::Lambda(LambdaExpression {
            parameters: vec![VariableDecl::new("x", int32)],
            body: boxed(var("x")),
        }),
        ExpressionKind::AddressOut => Expression::AddressOut(AddressOutExpression {
            expression: boxed(var("x")),
        }),
        ExpressionKind::AddressReference => Expression::AddressReference(AddressReferenceExpression {
            expression: boxed(var("x")),
        }),
        ExpressionKind::AddressOf => Expression::AddressOf(AddressOfExpression {
            expression: boxed(var("x")),
        }),
        ExpressionKind::AddressDereference => {
            Expression::AddressDereference(AddressDereferenceExpression {
                expression: boxed(var("p")),
            })
        }
        ExpressionKind::ArgumentList => Expression::ArgumentList(ArgumentListExpression),
        ExpressionKind::StackAllocate => Expression::StackAllocate(StackAllocateExpression {
            ty: int32,
            count: boxed(int(4)),
        }),
        ExpressionKind::TypedReferenceCreate => {
            Expression::TypedReferenceCreate(TypedReferenceCreateExpression {
                expression: boxed(var("x")),
            })
        }
        ExpressionKind::TypeOfTypedReference => {
            Expression::TypeOfTypedReference(TypeOfTypedReferenceExpression {
                expression: boxed(var("reference")),
            })
        }
        ExpressionKind::ValueOfTypedReference => {
            Expression::ValueOfTypedReference(ValueOfTypedReferenceExpression {
                target_type: int32,
                expression: boxed(var("reference")),
            })
        }
        ExpressionKind::Snippet => Expression::Snippet(SnippetExpression {
            text: "ldnull".to_string(),
        }),
        ExpressionKind::FieldOf => Expression::FieldOf(FieldOfExpression { field: sample.count }),
        ExpressionKind::MethodOf => Expression::MethodOf(MethodOfExpression { method: sample.run }),
    }
}

pub fn sample_statement(kind: StatementKind) -> Statement {
    let sample = &*SAMPLE;
    let int32 = TypeSig::from(sample.int32);
    let event = || {
        Expression::EventReference(EventReferenceExpression {
            target: Some(boxed(Expression::this())),
            event: sample.changed,
        })
    };
    match kind {
        StatementKind::Block => Statement::Block(body()),
        StatementKind::Expression => Statement::expression(Expression::assign(var("x"), int(1))),
        StatementKind::Goto => Statement::Goto(GotoStatement {
            label: "exit".into(),
        }),
        StatementKind::Labeled => Statement::Labeled(LabeledStatement {
            label: "exit".into(),
            statement: Some(Box::new(Statement::ret(None))),
        }),
        StatementKind::Condition => Statement::Condition(ConditionStatement {
            condition: var("ok"),
            then: body(),
            otherwise: BlockStatement::default(),
        }),
        StatementKind::MethodReturn => Statement::ret(Some(int(0))),
        StatementKind::For => Statement::For(ForStatement {
            initializer: Some(Expression::assign(var("i"), int(0))),
            condition: Some(Expression::binary(var("i"), BinaryOperator::LessThan, int(10))),
            increment: Some(Expression::Unary(UnaryExpression {
                operator: UnaryOperator::PostIncrement,
                operand: boxed(var("i")),
            })),
            body: body(),
        }),
        StatementKind::ForEach => Statement::ForEach(ForEachStatement {
            variable: VariableDecl::new("item", int32),
            expression: var("items"),
            body: body(),
        }),
        StatementKind::While => Statement::While(WhileStatement {
            condition: var("ok"),
            body: body(),
        }),
        StatementKind::Do => Statement::Do(DoStatement {
            body: body(),
            condition: var("ok"),
        }),
        StatementKind::TryCatchFinally => Statement::TryCatchFinally(TryCatchFinallyStatement {
            try_block: body(),
            catch_clauses: vec![CatchClause {
                variable: VariableDecl::new("", TypeSig::from(sample.widget)),
                condition: None,
                body: body(),
            }],
            fault: None,
            finally: Some(body()),
        }),
        StatementKind::ThrowException => {
            Statement::ThrowException(ThrowExceptionStatement { expression: None })
        }
        StatementKind::AttachEvent => Statement::AttachEvent(AttachEventStatement {
            event: event(),
            listener: var("listener"),
        }),
        StatementKind::RemoveEvent => Statement::RemoveEvent(RemoveEventStatement {
            event: event(),
            listener: var("listener"),
        }),
        StatementKind::Switch => Statement::Switch(SwitchStatement {
            expression: var("x"),
            cases: vec![
                SwitchCase {
                    label: Some(int(1)),
                    body: body(),
                },
                SwitchCase {
                    label: None,
                    body: body(),
                },
            ],
        }),
        StatementKind::Break => Statement::Break(BreakStatement),
        StatementKind::Continue => Statement::Continue(ContinueStatement),
        StatementKind::Comment => Statement::Comment(CommentStatement {
            text: "note".to_string(),
        }),
        StatementKind::Using => Statement::Using(UsingStatement {
            expression: var("stream"),
            body: body(),
        }),
        StatementKind::Lock => Statement::Lock(LockStatement {
            expression: Expression::this(),
            body: body(),
        }),
        StatementKind::Fixed => Statement::Fixed(FixedStatement {
            variable: VariableDecl::new("p", TypeSig::pointer(int32)),
            expression: var("buffer"),
            body: body(),
        }),
        StatementKind::MemoryCopy => Statement::MemoryCopy(MemoryCopyStatement {
            destination: var("destination"),
            source: var("source"),
            length: int(16),
        }),
        StatementKind::MemoryInitialize => Statement::MemoryInitialize(MemoryInitializeStatement {
            destination: var("destination"),
            value: int(0),
            length: int(16),
        }),
        StatementKind::DebugBreak => Statement::DebugBreak(DebugBreakStatement),
    }
}
