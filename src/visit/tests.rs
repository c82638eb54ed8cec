use super::*;

/// Records leaf nodes in visiting order.
struct Recorder<'m> {
    model: &'m Model,
    seen: Vec<String>,
}

impl<'m> Recorder<'m> {
    fn new(model: &'m Model) -> Self {
        Self {
            model,
            seen: Vec::new(),
        }
    }
}

impl<'m> Visitor<'m> for Recorder<'m> {
    type Error = ModelError;

    fn model(&self) -> &'m Model {
        self.model
    }

    fn visit_custom_attribute(&mut self, attribute: &CustomAttribute) -> Result<(), ModelError> {
        self.seen.push("attribute".to_string());
        walk_custom_attribute(self, attribute)
    }

    fn visit_type_reference(&mut self, ty: TypeId) -> Result<(), ModelError> {
        let name = self.model.type_ref(ty)?.name.clone();
        self.seen.push(format!("type:{name}"));
        walk_type_reference(self, ty)
    }

    fn visit_method_reference(&mut self, method: MethodId) -> Result<(), ModelError> {
        let name = self.model.method_ref(method)?.name.clone();
        self.seen.push(format!("method:{name}"));
        Ok(())
    }

    fn visit_parameter_declaration(&mut self, parameter: &ParameterDecl) -> Result<(), ModelError> {
        self.seen.push(format!("parameter:{}", parameter.name));
        walk_parameter_declaration(self, parameter)
    }

    fn visit_literal_expression(&mut self, expression: &LiteralExpression) -> Result<(), ModelError> {
        let text = match &expression.value {
            Literal::Int(value) => value.to_string(),
            Literal::Boolean(value) => value.to_string(),
            other => format!("{other:?}"),
        };
        self.seen.push(format!("literal:{text}"));
        Ok(())
    }

    fn visit_variable_reference_expression(
        &mut self,
        expression: &VariableReferenceExpression,
    ) -> Result<(), ModelError> {
        self.seen.push(format!("variable:{}", expression.variable));
        Ok(())
    }

    fn visit_break_statement(&mut self, _statement: &BreakStatement) -> Result<(), ModelError> {
        self.seen.push("break".to_string());
        Ok(())
    }
}

fn external(builder: &mut ModelBuilder, name: &str) -> TypeId {
    let corlib = builder.add_assembly_ref(AssemblyRef::new("mscorlib", Version::default()));
    builder.add_type(TypeRef::new(name, Owner::Assembly(corlib)).with_namespace("System"))
}

fn int(value: i32) -> Expression {
    Expression::literal(value)
}

fn breaks(count: usize) -> BlockStatement {
    BlockStatement::new(vec![Statement::Break(BreakStatement); count])
}

fn record_statement(model: &Model, statement: &Statement) -> Vec<String> {
    let mut recorder = Recorder::new(model);
    recorder.visit_statement(statement).unwrap();
    recorder.seen
}

fn record_expression(model: &Model, expression: &Expression) -> Vec<String> {
    let mut recorder = Recorder::new(model);
    recorder.visit_expression(expression).unwrap();
    recorder.seen
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

#[test]
fn test_binary_visits_left_then_right() {
    let model = Model::default();
    let expression = Expression::binary(
        Expression::variable("a"),
        BinaryOperator::Add,
        Expression::binary(int(1), BinaryOperator::Multiply, int(2)),
    );

    assert_eq!(
        record_expression(&model, &expression),
        ["variable:a", "literal:1", "literal:2"]
    );
}

#[test]
fn test_condition_expression_order() {
    let model = Model::default();
    let expression = Expression::Condition(ConditionExpression {
        condition: Box::new(Expression::variable("c")),
        then: Box::new(int(1)),
        otherwise: Box::new(int(2)),
    });

    assert_eq!(
        record_expression(&model, &expression),
        ["variable:c", "literal:1", "literal:2"]
    );
}

#[test]
fn test_try_cast_visits_operand_before_type() {
    let mut builder = ModelBuilder::new();
    let string = external(&mut builder, "String");
    let model = builder.build();
    let expression = Expression::TryCast(TryCastExpression {
        target_type: string.into(),
        expression: Box::new(Expression::variable("o")),
    });
    let cast = Expression::Cast(CastExpression {
        target_type: string.into(),
        expression: Box::new(Expression::variable("o")),
    });

    assert_eq!(record_expression(&model, &expression), ["variable:o", "type:String"]);
    assert_eq!(record_expression(&model, &cast), ["type:String", "variable:o"]);
}

#[test]
fn test_invoke_visits_callee_then_arguments() {
    let mut builder = ModelBuilder::new();
    let ty = external(&mut builder, "Console");
    let write = builder.add_method(MethodRef::new("Write", ty, ty));
    let model = builder.build();
    let expression = Expression::call(Some(Expression::variable("x")), write, vec![int(1), int(2)]);

    assert_eq!(
        record_expression(&model, &expression),
        ["variable:x", "method:Write", "literal:1", "literal:2"]
    );
}

// ============================================================================
// STATEMENTS
// ============================================================================

#[test]
fn test_for_statement_order() {
    let model = Model::default();
    let statement = Statement::For(ForStatement {
        initializer: Some(int(1)),
        condition: Some(int(2)),
        increment: Some(int(3)),
        body: breaks(1),
    });

    assert_eq!(
        record_statement(&model, &statement),
        ["literal:1", "literal:2", "literal:3", "break"]
    );
}

#[test]
fn test_do_statement_visits_body_first() {
    let model = Model::default();
    let statement = Statement::Do(DoStatement {
        body: breaks(1),
        condition: Expression::literal(true),
    });

    assert_eq!(record_statement(&model, &statement), ["break", "literal:true"]);
}

#[test]
fn test_try_statement_order() {
    let mut builder = ModelBuilder::new();
    let exception = external(&mut builder, "Exception");
    let model = builder.build();
    let statement = Statement::TryCatchFinally(TryCatchFinallyStatement {
        try_block: BlockStatement::new(vec![Statement::expression(int(1))]),
        catch_clauses: vec![CatchClause {
            variable: VariableDecl::new("e", exception),
            condition: Some(int(2)),
            body: breaks(1),
        }],
        fault: Some(BlockStatement::new(vec![Statement::expression(int(3))])),
        finally: Some(BlockStatement::new(vec![Statement::expression(int(4))])),
    });

    assert_eq!(
        record_statement(&model, &statement),
        ["literal:1", "type:Exception", "literal:2", "break", "literal:3", "literal:4"]
    );
}

#[test]
fn test_switch_default_arm_has_no_label() {
    let model = Model::default();
    let statement = Statement::Switch(SwitchStatement {
        expression: Expression::variable("k"),
        cases: vec![
            SwitchCase {
                label: Some(int(1)),
                body: breaks(1),
            },
            SwitchCase {
                label: None,
                body: breaks(1),
            },
        ],
    });

    assert_eq!(
        record_statement(&model, &statement),
        ["variable:k", "literal:1", "break", "break"]
    );
}

#[test]
fn test_block_preserves_statement_order() {
    let model = Model::default();
    let block = Statement::Block(BlockStatement::new(
        (0..5).map(|i| Statement::expression(int(i))).collect(),
    ));

    assert_eq!(
        record_statement(&model, &block),
        ["literal:0", "literal:1", "literal:2", "literal:3", "literal:4"]
    );
}

// ============================================================================
// STRUCTURE
// ============================================================================

#[test]
fn test_method_declaration_order() {
    let mut builder = ModelBuilder::new();
    let assembly = builder.add_assembly(Assembly::new("A", Version::default()));
    let module = builder.add_module(Module::new("A.dll", assembly));
    let int32 = external(&mut builder, "Int32");
    let ty = builder.define_type(
        TypeRef::new("Widget", Owner::Module(module)),
        TypeDecl::new(TypeVisibility::Public),
    );
    let marker = builder.add_method(MethodRef::new(".ctor", int32, int32));
    let base = builder.add_method(MethodRef::new("Run", int32, int32));
    builder.define_method(
        MethodRef::new("Run", ty, int32).with_parameters(vec![ParameterDecl::new("x", int32)]),
        MethodDecl::new(MemberVisibility::Public)
            .mark_override()
            .with_attributes(vec![CustomAttribute::new(marker)])
            .with_overrides(vec![base])
            .with_body(BlockStatement::new(vec![Statement::ret(Some(int(7)))])),
    );
    let model = builder.build();

    let mut recorder = Recorder::new(&model);
    recorder.visit_type_declaration(ty).unwrap();
    assert_eq!(
        recorder.seen,
        [
            "attribute",
            "method:.ctor",
            "parameter:x",
            "type:Int32",
            "method:Run",
            "type:Int32",
            "literal:7",
        ]
    );
}

#[test]
fn test_external_type_has_nothing_to_walk() {
    let mut builder = ModelBuilder::new();
    let object = external(&mut builder, "Object");
    let model = builder.build();

    let mut recorder = Recorder::new(&model);
    recorder.visit_type_declaration(object).unwrap();
    assert!(recorder.seen.is_empty());
}

#[test]
fn test_dangling_id_aborts_walk() {
    let model = Model::default();
    let expression = Expression::field(None, FieldId::new(3));

    let mut recorder = Recorder::new(&model);
    // Field references are leaves; the walk reaches the id but doesn't look it up.
    recorder.visit_expression(&expression).unwrap();

    let err = recorder.visit_field_declaration(FieldId::new(3)).unwrap_err();
    assert_eq!(err, ModelError::dangling(EntityKind::Field, 3));
}

#[test]
fn test_override_stops_descent() {
    struct SkipBinary<'m> {
        inner: Recorder<'m>,
    }

    impl<'m> Visitor<'m> for SkipBinary<'m> {
        type Error = ModelError;

        fn model(&self) -> &'m Model {
            self.inner.model
        }

        fn visit_binary_expression(&mut self, _e: &BinaryExpression) -> Result<(), ModelError> {
            self.inner.seen.push("binary".to_string());
            Ok(())
        }

        fn visit_literal_expression(&mut self, e: &LiteralExpression) -> Result<(), ModelError> {
            self.inner.visit_literal_expression(e)
        }
    }

    let model = Model::default();
    let expression = Expression::assign(
        Expression::binary(int(1), BinaryOperator::Add, int(2)),
        int(3),
    );
    let mut visitor = SkipBinary {
        inner: Recorder::new(&model),
    };
    visitor.visit_expression(&expression).unwrap();
    assert_eq!(visitor.inner.seen, ["binary", "literal:3"]);
}
