//! Dispatch and traversal order of the default walk functions.

use ilview::Visitor;
use ilview::model::*;
use ilview::visit::{walk_expression, walk_statement, walk_type_sig};
use rstest::rstest;

use crate::helpers::model_fixtures::SAMPLE;
use crate::helpers::node_samples::{sample_expression, sample_statement};

/// Records the kind of every statement, expression and type shape reached.
struct KindLog<'m> {
    model: &'m Model,
    kinds: Vec<NodeKind>,
}

impl<'m> KindLog<'m> {
    fn new(model: &'m Model) -> Self {
        Self {
            model,
            kinds: Vec::new(),
        }
    }

    fn statements(&self) -> usize {
        self.kinds
            .iter()
            .filter(|kind| matches!(kind, NodeKind::Statement(_)))
            .count()
    }
}

impl<'m> Visitor<'m> for KindLog<'m> {
    type Error = ModelError;

    fn model(&self) -> &'m Model {
        self.model
    }

    fn visit_statement(&mut self, statement: &Statement) -> Result<(), ModelError> {
        self.kinds.push(statement.kind().into());
        walk_statement(self, statement)
    }

    fn visit_expression(&mut self, expression: &Expression) -> Result<(), ModelError> {
        self.kinds.push(expression.kind().into());
        walk_expression(self, expression)
    }

    fn visit_type_sig(&mut self, ty: &TypeSig) -> Result<(), ModelError> {
        self.kinds.push(ty.kind().into());
        walk_type_sig(self, ty)
    }
}

#[test]
fn test_every_statement_kind_dispatches() {
    for &kind in StatementKind::ALL {
        let statement = sample_statement(kind);
        assert_eq!(statement.kind(), kind);

        let mut log = KindLog::new(&SAMPLE.model);
        log.visit_statement(&statement).unwrap();
        assert_eq!(log.kinds.first(), Some(&NodeKind::Statement(kind)), "{kind}");
    }
}

#[test]
fn test_every_expression_kind_dispatches() {
    for &kind in ExpressionKind::ALL {
        let expression = sample_expression(kind);
        assert_eq!(expression.kind(), kind);

        let mut log = KindLog::new(&SAMPLE.model);
        log.visit_expression(&expression).unwrap();
        assert_eq!(log.kinds.first(), Some(&NodeKind::Expression(kind)), "{kind}");
    }
}

#[rstest]
#[case::block(StatementKind::Block, 2)]
#[case::labeled(StatementKind::Labeled, 2)]
#[case::for_loop(StatementKind::For, 2)]
#[case::try_catch(StatementKind::TryCatchFinally, 4)]
#[case::switch(StatementKind::Switch, 3)]
#[case::leaf(StatementKind::Break, 1)]
fn test_nested_statements_are_reached(#[case] kind: StatementKind, #[case] expected: usize) {
    let mut log = KindLog::new(&SAMPLE.model);
    log.visit_statement(&sample_statement(kind)).unwrap();
    assert_eq!(log.statements(), expected);
}

#[rstest]
#[case::binary(ExpressionKind::Binary, vec![
    ExpressionKind::Binary.into(),
    ExpressionKind::VariableReference.into(),
    ExpressionKind::Literal.into(),
])]
#[case::invoke(ExpressionKind::MethodInvoke, vec![
    ExpressionKind::MethodInvoke.into(),
    ExpressionKind::MethodReference.into(),
    ExpressionKind::ThisReference.into(),
])]
#[case::cast(ExpressionKind::Cast, vec![
    ExpressionKind::Cast.into(),
    TypeKind::Named.into(),
    ExpressionKind::VariableReference.into(),
])]
#[case::condition(ExpressionKind::Condition, vec![
    ExpressionKind::Condition.into(),
    ExpressionKind::VariableReference.into(),
    ExpressionKind::Literal.into(),
    ExpressionKind::Literal.into(),
])]
fn test_children_are_visited_in_order(#[case] kind: ExpressionKind, #[case] expected: Vec<NodeKind>) {
    let mut log = KindLog::new(&SAMPLE.model);
    log.visit_expression(&sample_expression(kind)).unwrap();
    assert_eq!(log.kinds, expected);
}

#[test]
fn test_dangling_type_surfaces_as_model_error() {
    let dangling = TypeSig::from(TypeId::new(999));
    let mut log = KindLog::new(&SAMPLE.model);
    let err = log.visit_type_sig(&dangling).unwrap_err();
    assert_eq!(err, ModelError::dangling(EntityKind::Type, 999));
    assert_eq!(err.to_string(), "dangling type id #999");
}
