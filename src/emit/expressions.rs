//! Expression rendering and operator precedence.

use super::syntax::{self, PRECEDENCE_LAMBDA, PRECEDENCE_PRIMARY, PRECEDENCE_RELATIONAL, PRECEDENCE_UNARY};
use super::{Emitter, RenderError};
use crate::format::Formatter;
use crate::model::*;
use crate::visit::{self, Visitor};

impl<'m, F: Formatter> Emitter<'m, F> {
    /// Render `expression`, parenthesized when it binds looser than
    /// `min_precedence`.
    pub(super) fn operand(&mut self, expression: &Expression, min_precedence: u8) -> Result<(), RenderError> {
        if syntax::precedence(expression) < min_precedence {
            self.text("(");
            self.visit_expression(expression)?;
            self.text(")");
            Ok(())
        } else {
            self.visit_expression(expression)
        }
    }

    pub(super) fn render_local_name(&mut self, name: &str) {
        let name = syntax::escape_identifier(name).into_owned();
        self.text(&name);
    }

    /// `target.` for instance members, `Type.` for static ones. Static
    /// members of the type being rendered need no qualifier.
    pub(super) fn render_member_target(
        &mut self,
        target: Option<&Expression>,
        declaring_type: TypeId,
    ) -> Result<(), RenderError> {
        match target {
            // `-1.Foo` parses as `-(1.Foo)`.
            Some(target) if starts_with_minus(target) => {
                self.text("(");
                self.visit_expression(target)?;
                self.text(")");
            }
            Some(target) => self.operand(target, PRECEDENCE_PRIMARY)?,
            None if self.current_type == Some(declaring_type) => return Ok(()),
            None => self.render_type_reference(declaring_type)?,
        }
        self.text(".");
        Ok(())
    }

    pub(super) fn render_indexer(&mut self, target: &Expression, indices: &[Expression]) -> Result<(), RenderError> {
        self.operand(target, PRECEDENCE_PRIMARY)?;
        self.text("[");
        self.comma_separated(indices, |this, index| this.visit_expression(index))?;
        self.text("]");
        Ok(())
    }

    pub(super) fn render_invoke(&mut self, target: &Expression, arguments: &[Expression]) -> Result<(), RenderError> {
        self.operand(target, PRECEDENCE_PRIMARY)?;
        self.render_arguments(arguments)
    }

    fn render_arguments(&mut self, arguments: &[Expression]) -> Result<(), RenderError> {
        self.text("(");
        self.comma_separated(arguments, |this, argument| this.visit_expression(argument))?;
        self.text(")");
        Ok(())
    }

    pub(super) fn render_object_create(&mut self, expression: &ObjectCreateExpression) -> Result<(), RenderError> {
        self.keyword_space("new");
        self.visit_type_sig(&expression.ty)?;
        self.render_arguments(&expression.arguments)?;
        if let Some(initializer) = &expression.initializer {
            self.text(" ");
            self.visit_block_expression(initializer)?;
        }
        Ok(())
    }

    /// `new T[n][]`: the sized dimension goes before the ranks of a jagged
    /// element type.
    pub(super) fn render_array_create(&mut self, expression: &ArrayCreateExpression) -> Result<(), RenderError> {
        let mut element = &expression.element_type;
        let mut ranks = Vec::new();
        while let TypeSig::Array(array) = element {
            ranks.push(array.rank);
            element = array.element.as_ref();
        }

        self.keyword_space("new");
        self.visit_type_sig(element)?;
        self.text("[");
        self.comma_separated(&expression.dimensions, |this, dimension| this.visit_expression(dimension))?;
        self.text("]");
        for rank in ranks {
            self.text("[");
            self.text(&",".repeat(rank.saturating_sub(1) as usize));
            self.text("]");
        }
        if let Some(initializer) = &expression.initializer {
            self.text(" ");
            self.visit_block_expression(initializer)?;
        }
        Ok(())
    }

    /// `{ a, b }`, or `{ }` when empty.
    pub(super) fn render_initializer_list(&mut self, expression: &BlockExpression) -> Result<(), RenderError> {
        if expression.expressions.is_empty() {
            self.text("{ }");
            return Ok(());
        }
        self.text("{ ");
        self.comma_separated(&expression.expressions, |this, item| this.visit_expression(item))?;
        self.text(" }");
        Ok(())
    }

    /// Left-associative: the right operand needs parentheses at equal
    /// precedence.
    pub(super) fn render_binary(&mut self, expression: &BinaryExpression) -> Result<(), RenderError> {
        let precedence = syntax::binary_precedence(expression.operator);
        self.operand(&expression.left, precedence)?;
        self.text(&format!(" {} ", syntax::binary_token(expression.operator)));
        self.operand(&expression.right, precedence + 1)
    }

    pub(super) fn render_unary(&mut self, expression: &UnaryExpression) -> Result<(), RenderError> {
        let (token, postfix) = syntax::unary_token(expression.operator);
        if postfix {
            self.operand(&expression.operand, PRECEDENCE_PRIMARY)?;
            self.text(token);
            return Ok(());
        }
        self.text(token);
        if token.starts_with('-') && starts_with_minus(&expression.operand) {
            // `- -x`, not `--x`
            self.text(" ");
        }
        self.operand(&expression.operand, PRECEDENCE_UNARY)
    }

    /// `x as T`, `x is T`.
    pub(super) fn render_type_test(
        &mut self,
        expression: &Expression,
        keyword: &str,
        ty: &TypeSig,
    ) -> Result<(), RenderError> {
        self.operand(expression, PRECEDENCE_RELATIONAL)?;
        self.text(" ");
        self.keyword_space(keyword);
        self.visit_type_sig(ty)
    }

    /// `typeof(T)`, `sizeof(T)`, `default(T)`.
    pub(super) fn render_type_operator(&mut self, keyword: &str, ty: &TypeSig) -> Result<(), RenderError> {
        self.keyword(keyword);
        self.text("(");
        self.visit_type_sig(ty)?;
        self.text(")");
        Ok(())
    }

    /// `new D(target.Method)`.
    pub(super) fn render_delegate_create(&mut self, expression: &DelegateCreateExpression) -> Result<(), RenderError> {
        self.keyword_space("new");
        self.visit_type_sig(&expression.delegate_type)?;
        self.text("(");
        self.operand(&expression.target, PRECEDENCE_PRIMARY)?;
        self.text(".");
        self.visit_method_reference(expression.method)?;
        self.text(")");
        Ok(())
    }

    pub(super) fn render_anonymous_method(
        &mut self,
        expression: &AnonymousMethodExpression,
    ) -> Result<(), RenderError> {
        self.keyword("delegate");
        self.text("(");
        self.comma_separated(&expression.parameters, |this, parameter| {
            this.visit_parameter_declaration(parameter)
        })?;
        self.text(")");
        self.line();
        self.block(|this| visit::walk_block_statement(this, &expression.body))
    }

    /// `x => body`, `(x, y) => body`.
    pub(super) fn render_lambda(&mut self, expression: &LambdaExpression) -> Result<(), RenderError> {
        match expression.parameters.as_slice() {
            [single] => self.render_local_name(&single.name),
            parameters => {
                self.text("(");
                self.comma_separated(parameters, |this, parameter| {
                    this.render_local_name(&parameter.name);
                    Ok(())
                })?;
                self.text(")");
            }
        }
        self.text(" => ");
        self.operand(&expression.body, PRECEDENCE_LAMBDA)
    }

    /// Undocumented keyword intrinsics: `__makeref(x)`, `__refvalue(x, T)`.
    pub(super) fn render_intrinsic(
        &mut self,
        keyword: &str,
        expression: &Expression,
        ty: Option<&TypeSig>,
    ) -> Result<(), RenderError> {
        self.keyword(keyword);
        self.text("(");
        self.visit_expression(expression)?;
        if let Some(ty) = ty {
            self.text(", ");
            self.visit_type_sig(ty)?;
        }
        self.text(")");
        Ok(())
    }
}

/// Whether `expression` renders with a leading `-`.
fn starts_with_minus(expression: &Expression) -> bool {
    match expression {
        Expression::Literal(literal) => match literal.value {
            Literal::Int(value) => value < 0,
            Literal::Float(value) => value.is_sign_negative() && !value.is_nan() && value.is_finite(),
            _ => false,
        },
        Expression::Unary(unary) => matches!(
            unary.operator,
            UnaryOperator::Negate | UnaryOperator::PreDecrement
        ),
        _ => false,
    }
}
