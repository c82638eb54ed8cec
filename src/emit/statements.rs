//! Statement rendering.

use super::{Emitter, RenderError, syntax};
use crate::format::Formatter;
use crate::model::*;
use crate::visit::{self, Visitor};

impl<'m, F: Formatter> Emitter<'m, F> {
    pub(super) fn render_goto(&mut self, statement: &GotoStatement) {
        self.keyword_space("goto");
        self.render_local_name(&statement.label);
        self.text(";");
        self.line();
    }

    pub(super) fn render_labeled(&mut self, statement: &LabeledStatement) -> Result<(), RenderError> {
        self.render_local_name(&statement.label);
        self.text(":");
        self.line();
        match &statement.statement {
            Some(inner) => self.visit_statement(inner),
            None => Ok(()),
        }
    }

    /// `if`/`else`, folding a lone nested condition into `else if`.
    pub(super) fn render_condition(&mut self, statement: &ConditionStatement) -> Result<(), RenderError> {
        self.keyword_space("if");
        self.text("(");
        self.visit_expression(&statement.condition)?;
        self.text(")");
        self.line();
        self.visit_block_statement(&statement.then)?;
        if statement.otherwise.is_empty() {
            return Ok(());
        }

        self.keyword("else");
        if let [Statement::Condition(nested)] = statement.otherwise.statements.as_slice() {
            if self.options.supports(StatementKind::Condition) {
                self.text(" ");
                return self.render_condition(nested);
            }
        }
        self.line();
        self.visit_block_statement(&statement.otherwise)
    }

    /// `return`, `throw`, `break`, `continue`.
    pub(super) fn render_keyword_statement(
        &mut self,
        keyword: &str,
        expression: Option<&Expression>,
    ) -> Result<(), RenderError> {
        self.keyword(keyword);
        if let Some(expression) = expression {
            self.text(" ");
            self.visit_expression(expression)?;
        }
        self.text(";");
        self.line();
        Ok(())
    }

    pub(super) fn render_for(&mut self, statement: &ForStatement) -> Result<(), RenderError> {
        self.keyword_space("for");
        self.text("(");
        if let Some(initializer) = &statement.initializer {
            self.visit_expression(initializer)?;
        }
        self.text(";");
        if let Some(condition) = &statement.condition {
            self.text(" ");
            self.visit_expression(condition)?;
        }
        self.text(";");
        if let Some(increment) = &statement.increment {
            self.text(" ");
            self.visit_expression(increment)?;
        }
        self.text(")");
        self.line();
        self.visit_block_statement(&statement.body)
    }

    pub(super) fn render_for_each(&mut self, statement: &ForEachStatement) -> Result<(), RenderError> {
        self.keyword_space("foreach");
        self.text("(");
        self.visit_variable_declaration(&statement.variable)?;
        self.text(" ");
        self.keyword_space("in");
        self.visit_expression(&statement.expression)?;
        self.text(")");
        self.line();
        self.visit_block_statement(&statement.body)
    }

    pub(super) fn render_while(&mut self, statement: &WhileStatement) -> Result<(), RenderError> {
        self.keyword_space("while");
        self.text("(");
        self.visit_expression(&statement.condition)?;
        self.text(")");
        self.line();
        self.visit_block_statement(&statement.body)
    }

    /// `do { ... } while (c);`
    pub(super) fn render_do(&mut self, statement: &DoStatement) -> Result<(), RenderError> {
        self.keyword("do");
        self.line();
        self.block(|this| visit::walk_block_statement(this, &statement.body))?;
        self.text(" ");
        self.keyword_space("while");
        self.text("(");
        self.visit_expression(&statement.condition)?;
        self.text(");");
        self.line();
        Ok(())
    }

    pub(super) fn render_try(&mut self, statement: &TryCatchFinallyStatement) -> Result<(), RenderError> {
        self.keyword("try");
        self.line();
        self.visit_block_statement(&statement.try_block)?;
        for clause in &statement.catch_clauses {
            self.visit_catch_clause(clause)?;
        }
        // No source form for fault handlers.
        if let Some(fault) = &statement.fault {
            self.degrade("FaultBlock", fault);
            self.line();
        }
        if let Some(finally) = &statement.finally {
            self.keyword("finally");
            self.line();
            self.visit_block_statement(finally)?;
        }
        Ok(())
    }

    /// `catch (T e) when (c)`; an unnamed variable renders the type alone.
    pub(super) fn render_catch(&mut self, clause: &CatchClause) -> Result<(), RenderError> {
        self.keyword_space("catch");
        self.text("(");
        if clause.variable.name.is_empty() {
            self.visit_type_sig(&clause.variable.ty)?;
        } else {
            self.visit_variable_declaration(&clause.variable)?;
        }
        self.text(")");
        if let Some(condition) = &clause.condition {
            self.text(" ");
            self.keyword_space("when");
            self.text("(");
            self.visit_expression(condition)?;
            self.text(")");
        }
        self.line();
        self.visit_block_statement(&clause.body)
    }

    pub(super) fn render_event_statement(
        &mut self,
        event: &Expression,
        operator: &str,
        listener: &Expression,
    ) -> Result<(), RenderError> {
        self.visit_expression(event)?;
        self.text(&format!(" {operator} "));
        self.visit_expression(listener)?;
        self.text(";");
        self.line();
        Ok(())
    }

    pub(super) fn render_switch(&mut self, statement: &SwitchStatement) -> Result<(), RenderError> {
        self.keyword_space("switch");
        self.text("(");
        self.visit_expression(&statement.expression)?;
        self.text(")");
        self.line();
        self.block(|this| {
            for case in &statement.cases {
                this.visit_switch_case(case)?;
            }
            Ok(())
        })?;
        self.line();
        Ok(())
    }

    /// `case x:` or `default:`, then the body one level in.
    pub(super) fn render_switch_case(&mut self, case: &SwitchCase) -> Result<(), RenderError> {
        match &case.label {
            Some(label) => {
                self.keyword_space("case");
                self.visit_expression(label)?;
                self.text(":");
            }
            None => {
                self.keyword("default");
                self.text(":");
            }
        }
        self.line();
        self.indented(|this| visit::walk_block_statement(this, &case.body))
    }

    pub(super) fn render_comment(&mut self, statement: &CommentStatement) {
        if statement.text.is_empty() {
            self.formatter.write_comment("//");
            self.line();
            return;
        }
        for line in statement.text.lines() {
            self.formatter.write_comment(&format!("// {line}"));
            self.line();
        }
    }

    /// `using (x)` and `lock (x)`.
    pub(super) fn render_guarded(
        &mut self,
        keyword: &str,
        expression: &Expression,
        body: &BlockStatement,
    ) -> Result<(), RenderError> {
        self.keyword_space(keyword);
        self.text("(");
        self.visit_expression(expression)?;
        self.text(")");
        self.line();
        self.visit_block_statement(body)
    }

    pub(super) fn render_fixed(&mut self, statement: &FixedStatement) -> Result<(), RenderError> {
        self.keyword_space("fixed");
        self.text("(");
        self.visit_variable_declaration(&statement.variable)?;
        self.text(" = ");
        self.visit_expression(&statement.expression)?;
        self.text(")");
        self.line();
        self.visit_block_statement(&statement.body)
    }

    /// A statement with no dedicated syntax, written as a helper call.
    pub(super) fn render_intrinsic_call<const N: usize>(
        &mut self,
        name: &str,
        arguments: [&Expression; N],
    ) -> Result<(), RenderError> {
        self.text(name);
        self.text("(");
        self.comma_separated(&arguments, |this, argument| this.visit_expression(argument))?;
        self.text(");");
        self.line();
        Ok(())
    }

    /// `T name`.
    pub(super) fn render_variable_declaration(&mut self, variable: &VariableDecl) -> Result<(), RenderError> {
        self.visit_type_sig(&variable.ty)?;
        self.text(" ");
        let name = syntax::escape_identifier(&variable.name).into_owned();
        self.formatter.write_declaration(&name, None);
        Ok(())
    }
}
