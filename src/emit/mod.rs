//! C-family source emission.
//!
//! [`Emitter`] is a [`Visitor`] that renders each node it reaches to a
//! [`Formatter`]. Structural levels (assembly, module, namespace, type,
//! method body) render either a summary header or their full body depending
//! on the flags in [`EmitOptions`].
//!
//! ## Degradation
//!
//! A node whose kind is in the unsupported set is written as a single
//! `/* unsupported <Kind>: <dump> */` comment and its children are skipped.
//! Rendering then continues with the next sibling. Degradations are counted
//! ([`Emitter::degraded`]) and never turn into errors.
//!
//! ## Blocks
//!
//! Every brace-delimited body goes through [`Emitter::block`], which saves
//! the formatter's indent level, renders the body, then restores the level
//! and writes the closing brace whether the body succeeded or not.
//!
//! ## Errors
//!
//! A dangling id aborts the request with [`RenderError::InvalidNode`]. The
//! error carries the path of names (breadcrumbs) that led to the node.

mod error;
mod expressions;
mod options;
mod statements;
mod structure;
pub mod syntax;
mod types;

#[cfg(test)]
mod tests;

pub use error::RenderError;
pub use options::{
    EmitOptions, SHOW_ASSEMBLY_BODY, SHOW_CUSTOM_ATTRIBUTES, SHOW_METHOD_DECLARATION_BODY,
    SHOW_MODULE_BODY, SHOW_NAMESPACE_BODY, SHOW_TYPE_DECLARATION_BODY, default_unsupported,
};

use rayon::prelude::*;

use crate::format::{Formatter, TextFormatter};
use crate::model::*;
use crate::resolve::Resolver;
use crate::visit::{self, Visitor};

/// What a rendering request starts from.
#[derive(Clone, Debug, PartialEq)]
pub enum Root {
    Assembly(AssemblyId),
    AssemblyReference(AssemblyRefId),
    Module(ModuleId),
    ModuleReference(ModuleRefId),
    Namespace(Namespace),
    Type(TypeId),
    Field(FieldId),
    Method(MethodId),
    Property(PropertyId),
    Event(EventId),
    Statement(Statement),
    Expression(Expression),
}

/// Renders model nodes to a [`Formatter`].
///
/// An emitter serves a single request: build one per output, call one of the
/// `emit_*` methods (or [`Emitter::emit`]) and take the formatter back with
/// [`Emitter::into_formatter`].
pub struct Emitter<'m, F: Formatter> {
    model: &'m Model,
    resolver: Resolver<'m>,
    options: EmitOptions,
    formatter: F,
    breadcrumbs: Vec<String>,
    degraded: usize,
    /// Type whose members are being rendered.
    current_type: Option<TypeId>,
}

impl<'m, F: Formatter> Emitter<'m, F> {
    pub fn new(model: &'m Model, options: EmitOptions, formatter: F) -> Self {
        Self {
            model,
            resolver: Resolver::new(model),
            options,
            formatter,
            breadcrumbs: Vec::new(),
            degraded: 0,
            current_type: None,
        }
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn into_formatter(self) -> F {
        self.formatter
    }

    /// Number of nodes rendered as degradation markers so far.
    pub fn degraded(&self) -> usize {
        self.degraded
    }

    // ========================================================================
    // ENTRY POINTS
    // ========================================================================

    pub fn emit(&mut self, root: &Root) -> Result<(), RenderError> {
        match root {
            Root::Assembly(id) => self.emit_assembly(*id),
            Root::AssemblyReference(id) => self.emit_assembly_reference(*id),
            Root::Module(id) => self.emit_module(*id),
            Root::ModuleReference(id) => self.emit_module_reference(*id),
            Root::Namespace(namespace) => self.emit_namespace(namespace),
            Root::Type(id) => self.emit_type(*id),
            Root::Field(id) => self.emit_field(*id),
            Root::Method(id) => self.emit_method(*id),
            Root::Property(id) => self.emit_property(*id),
            Root::Event(id) => self.emit_event(*id),
            Root::Statement(statement) => self.emit_statement(statement),
            Root::Expression(expression) => self.emit_expression(expression),
        }
    }

    pub fn emit_assembly(&mut self, id: AssemblyId) -> Result<(), RenderError> {
        let result = self.visit_assembly(id);
        self.finish(result)
    }

    pub fn emit_assembly_reference(&mut self, id: AssemblyRefId) -> Result<(), RenderError> {
        let result = self.visit_assembly_reference(id);
        self.finish(result)
    }

    pub fn emit_module(&mut self, id: ModuleId) -> Result<(), RenderError> {
        let result = self.visit_module(id);
        self.finish(result)
    }

    pub fn emit_module_reference(&mut self, id: ModuleRefId) -> Result<(), RenderError> {
        let result = self.visit_module_reference(id);
        self.finish(result)
    }

    pub fn emit_resource(&mut self, resource: &Resource) -> Result<(), RenderError> {
        let result = self.visit_resource(resource);
        self.finish(result)
    }

    pub fn emit_namespace(&mut self, namespace: &Namespace) -> Result<(), RenderError> {
        let result = self.visit_namespace(namespace);
        self.finish(result)
    }

    pub fn emit_type(&mut self, id: TypeId) -> Result<(), RenderError> {
        let result = self.visit_type_declaration(id);
        self.finish(result)
    }

    pub fn emit_field(&mut self, id: FieldId) -> Result<(), RenderError> {
        let result = self.visit_field_declaration(id);
        self.finish(result)
    }

    pub fn emit_method(&mut self, id: MethodId) -> Result<(), RenderError> {
        let result = self.visit_method_declaration(id);
        self.finish(result)
    }

    pub fn emit_property(&mut self, id: PropertyId) -> Result<(), RenderError> {
        let result = self.visit_property_declaration(id);
        self.finish(result)
    }

    pub fn emit_event(&mut self, id: EventId) -> Result<(), RenderError> {
        let result = self.visit_event_declaration(id);
        self.finish(result)
    }

    pub fn emit_statement(&mut self, statement: &Statement) -> Result<(), RenderError> {
        let result = self.visit_statement(statement);
        self.finish(result)
    }

    pub fn emit_expression(&mut self, expression: &Expression) -> Result<(), RenderError> {
        let result = self.visit_expression(expression);
        self.finish(result)
    }

    fn finish(&mut self, result: Result<(), RenderError>) -> Result<(), RenderError> {
        let result = result.map_err(|err| err.with_path(&self.breadcrumbs));
        if let Err(err) = &result {
            tracing::debug!(error = %err, "rendering aborted");
        }
        self.breadcrumbs.clear();
        result
    }

    // ========================================================================
    // COMBINATORS
    // ========================================================================

    /// Render `body` with `name` on the breadcrumb path.
    ///
    /// The crumb stays on the path when `body` fails so the error can report
    /// where it happened.
    fn crumb(
        &mut self,
        name: impl Into<String>,
        body: impl FnOnce(&mut Self) -> Result<(), RenderError>,
    ) -> Result<(), RenderError> {
        self.breadcrumbs.push(name.into());
        body(self)?;
        self.breadcrumbs.pop();
        Ok(())
    }

    /// `{`, the indented body, `}`.
    ///
    /// Leaves the cursor after the closing brace. The indent level is
    /// restored on every exit path.
    fn block(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<(), RenderError>,
    ) -> Result<(), RenderError> {
        self.formatter.write("{");
        self.formatter.write_line();
        let result = self.indented(body);
        self.formatter.write("}");
        result
    }

    /// The body one level deeper, without delimiters.
    fn indented(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<(), RenderError>,
    ) -> Result<(), RenderError> {
        let saved = self.formatter.indent_level();
        self.formatter.write_indent();
        let result = body(self);
        self.formatter.restore_indent(saved);
        result
    }

    /// Write a degradation marker for a node the target cannot express.
    fn degrade(&mut self, kind: impl std::fmt::Display, node: &impl std::fmt::Debug) {
        self.degraded += 1;
        tracing::debug!(
            %kind,
            path = %self.breadcrumbs.join(" > "),
            "rendering unsupported construct as a marker"
        );
        let dump = format!("{node:?}").replace("*/", "* /");
        self.formatter
            .write_comment(&format!("/* unsupported {kind}: {dump} */"));
    }

    // ========================================================================
    // TOKENS
    // ========================================================================

    fn text(&mut self, text: &str) {
        self.formatter.write(text);
    }

    fn keyword(&mut self, keyword: &str) {
        self.formatter.write_keyword(keyword);
    }

    /// Keyword followed by a space.
    fn keyword_space(&mut self, keyword: &str) {
        self.formatter.write_keyword(keyword);
        self.formatter.write(" ");
    }

    fn line(&mut self) {
        self.formatter.write_line();
    }

    /// `// name: value` header line.
    fn header_property(&mut self, name: &str, value: &str) {
        self.formatter.write_comment("// ");
        self.formatter.write_property(name, value);
    }

    /// `items` separated by `, `.
    fn comma_separated<T>(
        &mut self,
        items: &[T],
        mut each: impl FnMut(&mut Self, &T) -> Result<(), RenderError>,
    ) -> Result<(), RenderError> {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.text(", ");
            }
            each(self, item)?;
        }
        Ok(())
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

impl<'m, F: Formatter> Visitor<'m> for Emitter<'m, F> {
    type Error = RenderError;

    fn model(&self) -> &'m Model {
        self.model
    }

    // Structure ---------------------------------------------------------------

    fn visit_assembly(&mut self, assembly: AssemblyId) -> Result<(), RenderError> {
        self.render_assembly(assembly)
    }

    fn visit_assembly_reference(&mut self, reference: AssemblyRefId) -> Result<(), RenderError> {
        self.render_assembly_reference(reference)
    }

    fn visit_module(&mut self, module: ModuleId) -> Result<(), RenderError> {
        self.render_module(module)
    }

    fn visit_module_reference(&mut self, reference: ModuleRefId) -> Result<(), RenderError> {
        self.render_module_reference(reference)
    }

    fn visit_resource(&mut self, resource: &Resource) -> Result<(), RenderError> {
        self.render_resource(resource);
        Ok(())
    }

    fn visit_namespace(&mut self, namespace: &Namespace) -> Result<(), RenderError> {
        self.render_namespace(namespace)
    }

    fn visit_type_declaration(&mut self, ty: TypeId) -> Result<(), RenderError> {
        self.render_type_declaration(ty)
    }

    fn visit_field_declaration(&mut self, field: FieldId) -> Result<(), RenderError> {
        self.render_field_declaration(field)
    }

    fn visit_method_declaration(&mut self, method: MethodId) -> Result<(), RenderError> {
        self.render_method_declaration(method)
    }

    fn visit_property_declaration(&mut self, property: PropertyId) -> Result<(), RenderError> {
        self.render_property_declaration(property)
    }

    fn visit_event_declaration(&mut self, event: EventId) -> Result<(), RenderError> {
        self.render_event_declaration(event)
    }

    fn visit_custom_attribute(&mut self, attribute: &CustomAttribute) -> Result<(), RenderError> {
        self.render_custom_attribute(attribute, None)?;
        self.line();
        Ok(())
    }

    fn visit_parameter_declaration(&mut self, parameter: &ParameterDecl) -> Result<(), RenderError> {
        self.render_parameter(parameter)
    }

    fn visit_method_return_type(&mut self, return_type: &MethodReturnType) -> Result<(), RenderError> {
        self.visit_type_sig(&return_type.ty)
    }

    fn visit_field_reference(&mut self, field: FieldId) -> Result<(), RenderError> {
        self.render_field_reference(field)
    }

    fn visit_method_reference(&mut self, method: MethodId) -> Result<(), RenderError> {
        self.render_method_reference(method)
    }

    fn visit_property_reference(&mut self, property: PropertyId) -> Result<(), RenderError> {
        self.render_property_reference(property)
    }

    fn visit_event_reference(&mut self, event: EventId) -> Result<(), RenderError> {
        self.render_event_reference(event)
    }

    // Type shapes -------------------------------------------------------------

    fn visit_type_sig(&mut self, ty: &TypeSig) -> Result<(), RenderError> {
        if !self.options.supports(ty.kind()) {
            self.degrade(ty.kind(), ty);
            return Ok(());
        }
        visit::walk_type_sig(self, ty)
    }

    fn visit_type_reference(&mut self, ty: TypeId) -> Result<(), RenderError> {
        self.render_type_reference(ty)
    }

    fn visit_array_type(&mut self, ty: &ArrayType) -> Result<(), RenderError> {
        self.render_array_type(ty)
    }

    fn visit_pointer_type(&mut self, ty: &PointerType) -> Result<(), RenderError> {
        self.visit_type_sig(&ty.element)?;
        self.text("*");
        Ok(())
    }

    fn visit_reference_type(&mut self, ty: &ReferenceType) -> Result<(), RenderError> {
        self.keyword_space("ref");
        self.visit_type_sig(&ty.element)
    }

    fn visit_generic_parameter(&mut self, parameter: &GenericParameter) -> Result<(), RenderError> {
        let name = syntax::escape_identifier(&parameter.name).into_owned();
        self.text(&name);
        Ok(())
    }

    fn visit_optional_modifier(&mut self, ty: &ModifierType) -> Result<(), RenderError> {
        self.visit_type_sig(&ty.element)
    }

    fn visit_required_modifier(&mut self, ty: &ModifierType) -> Result<(), RenderError> {
        self.visit_type_sig(&ty.element)
    }

    fn visit_function_pointer(&mut self, ty: &FunctionPointer) -> Result<(), RenderError> {
        self.render_function_pointer(ty)
    }

    // Statements --------------------------------------------------------------

    fn visit_statement(&mut self, statement: &Statement) -> Result<(), RenderError> {
        let kind = statement.kind();
        if !self.options.supports(kind) {
            self.degrade(kind, statement);
            self.line();
            return Ok(());
        }
        visit::walk_statement(self, statement)
    }

    fn visit_block_statement(&mut self, block: &BlockStatement) -> Result<(), RenderError> {
        // Bodies reach here without passing through `visit_statement`.
        if !self.options.supports(StatementKind::Block) {
            self.degrade(StatementKind::Block, block);
            self.line();
            return Ok(());
        }
        self.block(|this| visit::walk_block_statement(this, block))?;
        self.line();
        Ok(())
    }

    fn visit_expression_statement(&mut self, statement: &ExpressionStatement) -> Result<(), RenderError> {
        self.visit_expression(&statement.expression)?;
        self.text(";");
        self.line();
        Ok(())
    }

    fn visit_goto_statement(&mut self, statement: &GotoStatement) -> Result<(), RenderError> {
        self.render_goto(statement);
        Ok(())
    }

    fn visit_labeled_statement(&mut self, statement: &LabeledStatement) -> Result<(), RenderError> {
        self.render_labeled(statement)
    }

    fn visit_condition_statement(&mut self, statement: &ConditionStatement) -> Result<(), RenderError> {
        self.render_condition(statement)
    }

    fn visit_method_return_statement(
        &mut self,
        statement: &MethodReturnStatement,
    ) -> Result<(), RenderError> {
        self.render_keyword_statement("return", statement.expression.as_ref())
    }

    fn visit_for_statement(&mut self, statement: &ForStatement) -> Result<(), RenderError> {
        self.render_for(statement)
    }

    fn visit_for_each_statement(&mut self, statement: &ForEachStatement) -> Result<(), RenderError> {
        self.render_for_each(statement)
    }

    fn visit_while_statement(&mut self, statement: &WhileStatement) -> Result<(), RenderError> {
        self.render_while(statement)
    }

    fn visit_do_statement(&mut self, statement: &DoStatement) -> Result<(), RenderError> {
        self.render_do(statement)
    }

    fn visit_try_catch_finally_statement(
        &mut self,
        statement: &TryCatchFinallyStatement,
    ) -> Result<(), RenderError> {
        self.render_try(statement)
    }

    fn visit_catch_clause(&mut self, clause: &CatchClause) -> Result<(), RenderError> {
        self.render_catch(clause)
    }

    fn visit_throw_exception_statement(
        &mut self,
        statement: &ThrowExceptionStatement,
    ) -> Result<(), RenderError> {
        self.render_keyword_statement("throw", statement.expression.as_ref())
    }

    fn visit_attach_event_statement(
        &mut self,
        statement: &AttachEventStatement,
    ) -> Result<(), RenderError> {
        self.render_event_statement(&statement.event, "+=", &statement.listener)
    }

    fn visit_remove_event_statement(
        &mut self,
        statement: &RemoveEventStatement,
    ) -> Result<(), RenderError> {
        self.render_event_statement(&statement.event, "-=", &statement.listener)
    }

    fn visit_switch_statement(&mut self, statement: &SwitchStatement) -> Result<(), RenderError> {
        self.render_switch(statement)
    }

    fn visit_switch_case(&mut self, case: &SwitchCase) -> Result<(), RenderError> {
        self.render_switch_case(case)
    }

    fn visit_break_statement(&mut self, _statement: &BreakStatement) -> Result<(), RenderError> {
        self.render_keyword_statement("break", None)
    }

    fn visit_continue_statement(&mut self, _statement: &ContinueStatement) -> Result<(), RenderError> {
        self.render_keyword_statement("continue", None)
    }

    fn visit_comment_statement(&mut self, statement: &CommentStatement) -> Result<(), RenderError> {
        self.render_comment(statement);
        Ok(())
    }

    fn visit_using_statement(&mut self, statement: &UsingStatement) -> Result<(), RenderError> {
        self.render_guarded("using", &statement.expression, &statement.body)
    }

    fn visit_lock_statement(&mut self, statement: &LockStatement) -> Result<(), RenderError> {
        self.render_guarded("lock", &statement.expression, &statement.body)
    }

    fn visit_fixed_statement(&mut self, statement: &FixedStatement) -> Result<(), RenderError> {
        self.render_fixed(statement)
    }

    fn visit_memory_copy_statement(
        &mut self,
        statement: &MemoryCopyStatement,
    ) -> Result<(), RenderError> {
        self.render_intrinsic_call(
            "Unsafe.CopyBlock",
            [&statement.destination, &statement.source, &statement.length],
        )
    }

    fn visit_memory_initialize_statement(
        &mut self,
        statement: &MemoryInitializeStatement,
    ) -> Result<(), RenderError> {
        self.render_intrinsic_call(
            "Unsafe.InitBlock",
            [&statement.destination, &statement.value, &statement.length],
        )
    }

    fn visit_debug_break_statement(&mut self, _statement: &DebugBreakStatement) -> Result<(), RenderError> {
        self.render_intrinsic_call("Debugger.Break", [])
    }

    fn visit_variable_declaration(&mut self, variable: &VariableDecl) -> Result<(), RenderError> {
        self.render_variable_declaration(variable)
    }

    // Expressions -------------------------------------------------------------

    fn visit_expression(&mut self, expression: &Expression) -> Result<(), RenderError> {
        let kind = expression.kind();
        if !self.options.supports(kind) {
            self.degrade(kind, expression);
            return Ok(());
        }
        visit::walk_expression(self, expression)
    }

    fn visit_literal_expression(&mut self, expression: &LiteralExpression) -> Result<(), RenderError> {
        let text = syntax::literal_text(&expression.value);
        match expression.value {
            Literal::Null | Literal::Boolean(_) => self.keyword(&text),
            _ => self.formatter.write_literal(&text),
        }
        Ok(())
    }

    fn visit_argument_reference_expression(
        &mut self,
        expression: &ArgumentReferenceExpression,
    ) -> Result<(), RenderError> {
        self.render_local_name(&expression.parameter);
        Ok(())
    }

    fn visit_variable_reference_expression(
        &mut self,
        expression: &VariableReferenceExpression,
    ) -> Result<(), RenderError> {
        self.render_local_name(&expression.variable);
        Ok(())
    }

    fn visit_variable_declaration_expression(
        &mut self,
        expression: &VariableDeclarationExpression,
    ) -> Result<(), RenderError> {
        self.render_variable_declaration(&expression.variable)
    }

    fn visit_this_reference_expression(
        &mut self,
        _expression: &ThisReferenceExpression,
    ) -> Result<(), RenderError> {
        self.keyword("this");
        Ok(())
    }

    fn visit_base_reference_expression(
        &mut self,
        _expression: &BaseReferenceExpression,
    ) -> Result<(), RenderError> {
        self.keyword("base");
        Ok(())
    }

    fn visit_type_reference_expression(
        &mut self,
        expression: &TypeReferenceExpression,
    ) -> Result<(), RenderError> {
        self.visit_type_sig(&expression.ty)
    }

    fn visit_field_reference_expression(
        &mut self,
        expression: &FieldReferenceExpression,
    ) -> Result<(), RenderError> {
        let declaring_type = self.model.field_ref(expression.field)?.declaring_type;
        self.render_member_target(expression.target.as_deref(), declaring_type)?;
        self.visit_field_reference(expression.field)
    }

    fn visit_property_reference_expression(
        &mut self,
        expression: &PropertyReferenceExpression,
    ) -> Result<(), RenderError> {
        let declaring_type = self.model.property_ref(expression.property)?.declaring_type;
        self.render_member_target(expression.target.as_deref(), declaring_type)?;
        self.visit_property_reference(expression.property)
    }

    fn visit_property_indexer_expression(
        &mut self,
        expression: &PropertyIndexerExpression,
    ) -> Result<(), RenderError> {
        self.render_indexer(&expression.target, &expression.indices)
    }

    fn visit_event_reference_expression(
        &mut self,
        expression: &EventReferenceExpression,
    ) -> Result<(), RenderError> {
        let declaring_type = self.model.event_ref(expression.event)?.declaring_type;
        self.render_member_target(expression.target.as_deref(), declaring_type)?;
        self.visit_event_reference(expression.event)
    }

    fn visit_method_reference_expression(
        &mut self,
        expression: &MethodReferenceExpression,
    ) -> Result<(), RenderError> {
        let declaring_type = self.model.method_ref(expression.method)?.declaring_type;
        self.render_member_target(expression.target.as_deref(), declaring_type)?;
        self.visit_method_reference(expression.method)
    }

    fn visit_method_invoke_expression(
        &mut self,
        expression: &MethodInvokeExpression,
    ) -> Result<(), RenderError> {
        self.render_invoke(&expression.method, &expression.arguments)
    }

    fn visit_delegate_invoke_expression(
        &mut self,
        expression: &DelegateInvokeExpression,
    ) -> Result<(), RenderError> {
        self.render_invoke(&expression.target, &expression.arguments)
    }

    fn visit_object_create_expression(
        &mut self,
        expression: &ObjectCreateExpression,
    ) -> Result<(), RenderError> {
        self.render_object_create(expression)
    }

    fn visit_array_create_expression(
        &mut self,
        expression: &ArrayCreateExpression,
    ) -> Result<(), RenderError> {
        self.render_array_create(expression)
    }

    fn visit_array_indexer_expression(
        &mut self,
        expression: &ArrayIndexerExpression,
    ) -> Result<(), RenderError> {
        self.render_indexer(&expression.target, &expression.indices)
    }

    fn visit_block_expression(&mut self, expression: &BlockExpression) -> Result<(), RenderError> {
        self.render_initializer_list(expression)
    }

    fn visit_member_initializer_expression(
        &mut self,
        expression: &MemberInitializerExpression,
    ) -> Result<(), RenderError> {
        match expression.member {
            MemberTarget::Field(field) => self.visit_field_reference(field)?,
            MemberTarget::Property(property) => self.visit_property_reference(property)?,
        }
        self.text(" = ");
        self.operand(&expression.value, syntax::PRECEDENCE_ASSIGNMENT)
    }

    fn visit_assign_expression(&mut self, expression: &AssignExpression) -> Result<(), RenderError> {
        self.operand(&expression.target, syntax::PRECEDENCE_ASSIGNMENT + 1)?;
        self.text(" = ");
        self.operand(&expression.value, syntax::PRECEDENCE_ASSIGNMENT)
    }

    fn visit_binary_expression(&mut self, expression: &BinaryExpression) -> Result<(), RenderError> {
        self.render_binary(expression)
    }

    fn visit_unary_expression(&mut self, expression: &UnaryExpression) -> Result<(), RenderError> {
        self.render_unary(expression)
    }

    fn visit_cast_expression(&mut self, expression: &CastExpression) -> Result<(), RenderError> {
        self.text("(");
        self.visit_type_sig(&expression.target_type)?;
        self.text(")");
        self.operand(&expression.expression, syntax::PRECEDENCE_UNARY)
    }

    fn visit_try_cast_expression(&mut self, expression: &TryCastExpression) -> Result<(), RenderError> {
        self.render_type_test(&expression.expression, "as", &expression.target_type)
    }

    fn visit_can_cast_expression(&mut self, expression: &CanCastExpression) -> Result<(), RenderError> {
        self.render_type_test(&expression.expression, "is", &expression.target_type)
    }

    fn visit_condition_expression(
        &mut self,
        expression: &ConditionExpression,
    ) -> Result<(), RenderError> {
        self.operand(&expression.condition, syntax::PRECEDENCE_CONDITIONAL + 1)?;
        self.text(" ? ");
        self.operand(&expression.then, syntax::PRECEDENCE_CONDITIONAL)?;
        self.text(" : ");
        self.operand(&expression.otherwise, syntax::PRECEDENCE_CONDITIONAL)
    }

    fn visit_null_coalescing_expression(
        &mut self,
        expression: &NullCoalescingExpression,
    ) -> Result<(), RenderError> {
        self.operand(&expression.condition, syntax::PRECEDENCE_NULL_COALESCING + 1)?;
        self.text(" ?? ");
        self.operand(&expression.expression, syntax::PRECEDENCE_NULL_COALESCING)
    }

    fn visit_type_of_expression(&mut self, expression: &TypeOfExpression) -> Result<(), RenderError> {
        self.render_type_operator("typeof", &expression.ty)
    }

    fn visit_size_of_expression(&mut self, expression: &SizeOfExpression) -> Result<(), RenderError> {
        self.render_type_operator("sizeof", &expression.ty)
    }

    fn visit_generic_default_expression(
        &mut self,
        expression: &GenericDefaultExpression,
    ) -> Result<(), RenderError> {
        self.render_type_operator("default", &expression.ty)
    }

    fn visit_delegate_create_expression(
        &mut self,
        expression: &DelegateCreateExpression,
    ) -> Result<(), RenderError> {
        self.render_delegate_create(expression)
    }

    fn visit_anonymous_method_expression(
        &mut self,
        expression: &AnonymousMethodExpression,
    ) -> Result<(), RenderError> {
        self.render_anonymous_method(expression)
    }

    fn visit_lambda_expression(&mut self, expression: &LambdaExpression) -> Result<(), RenderError> {
        self.render_lambda(expression)
    }

    fn visit_address_out_expression(
        &mut self,
        expression: &AddressOutExpression,
    ) -> Result<(), RenderError> {
        self.keyword_space("out");
        self.operand(&expression.expression, syntax::PRECEDENCE_UNARY)
    }

    fn visit_address_reference_expression(
        &mut self,
        expression: &AddressReferenceExpression,
    ) -> Result<(), RenderError> {
        self.keyword_space("ref");
        self.operand(&expression.expression, syntax::PRECEDENCE_UNARY)
    }

    fn visit_address_of_expression(
        &mut self,
        expression: &AddressOfExpression,
    ) -> Result<(), RenderError> {
        self.text("&");
        self.operand(&expression.expression, syntax::PRECEDENCE_UNARY)
    }

    fn visit_address_dereference_expression(
        &mut self,
        expression: &AddressDereferenceExpression,
    ) -> Result<(), RenderError> {
        self.text("*");
        self.operand(&expression.expression, syntax::PRECEDENCE_UNARY)
    }

    fn visit_argument_list_expression(
        &mut self,
        _expression: &ArgumentListExpression,
    ) -> Result<(), RenderError> {
        self.keyword("__arglist");
        Ok(())
    }

    fn visit_stack_allocate_expression(
        &mut self,
        expression: &StackAllocateExpression,
    ) -> Result<(), RenderError> {
        self.keyword_space("stackalloc");
        self.visit_type_sig(&expression.ty)?;
        self.text("[");
        self.visit_expression(&expression.count)?;
        self.text("]");
        Ok(())
    }

    fn visit_typed_reference_create_expression(
        &mut self,
        expression: &TypedReferenceCreateExpression,
    ) -> Result<(), RenderError> {
        self.render_intrinsic("__makeref", &expression.expression, None)
    }

    fn visit_type_of_typed_reference_expression(
        &mut self,
        expression: &TypeOfTypedReferenceExpression,
    ) -> Result<(), RenderError> {
        self.render_intrinsic("__reftype", &expression.expression, None)
    }

    fn visit_value_of_typed_reference_expression(
        &mut self,
        expression: &ValueOfTypedReferenceExpression,
    ) -> Result<(), RenderError> {
        self.render_intrinsic(
            "__refvalue",
            &expression.expression,
            Some(&expression.target_type),
        )
    }

    fn visit_snippet_expression(&mut self, expression: &SnippetExpression) -> Result<(), RenderError> {
        self.text(&expression.text);
        Ok(())
    }

    fn visit_field_of_expression(&mut self, expression: &FieldOfExpression) -> Result<(), RenderError> {
        let declaring_type = self.model.field_ref(expression.field)?.declaring_type;
        self.keyword("fieldof");
        self.text("(");
        self.render_member_target(None, declaring_type)?;
        self.visit_field_reference(expression.field)?;
        self.text(")");
        Ok(())
    }

    fn visit_method_of_expression(&mut self, expression: &MethodOfExpression) -> Result<(), RenderError> {
        let declaring_type = self.model.method_ref(expression.method)?.declaring_type;
        self.keyword("methodof");
        self.text("(");
        self.render_member_target(None, declaring_type)?;
        self.visit_method_reference(expression.method)?;
        self.text(")");
        Ok(())
    }
}

// ============================================================================
// CONVENIENCE
// ============================================================================

/// Render `root` to plain text.
pub fn render_to_string(
    model: &Model,
    root: &Root,
    options: &EmitOptions,
) -> Result<String, RenderError> {
    let mut emitter = Emitter::new(model, options.clone(), TextFormatter::new());
    emitter.emit(root)?;
    Ok(emitter.into_formatter().into_string())
}

/// Render several roots in parallel, one emitter per root.
///
/// Results are in the order of `roots`.
pub fn render_many(
    model: &Model,
    roots: &[Root],
    options: &EmitOptions,
) -> Vec<Result<String, RenderError>> {
    roots
        .par_iter()
        .map(|root| render_to_string(model, root, options))
        .collect()
}
