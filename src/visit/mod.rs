//! Visitor pattern for model traversal.
//!
//! [`Visitor`] has one handler per node kind. Every handler defaults to the
//! matching `walk_*` function, which recurses into the node's children in a
//! fixed order and calls back into the visitor for each child. Override a
//! handler to change what happens at that node; call the `walk_*` function
//! from the override to keep descending.
//!
//! Child order for structural nodes:
//!
//! | Node              | Children, in order                                                    |
//! |-------------------|-----------------------------------------------------------------------|
//! | assembly          | attributes, assembly references, modules, resources                   |
//! | module            | module references, types                                              |
//! | namespace         | types                                                                 |
//! | type declaration  | attributes, generic arguments, base type, interfaces, nested types,   |
//! |                   | fields, methods, properties, events                                   |
//! | field             | attributes, field type, initializer                                   |
//! | method            | attributes, parameters, overrides, return type, body                  |
//! | property          | attributes, parameters, property type, get, set, initializer          |
//! | event             | attributes, event type, add, remove, invoke                           |
//! | custom attribute  | constructor, arguments                                                |
//!
//! Statements and expressions visit their children in source order; each
//! `walk_*` function lists its order. Collections are visited in model
//! order and never re-sorted.
//!
//! Lookups go through [`Visitor::model`]; a dangling id aborts the walk with
//! the visitor's error type.

mod code;
mod structure;

#[cfg(test)]
mod tests;

pub use code::*;
pub use structure::*;

use crate::model::*;

/// A traversal over a [`Model`].
///
/// Handlers for leaf nodes default to doing nothing.
pub trait Visitor<'m> {
    type Error: From<ModelError>;

    /// The model being walked.
    fn model(&self) -> &'m Model;

    // ========================================================================
    // STRUCTURE
    // ========================================================================

    fn visit_assembly(&mut self, assembly: AssemblyId) -> Result<(), Self::Error> {
        walk_assembly(self, assembly)
    }

    fn visit_assembly_reference(&mut self, _reference: AssemblyRefId) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_module(&mut self, module: ModuleId) -> Result<(), Self::Error> {
        walk_module(self, module)
    }

    fn visit_module_reference(&mut self, _reference: ModuleRefId) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_resource(&mut self, _resource: &Resource) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_namespace(&mut self, namespace: &Namespace) -> Result<(), Self::Error> {
        walk_namespace(self, namespace)
    }

    fn visit_type_declaration(&mut self, ty: TypeId) -> Result<(), Self::Error> {
        walk_type_declaration(self, ty)
    }

    fn visit_type_reference(&mut self, ty: TypeId) -> Result<(), Self::Error> {
        walk_type_reference(self, ty)
    }

    fn visit_field_declaration(&mut self, field: FieldId) -> Result<(), Self::Error> {
        walk_field_declaration(self, field)
    }

    fn visit_field_reference(&mut self, _field: FieldId) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_method_declaration(&mut self, method: MethodId) -> Result<(), Self::Error> {
        walk_method_declaration(self, method)
    }

    fn visit_method_reference(&mut self, _method: MethodId) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_property_declaration(&mut self, property: PropertyId) -> Result<(), Self::Error> {
        walk_property_declaration(self, property)
    }

    fn visit_property_reference(&mut self, _property: PropertyId) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_event_declaration(&mut self, event: EventId) -> Result<(), Self::Error> {
        walk_event_declaration(self, event)
    }

    fn visit_event_reference(&mut self, _event: EventId) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_custom_attribute(&mut self, attribute: &CustomAttribute) -> Result<(), Self::Error> {
        walk_custom_attribute(self, attribute)
    }

    fn visit_parameter_declaration(&mut self, parameter: &ParameterDecl) -> Result<(), Self::Error> {
        walk_parameter_declaration(self, parameter)
    }

    fn visit_method_return_type(&mut self, return_type: &MethodReturnType) -> Result<(), Self::Error> {
        walk_method_return_type(self, return_type)
    }

    // ========================================================================
    // TYPE SHAPES
    // ========================================================================

    /// Dispatch on the shape of `ty`.
    fn visit_type_sig(&mut self, ty: &TypeSig) -> Result<(), Self::Error> {
        walk_type_sig(self, ty)
    }

    fn visit_array_type(&mut self, ty: &ArrayType) -> Result<(), Self::Error> {
        self.visit_type_sig(&ty.element)
    }

    fn visit_pointer_type(&mut self, ty: &PointerType) -> Result<(), Self::Error> {
        self.visit_type_sig(&ty.element)
    }

    fn visit_reference_type(&mut self, ty: &ReferenceType) -> Result<(), Self::Error> {
        self.visit_type_sig(&ty.element)
    }

    fn visit_generic_parameter(&mut self, _parameter: &GenericParameter) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_optional_modifier(&mut self, ty: &ModifierType) -> Result<(), Self::Error> {
        walk_modifier(self, ty)
    }

    fn visit_required_modifier(&mut self, ty: &ModifierType) -> Result<(), Self::Error> {
        walk_modifier(self, ty)
    }

    fn visit_function_pointer(&mut self, ty: &FunctionPointer) -> Result<(), Self::Error> {
        walk_function_pointer(self, ty)
    }

    // ========================================================================
    // STATEMENTS
    // ========================================================================

    /// Dispatch on the variant of `statement`.
    fn visit_statement(&mut self, statement: &Statement) -> Result<(), Self::Error> {
        walk_statement(self, statement)
    }

    fn visit_block_statement(&mut self, block: &BlockStatement) -> Result<(), Self::Error> {
        walk_block_statement(self, block)
    }

    fn visit_expression_statement(&mut self, statement: &ExpressionStatement) -> Result<(), Self::Error> {
        self.visit_expression(&statement.expression)
    }

    fn visit_goto_statement(&mut self, _statement: &GotoStatement) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_labeled_statement(&mut self, statement: &LabeledStatement) -> Result<(), Self::Error> {
        walk_labeled_statement(self, statement)
    }

    fn visit_condition_statement(&mut self, statement: &ConditionStatement) -> Result<(), Self::Error> {
        walk_condition_statement(self, statement)
    }

    fn visit_method_return_statement(
        &mut self,
        statement: &MethodReturnStatement,
    ) -> Result<(), Self::Error> {
        walk_method_return_statement(self, statement)
    }

    fn visit_for_statement(&mut self, statement: &ForStatement) -> Result<(), Self::Error> {
        walk_for_statement(self, statement)
    }

    fn visit_for_each_statement(&mut self, statement: &ForEachStatement) -> Result<(), Self::Error> {
        walk_for_each_statement(self, statement)
    }

    fn visit_while_statement(&mut self, statement: &WhileStatement) -> Result<(), Self::Error> {
        walk_while_statement(self, statement)
    }

    fn visit_do_statement(&mut self, statement: &DoStatement) -> Result<(), Self::Error> {
        walk_do_statement(self, statement)
    }

    fn visit_try_catch_finally_statement(
        &mut self,
        statement: &TryCatchFinallyStatement,
    ) -> Result<(), Self::Error> {
        walk_try_catch_finally_statement(self, statement)
    }

    fn visit_catch_clause(&mut self, clause: &CatchClause) -> Result<(), Self::Error> {
        walk_catch_clause(self, clause)
    }

    fn visit_throw_exception_statement(
        &mut self,
        statement: &ThrowExceptionStatement,
    ) -> Result<(), Self::Error> {
        walk_throw_exception_statement(self, statement)
    }

    fn visit_attach_event_statement(
        &mut self,
        statement: &AttachEventStatement,
    ) -> Result<(), Self::Error> {
        walk_attach_event_statement(self, statement)
    }

    fn visit_remove_event_statement(
        &mut self,
        statement: &RemoveEventStatement,
    ) -> Result<(), Self::Error> {
        walk_remove_event_statement(self, statement)
    }

    fn visit_switch_statement(&mut self, statement: &SwitchStatement) -> Result<(), Self::Error> {
        walk_switch_statement(self, statement)
    }

    fn visit_switch_case(&mut self, case: &SwitchCase) -> Result<(), Self::Error> {
        walk_switch_case(self, case)
    }

    fn visit_break_statement(&mut self, _statement: &BreakStatement) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_continue_statement(&mut self, _statement: &ContinueStatement) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_comment_statement(&mut self, _statement: &CommentStatement) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_using_statement(&mut self, statement: &UsingStatement) -> Result<(), Self::Error> {
        walk_using_statement(self, statement)
    }

    fn visit_lock_statement(&mut self, statement: &LockStatement) -> Result<(), Self::Error> {
        walk_lock_statement(self, statement)
    }

    fn visit_fixed_statement(&mut self, statement: &FixedStatement) -> Result<(), Self::Error> {
        walk_fixed_statement(self, statement)
    }

    fn visit_memory_copy_statement(
        &mut self,
        statement: &MemoryCopyStatement,
    ) -> Result<(), Self::Error> {
        walk_memory_copy_statement(self, statement)
    }

    fn visit_memory_initialize_statement(
        &mut self,
        statement: &MemoryInitializeStatement,
    ) -> Result<(), Self::Error> {
        walk_memory_initialize_statement(self, statement)
    }

    fn visit_debug_break_statement(&mut self, _statement: &DebugBreakStatement) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_variable_declaration(&mut self, variable: &VariableDecl) -> Result<(), Self::Error> {
        self.visit_type_sig(&variable.ty)
    }

    // ========================================================================
    // EXPRESSIONS
    // ========================================================================

    /// Dispatch on the variant of `expression`.
    fn visit_expression(&mut self, expression: &Expression) -> Result<(), Self::Error> {
        walk_expression(self, expression)
    }

    fn visit_literal_expression(&mut self, _expression: &LiteralExpression) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_argument_reference_expression(
        &mut self,
        _expression: &ArgumentReferenceExpression,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_variable_reference_expression(
        &mut self,
        _expression: &VariableReferenceExpression,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_variable_declaration_expression(
        &mut self,
        expression: &VariableDeclarationExpression,
    ) -> Result<(), Self::Error> {
        self.visit_variable_declaration(&expression.variable)
    }

    fn visit_this_reference_expression(
        &mut self,
        _expression: &ThisReferenceExpression,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_base_reference_expression(
        &mut self,
        _expression: &BaseReferenceExpression,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_type_reference_expression(
        &mut self,
        expression: &TypeReferenceExpression,
    ) -> Result<(), Self::Error> {
        self.visit_type_sig(&expression.ty)
    }

    fn visit_field_reference_expression(
        &mut self,
        expression: &FieldReferenceExpression,
    ) -> Result<(), Self::Error> {
        walk_field_reference_expression(self, expression)
    }

    fn visit_property_reference_expression(
        &mut self,
        expression: &PropertyReferenceExpression,
    ) -> Result<(), Self::Error> {
        walk_property_reference_expression(self, expression)
    }

    fn visit_property_indexer_expression(
        &mut self,
        expression: &PropertyIndexerExpression,
    ) -> Result<(), Self::Error> {
        walk_property_indexer_expression(self, expression)
    }

    fn visit_event_reference_expression(
        &mut self,
        expression: &EventReferenceExpression,
    ) -> Result<(), Self::Error> {
        walk_event_reference_expression(self, expression)
    }

    fn visit_method_reference_expression(
        &mut self,
        expression: &MethodReferenceExpression,
    ) -> Result<(), Self::Error> {
        walk_method_reference_expression(self, expression)
    }

    fn visit_method_invoke_expression(
        &mut self,
        expression: &MethodInvokeExpression,
    ) -> Result<(), Self::Error> {
        walk_method_invoke_expression(self, expression)
    }

    fn visit_delegate_invoke_expression(
        &mut self,
        expression: &DelegateInvokeExpression,
    ) -> Result<(), Self::Error> {
        walk_delegate_invoke_expression(self, expression)
    }

    fn visit_object_create_expression(
        &mut self,
        expression: &ObjectCreateExpression,
    ) -> Result<(), Self::Error> {
        walk_object_create_expression(self, expression)
    }

    fn visit_array_create_expression(
        &mut self,
        expression: &ArrayCreateExpression,
    ) -> Result<(), Self::Error> {
        walk_array_create_expression(self, expression)
    }

    fn visit_array_indexer_expression(
        &mut self,
        expression: &ArrayIndexerExpression,
    ) -> Result<(), Self::Error> {
        walk_array_indexer_expression(self, expression)
    }

    fn visit_block_expression(&mut self, expression: &BlockExpression) -> Result<(), Self::Error> {
        walk_block_expression(self, expression)
    }

    fn visit_member_initializer_expression(
        &mut self,
        expression: &MemberInitializerExpression,
    ) -> Result<(), Self::Error> {
        walk_member_initializer_expression(self, expression)
    }

    fn visit_assign_expression(&mut self, expression: &AssignExpression) -> Result<(), Self::Error> {
        walk_assign_expression(self, expression)
    }

    fn visit_binary_expression(&mut self, expression: &BinaryExpression) -> Result<(), Self::Error> {
        walk_binary_expression(self, expression)
    }

    fn visit_unary_expression(&mut self, expression: &UnaryExpression) -> Result<(), Self::Error> {
        self.visit_expression(&expression.operand)
    }

    fn visit_cast_expression(&mut self, expression: &CastExpression) -> Result<(), Self::Error> {
        walk_cast_expression(self, expression)
    }

    fn visit_try_cast_expression(&mut self, expression: &TryCastExpression) -> Result<(), Self::Error> {
        walk_try_cast_expression(self, expression)
    }

    fn visit_can_cast_expression(&mut self, expression: &CanCastExpression) -> Result<(), Self::Error> {
        walk_can_cast_expression(self, expression)
    }

    fn visit_condition_expression(
        &mut self,
        expression: &ConditionExpression,
    ) -> Result<(), Self::Error> {
        walk_condition_expression(self, expression)
    }

    fn visit_null_coalescing_expression(
        &mut self,
        expression: &NullCoalescingExpression,
    ) -> Result<(), Self::Error> {
        walk_null_coalescing_expression(self, expression)
    }

    fn visit_type_of_expression(&mut self, expression: &TypeOfExpression) -> Result<(), Self::Error> {
        self.visit_type_sig(&expression.ty)
    }

    fn visit_size_of_expression(&mut self, expression: &SizeOfExpression) -> Result<(), Self::Error> {
        self.visit_type_sig(&expression.ty)
    }

    fn visit_generic_default_expression(
        &mut self,
        expression: &GenericDefaultExpression,
    ) -> Result<(), Self::Error> {
        self.visit_type_sig(&expression.ty)
    }

    fn visit_delegate_create_expression(
        &mut self,
        expression: &DelegateCreateExpression,
    ) -> Result<(), Self::Error> {
        walk_delegate_create_expression(self, expression)
    }

    fn visit_anonymous_method_expression(
        &mut self,
        expression: &AnonymousMethodExpression,
    ) -> Result<(), Self::Error> {
        walk_anonymous_method_expression(self, expression)
    }

    fn visit_lambda_expression(&mut self, expression: &LambdaExpression) -> Result<(), Self::Error> {
        walk_lambda_expression(self, expression)
    }

    fn visit_address_out_expression(
        &mut self,
        expression: &AddressOutExpression,
    ) -> Result<(), Self::Error> {
        self.visit_expression(&expression.expression)
    }

    fn visit_address_reference_expression(
        &mut self,
        expression: &AddressReferenceExpression,
    ) -> Result<(), Self::Error> {
        self.visit_expression(&expression.expression)
    }

    fn visit_address_of_expression(
        &mut self,
        expression: &AddressOfExpression,
    ) -> Result<(), Self::Error> {
        self.visit_expression(&expression.expression)
    }

    fn visit_address_dereference_expression(
        &mut self,
        expression: &AddressDereferenceExpression,
    ) -> Result<(), Self::Error> {
        self.visit_expression(&expression.expression)
    }

    fn visit_argument_list_expression(
        &mut self,
        _expression: &ArgumentListExpression,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_stack_allocate_expression(
        &mut self,
        expression: &StackAllocateExpression,
    ) -> Result<(), Self::Error> {
        walk_stack_allocate_expression(self, expression)
    }

    fn visit_typed_reference_create_expression(
        &mut self,
        expression: &TypedReferenceCreateExpression,
    ) -> Result<(), Self::Error> {
        self.visit_expression(&expression.expression)
    }

    fn visit_type_of_typed_reference_expression(
        &mut self,
        expression: &TypeOfTypedReferenceExpression,
    ) -> Result<(), Self::Error> {
        self.visit_expression(&expression.expression)
    }

    fn visit_value_of_typed_reference_expression(
        &mut self,
        expression: &ValueOfTypedReferenceExpression,
    ) -> Result<(), Self::Error> {
        walk_value_of_typed_reference_expression(self, expression)
    }

    fn visit_snippet_expression(&mut self, _expression: &SnippetExpression) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_field_of_expression(&mut self, expression: &FieldOfExpression) -> Result<(), Self::Error> {
        self.visit_field_reference(expression.field)
    }

    fn visit_method_of_expression(&mut self, expression: &MethodOfExpression) -> Result<(), Self::Error> {
        self.visit_method_reference(expression.method)
    }
}
