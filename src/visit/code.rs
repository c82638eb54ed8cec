//! Default traversal of statements and expressions.

use super::Visitor;
use crate::model::*;

fn walk_optional<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: Option<&Expression>,
) -> Result<(), V::Error> {
    match expression {
        Some(expression) => visitor.visit_expression(expression),
        None => Ok(()),
    }
}

fn walk_all<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expressions: &[Expression],
) -> Result<(), V::Error> {
    for expression in expressions {
        visitor.visit_expression(expression)?;
    }
    Ok(())
}

// ============================================================================
// STATEMENTS
// ============================================================================

pub fn walk_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &Statement,
) -> Result<(), V::Error> {
    match statement {
        Statement::Block(s) => visitor.visit_block_statement(s),
        Statement::Expression(s) => visitor.visit_expression_statement(s),
        Statement::Goto(s) => visitor.visit_goto_statement(s),
        Statement::Labeled(s) => visitor.visit_labeled_statement(s),
        Statement::Condition(s) => visitor.visit_condition_statement(s),
        Statement::MethodReturn(s) => visitor.visit_method_return_statement(s),
        Statement::For(s) => visitor.visit_for_statement(s),
        Statement::ForEach(s) => visitor.visit_for_each_statement(s),
        Statement::While(s) => visitor.visit_while_statement(s),
        Statement::Do(s) => visitor.visit_do_statement(s),
        Statement::TryCatchFinally(s) => visitor.visit_try_catch_finally_statement(s),
        Statement::ThrowException(s) => visitor.visit_throw_exception_statement(s),
        Statement::AttachEvent(s) => visitor.visit_attach_event_statement(s),
        Statement::RemoveEvent(s) => visitor.visit_remove_event_statement(s),
        Statement::Switch(s) => visitor.visit_switch_statement(s),
        Statement::Break(s) => visitor.visit_break_statement(s),
        Statement::Continue(s) => visitor.visit_continue_statement(s),
        Statement::Comment(s) => visitor.visit_comment_statement(s),
        Statement::Using(s) => visitor.visit_using_statement(s),
        Statement::Lock(s) => visitor.visit_lock_statement(s),
        Statement::Fixed(s) => visitor.visit_fixed_statement(s),
        Statement::MemoryCopy(s) => visitor.visit_memory_copy_statement(s),
        Statement::MemoryInitialize(s) => visitor.visit_memory_initialize_statement(s),
        Statement::DebugBreak(s) => visitor.visit_debug_break_statement(s),
    }
}

pub fn walk_block_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    block: &BlockStatement,
) -> Result<(), V::Error> {
    for statement in &block.statements {
        visitor.visit_statement(statement)?;
    }
    Ok(())
}

pub fn walk_labeled_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &LabeledStatement,
) -> Result<(), V::Error> {
    match &statement.statement {
        Some(inner) => visitor.visit_statement(inner),
        None => Ok(()),
    }
}

/// Condition, then-block, else-block.
pub fn walk_condition_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &ConditionStatement,
) -> Result<(), V::Error> {
    visitor.visit_expression(&statement.condition)?;
    visitor.visit_block_statement(&statement.then)?;
    visitor.visit_block_statement(&statement.otherwise)
}

pub fn walk_method_return_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &MethodReturnStatement,
) -> Result<(), V::Error> {
    walk_optional(visitor, statement.expression.as_ref())
}

/// Initializer, condition, increment, body.
pub fn walk_for_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &ForStatement,
) -> Result<(), V::Error> {
    walk_optional(visitor, statement.initializer.as_ref())?;
    walk_optional(visitor, statement.condition.as_ref())?;
    walk_optional(visitor, statement.increment.as_ref())?;
    visitor.visit_block_statement(&statement.body)
}

/// Variable, collection, body.
pub fn walk_for_each_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &ForEachStatement,
) -> Result<(), V::Error> {
    visitor.visit_variable_declaration(&statement.variable)?;
    visitor.visit_expression(&statement.expression)?;
    visitor.visit_block_statement(&statement.body)
}

pub fn walk_while_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &WhileStatement,
) -> Result<(), V::Error> {
    visitor.visit_expression(&statement.condition)?;
    visitor.visit_block_statement(&statement.body)
}

/// Body, then condition.
pub fn walk_do_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &DoStatement,
) -> Result<(), V::Error> {
    visitor.visit_block_statement(&statement.body)?;
    visitor.visit_expression(&statement.condition)
}

/// Try block, catch clauses, fault block, finally block.
pub fn walk_try_catch_finally_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &TryCatchFinallyStatement,
) -> Result<(), V::Error> {
    visitor.visit_block_statement(&statement.try_block)?;
    for clause in &statement.catch_clauses {
        visitor.visit_catch_clause(clause)?;
    }
    if let Some(fault) = &statement.fault {
        visitor.visit_block_statement(fault)?;
    }
    if let Some(finally) = &statement.finally {
        visitor.visit_block_statement(finally)?;
    }
    Ok(())
}

/// Variable, filter condition, body.
pub fn walk_catch_clause<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    clause: &CatchClause,
) -> Result<(), V::Error> {
    visitor.visit_variable_declaration(&clause.variable)?;
    walk_optional(visitor, clause.condition.as_ref())?;
    visitor.visit_block_statement(&clause.body)
}

pub fn walk_throw_exception_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &ThrowExceptionStatement,
) -> Result<(), V::Error> {
    walk_optional(visitor, statement.expression.as_ref())
}

pub fn walk_attach_event_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &AttachEventStatement,
) -> Result<(), V::Error> {
    visitor.visit_expression(&statement.event)?;
    visitor.visit_expression(&statement.listener)
}

pub fn walk_remove_event_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &RemoveEventStatement,
) -> Result<(), V::Error> {
    visitor.visit_expression(&statement.event)?;
    visitor.visit_expression(&statement.listener)
}

pub fn walk_switch_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &SwitchStatement,
) -> Result<(), V::Error> {
    visitor.visit_expression(&statement.expression)?;
    for case in &statement.cases {
        visitor.visit_switch_case(case)?;
    }
    Ok(())
}

pub fn walk_switch_case<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    case: &SwitchCase,
) -> Result<(), V::Error> {
    walk_optional(visitor, case.label.as_ref())?;
    visitor.visit_block_statement(&case.body)
}

pub fn walk_using_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &UsingStatement,
) -> Result<(), V::Error> {
    visitor.visit_expression(&statement.expression)?;
    visitor.visit_block_statement(&statement.body)
}

pub fn walk_lock_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &LockStatement,
) -> Result<(), V::Error> {
    visitor.visit_expression(&statement.expression)?;
    visitor.visit_block_statement(&statement.body)
}

pub fn walk_fixed_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &FixedStatement,
) -> Result<(), V::Error> {
    visitor.visit_variable_declaration(&statement.variable)?;
    visitor.visit_expression(&statement.expression)?;
    visitor.visit_block_statement(&statement.body)
}

/// Destination, source, length.
pub fn walk_memory_copy_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &MemoryCopyStatement,
) -> Result<(), V::Error> {
    visitor.visit_expression(&statement.destination)?;
    visitor.visit_expression(&statement.source)?;
    visitor.visit_expression(&statement.length)
}

/// Destination, value, length.
pub fn walk_memory_initialize_statement<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    statement: &MemoryInitializeStatement,
) -> Result<(), V::Error> {
    visitor.visit_expression(&statement.destination)?;
    visitor.visit_expression(&statement.value)?;
    visitor.visit_expression(&statement.length)
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

pub fn walk_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &Expression,
) -> Result<(), V::Error> {
    match expression {
        Expression::Literal(e) => visitor.visit_literal_expression(e),
        Expression::ArgumentReference(e) => visitor.visit_argument_reference_expression(e),
        Expression::VariableReference(e) => visitor.visit_variable_reference_expression(e),
        Expression::VariableDeclaration(e) => visitor.visit_variable_declaration_expression(e),
        Expression::ThisReference(e) => visitor.visit_this_reference_expression(e),
        Expression::BaseReference(e) => visitor.visit_base_reference_expression(e),
        Expression::TypeReference(e) => visitor.visit_type_reference_expression(e),
        Expression::FieldReference(e) => visitor.visit_field_reference_expression(e),
        Expression::PropertyReference(e) => visitor.visit_property_reference_expression(e),
        Expression::PropertyIndexer(e) => visitor.visit_property_indexer_expression(e),
        Expression::EventReference(e) => visitor.visit_event_reference_expression(e),
        Expression::MethodReference(e) => visitor.visit_method_reference_expression(e),
        Expression::MethodInvoke(e) => visitor.visit_method_invoke_expression(e),
        Expression::DelegateInvoke(e) => visitor.visit_delegate_invoke_expression(e),
        Expression::ObjectCreate(e) => visitor.visit_object_create_expression(e),
        Expression::ArrayCreate(e) => visitor.visit_array_create_expression(e),
        Expression::ArrayIndexer(e) => visitor.visit_array_indexer_expression(e),
        Expression::Block(e) => visitor.visit_block_expression(e),
        Expression::MemberInitializer(e) => visitor.visit_member_initializer_expression(e),
        Expression::Assign(e) => visitor.visit_assign_expression(e),
        Expression::Binary(e) => visitor.visit_binary_expression(e),
        Expression::Unary(e) => visitor.visit_unary_expression(e),
        Expression::Cast(e) => visitor.visit_cast_expression(e),
        Expression::TryCast(e) => visitor.visit_try_cast_expression(e),
        Expression::CanCast(e) => visitor.visit_can_cast_expression(e),
        Expression::Condition(e) => visitor.visit_condition_expression(e),
        Expression::NullCoalescing(e) => visitor.visit_null_coalescing_expression(e),
        Expression::TypeOf(e) => visitor.visit_type_of_expression(e),
        Expression::SizeOf(e) => visitor.visit_size_of_expression(e),
        Expression::GenericDefault(e) => visitor.visit_generic_default_expression(e),
        Expression::DelegateCreate(e) => visitor.visit_delegate_create_expression(e),
        Expression::AnonymousMethod(e) => visitor.visit_anonymous_method_expression(e),
        Expression::Lambda(e) => visitor.visit_lambda_expression(e),
        Expression::AddressOut(e) => visitor.visit_address_out_expression(e),
        Expression::AddressReference(e) => visitor.visit_address_reference_expression(e),
        Expression::AddressOf(e) => visitor.visit_address_of_expression(e),
        Expression::AddressDereference(e) => visitor.visit_address_dereference_expression(e),
        Expression::ArgumentList(e) => visitor.visit_argument_list_expression(e),
        Expression::StackAllocate(e) => visitor.visit_stack_allocate_expression(e),
        Expression::TypedReferenceCreate(e) => visitor.visit_typed_reference_create_expression(e),
        Expression::TypeOfTypedReference(e) => {
            visitor.visit_type_of_typed_reference_expression(e)
        }
        Expression::ValueOfTypedReference(e) => {
            visitor.visit_value_of_typed_reference_expression(e)
        }
        Expression::Snippet(e) => visitor.visit_snippet_expression(e),
        Expression::FieldOf(e) => visitor.visit_field_of_expression(e),
        Expression::MethodOf(e) => visitor.visit_method_of_expression(e),
    }
}

/// Target, then the field.
pub fn walk_field_reference_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &FieldReferenceExpression,
) -> Result<(), V::Error> {
    walk_optional(visitor, expression.target.as_deref())?;
    visitor.visit_field_reference(expression.field)
}

pub fn walk_property_reference_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &PropertyReferenceExpression,
) -> Result<(), V::Error> {
    walk_optional(visitor, expression.target.as_deref())?;
    visitor.visit_property_reference(expression.property)
}

pub fn walk_property_indexer_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &PropertyIndexerExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.target)?;
    walk_all(visitor, &expression.indices)
}

pub fn walk_event_reference_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &EventReferenceExpression,
) -> Result<(), V::Error> {
    walk_optional(visitor, expression.target.as_deref())?;
    visitor.visit_event_reference(expression.event)
}

pub fn walk_method_reference_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &MethodReferenceExpression,
) -> Result<(), V::Error> {
    walk_optional(visitor, expression.target.as_deref())?;
    visitor.visit_method_reference(expression.method)
}

/// Callee, then arguments.
pub fn walk_method_invoke_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &MethodInvokeExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.method)?;
    walk_all(visitor, &expression.arguments)
}

pub fn walk_delegate_invoke_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &DelegateInvokeExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.target)?;
    walk_all(visitor, &expression.arguments)
}

/// Type, constructor, arguments, initializer.
pub fn walk_object_create_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &ObjectCreateExpression,
) -> Result<(), V::Error> {
    visitor.visit_type_sig(&expression.ty)?;
    if let Some(constructor) = expression.constructor {
        visitor.visit_method_reference(constructor)?;
    }
    walk_all(visitor, &expression.arguments)?;
    if let Some(initializer) = &expression.initializer {
        visitor.visit_block_expression(initializer)?;
    }
    Ok(())
}

/// Element type, dimensions, initializer.
pub fn walk_array_create_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &ArrayCreateExpression,
) -> Result<(), V::Error> {
    visitor.visit_type_sig(&expression.element_type)?;
    walk_all(visitor, &expression.dimensions)?;
    if let Some(initializer) = &expression.initializer {
        visitor.visit_block_expression(initializer)?;
    }
    Ok(())
}

pub fn walk_array_indexer_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &ArrayIndexerExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.target)?;
    walk_all(visitor, &expression.indices)
}

pub fn walk_block_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &BlockExpression,
) -> Result<(), V::Error> {
    walk_all(visitor, &expression.expressions)
}

pub fn walk_member_initializer_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &MemberInitializerExpression,
) -> Result<(), V::Error> {
    match expression.member {
        MemberTarget::Field(field) => visitor.visit_field_reference(field)?,
        MemberTarget::Property(property) => visitor.visit_property_reference(property)?,
    }
    visitor.visit_expression(&expression.value)
}

pub fn walk_assign_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &AssignExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.target)?;
    visitor.visit_expression(&expression.value)
}

/// Left operand, then right operand.
pub fn walk_binary_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &BinaryExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.left)?;
    visitor.visit_expression(&expression.right)
}

/// Target type, then operand.
pub fn walk_cast_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &CastExpression,
) -> Result<(), V::Error> {
    visitor.visit_type_sig(&expression.target_type)?;
    visitor.visit_expression(&expression.expression)
}

/// Operand, then target type.
pub fn walk_try_cast_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &TryCastExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.expression)?;
    visitor.visit_type_sig(&expression.target_type)
}

/// Operand, then target type.
pub fn walk_can_cast_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &CanCastExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.expression)?;
    visitor.visit_type_sig(&expression.target_type)
}

pub fn walk_condition_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &ConditionExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.condition)?;
    visitor.visit_expression(&expression.then)?;
    visitor.visit_expression(&expression.otherwise)
}

pub fn walk_null_coalescing_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &NullCoalescingExpression,
) -> Result<(), V::Error> {
    visitor.visit_expression(&expression.condition)?;
    visitor.visit_expression(&expression.expression)
}

/// Delegate type, target, method.
pub fn walk_delegate_create_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &DelegateCreateExpression,
) -> Result<(), V::Error> {
    visitor.visit_type_sig(&expression.delegate_type)?;
    visitor.visit_expression(&expression.target)?;
    visitor.visit_method_reference(expression.method)
}

/// Delegate type, parameters, body.
pub fn walk_anonymous_method_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &AnonymousMethodExpression,
) -> Result<(), V::Error> {
    visitor.visit_type_sig(&expression.delegate_type)?;
    for parameter in &expression.parameters {
        visitor.visit_parameter_declaration(parameter)?;
    }
    visitor.visit_block_statement(&expression.body)
}

pub fn walk_lambda_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &LambdaExpression,
) -> Result<(), V::Error> {
    for parameter in &expression.parameters {
        visitor.visit_variable_declaration(parameter)?;
    }
    visitor.visit_expression(&expression.body)
}

pub fn walk_stack_allocate_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &StackAllocateExpression,
) -> Result<(), V::Error> {
    visitor.visit_type_sig(&expression.ty)?;
    visitor.visit_expression(&expression.count)
}

pub fn walk_value_of_typed_reference_expression<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    expression: &ValueOfTypedReferenceExpression,
) -> Result<(), V::Error> {
    visitor.visit_type_sig(&expression.target_type)?;
    visitor.visit_expression(&expression.expression)
}
