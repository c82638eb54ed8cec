//! Default traversal of structural nodes and type shapes.

use super::Visitor;
use crate::model::*;

pub fn walk_assembly<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    id: AssemblyId,
) -> Result<(), V::Error> {
    let assembly = visitor.model().assembly(id)?;
    for attribute in &assembly.attributes {
        visitor.visit_custom_attribute(attribute)?;
    }
    for &reference in &assembly.references {
        visitor.visit_assembly_reference(reference)?;
    }
    for &module in &assembly.modules {
        visitor.visit_module(module)?;
    }
    for resource in &assembly.resources {
        visitor.visit_resource(resource)?;
    }
    Ok(())
}

pub fn walk_module<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    id: ModuleId,
) -> Result<(), V::Error> {
    let module = visitor.model().module(id)?;
    for &reference in &module.module_references {
        visitor.visit_module_reference(reference)?;
    }
    for &ty in &module.types {
        visitor.visit_type_declaration(ty)?;
    }
    Ok(())
}

pub fn walk_namespace<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    namespace: &Namespace,
) -> Result<(), V::Error> {
    for &ty in &namespace.types {
        visitor.visit_type_declaration(ty)?;
    }
    Ok(())
}

/// Walks a declared type. External types have nothing to walk.
pub fn walk_type_declaration<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    id: TypeId,
) -> Result<(), V::Error> {
    let model = visitor.model();
    let reference = model.type_ref(id)?;
    let Some(decl) = model.type_decl(id)? else {
        return Ok(());
    };
    for attribute in &decl.attributes {
        visitor.visit_custom_attribute(attribute)?;
    }
    for argument in &reference.generic_arguments {
        visitor.visit_type_sig(argument)?;
    }
    if let Some(base) = decl.base_type {
        visitor.visit_type_reference(base)?;
    }
    for &interface in &decl.interfaces {
        visitor.visit_type_reference(interface)?;
    }
    for &nested in &decl.nested_types {
        visitor.visit_type_declaration(nested)?;
    }
    for &field in &decl.fields {
        visitor.visit_field_declaration(field)?;
    }
    for &method in &decl.methods {
        visitor.visit_method_declaration(method)?;
    }
    for &property in &decl.properties {
        visitor.visit_property_declaration(property)?;
    }
    for &event in &decl.events {
        visitor.visit_event_declaration(event)?;
    }
    Ok(())
}

/// Generic arguments of the reference.
pub fn walk_type_reference<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    id: TypeId,
) -> Result<(), V::Error> {
    for argument in &visitor.model().type_ref(id)?.generic_arguments {
        visitor.visit_type_sig(argument)?;
    }
    Ok(())
}

pub fn walk_field_declaration<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    id: FieldId,
) -> Result<(), V::Error> {
    let model = visitor.model();
    let reference = model.field_ref(id)?;
    let decl = model.field_decl(id)?;
    if let Some(decl) = decl {
        for attribute in &decl.attributes {
            visitor.visit_custom_attribute(attribute)?;
        }
    }
    visitor.visit_type_sig(&reference.field_type)?;
    if let Some(initializer) = decl.and_then(|d| d.initializer.as_ref()) {
        visitor.visit_expression(initializer)?;
    }
    Ok(())
}

pub fn walk_method_declaration<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    id: MethodId,
) -> Result<(), V::Error> {
    let model = visitor.model();
    let reference = model.method_ref(id)?;
    let decl = model.method_decl(id)?;
    if let Some(decl) = decl {
        for attribute in &decl.attributes {
            visitor.visit_custom_attribute(attribute)?;
        }
    }
    for parameter in &reference.parameters {
        visitor.visit_parameter_declaration(parameter)?;
    }
    if let Some(decl) = decl {
        for &overridden in &decl.overrides {
            visitor.visit_method_reference(overridden)?;
        }
    }
    visitor.visit_method_return_type(&reference.return_type)?;
    if let Some(body) = decl.and_then(|d| d.body.as_ref()) {
        visitor.visit_block_statement(body)?;
    }
    Ok(())
}

pub fn walk_property_declaration<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    id: PropertyId,
) -> Result<(), V::Error> {
    let model = visitor.model();
    let reference = model.property_ref(id)?;
    let decl = model.property_decl(id)?;
    if let Some(decl) = decl {
        for attribute in &decl.attributes {
            visitor.visit_custom_attribute(attribute)?;
        }
    }
    for parameter in &reference.parameters {
        visitor.visit_parameter_declaration(parameter)?;
    }
    visitor.visit_type_sig(&reference.property_type)?;
    let Some(decl) = decl else {
        return Ok(());
    };
    if let Some(get) = decl.get_method {
        visitor.visit_method_reference(get)?;
    }
    if let Some(set) = decl.set_method {
        visitor.visit_method_reference(set)?;
    }
    if let Some(initializer) = &decl.initializer {
        visitor.visit_expression(initializer)?;
    }
    Ok(())
}

pub fn walk_event_declaration<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    id: EventId,
) -> Result<(), V::Error> {
    let model = visitor.model();
    let reference = model.event_ref(id)?;
    let decl = model.event_decl(id)?;
    if let Some(decl) = decl {
        for attribute in &decl.attributes {
            visitor.visit_custom_attribute(attribute)?;
        }
    }
    visitor.visit_type_sig(&reference.event_type)?;
    let Some(decl) = decl else {
        return Ok(());
    };
    for accessor in [decl.add_method, decl.remove_method, decl.invoke_method]
        .into_iter()
        .flatten()
    {
        visitor.visit_method_reference(accessor)?;
    }
    Ok(())
}

pub fn walk_custom_attribute<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    attribute: &CustomAttribute,
) -> Result<(), V::Error> {
    visitor.visit_method_reference(attribute.constructor)?;
    for argument in &attribute.arguments {
        visitor.visit_expression(argument)?;
    }
    Ok(())
}

pub fn walk_parameter_declaration<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    parameter: &ParameterDecl,
) -> Result<(), V::Error> {
    for attribute in &parameter.attributes {
        visitor.visit_custom_attribute(attribute)?;
    }
    visitor.visit_type_sig(&parameter.ty)
}

pub fn walk_method_return_type<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    return_type: &MethodReturnType,
) -> Result<(), V::Error> {
    for attribute in &return_type.attributes {
        visitor.visit_custom_attribute(attribute)?;
    }
    visitor.visit_type_sig(&return_type.ty)
}

// ============================================================================
// TYPE SHAPES
// ============================================================================

pub fn walk_type_sig<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    ty: &TypeSig,
) -> Result<(), V::Error> {
    match ty {
        TypeSig::Named(id) => visitor.visit_type_reference(*id),
        TypeSig::Array(array) => visitor.visit_array_type(array),
        TypeSig::Pointer(pointer) => visitor.visit_pointer_type(pointer),
        TypeSig::Reference(reference) => visitor.visit_reference_type(reference),
        TypeSig::GenericParameter(parameter) => visitor.visit_generic_parameter(parameter),
        TypeSig::OptionalModifier(modified) => visitor.visit_optional_modifier(modified),
        TypeSig::RequiredModifier(modified) => visitor.visit_required_modifier(modified),
        TypeSig::FunctionPointer(pointer) => visitor.visit_function_pointer(pointer),
    }
}

/// Modifier type, then the modified element.
pub fn walk_modifier<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    ty: &ModifierType,
) -> Result<(), V::Error> {
    visitor.visit_type_reference(ty.modifier)?;
    visitor.visit_type_sig(&ty.element)
}

/// Return type, then parameter types.
pub fn walk_function_pointer<'m, V: Visitor<'m> + ?Sized>(
    visitor: &mut V,
    ty: &FunctionPointer,
) -> Result<(), V::Error> {
    visitor.visit_type_sig(&ty.return_type)?;
    for parameter in &ty.parameters {
        visitor.visit_type_sig(parameter)?;
    }
    Ok(())
}
