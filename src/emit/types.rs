//! Type names and member references.

use super::{Emitter, RenderError, syntax};
use crate::format::Formatter;
use crate::model::*;
use crate::visit::Visitor;

impl<'m, F: Formatter> Emitter<'m, F> {
    /// A type use: keyword alias for primitives, otherwise the nesting chain
    /// joined with `.` and the generic arguments.
    pub(super) fn render_type_reference(&mut self, ty: TypeId) -> Result<(), RenderError> {
        let model = self.model;
        let reference = model.type_ref(ty)?;
        if reference.generic_arguments.is_empty() && !matches!(reference.owner, Owner::Type(_)) {
            if let Some(alias) = syntax::primitive_alias(&reference.namespace, &reference.name) {
                self.keyword(alias);
                return Ok(());
            }
        }

        let (chain, _) = self.resolver.owner_chain(ty)?;
        for (depth, &id) in chain.iter().rev().enumerate() {
            if depth > 0 {
                self.text(".");
            }
            let segment = model.type_ref(id)?;
            let name = syntax::escape_identifier(syntax::strip_arity(&segment.name)).into_owned();
            let tooltip = self.resolver.qualified_name(id)?;
            self.formatter
                .write_reference(&name, &tooltip, Some(ReferenceTarget::Type(id)));
        }
        self.render_type_arguments(&reference.generic_arguments)
    }

    /// The name a type declaration introduces, with its type parameters.
    pub(super) fn render_declared_type_name(&mut self, ty: TypeId) -> Result<(), RenderError> {
        let reference = self.model.type_ref(ty)?;
        let name = syntax::escape_identifier(syntax::strip_arity(&reference.name)).into_owned();
        self.formatter.write_declaration(&name, Some(ty.into()));
        self.render_type_arguments(&reference.generic_arguments)
    }

    /// `<A, B>`; nothing for an empty list.
    pub(super) fn render_type_arguments(&mut self, arguments: &[TypeSig]) -> Result<(), RenderError> {
        if arguments.is_empty() {
            return Ok(());
        }
        self.text("<");
        self.comma_separated(arguments, |this, argument| this.visit_type_sig(argument))?;
        self.text(">");
        Ok(())
    }

    pub(super) fn render_array_type(&mut self, ty: &ArrayType) -> Result<(), RenderError> {
        self.visit_type_sig(&ty.element)?;
        self.text("[");
        self.text(&",".repeat(ty.rank.saturating_sub(1) as usize));
        self.text("]");
        Ok(())
    }

    /// `delegate* unmanaged[Cdecl]<P1, P2, R>`.
    pub(super) fn render_function_pointer(&mut self, ty: &FunctionPointer) -> Result<(), RenderError> {
        self.keyword("delegate");
        self.text("*");
        let convention = match ty.calling_convention {
            CallingConvention::Default | CallingConvention::VarArg => None,
            CallingConvention::C => Some("Cdecl"),
            CallingConvention::StdCall => Some("Stdcall"),
            CallingConvention::ThisCall => Some("Thiscall"),
            CallingConvention::FastCall => Some("Fastcall"),
        };
        if let Some(convention) = convention {
            self.text(" ");
            self.keyword("unmanaged");
            self.text(&format!("[{convention}]"));
        }
        self.text("<");
        for parameter in &ty.parameters {
            self.visit_type_sig(parameter)?;
            self.text(", ");
        }
        self.visit_type_sig(&ty.return_type)?;
        self.text(">");
        Ok(())
    }

    // ========================================================================
    // MEMBER REFERENCES
    // ========================================================================

    fn render_member_name(
        &mut self,
        name: &str,
        declaring_type: TypeId,
        target: ReferenceTarget,
    ) -> Result<(), RenderError> {
        let tooltip = self.resolver.name_with_declaring_type(declaring_type, name)?;
        let text = syntax::escape_qualified(name);
        self.formatter.write_reference(&text, &tooltip, Some(target));
        Ok(())
    }

    pub(super) fn render_field_reference(&mut self, field: FieldId) -> Result<(), RenderError> {
        let reference = self.model.field_ref(field)?;
        self.render_member_name(&reference.name, reference.declaring_type, field.into())
    }

    pub(super) fn render_method_reference(&mut self, method: MethodId) -> Result<(), RenderError> {
        let reference = self.model.method_ref(method)?;
        self.render_member_name(&reference.name, reference.declaring_type, method.into())?;
        self.render_type_arguments(&reference.generic_arguments)
    }

    pub(super) fn render_property_reference(&mut self, property: PropertyId) -> Result<(), RenderError> {
        let reference = self.model.property_ref(property)?;
        self.render_member_name(&reference.name, reference.declaring_type, property.into())
    }

    pub(super) fn render_event_reference(&mut self, event: EventId) -> Result<(), RenderError> {
        let reference = self.model.event_ref(event)?;
        self.render_member_name(&reference.name, reference.declaring_type, event.into())
    }
}
