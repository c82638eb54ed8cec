//! Assemblies, modules, namespaces, types and member declarations.

use std::fs;

use super::options::{
    SHOW_ASSEMBLY_BODY, SHOW_CUSTOM_ATTRIBUTES, SHOW_METHOD_DECLARATION_BODY, SHOW_MODULE_BODY,
    SHOW_NAMESPACE_BODY, SHOW_TYPE_DECLARATION_BODY,
};
use super::{Emitter, RenderError, syntax};
use crate::format::Formatter;
use crate::model::*;
use crate::resolve::TypeClass;
use crate::visit::Visitor;

fn type_visibility_keyword(visibility: TypeVisibility) -> &'static str {
    match visibility {
        TypeVisibility::Public | TypeVisibility::NestedPublic => "public",
        TypeVisibility::Private | TypeVisibility::NestedAssembly => "internal",
        TypeVisibility::NestedPrivate => "private",
        TypeVisibility::NestedFamily => "protected",
        TypeVisibility::NestedFamilyAndAssembly => "private protected",
        TypeVisibility::NestedFamilyOrAssembly => "protected internal",
    }
}

fn member_visibility_keyword(visibility: MemberVisibility) -> &'static str {
    match visibility {
        MemberVisibility::PrivateScope | MemberVisibility::Private => "private",
        MemberVisibility::FamilyAndAssembly => "private protected",
        MemberVisibility::Assembly => "internal",
        MemberVisibility::Family => "protected",
        MemberVisibility::FamilyOrAssembly => "protected internal",
        MemberVisibility::Public => "public",
    }
}

/// Attribute name as written at a use site: ``ObsoleteAttribute`` → `Obsolete`.
fn attribute_name(name: &str) -> &str {
    let name = syntax::strip_arity(name);
    match name.strip_suffix("Attribute") {
        Some(short) if !short.is_empty() => short,
        _ => name,
    }
}

impl<'m, F: Formatter> Emitter<'m, F> {
    /// `items` with a blank line between consecutive entries.
    fn separated<T: Copy>(
        &mut self,
        items: &[T],
        mut each: impl FnMut(&mut Self, T) -> Result<(), RenderError>,
    ) -> Result<(), RenderError> {
        for (index, &item) in items.iter().enumerate() {
            if index > 0 {
                self.line();
            }
            each(self, item)?;
        }
        Ok(())
    }

    fn render_attributes(
        &mut self,
        attributes: &[CustomAttribute],
        target: Option<&str>,
    ) -> Result<(), RenderError> {
        if !self.options.flag(SHOW_CUSTOM_ATTRIBUTES) {
            return Ok(());
        }
        for attribute in attributes {
            self.render_custom_attribute(attribute, target)?;
            self.line();
        }
        Ok(())
    }

    // ========================================================================
    // ASSEMBLIES AND MODULES
    // ========================================================================

    pub(super) fn render_assembly(&mut self, id: AssemblyId) -> Result<(), RenderError> {
        let model = self.model;
        let assembly = model.assembly(id)?;
        self.crumb(assembly.name.as_str(), |this| {
            this.formatter.write_comment("// Assembly ");
            this.formatter
                .write_declaration(&assembly.full_name(), Some(ReferenceTarget::Assembly(id)));
            this.line();
            if let Some(location) = &assembly.location {
                this.header_property("Location", &location.display().to_string());
            }
            if let Some(entry_point) = assembly.entry_point {
                let reference = model.method_ref(entry_point)?;
                let signature = this.resolver.name_with_parameter_list(entry_point)?;
                let name = this
                    .resolver
                    .name_with_declaring_type(reference.declaring_type, &signature)?;
                this.header_property("Entry point", &name);
            }

            let full = this.options.flag(SHOW_ASSEMBLY_BODY);
            tracing::debug!(assembly = %assembly.name, full, "rendering assembly");
            if !full {
                this.header_property("Modules", &assembly.modules.len().to_string());
                this.header_property("References", &assembly.references.len().to_string());
                this.header_property("Resources", &assembly.resources.len().to_string());
                return Ok(());
            }

            if this.options.flag(SHOW_CUSTOM_ATTRIBUTES) && !assembly.attributes.is_empty() {
                this.line();
                this.render_attributes(&assembly.attributes, Some("assembly"))?;
            }
            if !assembly.references.is_empty() {
                this.line();
                for &reference in &assembly.references {
                    this.visit_assembly_reference(reference)?;
                }
            }
            for &module in &assembly.modules {
                this.line();
                this.visit_module(module)?;
            }
            if !assembly.resources.is_empty() {
                this.line();
                for resource in &assembly.resources {
                    this.visit_resource(resource)?;
                }
            }
            Ok(())
        })
    }

    pub(super) fn render_assembly_reference(&mut self, id: AssemblyRefId) -> Result<(), RenderError> {
        let reference = self.model.assembly_ref(id)?;
        let name = reference.full_name();
        self.formatter.write_comment("// Assembly reference ");
        self.formatter
            .write_reference(&name, &name, Some(ReferenceTarget::AssemblyReference(id)));
        self.line();
        Ok(())
    }

    pub(super) fn render_module(&mut self, id: ModuleId) -> Result<(), RenderError> {
        let model = self.model;
        let module = model.module(id)?;
        self.crumb(module.name.as_str(), |this| {
            this.formatter.write_comment("// Module ");
            this.formatter
                .write_declaration(&module.name, Some(ReferenceTarget::Module(id)));
            this.line();
            let assembly = model.assembly(module.assembly)?;
            this.header_property("Assembly", &assembly.full_name());
            if let Some(location) = &module.location {
                this.header_property("Location", &location.display().to_string());
                match fs::metadata(location) {
                    Ok(metadata) => {
                        this.header_property("Size", &format!("{} bytes", metadata.len()));
                    }
                    Err(err) => tracing::debug!(
                        path = %location.display(),
                        error = %err,
                        "module file size unavailable"
                    ),
                }
            }

            let full = this.options.flag(SHOW_MODULE_BODY);
            tracing::debug!(module = %module.name, full, "rendering module");
            if !full {
                this.header_property("Types", &module.types.len().to_string());
                return Ok(());
            }

            if !module.module_references.is_empty() {
                this.line();
                for &reference in &module.module_references {
                    this.visit_module_reference(reference)?;
                }
            }
            for namespace in this.resolver.namespaces(id)? {
                if this.visible_types(&namespace.types)?.is_empty() {
                    continue;
                }
                this.line();
                this.visit_namespace(&namespace)?;
            }
            Ok(())
        })
    }

    pub(super) fn render_module_reference(&mut self, id: ModuleRefId) -> Result<(), RenderError> {
        let reference = self.model.module_ref(id)?;
        self.formatter.write_comment("// Module reference ");
        self.formatter.write_reference(
            &reference.name,
            &reference.name,
            Some(ReferenceTarget::ModuleReference(id)),
        );
        self.line();
        Ok(())
    }

    pub(super) fn render_resource(&mut self, resource: &Resource) {
        self.formatter.write_comment("// Resource ");
        self.formatter.write_declaration(&resource.name, None);
        self.line();
        let visibility = match resource.visibility {
            ResourceVisibility::Public => "Public",
            ResourceVisibility::Private => "Private",
        };
        self.header_property("Visibility", visibility);
        match &resource.kind {
            ResourceKind::Embedded { size } => self.header_property("Size", &format!("{size} bytes")),
            ResourceKind::File { file_name } => self.header_property("File", file_name),
        }
    }

    // ========================================================================
    // NAMESPACES AND TYPES
    // ========================================================================

    /// `types` that pass the configured visibility policy.
    fn visible_types(&self, types: &[TypeId]) -> Result<Vec<TypeId>, RenderError> {
        let Some(policy) = self.options.visibility else {
            return Ok(types.to_vec());
        };
        let mut visible = Vec::with_capacity(types.len());
        for &ty in types {
            if self.resolver.is_type_visible(ty, &policy)? {
                visible.push(ty);
            }
        }
        Ok(visible)
    }

    pub(super) fn render_namespace(&mut self, namespace: &Namespace) -> Result<(), RenderError> {
        let types = self.visible_types(&namespace.types)?;
        let full = self.options.flag(SHOW_NAMESPACE_BODY);
        tracing::debug!(namespace = %namespace.name, full, "rendering namespace");

        if !full {
            if namespace.is_global() {
                self.formatter.write_comment("// Global namespace");
            } else {
                self.formatter.write_comment("// Namespace ");
                self.formatter.write_declaration(&namespace.name, None);
            }
            self.line();
            self.header_property("Types", &types.len().to_string());
            return Ok(());
        }

        if namespace.is_global() {
            return self.separated(&types, |this, ty| this.visit_type_declaration(ty));
        }
        self.crumb(namespace.name.as_str(), |this| {
            this.keyword_space("namespace");
            this.formatter
                .write_declaration(&syntax::escape_qualified(&namespace.name), None);
            this.line();
            this.block(|this| this.separated(&types, |this, ty| this.visit_type_declaration(ty)))?;
            this.line();
            Ok(())
        })
    }

    pub(super) fn render_type_declaration(&mut self, ty: TypeId) -> Result<(), RenderError> {
        let model = self.model;
        let Some(decl) = model.type_decl(ty)? else {
            self.formatter.write_comment("// external type ");
            self.render_type_reference(ty)?;
            self.line();
            return Ok(());
        };
        if let Some(policy) = self.options.visibility {
            if !self.resolver.is_type_visible(ty, &policy)? {
                tracing::trace!(%ty, "type filtered by visibility policy");
                return Ok(());
            }
        }

        let name = self.resolver.qualified_name(ty)?;
        self.crumb(name, |this| {
            let outer = this.current_type.replace(ty);
            let result = this.render_type_body(ty, decl);
            this.current_type = outer;
            result
        })
    }

    fn render_type_body(&mut self, ty: TypeId, decl: &TypeDecl) -> Result<(), RenderError> {
        self.render_attributes(&decl.attributes, None)?;
        let class = self.resolver.classify(ty)?;
        if class == TypeClass::Delegate {
            return self.render_delegate(ty, decl);
        }

        self.keyword_space(type_visibility_keyword(decl.visibility));
        if class == TypeClass::Class {
            if decl.is_abstract && decl.is_sealed {
                self.keyword_space("static");
            } else if decl.is_abstract {
                self.keyword_space("abstract");
            } else if decl.is_sealed {
                self.keyword_space("sealed");
            }
        }
        self.keyword_space(class.keyword());
        self.render_declared_type_name(ty)?;
        self.render_base_list(ty, decl, class)?;
        self.line();

        let policy = self.options.visibility;
        let full = self.options.flag(SHOW_TYPE_DECLARATION_BODY);
        tracing::debug!(%ty, full, "rendering type");
        if !full {
            let counts = [
                ("Nested types", self.resolver.nested_types(ty, policy.as_ref())?.len()),
                ("Fields", self.resolver.fields(ty, policy.as_ref())?.len()),
                ("Methods", self.resolver.methods(ty, policy.as_ref())?.len()),
                ("Properties", self.resolver.properties(ty, policy.as_ref())?.len()),
                ("Events", self.resolver.events(ty, policy.as_ref())?.len()),
            ];
            for (name, count) in counts {
                if count > 0 {
                    self.header_property(name, &count.to_string());
                }
            }
            return Ok(());
        }

        if class == TypeClass::Enum {
            self.block(|this| this.render_enum_members(decl))?;
        } else {
            self.block(|this| this.render_members(ty))?;
        }
        self.line();
        Ok(())
    }

    /// ` : Base, IFace` with implied entries dropped.
    fn render_base_list(&mut self, ty: TypeId, decl: &TypeDecl, class: TypeClass) -> Result<(), RenderError> {
        let mut bases = Vec::new();
        match class {
            TypeClass::Class => {
                if let Some(base) = decl.base_type {
                    if !self.resolver.is_system_type(base, "Object")? {
                        bases.push(TypeSig::Named(base));
                    }
                }
            }
            TypeClass::Enum => {
                if let Some(underlying) = self.resolver.enum_underlying_type(ty)? {
                    let is_int = match underlying.as_named() {
                        Some(id) => self.resolver.is_system_type(id, "Int32")?,
                        None => false,
                    };
                    if !is_int {
                        bases.push(underlying.clone());
                    }
                }
            }
            TypeClass::Interface | TypeClass::Struct | TypeClass::Delegate => {}
        }
        let policy = self.options.visibility;
        for interface in self.resolver.interfaces(ty, policy.as_ref())? {
            bases.push(TypeSig::Named(interface));
        }

        if bases.is_empty() {
            return Ok(());
        }
        self.text(" : ");
        self.comma_separated(&bases, |this, base| this.visit_type_sig(base))
    }

    /// Nested types, fields, methods, properties, events.
    fn render_members(&mut self, ty: TypeId) -> Result<(), RenderError> {
        let policy = self.options.visibility;
        let nested = self.resolver.nested_types(ty, policy.as_ref())?;
        let fields = self.resolver.fields(ty, policy.as_ref())?;
        let methods = self.resolver.methods(ty, policy.as_ref())?;
        let properties = self.resolver.properties(ty, policy.as_ref())?;
        let events = self.resolver.events(ty, policy.as_ref())?;

        let mut first = true;
        let mut separate = |this: &mut Self| {
            if !first {
                this.line();
            }
            first = false;
        };
        for nested in nested {
            separate(self);
            self.visit_type_declaration(nested)?;
        }
        for field in fields {
            separate(self);
            self.visit_field_declaration(field)?;
        }
        for method in methods {
            separate(self);
            self.visit_method_declaration(method)?;
        }
        for property in properties {
            separate(self);
            self.visit_property_declaration(property)?;
        }
        for event in events {
            separate(self);
            self.visit_event_declaration(event)?;
        }
        Ok(())
    }

    /// `Name = value,` in declaration order, without the `value__` field.
    fn render_enum_members(&mut self, decl: &TypeDecl) -> Result<(), RenderError> {
        let model = self.model;
        let policy = self.options.visibility;
        for &field in &decl.fields {
            let reference = model.field_ref(field)?;
            if reference.name == "value__" {
                continue;
            }
            if let Some(policy) = policy {
                if !self.resolver.is_field_visible(field, &policy)? {
                    continue;
                }
            }
            let name = syntax::escape_identifier(&reference.name).into_owned();
            self.formatter.write_declaration(&name, Some(field.into()));
            if let Some(initializer) = model.field_decl(field)?.and_then(|d| d.initializer.as_ref()) {
                self.text(" = ");
                self.visit_expression(initializer)?;
            }
            self.text(",");
            self.line();
        }
        Ok(())
    }

    /// `public delegate R Name(P p);` from the `Invoke` method.
    fn render_delegate(&mut self, ty: TypeId, decl: &TypeDecl) -> Result<(), RenderError> {
        let model = self.model;
        let mut invoke = None;
        for &method in &decl.methods {
            let reference = model.method_ref(method)?;
            if reference.name == "Invoke" {
                invoke = Some(reference);
                break;
            }
        }

        self.keyword_space(type_visibility_keyword(decl.visibility));
        self.keyword_space("delegate");
        match invoke {
            Some(invoke) => self.visit_method_return_type(&invoke.return_type)?,
            None => self.keyword("void"),
        }
        self.text(" ");
        self.render_declared_type_name(ty)?;
        self.text("(");
        if let Some(invoke) = invoke {
            self.comma_separated(&invoke.parameters, |this, parameter| {
                this.visit_parameter_declaration(parameter)
            })?;
        }
        self.text(");");
        self.line();
        Ok(())
    }

    // ========================================================================
    // MEMBERS
    // ========================================================================

    pub(super) fn render_field_declaration(&mut self, field: FieldId) -> Result<(), RenderError> {
        let model = self.model;
        let reference = model.field_ref(field)?;
        let decl = model.field_decl(field)?;
        if let Some(policy) = self.options.visibility {
            if !self.resolver.is_field_visible(field, &policy)? {
                return Ok(());
            }
        }

        self.crumb(reference.name.as_str(), |this| {
            if let Some(decl) = decl {
                this.render_attributes(&decl.attributes, None)?;
                this.keyword_space(member_visibility_keyword(decl.visibility));
                if decl.is_literal {
                    this.keyword_space("const");
                } else {
                    if decl.is_static {
                        this.keyword_space("static");
                    }
                    if decl.is_read_only {
                        this.keyword_space("readonly");
                    }
                }
            }
            this.visit_type_sig(&reference.field_type)?;
            this.text(" ");
            let name = syntax::escape_identifier(&reference.name).into_owned();
            this.formatter.write_declaration(&name, Some(field.into()));
            if let Some(initializer) = decl.and_then(|d| d.initializer.as_ref()) {
                this.text(" = ");
                this.visit_expression(initializer)?;
            }
            this.text(";");
            this.line();
            Ok(())
        })
    }

    /// `abstract`, `virtual`, `override` or `sealed override`.
    fn render_virtual_modifiers(&mut self, decl: &MethodDecl) {
        if decl.is_abstract {
            self.keyword_space("abstract");
        } else if decl.is_virtual {
            if !decl.is_new_slot {
                if decl.is_final {
                    self.keyword_space("sealed");
                }
                self.keyword_space("override");
            } else if !decl.is_final {
                self.keyword_space("virtual");
            }
        }
    }

    pub(super) fn render_method_declaration(&mut self, method: MethodId) -> Result<(), RenderError> {
        let model = self.model;
        let reference = model.method_ref(method)?;
        let decl = model.method_decl(method)?;
        if let Some(policy) = self.options.visibility {
            if !self.resolver.is_method_visible(method, &policy)? {
                return Ok(());
            }
        }

        let signature = self.resolver.name_with_parameter_list(method)?;
        self.crumb(signature, |this| {
            let in_interface = this.resolver.is_interface(reference.declaring_type)?;
            let explicit = !reference.is_constructor() && reference.name.contains('.');
            if let Some(decl) = decl {
                this.render_attributes(&decl.attributes, None)?;
                this.render_attributes(&reference.return_type.attributes, Some("return"))?;
                if reference.name == ".cctor" {
                    this.keyword_space("static");
                } else {
                    if !in_interface && !explicit {
                        this.keyword_space(member_visibility_keyword(decl.visibility));
                    }
                    if decl.is_static {
                        this.keyword_space("static");
                    }
                    if !in_interface && !explicit {
                        this.render_virtual_modifiers(decl);
                    }
                }
            }

            if reference.is_constructor() {
                let owner = model.type_ref(reference.declaring_type)?;
                let name = syntax::escape_identifier(syntax::strip_arity(&owner.name)).into_owned();
                this.formatter.write_declaration(&name, Some(method.into()));
            } else {
                this.visit_method_return_type(&reference.return_type)?;
                this.text(" ");
                let name = syntax::escape_qualified(&reference.name);
                this.formatter.write_declaration(&name, Some(method.into()));
                this.render_type_arguments(&reference.generic_arguments)?;
            }
            this.text("(");
            this.comma_separated(&reference.parameters, |this, parameter| {
                this.visit_parameter_declaration(parameter)
            })?;
            this.text(")");

            let body = decl.and_then(|d| d.body.as_ref());
            match body {
                Some(body) if this.options.flag(SHOW_METHOD_DECLARATION_BODY) => {
                    this.line();
                    this.visit_block_statement(body)
                }
                _ => {
                    this.text(";");
                    this.line();
                    Ok(())
                }
            }
        })
    }

    /// Accessor list: compact `{ get; private set; }`, or one block per
    /// accessor when bodies are shown.
    fn render_accessors(
        &mut self,
        accessors: &[(&str, Option<MethodId>)],
        owner_visibility: MemberVisibility,
    ) -> Result<(), RenderError> {
        let model = self.model;
        let mut present = Vec::with_capacity(accessors.len());
        for &(keyword, method) in accessors {
            if let Some(method) = method {
                present.push((keyword, model.method_decl(method)?));
            }
        }
        let expanded = self.options.flag(SHOW_METHOD_DECLARATION_BODY)
            && present
                .iter()
                .any(|(_, decl)| decl.is_some_and(|d| d.body.is_some()));

        let accessor_head = |this: &mut Self, keyword: &str, decl: Option<&MethodDecl>| {
            if let Some(decl) = decl {
                if decl.visibility != owner_visibility {
                    this.keyword_space(member_visibility_keyword(decl.visibility));
                }
            }
            this.keyword(keyword);
        };

        if !expanded {
            self.text(" { ");
            for &(keyword, decl) in &present {
                accessor_head(self, keyword, decl);
                self.text("; ");
            }
            self.text("}");
            return Ok(());
        }

        self.line();
        self.block(|this| {
            for &(keyword, decl) in &present {
                accessor_head(this, keyword, decl);
                match decl.and_then(|d| d.body.as_ref()) {
                    Some(body) => {
                        this.line();
                        this.visit_block_statement(body)?;
                    }
                    None => {
                        this.text(";");
                        this.line();
                    }
                }
            }
            Ok(())
        })
    }

    /// Modifiers a property or event takes from its first accessor.
    fn render_accessor_owner_modifiers(
        &mut self,
        declaring_type: TypeId,
        visibility: MemberVisibility,
        is_static: bool,
        first_accessor: Option<MethodId>,
    ) -> Result<(), RenderError> {
        let in_interface = self.resolver.is_interface(declaring_type)?;
        if !in_interface {
            self.keyword_space(member_visibility_keyword(visibility));
        }
        if is_static {
            self.keyword_space("static");
        }
        if in_interface {
            return Ok(());
        }
        if let Some(accessor) = first_accessor {
            if let Some(decl) = self.model.method_decl(accessor)? {
                self.render_virtual_modifiers(decl);
            }
        }
        Ok(())
    }

    pub(super) fn render_property_declaration(&mut self, property: PropertyId) -> Result<(), RenderError> {
        let model = self.model;
        let reference = model.property_ref(property)?;
        let decl = model.property_decl(property)?;
        if let Some(policy) = self.options.visibility {
            if !self.resolver.is_property_visible(property, &policy)? {
                return Ok(());
            }
        }

        self.crumb(reference.name.as_str(), |this| {
            let visibility = this.resolver.property_visibility(property)?;
            let (get, set) = decl.map_or((None, None), |d| (d.get_method, d.set_method));
            if let Some(decl) = decl {
                this.render_attributes(&decl.attributes, None)?;
            }
            let is_static = this.resolver.is_static_property(property)?;
            this.render_accessor_owner_modifiers(
                reference.declaring_type,
                visibility,
                is_static,
                get.or(set),
            )?;
            this.visit_type_sig(&reference.property_type)?;
            this.text(" ");

            if reference.parameters.is_empty() {
                let name = syntax::escape_qualified(&reference.name);
                this.formatter.write_declaration(&name, Some(property.into()));
            } else {
                this.formatter.write_declaration("this", Some(property.into()));
                this.text("[");
                this.comma_separated(&reference.parameters, |this, parameter| {
                    this.visit_parameter_declaration(parameter)
                })?;
                this.text("]");
            }

            this.render_accessors(&[("get", get), ("set", set)], visibility)?;
            if let Some(initializer) = decl.and_then(|d| d.initializer.as_ref()) {
                this.text(" = ");
                this.visit_expression(initializer)?;
                this.text(";");
            }
            this.line();
            Ok(())
        })
    }

    pub(super) fn render_event_declaration(&mut self, event: EventId) -> Result<(), RenderError> {
        let model = self.model;
        let reference = model.event_ref(event)?;
        let decl = model.event_decl(event)?;
        if let Some(policy) = self.options.visibility {
            if !self.resolver.is_event_visible(event, &policy)? {
                return Ok(());
            }
        }

        self.crumb(reference.name.as_str(), |this| {
            let visibility = this.resolver.event_visibility(event)?;
            let (add, remove) = decl.map_or((None, None), |d| (d.add_method, d.remove_method));
            if let Some(decl) = decl {
                this.render_attributes(&decl.attributes, None)?;
            }
            let is_static = this.resolver.is_static_event(event)?;
            this.render_accessor_owner_modifiers(
                reference.declaring_type,
                visibility,
                is_static,
                add.or(remove),
            )?;
            this.keyword_space("event");
            this.visit_type_sig(&reference.event_type)?;
            this.text(" ");
            let name = syntax::escape_qualified(&reference.name);
            this.formatter.write_declaration(&name, Some(event.into()));

            let mut has_body = false;
            for method in [add, remove].into_iter().flatten() {
                has_body |= model.method_decl(method)?.is_some_and(|d| d.body.is_some());
            }
            if this.options.flag(SHOW_METHOD_DECLARATION_BODY) && has_body {
                this.render_accessors(&[("add", add), ("remove", remove)], visibility)?;
            } else {
                this.text(";");
            }
            this.line();
            Ok(())
        })
    }

    // ========================================================================
    // ATTRIBUTES AND PARAMETERS
    // ========================================================================

    /// `[target: Name(args)]`.
    pub(super) fn render_custom_attribute(
        &mut self,
        attribute: &CustomAttribute,
        target: Option<&str>,
    ) -> Result<(), RenderError> {
        let model = self.model;
        let constructor = model.method_ref(attribute.constructor)?;
        let ty = constructor.declaring_type;
        let name = syntax::escape_identifier(attribute_name(&model.type_ref(ty)?.name)).into_owned();
        let tooltip = self.resolver.qualified_name(ty)?;

        self.text("[");
        if let Some(target) = target {
            self.keyword(target);
            self.text(": ");
        }
        self.formatter.write_reference(&name, &tooltip, Some(ty.into()));
        if !attribute.arguments.is_empty() {
            self.text("(");
            self.comma_separated(&attribute.arguments, |this, argument| {
                this.visit_expression(argument)
            })?;
            self.text(")");
        }
        self.text("]");
        Ok(())
    }

    /// `[In] T name`.
    pub(super) fn render_parameter(&mut self, parameter: &ParameterDecl) -> Result<(), RenderError> {
        if self.options.flag(SHOW_CUSTOM_ATTRIBUTES) {
            for attribute in &parameter.attributes {
                self.render_custom_attribute(attribute, None)?;
                self.text(" ");
            }
        }
        self.visit_type_sig(&parameter.ty)?;
        if !parameter.name.is_empty() {
            self.text(" ");
            let name = syntax::escape_identifier(&parameter.name).into_owned();
            self.formatter.write_declaration(&name, None);
        }
        Ok(())
    }
}
