//! In-memory model construction.

use tracing::warn;

use super::{
    Assembly, AssemblyId, AssemblyRef, AssemblyRefId, Entry, EventDecl, EventId, EventRef,
    FieldDecl, FieldId, FieldRef, MethodDecl, MethodId, MethodRef, Model, Module, ModuleId,
    ModuleRef, ModuleRefId, Owner, PropertyDecl, PropertyId, PropertyRef, Resource, TypeDecl,
    TypeId, TypeRef,
};

/// Incrementally assembles a [`Model`].
///
/// `define_*` calls register the new declaration with its container
/// (module, owning type or declaring type) so that container lists stay in
/// declaration order. Ids that point nowhere are skipped with a warning; the
/// resulting dangling reference surfaces when the model is rendered.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: Model,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Model {
        self.model
    }

    // ========================================================================
    // STRUCTURE
    // ========================================================================

    pub fn add_assembly(&mut self, assembly: Assembly) -> AssemblyId {
        let id = AssemblyId::from_index(self.model.assemblies.len());
        self.model.assemblies.push(assembly);
        id
    }

    /// Add an assembly reference without listing it on any assembly.
    pub fn add_assembly_ref(&mut self, reference: AssemblyRef) -> AssemblyRefId {
        let id = AssemblyRefId::from_index(self.model.assembly_refs.len());
        self.model.assembly_refs.push(reference);
        id
    }

    /// Add an assembly reference and list it on `from`.
    pub fn reference_assembly(&mut self, from: AssemblyId, reference: AssemblyRef) -> AssemblyRefId {
        let id = self.add_assembly_ref(reference);
        match self.model.assemblies.get_mut(from.index()) {
            Some(assembly) => assembly.references.push(id),
            None => warn!(%from, %id, "assembly reference added to unknown assembly"),
        }
        id
    }

    /// Add a module and list it on its assembly.
    pub fn add_module(&mut self, module: Module) -> ModuleId {
        let id = ModuleId::from_index(self.model.modules.len());
        let assembly = module.assembly;
        self.model.modules.push(module);
        match self.model.assemblies.get_mut(assembly.index()) {
            Some(parent) => parent.modules.push(id),
            None => warn!(%assembly, %id, "module added to unknown assembly"),
        }
        id
    }

    /// Add a module reference and list it on `from`.
    pub fn add_module_ref(&mut self, from: ModuleId, reference: ModuleRef) -> ModuleRefId {
        let id = ModuleRefId::from_index(self.model.module_refs.len());
        self.model.module_refs.push(reference);
        match self.model.modules.get_mut(from.index()) {
            Some(module) => module.module_references.push(id),
            None => warn!(%from, %id, "module reference added to unknown module"),
        }
        id
    }

    pub fn add_resource(&mut self, assembly: AssemblyId, resource: Resource) {
        match self.model.assemblies.get_mut(assembly.index()) {
            Some(parent) => parent.resources.push(resource),
            None => warn!(%assembly, name = %resource.name, "resource added to unknown assembly"),
        }
    }

    pub fn assembly_mut(&mut self, id: AssemblyId) -> Option<&mut Assembly> {
        self.model.assemblies.get_mut(id.index())
    }

    // ========================================================================
    // TYPES
    // ========================================================================

    /// Add a type reference with no declaration (external or instantiated).
    pub fn add_type(&mut self, reference: TypeRef) -> TypeId {
        let id = TypeId::from_index(self.model.types.len());
        self.model.types.push(Entry {
            reference,
            declaration: None,
        });
        id
    }

    /// Add a declared type and list it on its module or owning type.
    pub fn define_type(&mut self, reference: TypeRef, declaration: TypeDecl) -> TypeId {
        let id = TypeId::from_index(self.model.types.len());
        let owner = reference.owner;
        self.model.types.push(Entry {
            reference,
            declaration: Some(declaration),
        });
        match owner {
            Owner::Module(module) => match self.model.modules.get_mut(module.index()) {
                Some(parent) => parent.types.push(id),
                None => warn!(%module, %id, "type defined in unknown module"),
            },
            Owner::Type(outer) => match self.type_decl_mut(outer) {
                Some(parent) => parent.nested_types.push(id),
                None => warn!(%outer, %id, "nested type defined in undeclared type"),
            },
            Owner::Assembly(_) => {
                warn!(%id, "declared type owned by an assembly reference is not listed anywhere")
            }
        }
        id
    }

    pub fn type_decl_mut(&mut self, id: TypeId) -> Option<&mut TypeDecl> {
        self.model
            .types
            .get_mut(id.index())
            .and_then(|entry| entry.declaration.as_mut())
    }

    // ========================================================================
    // MEMBERS
    // ========================================================================

    pub fn add_field(&mut self, reference: FieldRef) -> FieldId {
        let id = FieldId::from_index(self.model.fields.len());
        self.model.fields.push(Entry {
            reference,
            declaration: None,
        });
        id
    }

    pub fn define_field(&mut self, reference: FieldRef, declaration: FieldDecl) -> FieldId {
        let id = FieldId::from_index(self.model.fields.len());
        let owner = reference.declaring_type;
        self.model.fields.push(Entry {
            reference,
            declaration: Some(declaration),
        });
        match self.type_decl_mut(owner) {
            Some(parent) => parent.fields.push(id),
            None => warn!(%owner, %id, "field defined in undeclared type"),
        }
        id
    }

    pub fn add_method(&mut self, reference: MethodRef) -> MethodId {
        let id = MethodId::from_index(self.model.methods.len());
        self.model.methods.push(Entry {
            reference,
            declaration: None,
        });
        id
    }

    pub fn define_method(&mut self, reference: MethodRef, declaration: MethodDecl) -> MethodId {
        let id = MethodId::from_index(self.model.methods.len());
        let owner = reference.declaring_type;
        self.model.methods.push(Entry {
            reference,
            declaration: Some(declaration),
        });
        match self.type_decl_mut(owner) {
            Some(parent) => parent.methods.push(id),
            None => warn!(%owner, %id, "method defined in undeclared type"),
        }
        id
    }

    pub fn method_decl_mut(&mut self, id: MethodId) -> Option<&mut MethodDecl> {
        self.model
            .methods
            .get_mut(id.index())
            .and_then(|entry| entry.declaration.as_mut())
    }

    pub fn add_property(&mut self, reference: PropertyRef) -> PropertyId {
        let id = PropertyId::from_index(self.model.properties.len());
        self.model.properties.push(Entry {
            reference,
            declaration: None,
        });
        id
    }

    pub fn define_property(
        &mut self,
        reference: PropertyRef,
        declaration: PropertyDecl,
    ) -> PropertyId {
        let id = PropertyId::from_index(self.model.properties.len());
        let owner = reference.declaring_type;
        self.model.properties.push(Entry {
            reference,
            declaration: Some(declaration),
        });
        match self.type_decl_mut(owner) {
            Some(parent) => parent.properties.push(id),
            None => warn!(%owner, %id, "property defined in undeclared type"),
        }
        id
    }

    pub fn add_event(&mut self, reference: EventRef) -> EventId {
        let id = EventId::from_index(self.model.events.len());
        self.model.events.push(Entry {
            reference,
            declaration: None,
        });
        id
    }

    pub fn define_event(&mut self, reference: EventRef, declaration: EventDecl) -> EventId {
        let id = EventId::from_index(self.model.events.len());
        let owner = reference.declaring_type;
        self.model.events.push(Entry {
            reference,
            declaration: Some(declaration),
        });
        match self.type_decl_mut(owner) {
            Some(parent) => parent.events.push(id),
            None => warn!(%owner, %id, "event defined in undeclared type"),
        }
        id
    }
}
