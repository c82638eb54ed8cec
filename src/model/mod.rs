//! Read-only program model.
//!
//! The model describes a decompiled program: assemblies and their modules,
//! the types those modules define, the members of those types and the
//! statement/expression trees of method bodies.
//!
//! ## Design
//!
//! Entities live in arenas addressed by typed ids. Types and members are
//! stored as an [`Entry`]: the reference form (signature-level identity) is
//! always present, the declaration form only when the entity is defined in a
//! loaded module. References to external entities have no declaration.
//!
//! ```text
//! Model
//! ├── assemblies / assembly_refs / modules / module_refs
//! ├── types:      Vec<Entry<TypeRef, TypeDecl>>
//! ├── fields:     Vec<Entry<FieldRef, FieldDecl>>
//! ├── methods:    Vec<Entry<MethodRef, MethodDecl>>
//! ├── properties: Vec<Entry<PropertyRef, PropertyDecl>>
//! └── events:     Vec<Entry<EventRef, EventDecl>>
//! ```
//!
//! Nothing downstream mutates a `Model`; build one with [`ModelBuilder`].

mod builder;
mod error;
mod expressions;
mod ids;
mod kind;
mod members;
mod statements;
mod structure;
mod types;

#[cfg(test)]
mod tests;

pub use builder::ModelBuilder;
pub use error::ModelError;
pub use expressions::*;
pub use ids::{
    AssemblyId, AssemblyRefId, EventId, FieldId, MethodId, ModuleId, ModuleRefId, PropertyId,
    ReferenceTarget, TypeId,
};
pub use kind::{EntityKind, ExpressionKind, NodeKind, StatementKind, TypeKind};
pub use members::{
    CallingConvention, CustomAttribute, EventDecl, EventRef, FieldDecl, FieldRef,
    MemberVisibility, MethodDecl, MethodRef, MethodReturnType, ParameterDecl, PropertyDecl,
    PropertyRef,
};
pub use statements::*;
pub use structure::{
    Assembly, AssemblyRef, Module, ModuleRef, Namespace, Resource, ResourceKind,
    ResourceVisibility, Version,
};
pub use types::{
    ArrayType, FunctionPointer, GenericOwner, GenericParameter, ModifierType, Owner, PointerType,
    ReferenceType, TypeDecl, TypeRef, TypeSig, TypeVisibility,
};

/// A reference paired with its optional declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<R, D> {
    pub reference: R,
    pub declaration: Option<D>,
}

fn lookup<T>(items: &[T], kind: EntityKind, raw: u32, index: usize) -> Result<&T, ModelError> {
    items
        .get(index)
        .ok_or_else(|| ModelError::dangling(kind, raw))
}

/// The arena-backed program model.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub(crate) assemblies: Vec<Assembly>,
    pub(crate) assembly_refs: Vec<AssemblyRef>,
    pub(crate) modules: Vec<Module>,
    pub(crate) module_refs: Vec<ModuleRef>,
    pub(crate) types: Vec<Entry<TypeRef, TypeDecl>>,
    pub(crate) fields: Vec<Entry<FieldRef, FieldDecl>>,
    pub(crate) methods: Vec<Entry<MethodRef, MethodDecl>>,
    pub(crate) properties: Vec<Entry<PropertyRef, PropertyDecl>>,
    pub(crate) events: Vec<Entry<EventRef, EventDecl>>,
}

impl Model {
    // ========================================================================
    // STRUCTURE
    // ========================================================================

    pub fn assembly(&self, id: AssemblyId) -> Result<&Assembly, ModelError> {
        lookup(&self.assemblies, EntityKind::Assembly, id.raw(), id.index())
    }

    pub fn assembly_ref(&self, id: AssemblyRefId) -> Result<&AssemblyRef, ModelError> {
        lookup(
            &self.assembly_refs,
            EntityKind::AssemblyReference,
            id.raw(),
            id.index(),
        )
    }

    pub fn module(&self, id: ModuleId) -> Result<&Module, ModelError> {
        lookup(&self.modules, EntityKind::Module, id.raw(), id.index())
    }

    pub fn module_ref(&self, id: ModuleRefId) -> Result<&ModuleRef, ModelError> {
        lookup(
            &self.module_refs,
            EntityKind::ModuleReference,
            id.raw(),
            id.index(),
        )
    }

    /// Ids of all loaded assemblies, in load order.
    pub fn assemblies(&self) -> impl Iterator<Item = AssemblyId> + '_ {
        (0..self.assemblies.len()).map(AssemblyId::from_index)
    }

    /// Ids of all modules, in load order.
    pub fn modules(&self) -> impl Iterator<Item = ModuleId> + '_ {
        (0..self.modules.len()).map(ModuleId::from_index)
    }

    // ========================================================================
    // TYPES
    // ========================================================================

    pub fn type_ref(&self, id: TypeId) -> Result<&TypeRef, ModelError> {
        lookup(&self.types, EntityKind::Type, id.raw(), id.index()).map(|e| &e.reference)
    }

    /// The declaration behind `id`; `Ok(None)` for external types.
    pub fn type_decl(&self, id: TypeId) -> Result<Option<&TypeDecl>, ModelError> {
        lookup(&self.types, EntityKind::Type, id.raw(), id.index()).map(|e| e.declaration.as_ref())
    }

    /// Number of type references, declared or not.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    // ========================================================================
    // MEMBERS
    // ========================================================================

    pub fn field_ref(&self, id: FieldId) -> Result<&FieldRef, ModelError> {
        lookup(&self.fields, EntityKind::Field, id.raw(), id.index()).map(|e| &e.reference)
    }

    pub fn field_decl(&self, id: FieldId) -> Result<Option<&FieldDecl>, ModelError> {
        lookup(&self.fields, EntityKind::Field, id.raw(), id.index())
            .map(|e| e.declaration.as_ref())
    }

    pub fn method_ref(&self, id: MethodId) -> Result<&MethodRef, ModelError> {
        lookup(&self.methods, EntityKind::Method, id.raw(), id.index()).map(|e| &e.reference)
    }

    pub fn method_decl(&self, id: MethodId) -> Result<Option<&MethodDecl>, ModelError> {
        lookup(&self.methods, EntityKind::Method, id.raw(), id.index())
            .map(|e| e.declaration.as_ref())
    }

    pub fn property_ref(&self, id: PropertyId) -> Result<&PropertyRef, ModelError> {
        lookup(&self.properties, EntityKind::Property, id.raw(), id.index())
            .map(|e| &e.reference)
    }

    pub fn property_decl(&self, id: PropertyId) -> Result<Option<&PropertyDecl>, ModelError> {
        lookup(&self.properties, EntityKind::Property, id.raw(), id.index())
            .map(|e| e.declaration.as_ref())
    }

    pub fn event_ref(&self, id: EventId) -> Result<&EventRef, ModelError> {
        lookup(&self.events, EntityKind::Event, id.raw(), id.index()).map(|e| &e.reference)
    }

    pub fn event_decl(&self, id: EventId) -> Result<Option<&EventDecl>, ModelError> {
        lookup(&self.events, EntityKind::Event, id.raw(), id.index())
            .map(|e| e.declaration.as_ref())
    }
}
