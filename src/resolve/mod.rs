//! Name, visibility and inheritance resolution.
//!
//! The [`Resolver`] is a borrowing view over a [`Model`]. Every operation is
//! a pure function of the model: nothing is cached and nothing is mutated,
//! so any number of resolvers may run concurrently over one model.
//!
//! ## Name notation
//!
//! ```text
//! simple name      List<Int32>            base name + composed generic arguments
//! qualified name   Demo.Outer+Inner       namespace "." outermost, "+" per nesting level
//! resolution scope Demo+Outer             outermost namespace, "+" per enclosing type
//! ```
//!
//! References that have no declaration (types from assemblies that are not
//! loaded) are treated as visible and as having no members.

mod classify;
mod members;
mod names;
mod overrides;
mod visibility;


use smol_str::SmolStr;

use crate::model::{Model, ModelError, Owner, TypeDecl, TypeId};

pub use classify::TypeClass;
pub use names::TypeKey;
pub use visibility::VisibilityPolicy;

/// Longest owner chain the resolver follows before giving up.
pub const MAX_OWNER_DEPTH: usize = 64;

/// Resolves names, visibility and inheritance over a borrowed model.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'m> {
    model: &'m Model,
}

impl<'m> Resolver<'m> {
    /// Create a new resolver.
    pub fn new(model: &'m Model) -> Self {
        Self { model }
    }

    /// The model being resolved against.
    pub fn model(&self) -> &'m Model {
        self.model
    }

    /// The nesting chain of `ty`, innermost first.
    ///
    /// The last element is the outermost type; its owner is the returned
    /// module or assembly reference.
    pub fn owner_chain(&self, ty: TypeId) -> Result<(Vec<TypeId>, Owner), ModelError> {
        let mut chain = Vec::new();
        let mut current = ty;
        while chain.len() < MAX_OWNER_DEPTH {
            chain.push(current);
            match self.model.type_ref(current)?.owner {
                Owner::Type(outer) => current = outer,
                root => return Ok((chain, root)),
            }
        }
        tracing::warn!(%ty, limit = MAX_OWNER_DEPTH, "owner chain too deep, giving up");
        Err(ModelError::owner_depth(ty.raw(), MAX_OWNER_DEPTH))
    }

    /// The generic definition behind `ty`.
    ///
    /// An instantiation such as `List<Int32>` has no declaration of its own
    /// and maps to its template; every other type maps to itself.
    pub fn generic_definition(&self, ty: TypeId) -> Result<TypeId, ModelError> {
        if self.model.type_decl(ty)?.is_some() {
            return Ok(ty);
        }
        Ok(self.model.type_ref(ty)?.generic_type.unwrap_or(ty))
    }

    /// The declaration of `ty`, or of its template when `ty` is a generic
    /// instantiation.
    pub fn type_declaration(&self, ty: TypeId) -> Result<Option<&'m TypeDecl>, ModelError> {
        let definition = self.generic_definition(ty)?;
        let decl = self.model.type_decl(definition)?;
        if decl.is_none() {
            tracing::trace!(%ty, "no declaration for type");
        }
        Ok(decl)
    }

    /// Name of the assembly that ultimately scopes `ty`.
    ///
    /// Types defined in a loaded module report their assembly's name; external
    /// types report the name of the assembly reference they resolve through.
    pub fn scope_assembly(&self, ty: TypeId) -> Result<SmolStr, ModelError> {
        let (_, root) = self.owner_chain(ty)?;
        match root {
            Owner::Module(module) => {
                let module = self.model.module(module)?;
                Ok(self.model.assembly(module.assembly)?.name.clone())
            }
            Owner::Assembly(reference) => Ok(self.model.assembly_ref(reference)?.name.clone()),
            Owner::Type(_) => Ok(SmolStr::default()),
        }
    }
}
