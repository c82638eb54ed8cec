//! Inheritance: base-type chains, transitive interface sets and base-method
//! matching.

use rustc_hash::{FxHashSet, FxHashMap};

use super::{Resolver, TypeKey, MAX_OWNER_DEPTH};
use crate::model::{MethodId, MethodRef, ModelError, TypeId};

impl<'m> Resolver<'m> {
    /// Base types of `ty`, nearest first.
    ///
    /// Stops at the first type without a declaration or base, or when the
    /// chain revisits a type.
    pub fn base_types(&self, ty: TypeId) -> Result<Vec<TypeId>, ModelError> {
        let mut bases = Vec::new();
        let mut seen = FxHashSet::default();
        seen.insert(ty);
        let mut current = ty;
        while let Some(decl) = self.type_declaration(current)? {
            let Some(base) = decl.base_type else { break };
            if !seen.insert(base) || bases.len() >= MAX_OWNER_DEPTH {
                tracing::warn!(%ty, %base, "base type chain revisits a type");
                break;
            }
            bases.push(base);
            current = base;
        }
        Ok(bases)
    }

    /// Whether `base` appears in the base-type chain of `derived`.
    ///
    /// A generic definition also matches any of its instantiations.
    pub fn is_base_type(&self, derived: TypeId, base: TypeId) -> Result<bool, ModelError> {
        let open = self.generic_definition(base)? == base;
        for candidate in self.base_types(derived)? {
            if self.same_type(candidate, base)? {
                return Ok(true);
            }
            if open && self.same_type(self.generic_definition(candidate)?, base)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Every interface `ty` implements, directly, through its bases, or
    /// through other interfaces.
    pub fn all_interfaces(&self, ty: TypeId) -> Result<FxHashMap<TypeKey, TypeId>, ModelError> {
        let mut found = FxHashMap::default();
        let mut visited = FxHashSet::default();
        let mut pending = vec![ty];
        pending.extend(self.base_types(ty)?);

        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(decl) = self.type_declaration(current)? else {
                tracing::trace!(%current, "unresolved type contributes no interfaces");
                continue;
            };
            for &interface in &decl.interfaces {
                found.entry(self.type_key(interface)?).or_insert(interface);
                pending.push(interface);
            }
        }
        Ok(found)
    }

    pub fn implements_interface(&self, ty: TypeId, interface: TypeId) -> Result<bool, ModelError> {
        let key = self.type_key(interface)?;
        Ok(self.all_interfaces(ty)?.contains_key(&key))
    }

    /// Whether method `a` overrides or implements method `b`.
    pub fn is_base_method(&self, a: MethodId, b: MethodId) -> Result<bool, ModelError> {
        let (a, a_ref) = self.generic_template(a)?;
        let (b, b_ref) = self.generic_template(b)?;

        if a_ref.name != b_ref.name {
            return Ok(false);
        }
        if !self.same_type_sig(&a_ref.return_type.ty, &b_ref.return_type.ty)? {
            return Ok(false);
        }
        if !calling_conventions_compatible(a_ref, b_ref) {
            return Ok(false);
        }
        if a_ref.parameters.len() != b_ref.parameters.len() {
            return Ok(false);
        }
        for (pa, pb) in a_ref.parameters.iter().zip(&b_ref.parameters) {
            if !self.same_type_sig(&pa.ty, &pb.ty)? {
                return Ok(false);
            }
        }
        if a_ref.generic_arguments.len() != b_ref.generic_arguments.len() {
            return Ok(false);
        }

        let (Some(a_decl), Some(b_decl)) = (self.model.method_decl(a)?, self.model.method_decl(b)?)
        else {
            tracing::trace!(%a, %b, "unresolved method cannot be matched");
            return Ok(false);
        };
        if !a_decl.is_virtual || !b_decl.is_virtual {
            return Ok(false);
        }

        let derived = a_ref.declaring_type;
        let base = b_ref.declaring_type;
        Ok(self.is_base_type(derived, base)? || self.implements_interface(derived, base)?)
    }

    fn generic_template(&self, method: MethodId) -> Result<(MethodId, &'m MethodRef), ModelError> {
        let reference = self.model.method_ref(method)?;
        match reference.generic_method {
            Some(template) => Ok((template, self.model.method_ref(template)?)),
            None => Ok((method, reference)),
        }
    }
}

/// Two calling conventions conflict only when the instance flag, the
/// explicit-this flag and the convention all differ.
fn calling_conventions_compatible(a: &MethodRef, b: &MethodRef) -> bool {
    !(a.has_this != b.has_this
        && a.explicit_this != b.explicit_this
        && a.calling_convention != b.calling_convention)
}
