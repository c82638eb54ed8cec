//! Name composition: simple names, qualified names, resolution scopes and
//! structural type identity.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::Resolver;
use crate::model::{
    MethodId, ModelError, ModuleId, Namespace, Owner, ParameterDecl, TypeId, TypeSig,
};

/// Identity of a named type across references.
///
/// Two type ids denote the same type when their qualified names and scoping
/// assemblies agree, whether or not either one is backed by a declaration.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeKey {
    pub qualified_name: String,
    pub assembly: SmolStr,
}

impl<'m> Resolver<'m> {
    /// `Name`, or `Name<A,B>` for generic types.
    pub fn simple_name(&self, ty: TypeId) -> Result<String, ModelError> {
        let reference = self.model.type_ref(ty)?;
        if reference.generic_arguments.is_empty() {
            return Ok(reference.name.to_string());
        }
        let arguments = reference
            .generic_arguments
            .iter()
            .map(|argument| self.type_sig_name(argument))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{}<{}>", reference.name, arguments.join(",")))
    }

    /// Display name of any type shape, built from simple names.
    pub fn type_sig_name(&self, sig: &TypeSig) -> Result<String, ModelError> {
        Ok(match sig {
            TypeSig::Named(id) => self.simple_name(*id)?,
            TypeSig::Array(array) => format!(
                "{}[{}]",
                self.type_sig_name(&array.element)?,
                ",".repeat(array.rank.saturating_sub(1) as usize)
            ),
            TypeSig::Pointer(pointer) => format!("{}*", self.type_sig_name(&pointer.element)?),
            TypeSig::Reference(reference) => {
                format!("{}&", self.type_sig_name(&reference.element)?)
            }
            TypeSig::GenericParameter(parameter) => parameter.name.to_string(),
            TypeSig::OptionalModifier(modified) | TypeSig::RequiredModifier(modified) => {
                self.type_sig_name(&modified.element)?
            }
            TypeSig::FunctionPointer(pointer) => {
                let parameters = pointer
                    .parameters
                    .iter()
                    .map(|p| self.type_sig_name(p))
                    .collect::<Result<Vec<_>, _>>()?;
                format!(
                    "method {} *({})",
                    self.type_sig_name(&pointer.return_type)?,
                    parameters.join(", ")
                )
            }
        })
    }

    /// `Namespace.Outer+Inner`.
    pub fn qualified_name(&self, ty: TypeId) -> Result<String, ModelError> {
        let (chain, _) = self.owner_chain(ty)?;
        let mut segments = Vec::with_capacity(chain.len());
        for (depth, &id) in chain.iter().rev().enumerate() {
            let simple = self.simple_name(id)?;
            let namespace = &self.model.type_ref(id)?.namespace;
            if depth == 0 && !namespace.is_empty() {
                segments.push(format!("{namespace}.{simple}"));
            } else {
                segments.push(simple);
            }
        }
        Ok(segments.join("+"))
    }

    /// Namespace of the outermost type, extended with `+Owner` for each
    /// enclosing type of `ty`.
    pub fn resolution_scope(&self, ty: TypeId) -> Result<String, ModelError> {
        let (chain, _) = self.owner_chain(ty)?;
        let mut enclosing = chain.iter().rev();
        let Some(&outermost) = enclosing.next() else {
            return Ok(String::new());
        };
        let mut scope = self.model.type_ref(outermost)?.namespace.to_string();
        if chain.len() > 1 {
            scope.push('+');
            scope.push_str(&self.simple_name(outermost)?);
        }
        // The innermost element is `ty` itself, which is not part of its scope.
        for &owner in enclosing.take(chain.len().saturating_sub(2)) {
            scope.push('+');
            scope.push_str(&self.simple_name(owner)?);
        }
        tracing::trace!(%ty, scope = %scope, "resolved scope");
        Ok(scope)
    }

    pub fn type_key(&self, ty: TypeId) -> Result<TypeKey, ModelError> {
        Ok(TypeKey {
            qualified_name: self.qualified_name(ty)?,
            assembly: self.scope_assembly(ty)?,
        })
    }

    /// Whether two type ids denote the same type.
    pub fn same_type(&self, a: TypeId, b: TypeId) -> Result<bool, ModelError> {
        if a == b {
            return Ok(true);
        }
        Ok(self.type_key(a)? == self.type_key(b)?)
    }

    /// Structural identity of two type shapes.
    pub fn same_type_sig(&self, a: &TypeSig, b: &TypeSig) -> Result<bool, ModelError> {
        Ok(match (a, b) {
            (TypeSig::Named(a), TypeSig::Named(b)) => self.same_type(*a, *b)?,
            (TypeSig::Array(a), TypeSig::Array(b)) => {
                a.rank == b.rank && self.same_type_sig(&a.element, &b.element)?
            }
            (TypeSig::Pointer(a), TypeSig::Pointer(b)) => {
                self.same_type_sig(&a.element, &b.element)?
            }
            (TypeSig::Reference(a), TypeSig::Reference(b)) => {
                self.same_type_sig(&a.element, &b.element)?
            }
            (TypeSig::GenericParameter(a), TypeSig::GenericParameter(b)) => {
                a.position == b.position && a.owner == b.owner
            }
            (TypeSig::OptionalModifier(a), TypeSig::OptionalModifier(b))
            | (TypeSig::RequiredModifier(a), TypeSig::RequiredModifier(b)) => {
                self.same_type(a.modifier, b.modifier)?
                    && self.same_type_sig(&a.element, &b.element)?
            }
            (TypeSig::FunctionPointer(a), TypeSig::FunctionPointer(b)) => {
                a.calling_convention == b.calling_convention
                    && self.same_type_sig(&a.return_type, &b.return_type)?
                    && self.same_parameter_types(&a.parameters, &b.parameters)?
            }
            _ => false,
        })
    }

    fn same_parameter_types(&self, a: &[TypeSig], b: &[TypeSig]) -> Result<bool, ModelError> {
        if a.len() != b.len() {
            return Ok(false);
        }
        for (a, b) in a.iter().zip(b) {
            if !self.same_type_sig(a, b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `(T1, T2)` parameter signature.
    pub fn parameter_list(&self, parameters: &[ParameterDecl]) -> Result<String, ModelError> {
        let types = parameters
            .iter()
            .map(|p| self.type_sig_name(&p.ty))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("({})", types.join(", ")))
    }

    /// `Name(T1, T2)`.
    pub fn name_with_parameter_list(&self, method: MethodId) -> Result<String, ModelError> {
        let reference = self.model.method_ref(method)?;
        Ok(format!(
            "{}{}",
            reference.name,
            self.parameter_list(&reference.parameters)?
        ))
    }

    /// `Namespace.Outer+Inner.Member`.
    pub fn name_with_declaring_type(
        &self,
        declaring_type: TypeId,
        member: &str,
    ) -> Result<String, ModelError> {
        Ok(format!("{}.{}", self.qualified_name(declaring_type)?, member))
    }

    /// Top-level types of `module` grouped by namespace, ordered by name.
    ///
    /// Types keep their declaration order inside each namespace.
    pub fn namespaces(&self, module: ModuleId) -> Result<Vec<Namespace>, ModelError> {
        let mut groups: IndexMap<SmolStr, Vec<TypeId>> = IndexMap::new();
        for &ty in &self.model.module(module)?.types {
            let reference = self.model.type_ref(ty)?;
            if matches!(reference.owner, Owner::Type(_)) {
                continue;
            }
            groups
                .entry(reference.namespace.clone())
                .or_default()
                .push(ty);
        }
        groups.sort_keys();
        Ok(groups
            .into_iter()
            .map(|(name, types)| Namespace::new(name, types))
            .collect())
    }
}
