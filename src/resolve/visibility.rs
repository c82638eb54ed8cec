//! Visibility filtering.

use super::Resolver;
use crate::model::{
    EventId, FieldId, MemberVisibility, MethodId, ModelError, PropertyId, TypeId, TypeVisibility,
};

/// Which accessibility levels a caller wants to see.
///
/// A caller-supplied filter, not part of the model. The default policy
/// admits nothing; see [`VisibilityPolicy::all`] and
/// [`VisibilityPolicy::public_only`] for the common presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct VisibilityPolicy {
    pub public: bool,
    pub private: bool,
    pub family: bool,
    pub assembly: bool,
    pub family_and_assembly: bool,
    pub family_or_assembly: bool,
}

impl VisibilityPolicy {
    pub const fn all() -> Self {
        Self {
            public: true,
            private: true,
            family: true,
            assembly: true,
            family_and_assembly: true,
            family_or_assembly: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            public: false,
            private: false,
            family: false,
            assembly: false,
            family_and_assembly: false,
            family_or_assembly: false,
        }
    }

    pub const fn public_only() -> Self {
        Self {
            public: true,
            ..Self::none()
        }
    }

    /// Whether a type's own visibility passes, ignoring its owners.
    pub fn allows_type(&self, visibility: TypeVisibility) -> bool {
        match visibility {
            TypeVisibility::Public | TypeVisibility::NestedPublic => self.public,
            TypeVisibility::Private | TypeVisibility::NestedPrivate => self.private,
            TypeVisibility::NestedFamily => self.family,
            TypeVisibility::NestedAssembly => self.assembly,
            TypeVisibility::NestedFamilyAndAssembly => self.family_and_assembly,
            TypeVisibility::NestedFamilyOrAssembly => self.family_or_assembly,
        }
    }

    /// Whether a member's own visibility passes, ignoring its declaring type.
    pub fn allows_member(&self, visibility: MemberVisibility) -> bool {
        match visibility {
            MemberVisibility::Public => self.public,
            MemberVisibility::PrivateScope | MemberVisibility::Private => self.private,
            MemberVisibility::Family => self.family,
            MemberVisibility::Assembly => self.assembly,
            MemberVisibility::FamilyAndAssembly => self.family_and_assembly,
            MemberVisibility::FamilyOrAssembly => self.family_or_assembly,
        }
    }
}

impl<'m> Resolver<'m> {
    /// Whether `ty` and every type enclosing it pass `policy`.
    pub fn is_type_visible(&self, ty: TypeId, policy: &VisibilityPolicy) -> Result<bool, ModelError> {
        let (chain, _) = self.owner_chain(ty)?;
        for &id in chain.iter().rev() {
            match self.type_declaration(id)? {
                Some(decl) => {
                    if !policy.allows_type(decl.visibility) {
                        return Ok(false);
                    }
                }
                None => tracing::trace!(%id, "unresolved type treated as visible"),
            }
        }
        Ok(true)
    }

    pub fn is_field_visible(&self, field: FieldId, policy: &VisibilityPolicy) -> Result<bool, ModelError> {
        let reference = self.model.field_ref(field)?;
        if !self.is_type_visible(reference.declaring_type, policy)? {
            return Ok(false);
        }
        Ok(match self.model.field_decl(field)? {
            Some(decl) => policy.allows_member(decl.visibility),
            None => {
                tracing::trace!(%field, "unresolved field treated as visible");
                true
            }
        })
    }

    pub fn is_method_visible(&self, method: MethodId, policy: &VisibilityPolicy) -> Result<bool, ModelError> {
        let reference = self.model.method_ref(method)?;
        if !self.is_type_visible(reference.declaring_type, policy)? {
            return Ok(false);
        }
        Ok(match self.model.method_decl(method)? {
            Some(decl) => policy.allows_member(decl.visibility),
            None => {
                tracing::trace!(%method, "unresolved method treated as visible");
                true
            }
        })
    }

    pub fn is_property_visible(
        &self,
        property: PropertyId,
        policy: &VisibilityPolicy,
    ) -> Result<bool, ModelError> {
        let reference = self.model.property_ref(property)?;
        if !self.is_type_visible(reference.declaring_type, policy)? {
            return Ok(false);
        }
        Ok(policy.allows_member(self.property_visibility(property)?))
    }

    pub fn is_event_visible(&self, event: EventId, policy: &VisibilityPolicy) -> Result<bool, ModelError> {
        let reference = self.model.event_ref(event)?;
        if !self.is_type_visible(reference.declaring_type, policy)? {
            return Ok(false);
        }
        Ok(policy.allows_member(self.event_visibility(event)?))
    }

    /// Visibility of a property, taken from its accessors.
    ///
    /// Accessors that agree give their shared visibility; accessors that
    /// disagree, or no accessors at all, give `Public`.
    pub fn property_visibility(&self, property: PropertyId) -> Result<MemberVisibility, ModelError> {
        let Some(decl) = self.model.property_decl(property)? else {
            return Ok(MemberVisibility::Public);
        };
        self.accessor_visibility(&[decl.get_method, decl.set_method])
    }

    /// Visibility of an event, taken from its add/remove/invoke accessors
    /// under the same rules as [`Resolver::property_visibility`].
    pub fn event_visibility(&self, event: EventId) -> Result<MemberVisibility, ModelError> {
        let Some(decl) = self.model.event_decl(event)? else {
            return Ok(MemberVisibility::Public);
        };
        self.accessor_visibility(&[decl.add_method, decl.remove_method, decl.invoke_method])
    }

    fn accessor_visibility(&self, accessors: &[Option<MethodId>]) -> Result<MemberVisibility, ModelError> {
        let mut shared: Option<MemberVisibility> = None;
        for &accessor in accessors.iter().flatten() {
            let Some(decl) = self.model.method_decl(accessor)? else {
                continue;
            };
            match shared {
                None => shared = Some(decl.visibility),
                Some(seen) if seen == decl.visibility => {}
                Some(_) => return Ok(MemberVisibility::Public),
            }
        }
        Ok(shared.unwrap_or(MemberVisibility::Public))
    }
}
