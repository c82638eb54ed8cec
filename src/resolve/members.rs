//! Member enumeration and interface-set reduction.
//!
//! Every enumeration returns ids in a deterministic order:
//!
//! | Members    | Sort key                                              |
//! |------------|-------------------------------------------------------|
//! | fields     | name, id                                              |
//! | methods    | name, parameter list, generic arity, id               |
//! | properties | name, parameter list, id                              |
//! | events     | name, id                                              |
//! | nested     | simple name, id                                       |
//! | interfaces | qualified name, resolution scope, id                  |

use rustc_hash::FxHashSet;

use super::{Resolver, VisibilityPolicy};
use crate::model::{EventId, FieldId, MethodId, ModelError, PropertyId, TypeDecl, TypeId};

impl<'m> Resolver<'m> {
    pub fn fields(
        &self,
        ty: TypeId,
        policy: Option<&VisibilityPolicy>,
    ) -> Result<Vec<FieldId>, ModelError> {
        let Some(decl) = self.type_declaration(ty)? else {
            return Ok(Vec::new());
        };
        let mut keyed = Vec::with_capacity(decl.fields.len());
        for &field in &decl.fields {
            if let Some(policy) = policy {
                if !self.is_field_visible(field, policy)? {
                    continue;
                }
            }
            keyed.push(((self.model.field_ref(field)?.name.clone(), field), field));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }

    /// Methods of `ty`, without property and event accessors.
    pub fn methods(
        &self,
        ty: TypeId,
        policy: Option<&VisibilityPolicy>,
    ) -> Result<Vec<MethodId>, ModelError> {
        let Some(decl) = self.type_declaration(ty)? else {
            return Ok(Vec::new());
        };
        let accessors = self.accessor_methods(decl)?;
        let mut keyed = Vec::with_capacity(decl.methods.len());
        for &method in &decl.methods {
            if accessors.contains(&method) {
                continue;
            }
            if let Some(policy) = policy {
                if !self.is_method_visible(method, policy)? {
                    continue;
                }
            }
            let reference = self.model.method_ref(method)?;
            let key = (
                reference.name.clone(),
                self.parameter_list(&reference.parameters)?,
                reference.generic_arguments.len(),
                method,
            );
            keyed.push((key, method));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }

    pub fn properties(
        &self,
        ty: TypeId,
        policy: Option<&VisibilityPolicy>,
    ) -> Result<Vec<PropertyId>, ModelError> {
        let Some(decl) = self.type_declaration(ty)? else {
            return Ok(Vec::new());
        };
        let mut keyed = Vec::with_capacity(decl.properties.len());
        for &property in &decl.properties {
            if let Some(policy) = policy {
                if !self.is_property_visible(property, policy)? {
                    continue;
                }
            }
            let reference = self.model.property_ref(property)?;
            let key = (
                reference.name.clone(),
                self.parameter_list(&reference.parameters)?,
                property,
            );
            keyed.push((key, property));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }

    pub fn events(
        &self,
        ty: TypeId,
        policy: Option<&VisibilityPolicy>,
    ) -> Result<Vec<EventId>, ModelError> {
        let Some(decl) = self.type_declaration(ty)? else {
            return Ok(Vec::new());
        };
        let mut keyed = Vec::with_capacity(decl.events.len());
        for &event in &decl.events {
            if let Some(policy) = policy {
                if !self.is_event_visible(event, policy)? {
                    continue;
                }
            }
            keyed.push(((self.model.event_ref(event)?.name.clone(), event), event));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }

    pub fn nested_types(
        &self,
        ty: TypeId,
        policy: Option<&VisibilityPolicy>,
    ) -> Result<Vec<TypeId>, ModelError> {
        let Some(decl) = self.type_declaration(ty)? else {
            return Ok(Vec::new());
        };
        let mut keyed = Vec::with_capacity(decl.nested_types.len());
        for &nested in &decl.nested_types {
            if let Some(policy) = policy {
                if !self.is_type_visible(nested, policy)? {
                    continue;
                }
            }
            keyed.push(((self.simple_name(nested)?, nested), nested));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }

    /// Interfaces `ty` introduces itself.
    ///
    /// Drops interfaces already implemented by the base type and interfaces
    /// implied by another declared interface, then applies `policy`.
    pub fn interfaces(
        &self,
        ty: TypeId,
        policy: Option<&VisibilityPolicy>,
    ) -> Result<Vec<TypeId>, ModelError> {
        let Some(decl) = self.type_declaration(ty)? else {
            return Ok(Vec::new());
        };
        let inherited = match decl.base_type {
            Some(base) => self.all_interfaces(base)?,
            None => Default::default(),
        };

        let mut keyed = Vec::new();
        for &interface in &decl.interfaces {
            let key = self.type_key(interface)?;
            if inherited.contains_key(&key) {
                tracing::trace!(%ty, %interface, "interface inherited from base type");
                continue;
            }
            let mut implied = false;
            for &other in &decl.interfaces {
                if other == interface || self.same_type(other, interface)? {
                    continue;
                }
                if self.all_interfaces(other)?.contains_key(&key) {
                    implied = true;
                    break;
                }
            }
            if implied {
                tracing::trace!(%ty, %interface, "interface implied by a sibling interface");
                continue;
            }
            if let Some(policy) = policy {
                if !self.is_type_visible(interface, policy)? {
                    continue;
                }
            }
            let sort_key = (key.qualified_name, self.resolution_scope(interface)?, interface);
            keyed.push((sort_key, interface));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.dedup_by(|a, b| a.0.0 == b.0.0 && a.0.1 == b.0.1);
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }

    /// Methods backing the properties and events of a declaration.
    pub fn accessor_methods(&self, decl: &TypeDecl) -> Result<FxHashSet<MethodId>, ModelError> {
        let mut accessors = FxHashSet::default();
        for &property in &decl.properties {
            if let Some(property) = self.model.property_decl(property)? {
                accessors.extend(property.get_method);
                accessors.extend(property.set_method);
            }
        }
        for &event in &decl.events {
            if let Some(event) = self.model.event_decl(event)? {
                accessors.extend(event.add_method);
                accessors.extend(event.remove_method);
                accessors.extend(event.invoke_method);
            }
        }
        Ok(accessors)
    }
}
