//! Type and member classification.

use super::Resolver;
use crate::model::{EventId, ModelError, PropertyId, TypeId, TypeSig};

/// The declaration form a type takes in C-family source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
}

impl TypeClass {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Delegate => "delegate",
        }
    }
}

impl<'m> Resolver<'m> {
    /// Whether `ty` is `System.<name>`.
    pub fn is_system_type(&self, ty: TypeId, name: &str) -> Result<bool, ModelError> {
        let reference = self.model.type_ref(ty)?;
        Ok(reference.namespace == "System" && reference.name == name)
    }

    fn base_is(&self, ty: TypeId, names: &[&str]) -> Result<bool, ModelError> {
        let Some(base) = self.type_declaration(ty)?.and_then(|decl| decl.base_type) else {
            return Ok(false);
        };
        for name in names {
            if self.is_system_type(base, name)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn is_interface(&self, ty: TypeId) -> Result<bool, ModelError> {
        Ok(self.type_declaration(ty)?.is_some_and(|decl| decl.is_interface))
    }

    pub fn is_enum(&self, ty: TypeId) -> Result<bool, ModelError> {
        self.base_is(ty, &["Enum"])
    }

    pub fn is_value_type(&self, ty: TypeId) -> Result<bool, ModelError> {
        if self.is_system_type(ty, "Enum")? {
            return Ok(false);
        }
        self.base_is(ty, &["ValueType"])
    }

    pub fn is_delegate(&self, ty: TypeId) -> Result<bool, ModelError> {
        if self.is_system_type(ty, "MulticastDelegate")? {
            return Ok(false);
        }
        self.base_is(ty, &["MulticastDelegate", "Delegate"])
    }

    pub fn classify(&self, ty: TypeId) -> Result<TypeClass, ModelError> {
        Ok(if self.is_interface(ty)? {
            TypeClass::Interface
        } else if self.is_enum(ty)? {
            TypeClass::Enum
        } else if self.is_value_type(ty)? {
            TypeClass::Struct
        } else if self.is_delegate(ty)? {
            TypeClass::Delegate
        } else {
            TypeClass::Class
        })
    }

    /// Underlying integral type of an enum: the type of its `value__` field.
    pub fn enum_underlying_type(&self, ty: TypeId) -> Result<Option<&'m TypeSig>, ModelError> {
        let Some(decl) = self.type_declaration(ty)? else {
            return Ok(None);
        };
        for &field in &decl.fields {
            let reference = self.model.field_ref(field)?;
            if reference.name == "value__" {
                return Ok(Some(&reference.field_type));
            }
        }
        Ok(None)
    }

    /// A property is static when either accessor is.
    pub fn is_static_property(&self, property: PropertyId) -> Result<bool, ModelError> {
        let Some(decl) = self.model.property_decl(property)? else {
            return Ok(false);
        };
        for accessor in [decl.get_method, decl.set_method].into_iter().flatten() {
            if self.model.method_decl(accessor)?.is_some_and(|m| m.is_static) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// An event is static when its add or remove accessor is.
    pub fn is_static_event(&self, event: EventId) -> Result<bool, ModelError> {
        let Some(decl) = self.model.event_decl(event)? else {
            return Ok(false);
        };
        for accessor in [decl.add_method, decl.remove_method].into_iter().flatten() {
            if self.model.method_decl(accessor)?.is_some_and(|m| m.is_static) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
