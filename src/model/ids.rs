//! Typed arena indices into a [`Model`](super::Model).

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Create an id from a raw arena index.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// The raw arena index.
            pub const fn raw(self) -> u32 {
                self.0
            }

            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }

            pub(crate) fn from_index(index: usize) -> Self {
                Self(index as u32)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $label, self.0)
            }
        }
    };
}

arena_id!(
    /// A loaded assembly.
    AssemblyId,
    "assembly"
);
arena_id!(
    /// A reference to an assembly by name (possibly not loaded).
    AssemblyRefId,
    "assembly-ref"
);
arena_id!(
    /// A module of a loaded assembly.
    ModuleId,
    "module"
);
arena_id!(
    /// A reference to an unmanaged or external module.
    ModuleRefId,
    "module-ref"
);
arena_id!(
    /// A type reference, optionally backed by a declaration.
    TypeId,
    "type"
);
arena_id!(
    /// A field reference, optionally backed by a declaration.
    FieldId,
    "field"
);
arena_id!(
    /// A method reference, optionally backed by a declaration.
    MethodId,
    "method"
);
arena_id!(
    /// A property reference, optionally backed by a declaration.
    PropertyId,
    "property"
);
arena_id!(
    /// An event reference, optionally backed by a declaration.
    EventId,
    "event"
);

/// The cross-reference target of a rendered span.
///
/// Hosts use it to implement hyperlink navigation; the plain-text formatter
/// ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceTarget {
    Assembly(AssemblyId),
    AssemblyReference(AssemblyRefId),
    Module(ModuleId),
    ModuleReference(ModuleRefId),
    Type(TypeId),
    Field(FieldId),
    Method(MethodId),
    Property(PropertyId),
    Event(EventId),
}

impl From<TypeId> for ReferenceTarget {
    fn from(id: TypeId) -> Self {
        Self::Type(id)
    }
}

impl From<FieldId> for ReferenceTarget {
    fn from(id: FieldId) -> Self {
        Self::Field(id)
    }
}

impl From<MethodId> for ReferenceTarget {
    fn from(id: MethodId) -> Self {
        Self::Method(id)
    }
}

impl From<PropertyId> for ReferenceTarget {
    fn from(id: PropertyId) -> Self {
        Self::Property(id)
    }
}

impl From<EventId> for ReferenceTarget {
    fn from(id: EventId) -> Self {
        Self::Event(id)
    }
}
