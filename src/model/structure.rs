//! Assemblies, modules, resources and namespaces.

use std::fmt;
use std::path::PathBuf;

use smol_str::SmolStr;

use super::ids::{AssemblyId, AssemblyRefId, MethodId, ModuleId, ModuleRefId, TypeId};
use super::members::CustomAttribute;

/// Four-part assembly version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// Display name in the `Name, Version=…, Culture=…, PublicKeyToken=…` form.
fn display_name(
    name: &str,
    version: Version,
    culture: Option<&str>,
    public_key_token: Option<&str>,
) -> String {
    format!(
        "{}, Version={}, Culture={}, PublicKeyToken={}",
        name,
        version,
        culture.unwrap_or("neutral"),
        public_key_token.unwrap_or("null")
    )
}

// ============================================================================
// ASSEMBLIES
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assembly {
    pub name: SmolStr,
    pub version: Version,
    pub culture: Option<SmolStr>,
    pub public_key_token: Option<SmolStr>,
    /// Where the host loaded the assembly from.
    pub location: Option<PathBuf>,
    pub attributes: Vec<CustomAttribute>,
    pub modules: Vec<ModuleId>,
    pub references: Vec<AssemblyRefId>,
    pub resources: Vec<Resource>,
    pub entry_point: Option<MethodId>,
}

impl Assembly {
    pub fn new(name: impl Into<SmolStr>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_public_key_token(mut self, token: impl Into<SmolStr>) -> Self {
        self.public_key_token = Some(token.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<CustomAttribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn full_name(&self) -> String {
        display_name(
            &self.name,
            self.version,
            self.culture.as_deref(),
            self.public_key_token.as_deref(),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssemblyRef {
    pub name: SmolStr,
    pub version: Version,
    pub culture: Option<SmolStr>,
    pub public_key_token: Option<SmolStr>,
}

impl AssemblyRef {
    pub fn new(name: impl Into<SmolStr>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            ..Self::default()
        }
    }

    pub fn with_public_key_token(mut self, token: impl Into<SmolStr>) -> Self {
        self.public_key_token = Some(token.into());
        self
    }

    pub fn full_name(&self) -> String {
        display_name(
            &self.name,
            self.version,
            self.culture.as_deref(),
            self.public_key_token.as_deref(),
        )
    }
}

// ============================================================================
// MODULES
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    pub name: SmolStr,
    pub assembly: AssemblyId,
    /// On-disk location; the module renderer reads the file size from here.
    pub location: Option<PathBuf>,
    /// Top-level types in declaration order.
    pub types: Vec<TypeId>,
    pub module_references: Vec<ModuleRefId>,
}

impl Module {
    pub fn new(name: impl Into<SmolStr>, assembly: AssemblyId) -> Self {
        Self {
            name: name.into(),
            assembly,
            location: None,
            types: Vec::new(),
            module_references: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRef {
    pub name: SmolStr,
}

impl ModuleRef {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// RESOURCES
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResourceVisibility {
    #[default]
    Public,
    Private,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    /// Stored inside the assembly image.
    Embedded { size: u64 },
    /// Linked file next to the assembly.
    File { file_name: SmolStr },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    pub name: SmolStr,
    pub visibility: ResourceVisibility,
    pub kind: ResourceKind,
}

impl Resource {
    pub fn embedded(name: impl Into<SmolStr>, size: u64) -> Self {
        Self {
            name: name.into(),
            visibility: ResourceVisibility::Public,
            kind: ResourceKind::Embedded { size },
        }
    }

    pub fn file(name: impl Into<SmolStr>, file_name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            visibility: ResourceVisibility::Public,
            kind: ResourceKind::File {
                file_name: file_name.into(),
            },
        }
    }

    pub fn with_visibility(mut self, visibility: ResourceVisibility) -> Self {
        self.visibility = visibility;
        self
    }
}

// ============================================================================
// NAMESPACES
// ============================================================================

/// A module's top-level types sharing one namespace name.
///
/// Namespaces are not stored in the model; the resolver derives them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Namespace {
    /// Dotted name; empty for the global namespace.
    pub name: SmolStr,
    pub types: Vec<TypeId>,
}

impl Namespace {
    pub fn new(name: impl Into<SmolStr>, types: Vec<TypeId>) -> Self {
        Self {
            name: name.into(),
            types,
        }
    }

    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }
}
