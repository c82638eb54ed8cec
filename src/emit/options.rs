//! Emission options.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::model::{ExpressionKind, NodeKind, StatementKind, TypeKind};
use crate::resolve::VisibilityPolicy;

/// Render assembly attributes, references, modules and resources.
pub const SHOW_ASSEMBLY_BODY: &str = "ShowAssemblyBody";
/// Render the namespaces and types of a module.
pub const SHOW_MODULE_BODY: &str = "ShowModuleBody";
/// Render the types of a namespace.
pub const SHOW_NAMESPACE_BODY: &str = "ShowNamespaceBody";
/// Render the members of a type.
pub const SHOW_TYPE_DECLARATION_BODY: &str = "ShowTypeDeclarationBody";
/// Render method and accessor bodies.
pub const SHOW_METHOD_DECLARATION_BODY: &str = "ShowMethodDeclarationBody";
/// Render custom attributes on declarations.
pub const SHOW_CUSTOM_ATTRIBUTES: &str = "ShowCustomAttributes";

/// Node kinds the C-family target renders as degradation markers.
pub fn default_unsupported() -> FxHashSet<NodeKind> {
    [
        NodeKind::Expression(ExpressionKind::AddressOf),
        NodeKind::Expression(ExpressionKind::AddressDereference),
        NodeKind::Expression(ExpressionKind::StackAllocate),
        NodeKind::Expression(ExpressionKind::TypedReferenceCreate),
        NodeKind::Expression(ExpressionKind::TypeOfTypedReference),
        NodeKind::Expression(ExpressionKind::ValueOfTypedReference),
        NodeKind::Expression(ExpressionKind::Snippet),
        NodeKind::Expression(ExpressionKind::FieldOf),
        NodeKind::Expression(ExpressionKind::MethodOf),
        NodeKind::Type(TypeKind::FunctionPointer),
        NodeKind::Statement(StatementKind::MemoryCopy),
        NodeKind::Statement(StatementKind::MemoryInitialize),
        NodeKind::Statement(StatementKind::Fixed),
    ]
    .into_iter()
    .collect()
}

/// Configuration of one rendering request.
///
/// Named boolean flags select summary or full output per structural level
/// (unset means off), an optional [`VisibilityPolicy`] filters types and
/// members, and the unsupported set lists the node kinds rendered as
/// degradation markers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct EmitOptions {
    pub flags: IndexMap<SmolStr, bool>,
    pub visibility: Option<VisibilityPolicy>,
    pub unsupported: FxHashSet<NodeKind>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            flags: IndexMap::new(),
            visibility: None,
            unsupported: default_unsupported(),
        }
    }
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options from a host configuration map.
    pub fn from_config<K, I>(config: I) -> Self
    where
        K: Into<SmolStr>,
        I: IntoIterator<Item = (K, bool)>,
    {
        Self {
            flags: config.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Self::default()
        }
    }

    /// Every body flag on.
    pub fn full() -> Self {
        Self::from_config([
            (SHOW_ASSEMBLY_BODY, true),
            (SHOW_MODULE_BODY, true),
            (SHOW_NAMESPACE_BODY, true),
            (SHOW_TYPE_DECLARATION_BODY, true),
            (SHOW_METHOD_DECLARATION_BODY, true),
            (SHOW_CUSTOM_ATTRIBUTES, true),
        ])
    }

    pub fn with_flag(mut self, name: impl Into<SmolStr>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn with_visibility(mut self, policy: VisibilityPolicy) -> Self {
        self.visibility = Some(policy);
        self
    }

    pub fn visibility(&self) -> Option<&VisibilityPolicy> {
        self.visibility.as_ref()
    }

    /// Replace the unsupported set.
    pub fn with_unsupported(mut self, kinds: impl IntoIterator<Item = NodeKind>) -> Self {
        self.unsupported = kinds.into_iter().collect();
        self
    }

    pub fn supports(&self, kind: impl Into<NodeKind>) -> bool {
        !self.unsupported.contains(&kind.into())
    }
}
