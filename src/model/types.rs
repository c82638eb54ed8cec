//! Type references, type declarations and type-system shapes.

use smol_str::SmolStr;

use super::ids::{AssemblyRefId, EventId, FieldId, MethodId, ModuleId, PropertyId, TypeId};
use super::kind::TypeKind;
use super::members::{CallingConvention, CustomAttribute};

// ============================================================================
// OWNERSHIP
// ============================================================================

/// The immediate owner of a type reference.
///
/// Following owners always ends at a module (types defined in a loaded
/// assembly) or an assembly reference (external types).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Nested type: owned by another type.
    Type(TypeId),
    /// Top-level type defined in a loaded module.
    Module(ModuleId),
    /// Top-level type resolved through an assembly reference.
    Assembly(AssemblyRefId),
}

// ============================================================================
// TYPE REFERENCE
// ============================================================================

/// Signature-level identity of a type.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRef {
    /// Metadata name, without namespace or generic arguments.
    pub name: SmolStr,
    /// Namespace; empty for nested types and the global namespace.
    pub namespace: SmolStr,
    pub owner: Owner,
    /// Generic parameters of a definition, or arguments of an instantiation.
    pub generic_arguments: Vec<TypeSig>,
    /// The generic template of an instantiation (`List<int>` → `List<T>`).
    pub generic_type: Option<TypeId>,
}

impl TypeRef {
    pub fn new(name: impl Into<SmolStr>, owner: Owner) -> Self {
        Self {
            name: name.into(),
            namespace: SmolStr::default(),
            owner,
            generic_arguments: Vec::new(),
            generic_type: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<SmolStr>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_generic_arguments(mut self, arguments: Vec<TypeSig>) -> Self {
        self.generic_arguments = arguments;
        self
    }

    pub fn with_generic_type(mut self, template: TypeId) -> Self {
        self.generic_type = Some(template);
        self
    }

    /// Number of generic arguments.
    pub fn generic_arity(&self) -> usize {
        self.generic_arguments.len()
    }
}

// ============================================================================
// TYPE DECLARATION
// ============================================================================

/// Accessibility of a type declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeVisibility {
    /// Top-level, not exported from its assembly.
    #[default]
    Private,
    Public,
    NestedPublic,
    NestedPrivate,
    NestedFamily,
    NestedAssembly,
    NestedFamilyAndAssembly,
    NestedFamilyOrAssembly,
}

/// Full declaration of a type defined in a loaded module.
///
/// Member lists hold arena ids in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeDecl {
    pub visibility: TypeVisibility,
    pub is_interface: bool,
    pub is_abstract: bool,
    pub is_sealed: bool,
    pub base_type: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
    pub attributes: Vec<CustomAttribute>,
    pub nested_types: Vec<TypeId>,
    pub fields: Vec<FieldId>,
    pub methods: Vec<MethodId>,
    pub properties: Vec<PropertyId>,
    pub events: Vec<EventId>,
}

impl TypeDecl {
    pub fn new(visibility: TypeVisibility) -> Self {
        Self {
            visibility,
            ..Self::default()
        }
    }

    pub fn with_base_type(mut self, base: TypeId) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn with_interfaces(mut self, interfaces: Vec<TypeId>) -> Self {
        self.interfaces = interfaces;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<CustomAttribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn mark_interface(mut self) -> Self {
        self.is_interface = true;
        self.is_abstract = true;
        self
    }

    pub fn mark_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn mark_sealed(mut self) -> Self {
        self.is_sealed = true;
        self
    }
}

// ============================================================================
// TYPE-SYSTEM SHAPES
// ============================================================================

/// A type as it appears in signatures and expressions.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeSig {
    /// A (possibly generic-instantiated) type reference.
    Named(TypeId),
    Array(ArrayType),
    Pointer(PointerType),
    /// By-reference (`ref`/`out`) type.
    Reference(ReferenceType),
    GenericParameter(GenericParameter),
    OptionalModifier(ModifierType),
    RequiredModifier(ModifierType),
    FunctionPointer(FunctionPointer),
}

impl TypeSig {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Named(_) => TypeKind::Named,
            Self::Array(_) => TypeKind::Array,
            Self::Pointer(_) => TypeKind::Pointer,
            Self::Reference(_) => TypeKind::Reference,
            Self::GenericParameter(_) => TypeKind::GenericParameter,
            Self::OptionalModifier(_) => TypeKind::OptionalModifier,
            Self::RequiredModifier(_) => TypeKind::RequiredModifier,
            Self::FunctionPointer(_) => TypeKind::FunctionPointer,
        }
    }

    /// Single-dimensional array of `element`.
    pub fn array(element: TypeSig) -> Self {
        Self::Array(ArrayType {
            element: Box::new(element),
            rank: 1,
        })
    }

    pub fn pointer(element: TypeSig) -> Self {
        Self::Pointer(PointerType {
            element: Box::new(element),
        })
    }

    pub fn by_ref(element: TypeSig) -> Self {
        Self::Reference(ReferenceType {
            element: Box::new(element),
        })
    }

    /// Generic parameter of a type (`!0`).
    pub fn type_parameter(name: impl Into<SmolStr>, position: u32) -> Self {
        Self::GenericParameter(GenericParameter {
            name: name.into(),
            position,
            owner: GenericOwner::Type,
        })
    }

    /// Generic parameter of a method (`!!0`).
    pub fn method_parameter(name: impl Into<SmolStr>, position: u32) -> Self {
        Self::GenericParameter(GenericParameter {
            name: name.into(),
            position,
            owner: GenericOwner::Method,
        })
    }

    /// The named type id, if this is a plain named reference.
    pub fn as_named(&self) -> Option<TypeId> {
        match self {
            Self::Named(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<TypeId> for TypeSig {
    fn from(id: TypeId) -> Self {
        Self::Named(id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayType {
    pub element: Box<TypeSig>,
    /// Number of dimensions; 1 for vectors.
    pub rank: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerType {
    pub element: Box<TypeSig>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceType {
    pub element: Box<TypeSig>,
}

/// Whether a generic parameter belongs to a type or a method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericOwner {
    Type,
    Method,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GenericParameter {
    pub name: SmolStr,
    pub position: u32,
    pub owner: GenericOwner,
}

/// `modopt(M) T` / `modreq(M) T`.
#[derive(Clone, Debug, PartialEq)]
pub struct ModifierType {
    pub modifier: TypeId,
    pub element: Box<TypeSig>,
}

/// Unmanaged or managed function pointer signature.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionPointer {
    pub return_type: Box<TypeSig>,
    pub parameters: Vec<TypeSig>,
    pub calling_convention: CallingConvention,
}
