//! Member references and declarations: fields, methods, properties, events.

use smol_str::SmolStr;

use super::expressions::Expression;
use super::ids::{MethodId, TypeId};
use super::statements::BlockStatement;
use super::types::TypeSig;

/// Accessibility of a field or method declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemberVisibility {
    /// Compiler-controlled; never referenced by name.
    PrivateScope,
    #[default]
    Private,
    FamilyAndAssembly,
    Assembly,
    Family,
    FamilyOrAssembly,
    Public,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CallingConvention {
    #[default]
    Default,
    C,
    StdCall,
    ThisCall,
    FastCall,
    VarArg,
}

/// `[Name(arguments)]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomAttribute {
    /// The attribute constructor; its declaring type names the attribute.
    pub constructor: MethodId,
    pub arguments: Vec<Expression>,
}

impl CustomAttribute {
    pub fn new(constructor: MethodId) -> Self {
        Self {
            constructor,
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<Expression>) -> Self {
        self.arguments = arguments;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterDecl {
    pub name: SmolStr,
    pub ty: TypeSig,
    pub attributes: Vec<CustomAttribute>,
}

impl ParameterDecl {
    pub fn new(name: impl Into<SmolStr>, ty: impl Into<TypeSig>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            attributes: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodReturnType {
    pub ty: TypeSig,
    pub attributes: Vec<CustomAttribute>,
}

impl From<TypeSig> for MethodReturnType {
    fn from(ty: TypeSig) -> Self {
        Self {
            ty,
            attributes: Vec::new(),
        }
    }
}

// ============================================================================
// FIELDS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct FieldRef {
    pub name: SmolStr,
    pub declaring_type: TypeId,
    pub field_type: TypeSig,
}

impl FieldRef {
    pub fn new(name: impl Into<SmolStr>, declaring_type: TypeId, field_type: impl Into<TypeSig>) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            field_type: field_type.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldDecl {
    pub visibility: MemberVisibility,
    pub is_static: bool,
    /// Compile-time constant (`const`).
    pub is_literal: bool,
    pub is_read_only: bool,
    pub attributes: Vec<CustomAttribute>,
    pub initializer: Option<Expression>,
}

impl FieldDecl {
    pub fn new(visibility: MemberVisibility) -> Self {
        Self {
            visibility,
            ..Self::default()
        }
    }

    pub fn mark_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn mark_literal(mut self) -> Self {
        self.is_literal = true;
        self.is_static = true;
        self
    }

    pub fn mark_read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    pub fn with_initializer(mut self, initializer: Expression) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

// ============================================================================
// METHODS
// ============================================================================

/// Signature-level identity of a method.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodRef {
    pub name: SmolStr,
    pub declaring_type: TypeId,
    pub return_type: MethodReturnType,
    pub parameters: Vec<ParameterDecl>,
    pub has_this: bool,
    pub explicit_this: bool,
    pub calling_convention: CallingConvention,
    /// Generic parameters of a definition, or arguments of an instantiation.
    pub generic_arguments: Vec<TypeSig>,
    /// The generic template of an instantiation.
    pub generic_method: Option<MethodId>,
}

impl MethodRef {
    /// An instance method with the default calling convention.
    pub fn new(name: impl Into<SmolStr>, declaring_type: TypeId, return_type: impl Into<TypeSig>) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            return_type: MethodReturnType::from(return_type.into()),
            parameters: Vec::new(),
            has_this: true,
            explicit_this: false,
            calling_convention: CallingConvention::Default,
            generic_arguments: Vec::new(),
            generic_method: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterDecl>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_generic_arguments(mut self, arguments: Vec<TypeSig>) -> Self {
        self.generic_arguments = arguments;
        self
    }

    pub fn with_generic_method(mut self, template: MethodId) -> Self {
        self.generic_method = Some(template);
        self
    }

    pub fn with_calling_convention(mut self, convention: CallingConvention) -> Self {
        self.calling_convention = convention;
        self
    }

    /// Drop the implicit `this` argument.
    pub fn without_this(mut self) -> Self {
        self.has_this = false;
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.name == ".ctor" || self.name == ".cctor"
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodDecl {
    pub visibility: MemberVisibility,
    pub is_static: bool,
    pub is_virtual: bool,
    pub is_abstract: bool,
    /// `sealed` on a virtual method.
    pub is_final: bool,
    /// Introduces a new vtable slot (not an override).
    pub is_new_slot: bool,
    pub is_special_name: bool,
    pub attributes: Vec<CustomAttribute>,
    /// Methods this one explicitly implements.
    pub overrides: Vec<MethodId>,
    pub body: Option<BlockStatement>,
}

impl MethodDecl {
    pub fn new(visibility: MemberVisibility) -> Self {
        Self {
            visibility,
            ..Self::default()
        }
    }

    pub fn mark_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// `virtual`: a new slot that derived types may override.
    pub fn mark_virtual(mut self) -> Self {
        self.is_virtual = true;
        self.is_new_slot = true;
        self
    }

    /// `override`: reuses the base slot.
    pub fn mark_override(mut self) -> Self {
        self.is_virtual = true;
        self.is_new_slot = false;
        self
    }

    pub fn mark_abstract(mut self) -> Self {
        self.is_virtual = true;
        self.is_new_slot = true;
        self.is_abstract = true;
        self
    }

    pub fn mark_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn mark_special_name(mut self) -> Self {
        self.is_special_name = true;
        self
    }

    pub fn with_overrides(mut self, overrides: Vec<MethodId>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<CustomAttribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_body(mut self, body: BlockStatement) -> Self {
        self.body = Some(body);
        self
    }
}

// ============================================================================
// PROPERTIES AND EVENTS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRef {
    pub name: SmolStr,
    pub declaring_type: TypeId,
    pub property_type: TypeSig,
    /// Indexer parameters; empty for plain properties.
    pub parameters: Vec<ParameterDecl>,
}

impl PropertyRef {
    pub fn new(name: impl Into<SmolStr>, declaring_type: TypeId, property_type: impl Into<TypeSig>) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            property_type: property_type.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterDecl>) -> Self {
        self.parameters = parameters;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyDecl {
    pub attributes: Vec<CustomAttribute>,
    pub get_method: Option<MethodId>,
    pub set_method: Option<MethodId>,
    pub initializer: Option<Expression>,
}

impl PropertyDecl {
    pub fn new(get_method: Option<MethodId>, set_method: Option<MethodId>) -> Self {
        Self {
            get_method,
            set_method,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventRef {
    pub name: SmolStr,
    pub declaring_type: TypeId,
    pub event_type: TypeSig,
}

impl EventRef {
    pub fn new(name: impl Into<SmolStr>, declaring_type: TypeId, event_type: impl Into<TypeSig>) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            event_type: event_type.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventDecl {
    pub attributes: Vec<CustomAttribute>,
    pub add_method: Option<MethodId>,
    pub remove_method: Option<MethodId>,
    pub invoke_method: Option<MethodId>,
}

impl EventDecl {
    pub fn new(add_method: Option<MethodId>, remove_method: Option<MethodId>) -> Self {
        Self {
            add_method,
            remove_method,
            ..Self::default()
        }
    }

    pub fn with_invoke_method(mut self, invoke: MethodId) -> Self {
        self.invoke_method = Some(invoke);
        self
    }
}
