//! Variant tags for the closed node sets.
//!
//! Every [`Statement`](super::Statement), [`Expression`](super::Expression)
//! and [`TypeSig`](super::TypeSig) reports one of these tags. The emitter keys
//! its unsupported-construct set on [`NodeKind`].

use std::fmt;

macro_rules! kind_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Display name of the variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

kind_enum!(
    /// Tag of a [`Statement`](super::Statement) variant.
    StatementKind {
        Block => "BlockStatement",
        Expression => "ExpressionStatement",
        Goto => "GotoStatement",
        Labeled => "LabeledStatement",
        Condition => "ConditionStatement",
        MethodReturn => "MethodReturnStatement",
        For => "ForStatement",
        ForEach => "ForEachStatement",
        While => "WhileStatement",
        Do => "DoStatement",
        TryCatchFinally => "TryCatchFinallyStatement",
        ThrowException => "ThrowExceptionStatement",
        AttachEvent => "AttachEventStatement",
        RemoveEvent => "RemoveEventStatement",
        Switch => "SwitchStatement",
        Break => "BreakStatement",
        Continue => "ContinueStatement",
        Comment => "CommentStatement",
        Using => "UsingStatement",
        Lock => "LockStatement",
        Fixed => "FixedStatement",
        MemoryCopy => "MemoryCopyStatement",
        MemoryInitialize => "MemoryInitializeStatement",
        DebugBreak => "DebugBreakStatement",
    }
);

kind_enum!(
    /// Tag of an [`Expression`](super::Expression) variant.
    ExpressionKind {
        Literal => "LiteralExpression",
        ArgumentReference => "ArgumentReferenceExpression",
        VariableReference => "VariableReferenceExpression",
        VariableDeclaration => "VariableDeclarationExpression",
        ThisReference => "ThisReferenceExpression",
        BaseReference => "BaseReferenceExpression",
        TypeReference => "TypeReferenceExpression",
        FieldReference => "FieldReferenceExpression",
        PropertyReference => "PropertyReferenceExpression",
        PropertyIndexer => "PropertyIndexerExpression",
        EventReference => "EventReferenceExpression",
        MethodReference => "MethodReferenceExpression",
        MethodInvoke => "MethodInvokeExpression",
        DelegateInvoke => "DelegateInvokeExpression",
        ObjectCreate => "ObjectCreateExpression",
        ArrayCreate => "ArrayCreateExpression",
        ArrayIndexer => "ArrayIndexerExpression",
        Block => "BlockExpression",
        MemberInitializer => "MemberInitializerExpression",
        Assign => "AssignExpression",
        Binary => "BinaryExpression",
        Unary => "UnaryExpression",
        Cast => "CastExpression",
        TryCast => "TryCastExpression",
        CanCast => "CanCastExpression",
        Condition => "ConditionExpression",
        NullCoalescing => "NullCoalescingExpression",
        TypeOf => "TypeOfExpression",
        SizeOf => "SizeOfExpression",
        GenericDefault => "GenericDefaultExpression",
        DelegateCreate => "DelegateCreateExpression",
        AnonymousMethod => "AnonymousMethodExpression",
        Lambda => "LambdaExpression",
        AddressOut => "AddressOutExpression",
        AddressReference => "AddressReferenceExpression",
        AddressOf => "AddressOfExpression",
        AddressDereference => "AddressDereferenceExpression",
        ArgumentList => "ArgumentListExpression",
        StackAllocate => "StackAllocateExpression",
        TypedReferenceCreate => "TypedReferenceCreateExpression",
        TypeOfTypedReference => "TypeOfTypedReferenceExpression",
        ValueOfTypedReference => "ValueOfTypedReferenceExpression",
        Snippet => "SnippetExpression",
        FieldOf => "FieldOfExpression",
        MethodOf => "MethodOfExpression",
    }
);

kind_enum!(
    /// Tag of a [`TypeSig`](super::TypeSig) shape.
    TypeKind {
        Named => "TypeReference",
        Array => "ArrayType",
        Pointer => "PointerType",
        Reference => "ReferenceType",
        GenericParameter => "GenericParameter",
        OptionalModifier => "OptionalModifier",
        RequiredModifier => "RequiredModifier",
        FunctionPointer => "FunctionPointer",
    }
);

kind_enum!(
    /// Kind of an arena entity, used in dangling-id diagnostics.
    EntityKind {
        Assembly => "assembly",
        AssemblyReference => "assembly reference",
        Module => "module",
        ModuleReference => "module reference",
        Type => "type",
        Field => "field",
        Method => "method",
        Property => "property",
        Event => "event",
    }
);

/// Tag of any syntax node that can be rendered or degraded on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Statement(StatementKind),
    Expression(ExpressionKind),
    Type(TypeKind),
}

impl NodeKind {
    /// Display name of the node kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Statement(kind) => kind.as_str(),
            Self::Expression(kind) => kind.as_str(),
            Self::Type(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StatementKind> for NodeKind {
    fn from(kind: StatementKind) -> Self {
        Self::Statement(kind)
    }
}

impl From<ExpressionKind> for NodeKind {
    fn from(kind: ExpressionKind) -> Self {
        Self::Expression(kind)
    }
}

impl From<TypeKind> for NodeKind {
    fn from(kind: TypeKind) -> Self {
        Self::Type(kind)
    }
}
