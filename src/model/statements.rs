//! Statement syntax tree.

use smol_str::SmolStr;

use super::expressions::Expression;
use super::kind::StatementKind;
use super::types::TypeSig;

/// A decompiled statement. The variant set is closed.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Block(BlockStatement),
    Expression(ExpressionStatement),
    Goto(GotoStatement),
    Labeled(LabeledStatement),
    Condition(ConditionStatement),
    MethodReturn(MethodReturnStatement),
    For(ForStatement),
    ForEach(ForEachStatement),
    While(WhileStatement),
    Do(DoStatement),
    TryCatchFinally(TryCatchFinallyStatement),
    ThrowException(ThrowExceptionStatement),
    AttachEvent(AttachEventStatement),
    RemoveEvent(RemoveEventStatement),
    Switch(SwitchStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Comment(CommentStatement),
    Using(UsingStatement),
    Lock(LockStatement),
    Fixed(FixedStatement),
    MemoryCopy(MemoryCopyStatement),
    MemoryInitialize(MemoryInitializeStatement),
    DebugBreak(DebugBreakStatement),
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Self::Block(_) => StatementKind::Block,
            Self::Expression(_) => StatementKind::Expression,
            Self::Goto(_) => StatementKind::Goto,
            Self::Labeled(_) => StatementKind::Labeled,
            Self::Condition(_) => StatementKind::Condition,
            Self::MethodReturn(_) => StatementKind::MethodReturn,
            Self::For(_) => StatementKind::For,
            Self::ForEach(_) => StatementKind::ForEach,
            Self::While(_) => StatementKind::While,
            Self::Do(_) => StatementKind::Do,
            Self::TryCatchFinally(_) => StatementKind::TryCatchFinally,
            Self::ThrowException(_) => StatementKind::ThrowException,
            Self::AttachEvent(_) => StatementKind::AttachEvent,
            Self::RemoveEvent(_) => StatementKind::RemoveEvent,
            Self::Switch(_) => StatementKind::Switch,
            Self::Break(_) => StatementKind::Break,
            Self::Continue(_) => StatementKind::Continue,
            Self::Comment(_) => StatementKind::Comment,
            Self::Using(_) => StatementKind::Using,
            Self::Lock(_) => StatementKind::Lock,
            Self::Fixed(_) => StatementKind::Fixed,
            Self::MemoryCopy(_) => StatementKind::MemoryCopy,
            Self::MemoryInitialize(_) => StatementKind::MemoryInitialize,
            Self::DebugBreak(_) => StatementKind::DebugBreak,
        }
    }

    /// `expression;`
    pub fn expression(expression: Expression) -> Self {
        Self::Expression(ExpressionStatement { expression })
    }

    /// `return expression;` / `return;`
    pub fn ret(expression: Option<Expression>) -> Self {
        Self::MethodReturn(MethodReturnStatement { expression })
    }
}

/// An ordered statement sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GotoStatement {
    pub label: SmolStr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabeledStatement {
    pub label: SmolStr,
    pub statement: Option<Box<Statement>>,
}

/// `if`/`else`. An empty `otherwise` block means no `else` branch.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionStatement {
    pub condition: Expression,
    pub then: BlockStatement,
    pub otherwise: BlockStatement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodReturnStatement {
    pub expression: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForStatement {
    pub initializer: Option<Expression>,
    pub condition: Option<Expression>,
    pub increment: Option<Expression>,
    pub body: BlockStatement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForEachStatement {
    pub variable: VariableDecl,
    pub expression: Expression,
    pub body: BlockStatement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: BlockStatement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoStatement {
    pub body: BlockStatement,
    pub condition: Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TryCatchFinallyStatement {
    pub try_block: BlockStatement,
    pub catch_clauses: Vec<CatchClause>,
    pub fault: Option<BlockStatement>,
    pub finally: Option<BlockStatement>,
}

/// `catch (T name) when (condition) { body }`.
///
/// An empty variable name means the exception object is not bound.
#[derive(Clone, Debug, PartialEq)]
pub struct CatchClause {
    pub variable: VariableDecl,
    pub condition: Option<Expression>,
    pub body: BlockStatement,
}

/// `throw expression;` or a rethrow when `expression` is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct ThrowExceptionStatement {
    pub expression: Option<Expression>,
}

/// `event += listener;`
#[derive(Clone, Debug, PartialEq)]
pub struct AttachEventStatement {
    pub event: Expression,
    pub listener: Expression,
}

/// `event -= listener;`
#[derive(Clone, Debug, PartialEq)]
pub struct RemoveEventStatement {
    pub event: Expression,
    pub listener: Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchStatement {
    pub expression: Expression,
    pub cases: Vec<SwitchCase>,
}

/// One `case` arm; `label: None` is the `default` arm.
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchCase {
    pub label: Option<Expression>,
    pub body: BlockStatement,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BreakStatement;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContinueStatement;

#[derive(Clone, Debug, PartialEq)]
pub struct CommentStatement {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UsingStatement {
    pub expression: Expression,
    pub body: BlockStatement,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LockStatement {
    pub expression: Expression,
    pub body: BlockStatement,
}

/// Pins `expression` into `variable` for the duration of `body`.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStatement {
    pub variable: VariableDecl,
    pub expression: Expression,
    pub body: BlockStatement,
}

/// `cpblk`.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryCopyStatement {
    pub destination: Expression,
    pub source: Expression,
    pub length: Expression,
}

/// `initblk`.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryInitializeStatement {
    pub destination: Expression,
    pub value: Expression,
    pub length: Expression,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugBreakStatement;

/// A local variable.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDecl {
    pub name: SmolStr,
    pub ty: TypeSig,
    pub pinned: bool,
}

impl VariableDecl {
    pub fn new(name: impl Into<SmolStr>, ty: impl Into<TypeSig>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            pinned: false,
        }
    }
}
