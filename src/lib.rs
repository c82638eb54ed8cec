//! # ilview-base
//!
//! Core library for rendering decompiled .NET program models as C-family
//! source text.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! emit      → Emitter: renders nodes, degradation, breadcrumbs
//!   ↓
//! format    → Formatter trait, plain-text and styled sinks
//!   ↓
//! visit     → Visitor trait, per-kind dispatch, walk functions
//!   ↓
//! resolve   → Names, member ordering, visibility policy, overrides
//!   ↓
//! model     → Ids, arenas, declarations, statements, expressions
//! ```

// ============================================================================
// MODULES (dependency order: model → resolve → visit → format → emit)
// ============================================================================

/// Program model: id-addressed arenas and the code tree
pub mod model;

/// Resolution queries over a model: names, ordering, visibility
pub mod resolve;

/// Traversal: the Visitor trait and its walk functions
pub mod visit;

/// Output sinks: indentation, styling, references
pub mod format;

/// Source emission built on the visitor
pub mod emit;

// Re-export commonly needed items
pub use emit::{EmitOptions, Emitter, RenderError, Root, render_many, render_to_string};
pub use format::{FormatOptions, Formatter, StyledFormatter, TextFormatter};
pub use model::{Model, ModelBuilder, ModelError};
pub use resolve::{Resolver, VisibilityPolicy};
pub use visit::Visitor;
