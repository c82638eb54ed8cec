#[path = "helpers/mod.rs"]
mod helpers;

#[path = "resolve/mod.rs"]
mod resolve;

#[path = "visit/mod.rs"]
mod visit;

#[path = "emit/mod.rs"]
mod emit;
