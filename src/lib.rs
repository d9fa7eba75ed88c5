// --- 1. Declare the `engine` module ---
// The `mod engine;` statement tells the Rust compiler to look for and include
// the `engine` module. Based on Rust's module discovery rules, it will find
// `src/engine/mod.rs` (because a directory `src/engine/` exists) and treat
// that file as the root of the `engine` module.
mod engine;

// --- 2. Re-export the public API ---
// Everything an external crate needs — the two entry points, the outcome
// enums, the bindings map, and the compile-time error type — is re-exported
// here so callers write `structmatch::find_all(...)` instead of the more
// verbose `structmatch::engine::driver::find_all(...)`.
pub use engine::{
    Bindings, CompileError, FindAllOutcome, FindFirstOutcome, find_all, find_first,
};
