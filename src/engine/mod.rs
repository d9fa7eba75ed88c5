// This file serves as the root of the `engine` module.
// When another part of the crate (`src/lib.rs`) declares `mod engine;`,
// Rust looks for `src/engine.rs` or `src/engine/mod.rs`. Since this file
// exists, it becomes the entry point for the `engine` module.

// --- 1. Declare sub-modules ---
// Rust will look for files named `bindings.rs`, `error.rs`, `scan.rs`,
// `token.rs`, `compiler.rs`, `scanner.rs`, `matcher.rs`, `renderer.rs` and
// `driver.rs` within `src/engine/`.
mod bindings; // The insertion-order-preserving capture map.
mod compiler; // Parses a pattern string into tokens.
mod driver; // find_all / find_first entry points.
mod error; // Compile-time error type.
mod matcher; // Backtracking matcher over compiled tokens.
mod renderer; // Substitutes placeholders in a replacement template.
mod scan; // Shared flat `:[ ... ]` bracket scanner (compiler + renderer).
mod scanner; // Finds the matching close of a balanced delimiter pair.
mod token; // Token / Hole data model.

// --- 2. Re-export public items ---
// `pub(crate)` items stay internal; only the handful of types and functions
// that make up the crate's public surface are re-exported at the crate
// root through `src/lib.rs`.
pub use bindings::Bindings;
pub use driver::{FindAllOutcome, FindFirstOutcome, find_all, find_first};
pub use error::CompileError;
