//! Runtime parameter validation against plain, semantic, and union type descriptors.
//!
//! The engine is pure: no IO, no shared state, no logging subscriber of its own.

/// Value model, descriptors, validators, diagnostics sink, and parameter schemas.
pub mod check;
