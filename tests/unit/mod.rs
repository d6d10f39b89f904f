//! Unit tests module
//!
//! Contains focused tests for the individual building blocks.

mod components; // URL decomposition and per-component compilation
mod extraction; // extraction and the query/fragment retry
#[cfg(feature = "cache")]
mod cache; // shared matcher cache
