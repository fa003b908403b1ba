//! # segroute-std
//!
//! Standard implementations on top of the segroute trie.
//!
//! This crate provides:
//! - **Value routing**: [`PathRouter`](routing::PathRouter) and its builder
//! - **Routing traits**: [`Router`](routing::Router), [`RouterBuilder`](routing::RouterBuilder)
//! - **Test helpers**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use segroute_core;

// Modules
pub mod routing;
pub mod testing;
