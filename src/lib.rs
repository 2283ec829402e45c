//! Pokedex CLI Library
//!
//! Exposes the response cache, API client, REPL and supporting modules for
//! the binary and for integration tests.

pub mod api;
pub mod cache;
pub mod catch;
pub mod cli;
pub mod logging;
pub mod pokedex;
pub mod repl;
