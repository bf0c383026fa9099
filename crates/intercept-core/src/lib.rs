//! Core types and definitions for the intercept simulation.
//!
//! This crate defines the vocabulary shared by the engine and its callers:
//! the vector kernel, body states, trajectory logs, engagement config,
//! enums, constants, and error types. It has no simulation logic.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod types;
pub mod vector;
