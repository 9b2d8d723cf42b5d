//! Common utilities and types shared across Call Grid components.

#![warn(clippy::pedantic)]

/// Module for common data types
pub mod types;
