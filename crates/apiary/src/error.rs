//! Error types for Apiary operations.
//!
//! This module provides the main error type [`ApiaryError`] which wraps the
//! error conditions that can occur while loading poll results and computing
//! a swarm layout, plus the narrower [`LayoutError`] produced by the dodge
//! engine itself.

use std::io;

use thiserror::Error;

/// Precondition violations reported by the dodge engine.
///
/// The engine is defined for all finite inputs and a positive separation;
/// anything else is rejected up front rather than silently producing `NaN`
/// offsets.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The separation (circle diameter plus padding) must be a positive
    /// finite number; packing is undefined otherwise.
    #[error("separation must be positive and finite, got {separation}")]
    InvalidSeparation { separation: f64 },

    /// A position handed to the engine was `NaN` or infinite. Callers are
    /// expected to filter these out, the way the swarm engine does.
    #[error("position at index {index} is not finite")]
    NonFiniteValue { index: usize },
}

/// The main error type for Apiary operations.
#[derive(Debug, Error)]
pub enum ApiaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
