//! # VibeCanvas Core
//!
//! Core types and utilities for VibeCanvas.
//! Provides the error taxonomy, the structured outcome reported by boundary
//! operations, and the constants shared by the canvas crates.

pub mod constants;
pub mod error;
pub mod outcome;

pub use error::{ClipboardError, Error, FileError, ResizeError, Result};
pub use outcome::{OperationOutcome, OutcomeKind};
