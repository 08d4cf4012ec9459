//! Core abstractions shared by both pipeline stages
//!
//! This module defines the class model, the access taxonomy, errors, and
//! logging infrastructure used throughout the extraction and diagram
//! pipeline.

mod error;
pub mod logging;
mod types;

pub use error::*;
pub use logging::*;
pub use types::*;
