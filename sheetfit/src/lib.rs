#![doc = document_features::document_features!()]
//! Layout calculator for cutting uniform rectangular products out of stock sheets.
//!
//! The entry point is [`calc::compute`], which evaluates every sheet format of a catalog in
//! both orientations and ranks the results.

/// The layout computation: grid layouts per orientation and the ranking across formats
pub mod calc;

/// Entities of the problem: sheet formats, products, margins and layout results
pub mod entities;

/// Error types shared by the whole library
pub mod error;

/// Geometric primitives
pub mod geometry;

/// Input acquisition, persistence, export and rendering of results
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::{CalcError, CalcResult};
