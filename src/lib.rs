/// Handles argument parsing and the generation session.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Object model of the network security config document.
pub mod model;

/// User input and interaction handling.
pub mod prompt;

/// Interactive collector producing the document model.
pub mod wizard;

/// Markup tree and serializer.
pub mod xml;
