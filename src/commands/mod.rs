//! Command implementations for the sidediff binary.

/// Compare two files and render the result
pub mod compare;
