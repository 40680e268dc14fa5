//! Tempus Core Domain
//!
//! Pure domain values for the tempus clock library.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod values;

// Re-export commonly used types at crate root
pub use values::Timestamp;
