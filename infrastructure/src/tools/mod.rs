//! Built-in tools
//!
//! Demo tools shipped with toolgate, and the registry that wires them
//! together.

pub mod builtin;
pub mod clock;
pub mod weather;

pub use builtin::builtin_registry;
