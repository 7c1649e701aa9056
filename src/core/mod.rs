//! Core application primitives (scan cycle, scan loop)

pub mod runtime;
pub mod scanner;

pub use runtime::*;
pub use scanner::*;
