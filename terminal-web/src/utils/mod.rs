//! Page helpers

pub mod classes;
pub mod constants;
