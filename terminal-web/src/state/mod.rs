//! Reactive state shared across the terminal view

pub mod terminal;
