//! Browser-backed implementations of the terminal core's capabilities

pub mod scheduler;
pub mod wallet;

pub use scheduler::GlooScheduler;
pub use wallet::{detect_providers, BrowserLauncher, InjectedProvider};
