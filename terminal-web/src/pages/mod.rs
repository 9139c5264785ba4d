//! Page modules

pub mod home;
pub mod terminal;

pub use home::HomePage;
pub use terminal::TerminalPage;
