//! Application constants

pub const HOME_ROUTE: &str = "/";
pub const TERMINAL_ROUTE: &str = "/terminal";

// Browsing context for the wallet install page
pub const NEW_TAB_TARGET: &str = "_blank";

pub const BACK_LABEL: &str = "Back to Home";
