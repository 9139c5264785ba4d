//! Terminal session context

use leptos::prelude::*;
use lib_terminal::{TerminalConfig, TerminalSession};

/// Session state provided to every component of the terminal view
#[derive(Clone, Copy)]
pub struct TerminalContext {
    pub session: RwSignal<TerminalSession>,
}

impl TerminalContext {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            session: RwSignal::new(TerminalSession::new(config)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.session.with(|session| session.is_loaded())
    }

    pub fn mark_loaded(&self) {
        self.session.update(|session| {
            if session.mark_loaded() {
                log::debug!("Terminal entrance animation started");
            }
        });
    }

    pub fn set_connecting(&self, connecting: bool) {
        self.session.update(|session| session.set_connecting(connecting));
    }
}

pub fn provide_terminal_context(config: &TerminalConfig) -> TerminalContext {
    let context = TerminalContext::new(config);
    provide_context(context);
    context
}

pub fn use_terminal_context() -> TerminalContext {
    expect_context::<TerminalContext>()
}
