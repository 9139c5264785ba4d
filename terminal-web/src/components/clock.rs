//! Live UTC clock

use leptos::prelude::*;
use lib_terminal::clock::{ClockDisplay as Clock, SystemTimeSource};
use lib_terminal::terminal_config;
use std::rc::Rc;

use crate::services::GlooScheduler;

#[component]
pub fn ClockDisplay() -> impl IntoView {
    let (time, set_time) = signal(String::new());

    let clock = Clock::mount(
        &GlooScheduler,
        terminal_config().clock_tick(),
        Rc::new(SystemTimeSource),
        move |value| set_time.set(value.to_string()),
    );
    set_time.set(clock.value());

    // Dropping the clock clears its interval.
    let clock = StoredValue::new_local(clock);
    on_cleanup(move || clock.dispose());

    view! { <span class="clock tone-info">{time}</span> }
}
