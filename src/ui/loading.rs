//! Cosmetic loading indicator shown before a tip
//!
//! Purely decorative and bounded in time. Nothing in the store, sampler or
//! query code depends on it; the app calls it after a tip has been chosen and
//! before it is rendered.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::thread;
use std::time::Duration;

const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Display hook run before a tip is shown
pub trait LoadingHook {
    fn before_tip(&self);
}

/// Does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAnimation;

impl LoadingHook for NoAnimation {
    fn before_tip(&self) {}
}

/// Spinner shown for a fixed short duration
#[derive(Debug, Clone, Copy)]
pub struct SpinnerAnimation {
    duration: Duration,
}

impl SpinnerAnimation {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Default for SpinnerAnimation {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl LoadingHook for SpinnerAnimation {
    fn before_tip(&self) {
        if !std::io::stdout().is_terminal() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg:.cyan}") {
            pb.set_style(style.tick_strings(&SPINNER_CHARS));
        }
        pb.set_message("Loading tip...");
        pb.enable_steady_tick(Duration::from_millis(80));
        thread::sleep(self.duration);
        pb.finish_and_clear();
    }
}

/// Pick the hook for the given setting
#[must_use]
pub fn hook(enabled: bool) -> Box<dyn LoadingHook> {
    if enabled {
        Box::new(SpinnerAnimation::default())
    } else {
        Box::new(NoAnimation)
    }
}
