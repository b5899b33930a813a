//! Output abstraction layer
//!
//! Status messages go through `OutputWriter` so the interactive loop can print
//! to the terminal or be recorded in tests.

use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use tipster::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Normal message");
/// output.success("Tip #3 added successfully!");
/// output.error("Failed to save the new tip.");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Clear the screen before a fresh view
    fn clear(&self);
}

/// Terminal writer using colored stdout/stderr
pub struct StdoutWriter {
    clear_screen: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer that clears the screen on request
    #[must_use]
    pub const fn new() -> Self {
        Self { clear_screen: true }
    }

    /// Create a writer that never clears the screen
    #[must_use]
    pub const fn without_clearing() -> Self {
        Self { clear_screen: false }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message.red());
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn warning(&self, message: &str) {
        println!("{} {}", "⚠️ ".yellow(), message.yellow());
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn clear(&self) {
        if self.clear_screen {
            // Best effort, a failed clear only leaves old output on screen
            let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
        }
    }
}
