//! User input abstraction layer
//!
//! The interactive loop reads through `UserInput` so it can be driven by a
//! terminal line editor (dialoguer) or by scripted input in tests.

use std::io::{self, BufRead, IsTerminal, Write};

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use tipster::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
/// let title = input.prompt_text("Title").unwrap();
/// if title.is_empty() {
///     println!("Cancelled");
/// }
/// ```
pub trait UserInput {
    /// Prompt for one line of text
    ///
    /// Blank answers are allowed and returned as an empty string. Surrounding
    /// whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// - `InputError::Interrupted` if the user pressed Ctrl+C at the prompt
    /// - `InputError::Io` if reading failed
    fn prompt_text(&self, prompt: &str) -> Result<String>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The prompt was interrupted (Ctrl+C)
    #[error("Input interrupted")]
    Interrupted,

    /// Input stream closed
    #[error("Input closed")]
    Closed,
}

impl InputError {
    fn from_dialoguer(err: dialoguer::Error) -> Self {
        let dialoguer::Error::IO(io_err) = err;
        match io_err.kind() {
            io::ErrorKind::Interrupted => Self::Interrupted,
            io::ErrorKind::UnexpectedEof => Self::Closed,
            _ => Self::Io(io_err),
        }
    }

    /// Whether this error should end the session gracefully rather than as a fault
    #[must_use]
    pub const fn is_graceful_exit(&self) -> bool {
        matches!(self, Self::Interrupted | Self::Closed)
    }
}

/// Terminal line input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str) -> Result<String> {
        use dialoguer::Input;

        if !io::stdin().is_terminal() {
            return read_piped_line(prompt);
        }

        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(InputError::from_dialoguer)
    }
}

/// Plain line read for non-interactive stdin, where end of input must be detectable
fn read_piped_line(prompt: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}: ")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(InputError::Closed);
    }
    Ok(line.trim().to_string())
}
