//! UI abstraction layer
//!
//! Backend-agnostic interfaces for user input, status output and the cosmetic
//! loading indicator. The interactive loop only talks to these traits.
//!
//! # Core Traits
//!
//! - **`UserInput`** - line prompts
//! - **`OutputWriter`** - status messages with severity levels
//! - **`LoadingHook`** - optional decoration before a tip is displayed
//!
//! `MockInput` and `MockOutput` script and record a session without a terminal.
//!
//! ## Output Messages
//!
//! ```no_run
//! use tipster::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Operation completed!");
//! output.error("Something went wrong");
//! output.warning("Be careful");
//! output.info("Additional info");
//! ```

pub mod input;
pub mod loading;
pub mod mock;
pub mod output;

pub use input::{DialoguerInput, InputError, UserInput};
pub use loading::{LoadingHook, NoAnimation, SpinnerAnimation};
pub use mock::{MockInput, MockOutput};
pub use output::{OutputWriter, StdoutWriter};
