//! One-shot command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the tip store, writing through an
//! `OutputWriter`.

pub mod add;
pub mod categories;
pub mod export;
pub mod init;
pub mod random;
pub mod search;
pub mod show;
pub mod stats;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use categories::execute as categories;
pub use export::execute as export;
pub use init::execute as init;
pub use random::execute as random;
pub use search::execute as search;
pub use show::execute as show;
pub use stats::execute as stats;
