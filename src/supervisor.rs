//! Process supervisor
//!
//! Owns the process-level concerns the interactive session should not know
//! about: the interrupt/terminate signals, the panic hook and the mapping of
//! the final outcome to an exit code.
//!
//! A signal is handled on a dedicated thread. It first takes the store's write
//! guard, so a save that is in progress completes (or fails) atomically before
//! the process exits.

use crate::TipsterError;
use colored::Colorize;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::process::{self, ExitCode};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::thread;

static PANIC_INFO: OnceLock<String> = OnceLock::new();

/// Spawn the signal thread
///
/// On SIGINT or SIGTERM it waits for `write_guard`, runs `on_shutdown` and
/// exits with status 0.
///
/// # Errors
///
/// Returns an I/O error if the signal handlers cannot be registered.
pub fn install_signal_handler<F>(write_guard: Arc<Mutex<()>>, on_shutdown: F) -> io::Result<()>
where
    F: Fn() + Send + 'static,
{
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    thread::Builder::new()
        .name("tipster-signals".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                tracing::info!(signal, "Received termination signal");
                shutdown(&write_guard, &on_shutdown);
                process::exit(0);
            }
        })?;
    Ok(())
}

/// Wait for any in-flight save, then run the shutdown callback
///
/// The guard stays held while the callback runs so no new save can start.
pub fn shutdown(write_guard: &Mutex<()>, on_shutdown: &dyn Fn()) {
    let _guard = write_guard.lock().unwrap_or_else(PoisonError::into_inner);
    tracing::debug!("Write guard acquired, shutting down");
    on_shutdown();
}

/// Record panics in the log instead of letting them print mid-prompt
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let report = info.to_string();
        tracing::error!("Panic: {report}");
        PANIC_INFO.get_or_init(|| report);
    }));
}

/// Run `f`, mapping its outcome to the process exit code
///
/// Errors and panics both exit with status 1.
pub fn run<F>(f: F) -> ExitCode
where
    F: FnOnce() -> Result<(), TipsterError>,
{
    exit_code(panic::catch_unwind(AssertUnwindSafe(f)))
}

fn exit_code(outcome: thread::Result<Result<(), TipsterError>>) -> ExitCode {
    match outcome {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            tracing::error!("Error: {err}");
            eprintln!("{} {err}", "Error:".red().bold());
            ExitCode::FAILURE
        }
        Err(payload) => {
            let message = PANIC_INFO
                .get()
                .cloned()
                .or_else(|| payload.downcast_ref::<&str>().map(ToString::to_string))
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            eprintln!("{} {message}", "Fatal:".red().bold());
            ExitCode::FAILURE
        }
    }
}
