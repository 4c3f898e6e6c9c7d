//! Ctrl+C handling for API commands.
//!
//! Responsibilities:
//! - Share one cancellation flag between the signal task and command handlers.
//! - Race an Opsgenie call against that flag (`until_cancelled`).
//! - Define the `Cancelled` error that `main()` turns into exit code 130.
//!
//! Does NOT handle:
//! - Installing the signal handler (done in `main()`).
//! - Aborting the HTTP request itself; the dropped call is simply abandoned.
//!
//! Invariants:
//! - The flag only ever goes from `false` to `true`.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

/// Cloneable handle on the process-wide cancellation flag.
#[derive(Clone, Debug)]
pub struct CancellationToken {
    flag: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        let (flag, _) = watch::channel(false);
        Self {
            flag: Arc::new(flag),
        }
    }
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag and wake every waiter. Calling it again is a no-op.
    pub fn cancel(&self) {
        self.flag.send_if_modified(|cancelled| !std::mem::replace(cancelled, true));
    }

    pub fn is_cancelled(&self) -> bool {
        *self.flag.borrow()
    }

    /// Resolve once the flag is raised.
    pub async fn cancelled(&self) {
        let mut rx = self.flag.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Await `fut`, or give up with [`Cancelled`] if Ctrl+C arrives first.
    pub async fn until_cancelled<F: Future>(&self, fut: F) -> Result<F::Output, Cancelled> {
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(Cancelled),
            out = fut => Ok(out),
        }
    }
}

/// The user pressed Ctrl+C before the call finished.
#[derive(Debug, Clone, Copy, Error)]
#[error("cancelled")]
pub struct Cancelled;

pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Message printed on stderr when a command is interrupted.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
