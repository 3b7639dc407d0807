//! Cancellable Timed Tasks
//!
//! All simulated asynchrony in the app (assistant replies, chunked uploads,
//! training epochs) runs as a `spawn_local` future that sleeps between steps
//! and polls a [`CancelToken`]. Views cancel their token on cleanup, so a
//! torn-down page can never mutate state from a stale timer.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;

/// Shared cancellation flag for a simulated task.
///
/// Cloning hands out another handle to the same flag. Cancellation is
/// one-way: once set, the token stays cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Running loops observe this between steps.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Await a wall-clock delay without blocking the browser.
pub async fn sleep_ms(ms: u32) {
    TimeoutFuture::new(ms).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_starts_live() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_reaches_all_clones() {
        let token = CancelToken::new();
        let handle = token.clone();
        handle.cancel();
        assert!(token.is_cancelled());
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_cancel_is_sticky() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
