//! Failure escalation policy.
//!
//! The original deployment of this client is a polling daemon: the only
//! well-understood benign rejection is "nothing new since the last
//! checkpoint". Anything else (expired token, quota, bad parameter) means
//! continuing would corrupt downstream state, so the production policy
//! logs the rejection and terminates the process — once, no matter how
//! many in-flight calls fail at the same time.
//!
//! The policy is injected into [`crate::client::WeiboClient`] so tests and
//! embedders can substitute a non-terminating one.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ApiError;

/// Decides what happens to API rejections the dispatcher does not swallow.
pub trait FailurePolicy: Send + Sync {
    fn escalate(&self, error: &ApiError);
}

/// One-shot guard with process lifetime.
///
/// `trip()` returns `true` for exactly one caller, regardless of how many
/// threads race it; it never resets.
#[derive(Debug, Default)]
pub struct OnceLatch {
    fired: AtomicBool,
}

impl OnceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to trip the latch. Returns `true` only on the first call.
    pub fn trip(&self) -> bool {
        self.fired
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn is_tripped(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

/// Production policy: log the rejection and exit the process.
///
/// The first escalation wins the latch and terminates with a non-zero
/// status; later ones only log, since the process is already on its way
/// out.
#[derive(Debug, Default)]
pub struct ExitPolicy {
    latch: OnceLatch,
}

impl ExitPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FailurePolicy for ExitPolicy {
    fn escalate(&self, error: &ApiError) {
        let msg = format!("{} {}", error.message, error.request);
        if self.latch.trip() {
            tracing::error!("fatal error: {msg}");
            std::process::exit(1);
        }
        tracing::error!("fatal error (already exiting): {msg}");
    }
}
