// File: src/success_banner.rs
// Purpose: Transient success banner driven by a cancellable delayed task

use crate::error::FormError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Banner visibility as seen by subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BannerState {
    pub visible: bool,
    /// Number of times the banner has been shown. A revert timer only hides
    /// the window it was started for.
    pub epoch: u64,
}

/// The "registration succeeded" banner.
///
/// `show` makes it visible and (re)starts a single revert timer; at most one
/// timer is pending at any time. Dropping the banner cancels the timer.
/// `show` needs a Tokio runtime for the timer and refuses to run without one.
pub struct SuccessBanner {
    duration: Duration,
    state: Arc<watch::Sender<BannerState>>,
    timer: Option<JoinHandle<()>>,
}

impl SuccessBanner {
    pub fn new(duration: Duration) -> Self {
        let (tx, _rx) = watch::channel(BannerState::default());
        Self {
            duration,
            state: Arc::new(tx),
            timer: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn state(&self) -> BannerState {
        *self.state.borrow()
    }

    /// Receiver that observes every visibility change
    pub fn subscribe(&self) -> watch::Receiver<BannerState> {
        self.state.subscribe()
    }

    /// Shows the banner and restarts the revert timer. Without a Tokio
    /// runtime nothing changes and `FormError::NoRuntime` is returned.
    pub fn show(&mut self) -> Result<(), FormError> {
        let handle = Handle::try_current().map_err(|_| FormError::NoRuntime)?;
        self.cancel_timer();

        let mut epoch = 0;
        self.state.send_modify(|s| {
            s.epoch += 1;
            s.visible = true;
            epoch = s.epoch;
        });

        let state = Arc::clone(&self.state);
        let duration = self.duration;
        self.timer = Some(handle.spawn(async move {
            tokio::time::sleep(duration).await;
            let hidden = state.send_if_modified(|s| {
                if s.epoch == epoch && s.visible {
                    s.visible = false;
                    true
                } else {
                    false
                }
            });
            if hidden {
                debug!(epoch, "success banner expired");
            }
        }));
        Ok(())
    }

    /// Hides the banner right away and cancels the pending timer
    pub fn hide(&mut self) {
        self.cancel_timer();
        self.state.send_if_modified(|s| {
            let was_visible = s.visible;
            s.visible = false;
            was_visible
        });
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for SuccessBanner {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
