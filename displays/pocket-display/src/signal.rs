//! Transfer completion signal
//!
//! Bridges the panel's interrupt-context "colour transfer done" callback to
//! the task running the frame loop. The flag is binary: releasing it twice
//! before it is consumed still yields a single completion.
//!
//! Both callback shapes of the HAL ([`IoTransferDone`], [`DpiTransferDone`])
//! are implemented here and funnel into [`CompletionSignal::release`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use pocket_hal::{DpiTransferDone, DpiTransferEvent, IoTransferDone, IoTransferEvent};

/// Binary completion flag shared between the panel interrupt and the frame loop
///
/// Meant to live in a `static` so the callback registration gets a
/// `'static` reference:
///
/// ```ignore
/// static LCD_DONE: CompletionSignal = CompletionSignal::new();
/// ```
pub struct CompletionSignal {
    inner: Signal<CriticalSectionRawMutex, ()>,
}

impl CompletionSignal {
    /// Create a signal in the pending state
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    /// Mark the outstanding transfer as done
    ///
    /// Non-blocking, safe from interrupt context.
    pub fn release(&self) {
        self.inner.signal(());
    }

    /// Wait until released, then clear
    pub async fn consume(&self) {
        self.inner.wait().await;
    }

    /// Clear and return `true` if released, without waiting
    pub fn try_consume(&self) -> bool {
        self.inner.try_take().is_some()
    }

    /// Check if released and not yet consumed
    pub fn is_signaled(&self) -> bool {
        self.inner.signaled()
    }

    /// Drop any pending release
    pub fn reset(&self) {
        self.inner.reset();
    }
}

impl Default for CompletionSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl IoTransferDone for CompletionSignal {
    fn on_color_trans_done(&self, _event: &IoTransferEvent) -> bool {
        self.release();
        false
    }
}

impl DpiTransferDone for CompletionSignal {
    fn on_color_trans_done(&self, _event: &DpiTransferEvent) -> bool {
        self.release();
        false
    }
}
