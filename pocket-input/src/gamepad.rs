//! Shared gamepad state, background poller and wait-for-press

use embassy_time::{Duration, Instant, Ticker, Timer};
use portable_atomic::{AtomicU32, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::button::{Button, ButtonState};
use crate::debounce::Debouncer;
use crate::source::RawInput;

/// Interval between checks in [`wait_for_button_press`]
pub const WAIT_POLL_PERIOD: Duration = Duration::from_millis(10);

/// Poller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollConfig {
    /// Sampling period in milliseconds
    pub period_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self { period_ms: 10 }
    }
}

/// Debounced button state shared between the poller and its readers
///
/// The poller is the only writer. Meant to live in a `static`.
pub struct Gamepad {
    state: AtomicU32,
}

impl Gamepad {
    /// Nothing pressed
    pub const fn new() -> Self {
        Self {
            state: AtomicU32::new(0),
        }
    }

    /// Current debounced state
    pub fn state(&self) -> ButtonState {
        ButtonState::from_bits(self.state.load(Ordering::Acquire))
    }

    /// Check if a button is currently pressed
    pub fn is_pressed(&self, button: Button) -> bool {
        self.state().is_pressed(button)
    }

    /// Publish a new debounced state
    pub fn publish(&self, state: ButtonState) {
        self.state.store(state.bits(), Ordering::Release);
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw source plus its debouncer
pub struct InputPoller<R> {
    source: R,
    debouncer: Debouncer,
}

impl<R: RawInput> InputPoller<R> {
    /// Poll `source` with a fresh debouncer
    pub fn new(source: R) -> Self {
        Self {
            source,
            debouncer: Debouncer::new(),
        }
    }

    /// Sample once, debounce and publish
    pub fn poll_once(&mut self, gamepad: &Gamepad) -> ButtonState {
        let raw = self.source.read_raw();
        let state = self.debouncer.update(raw);
        if state != gamepad.state() {
            trace!("gamepad state {=u32:#x}", state.bits());
        }
        gamepad.publish(state);
        state
    }

    /// Raw source
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }
}

/// Background input loop, never returns
///
/// Samples the source every `config.period_ms`, debounces and publishes the
/// result to `gamepad`.
pub async fn poll_input<R: RawInput>(source: R, gamepad: &Gamepad, config: PollConfig) {
    info!("input poller started, period {} ms", config.period_ms);

    let mut poller = InputPoller::new(source);
    let mut ticker = Ticker::every(Duration::from_millis(config.period_ms));

    loop {
        poller.poll_once(gamepad);
        ticker.next().await;
    }
}

/// Wait for a button to go from released to pressed
///
/// Buttons already held when the wait starts are not reported until they are
/// released and pressed again. If several buttons go down in the same poll
/// the lowest-index one wins. Returns `None` once `timeout` has elapsed;
/// without a timeout waits forever.
pub async fn wait_for_button_press(gamepad: &Gamepad, timeout: Option<Duration>) -> Option<Button> {
    let deadline = timeout.map(|t| Instant::now() + t);
    let mut previous = gamepad.state();

    loop {
        let state = gamepad.state();
        if let Some(button) = state.pressed_since(previous).first() {
            debug!("button {} pressed", button.index());
            return Some(button);
        }

        if deadline.is_some_and(|d| Instant::now() > d) {
            return None;
        }

        previous = state;
        Timer::after(WAIT_POLL_PERIOD).await;
    }
}
