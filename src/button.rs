//! The two digit buttons: debouncing and the tasks that turn presses into digit steps.
//!
//! Each button is wired to ground with the internal pull-up enabled, so a press is a falling
//! edge. Every button owns its own [`Debouncer`]: an edge is accepted only when more than
//! [`DEBOUNCE_WINDOW`] has passed since that same button's last accepted edge. Bounces on
//! one button never swallow a press on the other.
//!
//! See [`spawn_digit_buttons`] for wiring both buttons on the Pico.

#[cfg(not(feature = "host"))]
use core::convert::Infallible;

#[cfg(not(feature = "host"))]
use embassy_executor::Spawner;
#[cfg(not(feature = "host"))]
use embassy_rp::{
    Peri,
    gpio::{Input, Pin, Pull},
};
use embassy_time::{Duration, Instant};
#[cfg(not(feature = "host"))]
use embedded_hal_async::digital::Wait;

use crate::display_state::DisplayState;
use crate::glyph::Digit;
#[cfg(not(feature = "host"))]
use crate::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Minimum time between two accepted edges on the same button.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

// ============================================================================
// DigitButton - which way a button steps the digit
// ============================================================================

/// The role of a button.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum DigitButton {
    /// Steps the digit up, 9 wraps to 0.
    Increment,
    /// Steps the digit down, 0 wraps to 9.
    Decrement,
}

impl DigitButton {
    /// The digit after one press of this button.
    #[must_use]
    pub const fn apply(self, digit: Digit) -> Digit {
        match self {
            Self::Increment => digit.next(),
            Self::Decrement => digit.previous(),
        }
    }
}

// ============================================================================
// Debouncer
// ============================================================================

/// Accepts an edge only if more than `window` has passed since the last accepted one.
///
/// The last-accepted time starts at boot (tick 0), so an edge in the first `window` after
/// boot is treated as bounce.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Debouncer {
    last_accepted: Instant,
    window: Duration,
}

impl Debouncer {
    /// A debouncer with a custom window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            last_accepted: Instant::from_ticks(0),
            window,
        }
    }

    /// Decide whether an edge at `now` is a real press. Accepting it restarts the window.
    ///
    /// Rejected edges leave the window where it was, so a long run of bounces cannot
    /// postpone the next real press indefinitely.
    pub fn accept(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_accepted) > self.window {
            self.last_accepted = now;
            true
        } else {
            false
        }
    }

    /// When the last edge was accepted (tick 0 if none yet).
    #[must_use]
    pub const fn last_accepted(&self) -> Instant {
        self.last_accepted
    }

    /// The debounce window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

// ============================================================================
// DigitButtonInput - one button's edge handler
// ============================================================================

/// Per-button state: its role and its private debouncer.
#[derive(Clone, Copy, Debug)]
pub struct DigitButtonInput {
    button: DigitButton,
    debouncer: Debouncer,
}

impl DigitButtonInput {
    /// A handler with the standard [`DEBOUNCE_WINDOW`].
    #[must_use]
    pub const fn new(button: DigitButton) -> Self {
        Self::with_debouncer(button, Debouncer::new(DEBOUNCE_WINDOW))
    }

    /// A handler with a caller-chosen debouncer.
    #[must_use]
    pub const fn with_debouncer(button: DigitButton, debouncer: Debouncer) -> Self {
        Self { button, debouncer }
    }

    /// Handle a falling edge seen at `now`.
    ///
    /// When the edge passes the debouncer, steps `state` and returns the new digit;
    /// otherwise leaves `state` untouched and returns `None`.
    pub fn on_falling_edge(&mut self, now: Instant, state: &DisplayState) -> Option<Digit> {
        self.debouncer.accept(now).then(|| state.step(self.button))
    }

    /// This handler's role.
    #[must_use]
    pub const fn button(&self) -> DigitButton {
        self.button
    }
}

// ============================================================================
// Background tasks
// ============================================================================

/// Wait for falling edges on `pin` forever, stepping `state` on each accepted press.
///
/// Only returns if waiting on the pin fails, which cannot happen for an infallible pin.
#[cfg(not(feature = "host"))]
pub async fn watch_digit_button<I>(
    pin: &mut I,
    button: DigitButton,
    state: &DisplayState,
) -> Result<Infallible>
where
    I: Wait<Error = Infallible>,
{
    let mut digit_button_input = DigitButtonInput::new(button);
    defmt::info!("{}: watching for presses", button);
    loop {
        pin.wait_for_falling_edge().await?;
        let now = Instant::now();
        match digit_button_input.on_falling_edge(now, state) {
            Some(digit) => defmt::info!("{} pressed: digit is now {}", button, digit.as_u8()),
            None => defmt::trace!("{}: edge ignored as bounce", button),
        }
    }
}

#[cfg(not(feature = "host"))]
#[embassy_executor::task(pool_size = 2)]
async fn digit_button_task(
    mut input: Input<'static>,
    button: DigitButton,
    state: &'static DisplayState,
) -> ! {
    let Err(err) = watch_digit_button(&mut input, button, state).await;
    panic!("{err}");
}

/// Configure both buttons (pulled up, pressed to ground) and spawn a task for each.
///
/// # Errors
///
/// Returns [`Error::TaskSpawn`] if the button tasks are already running.
#[cfg(not(feature = "host"))]
pub fn spawn_digit_buttons(
    increment_pin: Peri<'static, impl Pin>,
    decrement_pin: Peri<'static, impl Pin>,
    state: &'static DisplayState,
    spawner: Spawner,
) -> Result<()> {
    let increment_input = Input::new(increment_pin, Pull::Up);
    let decrement_input = Input::new(decrement_pin, Pull::Up);

    let token = digit_button_task(increment_input, DigitButton::Increment, state);
    spawner.spawn(token).map_err(Error::TaskSpawn)?;
    let token = digit_button_task(decrement_input, DigitButton::Decrement, state);
    spawner.spawn(token).map_err(Error::TaskSpawn)?;
    Ok(())
}
