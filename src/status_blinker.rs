//! A heartbeat LED that toggles every [`BLINK_PERIOD`], independent of the digit display.
//!
//! [`StatusBlinker`] owns its pin and its on/off level and nothing else; it never touches
//! [`DisplayState`](crate::display_state::DisplayState). On the Pico, [`start`] spawns a task
//! that sleeps [`BLINK_PERIOD`] between ticks, so a late tick just delays the next toggle.

#[cfg(not(feature = "host"))]
use embassy_executor::Spawner;
#[cfg(not(feature = "host"))]
use embassy_rp::gpio::Output;
use embassy_time::Duration;
#[cfg(not(feature = "host"))]
use embassy_time::Timer;
use embedded_hal::digital::{OutputPin, PinState};

#[cfg(not(feature = "host"))]
use crate::{Error, Result};

/// Time between toggles (5 Hz toggling, 2.5 Hz blinking).
pub const BLINK_PERIOD: Duration = Duration::from_millis(200);

/// Toggles one output line on every [`tick`](Self::tick).
///
/// The first tick drives the line low, the next high, and so on.
pub struct StatusBlinker<P: OutputPin> {
    pin: P,
    level: bool,
}

impl<P: OutputPin> StatusBlinker<P> {
    /// Take ownership of `pin`. Nothing is driven until the first tick.
    #[must_use]
    pub const fn new(pin: P) -> Self {
        Self { pin, level: false }
    }

    /// Drive the pending level onto the pin, then flip it for next time.
    ///
    /// Returns the level that was just driven (`true` for high).
    ///
    /// # Errors
    ///
    /// Returns the pin's error if it could not be driven; the level is not flipped then.
    pub fn tick(&mut self) -> core::result::Result<bool, P::Error> {
        let driven = self.level;
        self.pin.set_state(PinState::from(driven))?;
        self.level = !driven;
        Ok(driven)
    }

    /// The level the next tick will drive.
    #[must_use]
    pub const fn level(&self) -> bool {
        self.level
    }

    /// Give the pin back.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

#[cfg(not(feature = "host"))]
#[embassy_executor::task]
async fn status_blink_task(pin: Output<'static>) -> ! {
    let mut status_blinker = StatusBlinker::new(pin);
    defmt::info!("status blinker: toggling every {} ms", BLINK_PERIOD.as_millis());
    loop {
        Timer::after(BLINK_PERIOD).await;
        // An embassy-rp output never fails to drive.
        let Ok(level) = status_blinker.tick();
        defmt::trace!("status blinker: {}", level);
    }
}

/// Spawn the heartbeat task on `pin`.
///
/// # Errors
///
/// Returns [`Error::TaskSpawn`] if the heartbeat task is already running.
#[cfg(not(feature = "host"))]
pub fn start(pin: Output<'static>, spawner: Spawner) -> Result<()> {
    spawner
        .spawn(status_blink_task(pin))
        .map_err(Error::TaskSpawn)
}
