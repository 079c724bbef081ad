#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;
use core::panic;
use digit_matrix::{
    Result, button,
    display_state::DisplayState,
    led_strip::ws2812::PioWs2812Transmitter,
    led2d::DigitDisplay,
    status_blinker,
};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

// Written by the button tasks, read by the render loop below.
static DISPLAY_STATE: DisplayState = DisplayState::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    defmt::info!("digit counter: starting at {}", DISPLAY_STATE.digit().as_u8());

    // The 5×5 matrix data line is on GPIO 7, fed by PIO0's state machine 0.
    let transmitter = PioWs2812Transmitter::new_pio0(p.PIO0, p.PIN_7);
    let mut digit_display = DigitDisplay::new(transmitter);

    // Both buttons connect their pin to ground when pressed.
    button::spawn_digit_buttons(p.PIN_5, p.PIN_6, &DISPLAY_STATE, spawner)?;

    status_blinker::start(Output::new(p.PIN_13, Level::Low), spawner)?;

    digit_display.run(&DISPLAY_STATE).await
}
