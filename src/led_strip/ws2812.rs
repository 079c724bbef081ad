//! A [`PixelTransmitter`] that feeds a WS2812 bit-stream program on one PIO state machine.
//!
//! Bytes go into the state machine's TX FIFO one at a time; the program shifts each out MSB
//! first at 800 kHz. When the FIFO is full, [`push_byte`](PixelTransmitter::push_byte)
//! waits, which is the backpressure the renderer relies on.

use embassy_futures::yield_now;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, InterruptHandler, LoadedProgram, Pio, PioPin,
    ShiftConfig, ShiftDirection, StateMachine,
};
use embassy_rp::{Peri, bind_interrupts};
use embassy_time::{Duration, Timer};
use fixed::types::U24F8;

use super::PixelTransmitter;

// PIO cycles spent in each phase of one bit. A 1 is high for T1 + T2, a 0 for T1 only.
const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// WS2812 bit rate in kHz.
const WS2812_KHZ: u32 = 800;

// Autopull after one byte; bytes sit in the top of the FIFO word because we shift left.
const BITS_PER_PUSH: u8 = 8;
const BYTE_SHIFT: u32 = 24;

bind_interrupts!(struct Pio0Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// Byte-at-a-time WS2812 driver for a single PIO state machine.
///
/// See [`PioWs2812Transmitter::new_pio0`] for the common one-strip setup.
pub struct PioWs2812Transmitter<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioWs2812Transmitter<'d, PIO, SM> {
    /// Load the WS2812 program, configure `sm` to drive `pin`, and start it.
    pub fn new(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let program = load_ws2812_program(common);

        let mut cfg = Config::default();
        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let bit_freq = U24F8::from_num(WS2812_KHZ) * CYCLES_PER_BIT;
        cfg.clock_divider = clock_freq / bit_freq;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_PUSH,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_enable(true);
        defmt::debug!("ws2812: state machine {} running", SM);

        Self { sm }
    }
}

impl PioWs2812Transmitter<'static, PIO0, 0> {
    /// Claim PIO0 and its state machine 0 to drive a strip on `pin`.
    #[must_use]
    pub fn new_pio0(pio: Peri<'static, PIO0>, pin: Peri<'static, impl PioPin>) -> Self {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(pio, Pio0Irqs);
        Self::new(&mut common, sm0, pin)
    }
}

impl<PIO: Instance, const SM: usize> PixelTransmitter for PioWs2812Transmitter<'_, PIO, SM> {
    async fn push_byte(&mut self, byte: u8) {
        self.sm.tx().wait_push(u32::from(byte) << BYTE_SHIFT).await;
    }

    async fn latch(&mut self, hold: Duration) {
        // The hold counts from when the FIFO has drained, not from the last push.
        while !self.sm.tx().empty() {
            yield_now().await;
        }
        Timer::after(hold).await;
    }
}

fn load_ws2812_program<'d, PIO: Instance>(common: &mut Common<'d, PIO>) -> LoadedProgram<'d, PIO> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
    common.load_program(&program)
}
