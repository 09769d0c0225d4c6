//! Deckhand - transport front-panel firmware
//!
//! Main firmware binary for RP2040 boards driving a serial-controlled
//! playback transport from a 16×2 LCD and a five-key analog keypad.
//!
//! Pin assignments (Raspberry Pi Pico):
//!
//! | Signal        | Pin            |
//! |---------------|----------------|
//! | Transport TX  | GPIO0 (UART0)  |
//! | Transport RX  | GPIO1 (UART0)  |
//! | LCD RS        | GPIO8          |
//! | LCD EN        | GPIO9          |
//! | LCD D4..D7    | GPIO10..GPIO13 |
//! | Keypad ladder | GPIO26 (ADC0)  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Delay, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use deckhand_core::{Cycle, PlaybackController};
use deckhand_drivers::{AnalogKeypad, SerialCommandClient};
use deckhand_hal::uart::UartConfig as LinkConfig;

use crate::board::{KeypadAdc, SerialPort};
use crate::lcd::Hd44780;

mod board;
mod config;
mod lcd;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Replies top out at 20 bytes; these only need to cover a few stray ones
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 128]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Deckhand firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Transport link: 9600 8N1
    let link_config = LinkConfig::default();
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = link_config.baudrate;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 128]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let mut link = SerialCommandClient::new(SerialPort::new(uart), Delay, config.timing.settle);

    info!("UART initialized at {} baud", link_config.baudrate);

    // Clear power-on noise before the first query
    match link.drain() {
        Ok(0) => {}
        Ok(n) => debug!("Discarded {} bytes of line noise", n),
        Err(e) => warn!("Initial drain failed: {}", e),
    }

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let ladder = Channel::new_pin(p.PIN_26, Pull::None);
    let keypad = AnalogKeypad::new(KeypadAdc::new(adc, ladder), config.keys);

    let lcd = Hd44780::new(
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        [
            Output::new(p.PIN_10, Level::Low),
            Output::new(p.PIN_11, Level::Low),
            Output::new(p.PIN_12, Level::Low),
            Output::new(p.PIN_13, Level::Low),
        ],
        Delay,
    );

    info!("Keypad and LCD initialized");

    let mut controller = PlaybackController::new(link, keypad, lcd, Delay, config);
    let poll_interval = u64::from(config.timing.poll_interval_ms);

    loop {
        match controller.poll() {
            Cycle::Halted { hold_ms } => {
                info!("Transport powering off, holding {} ms", hold_ms);
                Timer::after_millis(u64::from(hold_ms)).await;
                break;
            }
            Cycle::Waiting => trace!("Waiting for transport"),
            Cycle::Polled => {}
        }
        Timer::after_millis(poll_interval).await;
    }

    // Nothing left to drive once the transport is off
    info!("Halted");
    loop {
        Timer::after_secs(60).await;
    }
}
