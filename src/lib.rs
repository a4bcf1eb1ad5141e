//! # rtk-gpio
//!
//! A Rust crate for controlling an RTk.GPIO serial expansion board: a 28-pin
//! GPIO header driven over a plain byte-oriented serial link by a small ASCII
//! wire protocol.
//!
//! This crate uses the `serialport` crate for cross-platform serial
//! communication, but the driver itself is generic over any duplex byte
//! stream (`std::io::Read + std::io::Write`).
//!
//! ## Features
//!
//! *   Opening the board with its default connection parameters
//!     (`GpioClient::open`, [`serial::open`]).
//! *   Pin numbering by physical header position (mode 0) or BCM GPIO index
//!     (mode 1), selected with `set_mode`.
//! *   Pin configuration (`setup`) with independently optional direction,
//!     pull resistor, and initial level — absent options send nothing.
//! *   Driving a pin (`output`) and reading a pin (`input`), with response
//!     frames reassembled byte-at-a-time from slow or non-blocking links.
//! *   Best-effort teardown (`close`) driving every pin to a safe low
//!     output state.
//! *   Optional response timeout (`set_read_timeout`) for callers that
//!     cannot afford to wait on an unresponsive board.
//!
//! ## Protocol & limitations
//!
//! *   Commands are two ASCII bytes: a pin character (`'a'` plus the pin's
//!     BCM index) followed by an operation character (`1`/`0` level, `?`
//!     read request, `I`/`O` direction, `U`/`D`/`N` pull).
//! *   The board answers a read request with a frame of up to 4 bytes; only
//!     the second byte carries the pin level. A newline terminates a frame
//!     early and is discarded, which can truncate a response — the driver
//!     preserves this firmware behavior as-is (see `input`).
//! *   Command encoding under BCM numbering (mode 1) is **not defined** by
//!     the firmware protocol; operations in that mode fail with
//!     [`Error::Unsupported`] instead of guessing wire bytes.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use rtk_gpio::{GpioClient, PinMode, PinSetup, PinState, PullMode, Result};
//! use std::{thread, time::Duration};
//!
//! fn main() -> Result<()> {
//!     // Optional: Initialize logging
//!     // env_logger::init();
//!
//!     // Look in /dev/serial/by-path (or use /dev/ttyUSB0 etc.) for your board.
//!     let mut client = GpioClient::open("/dev/ttyUSB0")?;
//!
//!     // Physical header pin 40 as an output, driven low.
//!     client.setup(
//!         40,
//!         PinSetup::new()
//!             .mode(PinMode::Output)
//!             .pull(PullMode::None)
//!             .initial_state(PinState::Low),
//!     )?;
//!
//!     client.output(40, PinState::High)?;
//!     thread::sleep(Duration::from_millis(200));
//!     client.output(40, PinState::Low)?;
//!
//!     // Read it back.
//!     let state = client.input(40)?;
//!     println!("pin 40 is {:?}", state);
//!
//!     // Drive everything to a safe state before dropping the port.
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Pin Mapping
//!
//! The pin table mirrors the Raspberry Pi 40-pin header: physical pins 3-40
//! (the 28 GPIO-capable positions) map to BCM GPIO 0-27. Mode 0 addresses
//! pins by the physical number, mode 1 by the BCM number. Use
//! [`PinNumbering::pins`] to enumerate the valid pins for a mode.
//!
//! ## License
//!
//! This project is licensed under the MIT license.

use std::io::{ErrorKind, Read, Write};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use serialport::SerialPort;

// Make internal modules private, re-export public types
mod consts;
mod error;
pub mod gpio; // Keep gpio public for its enums/structs
pub mod serial;

pub use error::{Error, Result};
pub use gpio::{PinMode, PinNumbering, PinSetup, PinState, PullMode};
// Re-export the board's connection default for callers rolling their own port.
pub use serial::DEFAULT_BAUD_RATE;

// --- Device Handle ---
/// A client for one RTk.GPIO board on one serial link.
///
/// Owns the underlying port exclusively for its lifetime; use
/// [`into_inner`](GpioClient::into_inner) to get it back. One operation is a
/// complete synchronous request/response exchange — there is never more than
/// one outstanding command.
///
/// **Note:** This handle is not thread-safe; share it behind a lock if you
/// must.
#[derive(Debug)]
pub struct GpioClient<P> {
    port: P,
    numbering: PinNumbering,
    read_timeout: Option<Duration>,
}

impl GpioClient<Box<dyn SerialPort>> {
    /// Opens the board at `path` with the default connection parameters
    /// (230400 baud, 8N1) and wraps it in a client.
    pub fn open(path: &str) -> Result<Self> {
        Ok(Self::new(serial::open(path)?))
    }
}

impl<P: Read + Write> GpioClient<P> {
    /// Wraps an already-open duplex byte stream.
    ///
    /// The numbering mode starts as [`PinNumbering::Physical`] (mode 0) and
    /// no response timeout is set, matching the board's reference clients.
    pub fn new(port: P) -> Self {
        Self {
            port,
            numbering: PinNumbering::default(),
            read_timeout: None,
        }
    }

    /// Selects the pin-numbering mode by its raw firmware value.
    ///
    /// Only `0` (physical header numbering) and `1` (BCM numbering) are
    /// accepted; anything else fails with [`Error::InvalidMode`] and leaves
    /// the current mode unchanged.
    pub fn set_mode(&mut self, mode: u8) -> Result<()> {
        self.numbering = PinNumbering::from_mode(mode)?;
        debug!("Numbering mode set to {:?}", self.numbering);
        Ok(())
    }

    /// Returns the active pin-numbering mode.
    pub fn numbering(&self) -> PinNumbering {
        self.numbering
    }

    /// Bounds the total time [`input`](GpioClient::input) waits for a
    /// response frame.
    ///
    /// `None` (the default) restores the original behavior of polling until
    /// the board answers, however long that takes. With `Some(d)`, a frame
    /// that has not completed within `d` fails with
    /// [`Error::ResponseTimeout`].
    pub fn set_read_timeout(&mut self, timeout: Option<Duration>) {
        self.read_timeout = timeout;
    }

    /// Consumes the client and returns the underlying port.
    ///
    /// No teardown is performed; call [`close`](GpioClient::close) first if
    /// the pins should be left in a safe state.
    pub fn into_inner(self) -> P {
        self.port
    }

    /// Configures a pin.
    ///
    /// For each option present in `setup` — direction, then pull, then
    /// initial level, in that order — one command is sent to the board; an
    /// absent option sends nothing at all. The first failure aborts the
    /// remaining options.
    pub fn setup(&mut self, pin: u8, setup: PinSetup) -> Result<()> {
        self.numbering.validate(pin)?;
        if let Some(mode) = setup.mode {
            let pin_char = self.numbering.encode(pin)?;
            self.write_command(&[pin_char, mode.wire_char()])?;
        }
        if let Some(pull) = setup.pull {
            let pin_char = self.numbering.encode(pin)?;
            self.write_command(&[pin_char, pull.wire_char()])?;
        }
        if let Some(state) = setup.initial_state {
            self.output(pin, state)?;
        }
        Ok(())
    }

    /// Drives a pin high or low.
    ///
    /// The pin character and the level character go out as two separate
    /// writes, as the firmware expects. Transport errors propagate verbatim;
    /// nothing is retried.
    pub fn output(&mut self, pin: u8, state: PinState) -> Result<()> {
        self.numbering.validate(pin)?;
        let pin_char = self.numbering.encode(pin)?;
        self.write_command(&[pin_char])?;
        self.write_command(&[state.wire_char()])?;
        Ok(())
    }

    /// Reads the current level of a pin.
    ///
    /// Sends `<pin>?` and reassembles the board's response frame byte by
    /// byte: up to 4 bytes, or fewer if a newline arrives first. The newline
    /// is discarded, never buffered — a firmware quirk this driver preserves
    /// even though it can truncate a frame below the 2 bytes needed to
    /// decode it (in which case the call fails with
    /// [`Error::PrematureTermination`]). Only the second byte of the frame
    /// carries the level.
    pub fn input(&mut self, pin: u8) -> Result<PinState> {
        self.numbering.validate(pin)?;
        let pin_char = self.numbering.encode(pin)?;
        self.write_command(&[pin_char, consts::CMD_INPUT_REQUEST])?;
        let payload = self.read_frame()?;
        let state = decode_frame(&payload)?;
        debug!("Read pin {} -> {:?}", pin, state);
        Ok(state)
    }

    /// Best-effort teardown: drives every pin of the current numbering mode
    /// to a safe state (output, no pull, low).
    ///
    /// The firmware has no explicit close command, so this sweeps the whole
    /// pin table instead. Individual failures are logged and ignored —
    /// teardown itself never fails.
    pub fn close(&mut self) {
        debug!("Closing: driving all pins to output/no-pull/low");
        let safe_state = PinSetup::new()
            .mode(PinMode::Output)
            .pull(PullMode::None)
            .initial_state(PinState::Low);
        for pin in self.numbering.pins() {
            if let Err(e) = self.setup(pin, safe_state) {
                warn!("Teardown of pin {} failed (ignored): {}", pin, e);
            }
        }
    }

    fn write_command(&mut self, bytes: &[u8]) -> Result<()> {
        trace!("Writing command bytes: {:02X?}", bytes);
        self.port.write_all(bytes)?;
        Ok(())
    }

    // Accumulates one response frame. Zero-byte reads (and their
    // non-blocking I/O equivalents) mean "no data yet" and are polled with a
    // short sleep; every other I/O error aborts.
    fn read_frame(&mut self) -> Result<Vec<u8>> {
        let deadline = self.read_timeout.map(|t| Instant::now() + t);
        let mut payload = Vec::with_capacity(consts::FRAME_MAX_BYTES);
        while payload.len() < consts::FRAME_MAX_BYTES {
            let mut byte = [0u8; 1];
            match self.port.read(&mut byte) {
                Ok(0) => {}
                Ok(_) => {
                    if byte[0] == consts::FRAME_TERMINATOR {
                        trace!("Frame terminated by newline after {} bytes", payload.len());
                        break;
                    }
                    payload.push(byte[0]);
                    continue;
                }
                Err(e)
                    if matches!(
                        e.kind(),
                        ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted
                    ) => {}
                Err(e) => return Err(e.into()),
            }
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    return Err(Error::ResponseTimeout);
                }
            }
            thread::sleep(consts::READ_POLL_INTERVAL);
        }
        trace!("Assembled frame: {:02X?}", payload);
        Ok(payload)
    }
}

// The frame reserves up to 4 bytes but only the second carries the level;
// bytes past it are not interpreted.
fn decode_frame(payload: &[u8]) -> Result<PinState> {
    if payload.len() < 2 {
        return Err(Error::PrematureTermination {
            len: payload.len(),
        });
    }
    match payload[1] {
        consts::CMD_STATE_LOW => Ok(PinState::Low),
        consts::CMD_STATE_HIGH => Ok(PinState::High),
        byte => Err(Error::UnknownPinState { byte }),
    }
}
