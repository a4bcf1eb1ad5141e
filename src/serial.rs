//! Serial port opening with the board's default connection parameters.
//!
//! The core driver only needs a duplex byte stream; this module is the one
//! place that knows how an RTk.GPIO board is actually wired up: 230400 baud,
//! 8 data bits, 1 stop bit, no parity, no flow control. The firmware's
//! 4-byte minimum-read hint is not configured here — the driver assembles
//! response frames byte-at-a-time, so it does not rely on it.

use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::error::Result;

/// Baud rate the board firmware runs its UART at.
pub const DEFAULT_BAUD_RATE: u32 = 230_400;

/// Per-read timeout applied to the opened port.
///
/// Short on purpose: a read returning with no data is the expected "no bytes
/// yet" signal for the driver's polling loop, not a failure.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(10);

/// Opens `path` (e.g. `/dev/ttyUSB0`, or a `/dev/serial/by-path/...` entry)
/// with the board's default connection parameters.
///
/// The returned port can be handed straight to
/// [`GpioClient::new`](crate::GpioClient::new).
pub fn open(path: &str) -> Result<Box<dyn SerialPort>> {
    let port = serialport::new(path, DEFAULT_BAUD_RATE)
        .data_bits(DataBits::Eight)
        .stop_bits(StopBits::One)
        .parity(Parity::None)
        .flow_control(FlowControl::None)
        .timeout(DEFAULT_READ_TIMEOUT)
        .open()?;
    log::debug!("Opened serial port {} at {} baud", path, DEFAULT_BAUD_RATE);
    Ok(port)
}
