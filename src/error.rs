use thiserror::Error;

/// Errors that can occur when talking to an RTk.GPIO board.
///
/// This enum covers pin/mode validation, serial transport failures, and
/// malformed response frames from the board firmware.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the underlying byte-stream transport.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Error opening or configuring the serial port.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    /// The requested numbering mode is not one of the two the board defines.
    #[error("{mode} is not a valid board numbering mode (expected 0 or 1)")]
    InvalidMode {
        /// The mode value that was requested.
        mode: u8,
    },
    /// The pin number is not present in the pin table for the active
    /// numbering mode.
    #[error("pin {pin} is not a valid pin for the current numbering mode")]
    InvalidPin {
        /// The pin number that was requested.
        pin: u8,
    },
    /// Operation is not implemented for the active numbering mode.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    /// The board terminated a response frame before it carried enough bytes
    /// to decode a pin state.
    #[error("response frame terminated prematurely ({len} of at least 2 bytes)")]
    PrematureTermination {
        /// Number of bytes that were collected before the terminator.
        len: usize,
    },
    /// The state byte of a response frame was neither `'0'` nor `'1'`.
    #[error("unknown pin state byte 0x{byte:02X} in response frame")]
    UnknownPinState {
        /// The offending byte as received.
        byte: u8,
    },
    /// No complete response frame arrived within the configured read timeout.
    ///
    /// Only produced when a timeout has been set with
    /// [`set_read_timeout`](crate::GpioClient::set_read_timeout); by default
    /// the driver polls indefinitely, as the board firmware expects.
    #[error("timed out waiting for a response frame from the board")]
    ResponseTimeout,
}

/// Result type alias for RTk.GPIO operations.
///
/// This is a convenience alias for `std::result::Result<T, Error>` used
/// throughout the crate to reduce boilerplate.
pub type Result<T> = std::result::Result<T, Error>;

// Helper for the one unimplemented corner of the wire protocol.
pub(crate) fn unsupported_bcm_encoding() -> Error {
    Error::Unsupported(
        "command encoding for BCM numbering (mode 1) is not implemented by the board protocol"
            .to_string(),
    )
}
