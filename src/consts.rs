//! Internal constants: the pin table, wire characters, and frame limits.

/// Connector-pin to board-GPIO map.
///
/// Each entry is `(physical header pin, BCM GPIO index)`. The left column is
/// the key under numbering mode 0, the right column under mode 1. The board
/// firmware addresses pins by the BCM index regardless of mode.
pub(crate) const PIN_MAP: [(u8, u8); 28] = [
    (3, 2),
    (5, 3),
    (7, 4),
    (8, 14),
    (10, 15),
    (11, 17),
    (12, 18),
    (13, 27),
    (15, 22),
    (16, 23),
    (18, 24),
    (19, 10),
    (21, 9),
    (22, 25),
    (23, 11),
    (24, 8),
    (26, 7),
    (27, 0),
    (28, 1),
    (29, 5),
    (31, 6),
    (32, 12),
    (33, 13),
    (35, 19),
    (36, 16),
    (37, 26),
    (38, 20),
    (40, 21),
];

// --- Command characters ---
// A command is the encoded pin character followed by exactly one of these.
pub(crate) const CMD_INPUT_REQUEST: u8 = b'?';
pub(crate) const CMD_STATE_HIGH: u8 = b'1';
pub(crate) const CMD_STATE_LOW: u8 = b'0';
pub(crate) const CMD_MODE_INPUT: u8 = b'I';
pub(crate) const CMD_MODE_OUTPUT: u8 = b'O';
pub(crate) const CMD_PULL_UP: u8 = b'U';
pub(crate) const CMD_PULL_DOWN: u8 = b'D';
pub(crate) const CMD_PULL_NONE: u8 = b'N';

// Pin characters start at 'a' for BCM index 0.
pub(crate) const PIN_CHAR_BASE: u8 = b'a';

// --- Response framing ---
/// The board replies to an input request with at most this many bytes.
pub(crate) const FRAME_MAX_BYTES: usize = 4;
/// A newline before [`FRAME_MAX_BYTES`] terminates the frame early.
pub(crate) const FRAME_TERMINATOR: u8 = b'\n';
/// Delay between polls when the transport has no bytes for us yet.
pub(crate) const READ_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(1);
