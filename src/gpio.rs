use crate::consts;
use crate::error::{self, Error, Result};

/// Direction of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

impl PinMode {
    pub(crate) fn wire_char(self) -> u8 {
        match self {
            PinMode::Input => consts::CMD_MODE_INPUT,
            PinMode::Output => consts::CMD_MODE_OUTPUT,
        }
    }
}

/// Idle-bias configuration of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullMode {
    Up,
    Down,
    None,
}

impl PullMode {
    pub(crate) fn wire_char(self) -> u8 {
        match self {
            PullMode::Up => consts::CMD_PULL_UP,
            PullMode::Down => consts::CMD_PULL_DOWN,
            PullMode::None => consts::CMD_PULL_NONE,
        }
    }
}

/// Logical level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    High,
    Low,
}

impl PinState {
    pub(crate) fn wire_char(self) -> u8 {
        match self {
            PinState::High => consts::CMD_STATE_HIGH,
            PinState::Low => consts::CMD_STATE_LOW,
        }
    }
}

/// The two pin-numbering conventions the board understands.
///
/// `Physical` (mode 0) addresses pins by their position on the 40-pin header
/// (pin 3, pin 40, ...); `Bcm` (mode 1) addresses them by the board-internal
/// BCM GPIO index. The mode selects which column of the pin table is
/// consulted when validating pin arguments.
///
/// Command encoding is only implemented for `Physical`; the board protocol
/// leaves the `Bcm` encoding undefined and operations under it fail with
/// [`Error::Unsupported`] before any byte is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinNumbering {
    #[default]
    Physical,
    Bcm,
}

impl PinNumbering {
    /// Converts a raw firmware mode value (0 or 1) into a numbering mode.
    pub fn from_mode(mode: u8) -> Result<Self> {
        match mode {
            0 => Ok(PinNumbering::Physical),
            1 => Ok(PinNumbering::Bcm),
            mode => Err(Error::InvalidMode { mode }),
        }
    }

    /// Returns the raw firmware mode value (0 or 1).
    #[inline]
    pub fn mode(self) -> u8 {
        match self {
            PinNumbering::Physical => 0,
            PinNumbering::Bcm => 1,
        }
    }

    /// Iterates over every pin number that is valid under this mode.
    pub fn pins(self) -> impl Iterator<Item = u8> {
        consts::PIN_MAP.iter().map(move |&(physical, bcm)| match self {
            PinNumbering::Physical => physical,
            PinNumbering::Bcm => bcm,
        })
    }

    /// Succeeds iff `pin` is a key in the pin table under this mode.
    pub fn validate(self, pin: u8) -> Result<()> {
        if self.pins().any(|p| p == pin) {
            Ok(())
        } else {
            Err(Error::InvalidPin { pin })
        }
    }

    /// Maps a pin number to the single ASCII character the firmware expects
    /// in commands: `'a'` plus the pin's BCM index (header pin 3 is BCM 2,
    /// so it encodes as `'c'`).
    ///
    /// The firmware does not document an encoding for `Bcm` mode, so that
    /// arm fails with [`Error::Unsupported`] rather than guessing one.
    pub(crate) fn encode(self, pin: u8) -> Result<u8> {
        match self {
            PinNumbering::Physical => consts::PIN_MAP
                .iter()
                .find(|&&(physical, _)| physical == pin)
                .map(|&(_, bcm)| consts::PIN_CHAR_BASE + bcm)
                .ok_or(Error::InvalidPin { pin }),
            PinNumbering::Bcm => Err(error::unsupported_bcm_encoding()),
        }
    }
}

/// Option set for [`setup`](crate::GpioClient::setup).
///
/// Every field is independently present-or-absent; an absent field sends
/// nothing to the board, it does not apply a default. Build one with the
/// chained setters:
///
/// ```
/// use rtk_gpio::{PinMode, PinSetup, PinState, PullMode};
///
/// let opts = PinSetup::new()
///     .mode(PinMode::Output)
///     .pull(PullMode::None)
///     .initial_state(PinState::Low);
/// # let _ = opts;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PinSetup {
    pub(crate) mode: Option<PinMode>,
    pub(crate) pull: Option<PullMode>,
    pub(crate) initial_state: Option<PinState>,
}

impl PinSetup {
    /// Creates an empty option set. Passing it to `setup` unchanged sends
    /// nothing to the board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the pin direction to be configured.
    pub fn mode(mut self, mode: PinMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Requests the pull resistor to be configured.
    pub fn pull(mut self, pull: PullMode) -> Self {
        self.pull = Some(pull);
        self
    }

    /// Requests an initial output level, driven after mode and pull.
    pub fn initial_state(mut self, state: PinState) -> Self {
        self.initial_state = Some(state);
        self
    }
}
