//! Configuration carried through every encode and decode call.

use crate::Error;
use tracing::debug;

/// Largest length prefix accepted when decoding, unless overridden.
pub const DEFAULT_MAX_LENGTH: usize = 0x79D0;

/// Deepest nesting of structs and hooked types accepted when decoding, unless overridden.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Selects how unsigned integers wider than a byte are written.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Variable-length (varint) encoding.
    #[default]
    Compact,

    /// Big-endian, width of the type.
    Fixed,
}

/// Configuration for a single top-level encode or decode.
///
/// A `Config` is never mutated in place. Nested values that need different settings (for
/// example, enumerations which always use [`Mode::Fixed`]) derive a copy with
/// [`Config::with_mode`] for the nested call only.
///
/// # Examples
///
/// ```
/// use ledger_codec::{Config, Mode, DEFAULT_MAX_LENGTH};
///
/// let cfg = Config::default();
/// assert_eq!(cfg.max_length(), DEFAULT_MAX_LENGTH);
/// assert!(cfg.is_compact());
///
/// let fixed = cfg.with_mode(Mode::Fixed);
/// assert!(!fixed.is_compact());
/// assert!(cfg.is_compact());
///
/// let inner = cfg.nested().unwrap();
/// assert_eq!(inner.max_depth(), cfg.max_depth() - 1);
/// assert!(cfg.with_max_depth(0).nested().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Config {
    /// Upper bound on any decoded length prefix.
    max_length: usize,

    /// Encoding used for unsigned integers.
    mode: Mode,

    /// Remaining nesting levels for decoding.
    max_depth: usize,
}

impl Config {
    /// Creates a new `Config` with the default depth budget.
    pub const fn new(max_length: usize, mode: Mode) -> Self {
        Self {
            max_length,
            mode,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Returns a copy with the given maximum length.
    pub const fn with_max_length(self, max_length: usize) -> Self {
        Self { max_length, ..self }
    }

    /// Returns a copy with the given mode.
    pub const fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy with the given depth budget.
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns true if unsigned integers are varint encoded.
    pub const fn is_compact(&self) -> bool {
        matches!(self.mode, Mode::Compact)
    }

    /// Returns the configuration for decoding one level further down.
    ///
    /// Fails once the depth budget is spent.
    pub fn nested(&self) -> Result<Self, Error> {
        match self.max_depth.checked_sub(1) {
            Some(max_depth) => Ok(Self { max_depth, ..*self }),
            None => {
                debug!("rejected nesting depth");
                Err(Error::InvalidEncoding("nesting", "depth limit exceeded"))
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH, Mode::Compact)
    }
}

impl From<Mode> for Config {
    fn from(mode: Mode) -> Self {
        Self::default().with_mode(mode)
    }
}
