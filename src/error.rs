//! Error types.
//!
//! Two failure classes exist: a malformed time token ([`ParseError`]) and
//! an unusable pool or run configuration ([`ConfigError`]). Both are fatal
//! for the run that produced them. [`TimetableError`] wraps either one.

use std::fmt;

/// Why a time token could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token was empty.
    Empty,
    /// The leading day symbol is not part of the weekday alphabet.
    UnknownDay,
    /// The period part is missing or not a number.
    InvalidPeriod,
    /// A period of `0` was given; periods start at 1.
    ZeroPeriod,
    /// A range whose end precedes its start, e.g. `Mon5-3`.
    ReversedRange,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseErrorKind::Empty => "empty token",
            ParseErrorKind::UnknownDay => "unknown day symbol",
            ParseErrorKind::InvalidPeriod => "malformed period",
            ParseErrorKind::ZeroPeriod => "period must be positive",
            ParseErrorKind::ReversedRange => "range end precedes range start",
        };
        f.write_str(msg)
    }
}

/// A time token that could not be decoded into slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    token: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(token: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            token: token.into(),
            kind,
        }
    }

    /// The offending token, verbatim.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time token {:?}: {}", self.token, self.kind)
    }
}

impl std::error::Error for ParseError {}

/// A course pool or optimizer configuration that cannot be run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A course has no scheduling options, so no gene can be drawn for it.
    EmptyCourse(String),
    /// The same course key was supplied twice.
    DuplicateCourse(String),
    /// Parent selection needs at least two individuals.
    PopulationTooSmall(usize),
    /// Mutation rate outside `[0, 1]`.
    InvalidMutationRate(f64),
    /// Non-positive or non-finite temperature, or a stop temperature that
    /// is not below the initial one.
    InvalidTemperature { initial: f64, stop: f64 },
    /// Cooling rate outside the open interval `(0, 1)`.
    InvalidCoolingRate(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyCourse(key) => {
                write!(f, "course {key:?} has no scheduling options")
            }
            ConfigError::DuplicateCourse(key) => write!(f, "course {key:?} appears twice"),
            ConfigError::PopulationTooSmall(n) => {
                write!(f, "population_size must be at least 2, got {n}")
            }
            ConfigError::InvalidMutationRate(rate) => {
                write!(f, "mutation_rate must be in [0, 1], got {rate}")
            }
            ConfigError::InvalidTemperature { initial, stop } => write!(
                f,
                "temperatures must be positive with stop < initial, got initial={initial}, stop={stop}"
            ),
            ConfigError::InvalidCoolingRate(rate) => {
                write!(f, "cooling_rate must be in (0, 1), got {rate}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Any error produced while building a pool or running an optimizer.
#[derive(Debug, Clone, PartialEq)]
pub enum TimetableError {
    Parse(ParseError),
    Config(ConfigError),
}

impl fmt::Display for TimetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimetableError::Parse(err) => write!(f, "{}", err),
            TimetableError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for TimetableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimetableError::Parse(err) => Some(err),
            TimetableError::Config(err) => Some(err),
        }
    }
}

impl From<ParseError> for TimetableError {
    fn from(err: ParseError) -> Self {
        TimetableError::Parse(err)
    }
}

impl From<ConfigError> for TimetableError {
    fn from(err: ConfigError) -> Self {
        TimetableError::Config(err)
    }
}
