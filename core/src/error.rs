use alloc::string::String;
use core::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    EmptyWorldMap,
    LaneCountMismatch { expected: usize, found: usize },
    MissingStartCell,
    LaneOutOfRange {
        car: &'static str,
        lane: i32,
        lane_count: i32,
    },
    UnknownTerrain { code: u8 },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWorldMap => write!(f, "world map has no lanes"),
            Self::LaneCountMismatch { expected, found } => {
                write!(f, "world map lane count mismatch: expected {expected}, got {found}")
            }
            Self::MissingStartCell => write!(f, "world map has no cell at lane 1, offset 0"),
            Self::LaneOutOfRange {
                car,
                lane,
                lane_count,
            } => write!(f, "{car} lane out of range: {lane} (allowed 1..={lane_count})"),
            Self::UnknownTerrain { code } => write!(f, "unknown surface object code: {code}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StateError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand { word: String },
    MissingArgument { command: &'static str },
    InvalidNumber { value: String },
    TrailingInput { extra: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand { word } => write!(f, "unknown command: {word}"),
            Self::MissingArgument { command } => write!(f, "{command} is missing an argument"),
            Self::InvalidNumber { value } => write!(f, "invalid command argument: {value}"),
            Self::TrailingInput { extra } => write!(f, "unexpected trailing input: {extra}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}
