//! Actions and their game command encoding.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::CommandError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Accelerate,
    Decelerate,
    TurnLeft,
    TurnRight,
    Fix,
    Boost,
    Lizard,
    Oil,
    Emp,
    Tweet { lane: i32, block: i32 },
    Nothing,
}

impl Action {
    /// Command word without arguments.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Accelerate => "ACCELERATE",
            Self::Decelerate => "DECELERATE",
            Self::TurnLeft => "TURN_LEFT",
            Self::TurnRight => "TURN_RIGHT",
            Self::Fix => "FIX",
            Self::Boost => "USE_BOOST",
            Self::Lizard => "USE_LIZARD",
            Self::Oil => "USE_OIL",
            Self::Emp => "USE_EMP",
            Self::Tweet { .. } => "USE_TWEET",
            Self::Nothing => "NOTHING",
        }
    }

}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tweet { lane, block } => write!(f, "USE_TWEET {lane} {block}"),
            other => f.write_str(other.keyword()),
        }
    }
}

impl FromStr for Action {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let word = words.next().ok_or(CommandError::Empty)?;
        let action = match word {
            "ACCELERATE" => Self::Accelerate,
            "DECELERATE" => Self::Decelerate,
            "TURN_LEFT" => Self::TurnLeft,
            "TURN_RIGHT" => Self::TurnRight,
            "FIX" => Self::Fix,
            "USE_BOOST" => Self::Boost,
            "USE_LIZARD" => Self::Lizard,
            "USE_OIL" => Self::Oil,
            "USE_EMP" => Self::Emp,
            "NOTHING" => Self::Nothing,
            "USE_TWEET" => {
                let lane = parse_argument(words.next(), "USE_TWEET")?;
                let block = parse_argument(words.next(), "USE_TWEET")?;
                Self::Tweet { lane, block }
            }
            _ => {
                return Err(CommandError::UnknownCommand {
                    word: word.to_string(),
                })
            }
        };
        if let Some(extra) = words.next() {
            return Err(CommandError::TrailingInput {
                extra: extra.to_string(),
            });
        }
        Ok(action)
    }
}

fn parse_argument(value: Option<&str>, command: &'static str) -> Result<i32, CommandError> {
    let value = value.ok_or(CommandError::MissingArgument { command })?;
    value.parse::<i32>().map_err(|_| CommandError::InvalidNumber {
        value: value.to_string(),
    })
}

/// Line the game runner expects on stdout for `round`.
pub fn format_command(round: u32, action: &Action) -> String {
    format!("C;{round};{action}")
}
