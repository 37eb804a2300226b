#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod command;
pub mod constants;
pub mod decide;
pub mod error;
pub mod predicates;
pub mod rules;
pub mod scan;
pub mod score;
pub mod state;
pub mod track;
pub mod turn;

#[cfg(test)]
mod fixtures;

pub use command::{format_command, Action};
pub use decide::{decide, evaluate, Rule, Verdict};
pub use error::{CommandError, StateError};
pub use rules::{Budget, RaceRules};
pub use scan::Lookahead;
pub use state::{Car, Cell, GameState, Position, PowerUp, Terrain};
pub use track::Track;
