//! Race constants - match the Overdrive game engine's defaults.
//!
//! These seed `RaceRules::default()`; the decision code reads them through a
//! `RaceRules` value so tests and config files can vary them.

// Track
pub const LANE_COUNT: i32 = 4;
pub const FINISH_BLOCK: i32 = 1500;

// Speed states
pub const SPEED_STATE_1: i32 = 3;
pub const INITIAL_SPEED: i32 = 5;
pub const SPEED_STATE_2: i32 = 6;
pub const SPEED_STATE_3: i32 = 8;
pub const MAX_SPEED: i32 = 9;
pub const BOOST_SPEED: i32 = 15;

// Squares gained on top of the current speed when accelerating from that speed
pub const ACCELERATION_BONUS: [(i32, i32); 4] = [
    (SPEED_STATE_1, 2),
    (SPEED_STATE_2, 2),
    (INITIAL_SPEED, 1),
    (SPEED_STATE_3, 1),
];

// Cascade thresholds
pub const FIX_DAMAGE: i32 = 2;
pub const EARLY_ACCELERATION_SPEED: i32 = SPEED_STATE_1;
pub const TEMPO_SPEED: i32 = SPEED_STATE_3;

// Power-up heuristics
pub const EMP_TARGET_MIN_SPEED: i32 = INITIAL_SPEED;
pub const OIL_DROP_RANGE: i32 = 2;
pub const LIZARD_SCORE_THRESHOLD: i32 = -2;
pub const TWEET_LEAD_SLOW: i32 = 4; // opponent at <= SPEED_STATE_1 is expected to accelerate
pub const TWEET_LEAD: i32 = 1;

// Lane score deltas
pub const SCORE_MUD: i32 = -2;
pub const SCORE_OIL_SPILL: i32 = -1;
pub const SCORE_WALL: i32 = -5;
pub const SCORE_BOOST: i32 = 2;
pub const SCORE_TWEET: i32 = 1;
pub const SCORE_EMP_TRAILING: i32 = 2;
