use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCELERATION_BONUS, BOOST_SPEED, EARLY_ACCELERATION_SPEED, FINISH_BLOCK, FIX_DAMAGE,
    LANE_COUNT, MAX_SPEED, TEMPO_SPEED,
};
use crate::state::Car;

/// Extra squares covered when accelerating from `speed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelerationStep {
    pub speed: i32,
    pub bonus: i32,
}

/// How far ahead a lookahead reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    /// The car's current speed.
    CurrentSpeed,
    /// Current speed plus the acceleration bonus for that speed.
    Accelerate,
    /// A full boost run.
    Boost,
    /// Top unboosted speed, independent of the car.
    MaxSpeed,
}

/// Race parameters the decision code is evaluated against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceRules {
    pub lane_count: i32,
    pub max_speed: i32,
    pub boost_speed: i32,
    pub finish_block: i32,
    pub acceleration: Vec<AccelerationStep>,
    pub fix_damage: i32,
    pub early_acceleration_speed: i32,
    pub tempo_speed: i32,
}

impl Default for RaceRules {
    fn default() -> Self {
        Self {
            lane_count: LANE_COUNT,
            max_speed: MAX_SPEED,
            boost_speed: BOOST_SPEED,
            finish_block: FINISH_BLOCK,
            acceleration: ACCELERATION_BONUS
                .iter()
                .map(|&(speed, bonus)| AccelerationStep { speed, bonus })
                .collect(),
            fix_damage: FIX_DAMAGE,
            early_acceleration_speed: EARLY_ACCELERATION_SPEED,
            tempo_speed: TEMPO_SPEED,
        }
    }
}

impl RaceRules {
    pub fn acceleration_bonus(&self, speed: i32) -> i32 {
        self.acceleration
            .iter()
            .find(|step| step.speed == speed)
            .map_or(0, |step| step.bonus)
    }

    /// Number of blocks past the car's own block a lookahead covers.
    pub fn budget(&self, budget: Budget, car: &Car) -> i32 {
        match budget {
            Budget::CurrentSpeed => car.speed,
            Budget::Accelerate => car.speed + self.acceleration_bonus(car.speed),
            Budget::Boost => self.boost_speed,
            Budget::MaxSpeed => self.max_speed,
        }
    }

    #[inline]
    pub fn at_boost_speed(&self, car: &Car) -> bool {
        car.speed == self.boost_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::car;

    #[test]
    fn accelerate_budget_follows_bonus_table() {
        let rules = RaceRules::default();
        let expected = [(0, 0), (3, 5), (5, 6), (6, 8), (8, 9), (9, 9), (15, 15)];
        for (speed, budget) in expected {
            assert_eq!(
                rules.budget(Budget::Accelerate, &car(1, 0, speed)),
                budget,
                "speed={speed}"
            );
        }
    }

    #[test]
    fn fixed_budgets_ignore_car_speed() {
        let rules = RaceRules::default();
        let slow = car(1, 0, 3);
        assert_eq!(rules.budget(Budget::Boost, &slow), 15);
        assert_eq!(rules.budget(Budget::MaxSpeed, &slow), 9);
        assert_eq!(rules.budget(Budget::CurrentSpeed, &slow), 3);
    }

    #[test]
    fn partial_rules_json_keeps_defaults() {
        let rules: RaceRules =
            serde_json::from_str(r#"{"finish_block": 800, "boost_speed": 12}"#).unwrap();
        assert_eq!(rules.finish_block, 800);
        assert_eq!(rules.boost_speed, 12);
        assert_eq!(rules.max_speed, MAX_SPEED);
        assert_eq!(rules.acceleration_bonus(6), 2);
    }
}
