use overdrive_core::{evaluate, Action, GameState, RaceRules};
use tracing::debug;

pub trait RacerBot: Send {
    fn id(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn next_action(&mut self, state: &GameState) -> Action;
}

/// Full decision cascade: repair, dodge, tempo, power-up offense, fallback.
pub struct CascadeBot {
    rules: RaceRules,
}

impl CascadeBot {
    pub fn new(rules: RaceRules) -> Self {
        Self { rules }
    }
}

impl RacerBot for CascadeBot {
    fn id(&self) -> &'static str {
        "cascade"
    }

    fn description(&self) -> &'static str {
        "Prioritized rule cascade with lookahead lane scoring and power-up heuristics."
    }

    fn next_action(&mut self, state: &GameState) -> Action {
        let verdict = evaluate(state, &self.rules);
        debug!(
            round = state.current_round,
            rule = %verdict.rule,
            action = %verdict.action,
            lane = state.player.lane(),
            block = state.player.block(),
            speed = state.player.speed,
            "cascade decision"
        );
        verdict.action
    }
}

/// Baseline that never steers or uses power-ups.
pub struct CruiseBot {
    rules: RaceRules,
}

impl CruiseBot {
    pub fn new(rules: RaceRules) -> Self {
        Self { rules }
    }
}

impl RacerBot for CruiseBot {
    fn id(&self) -> &'static str {
        "cruise"
    }

    fn description(&self) -> &'static str {
        "Baseline: repairs heavy damage, otherwise accelerates straight ahead."
    }

    fn next_action(&mut self, state: &GameState) -> Action {
        if state.player.damage >= self.rules.fix_damage {
            Action::Fix
        } else {
            Action::Accelerate
        }
    }
}

pub fn bot_ids() -> Vec<&'static str> {
    vec!["cascade", "cruise"]
}

pub fn describe_bots() -> Vec<(&'static str, &'static str)> {
    let rules = RaceRules::default();
    bot_ids()
        .into_iter()
        .filter_map(|id| create_bot(id, &rules))
        .map(|bot| (bot.id(), bot.description()))
        .collect()
}

pub fn create_bot(id: &str, rules: &RaceRules) -> Option<Box<dyn RacerBot>> {
    match id {
        "cascade" => Some(Box::new(CascadeBot::new(rules.clone()))),
        "cruise" => Some(Box::new(CruiseBot::new(rules.clone()))),
        _ => None,
    }
}
