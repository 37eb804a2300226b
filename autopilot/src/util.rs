use anyhow::{anyhow, Context, Result};

/// Round number as announced by the game runner on stdin.
pub fn parse_round(input: &str) -> Result<u32> {
    let s = input.trim();
    if s.is_empty() {
        return Err(anyhow!("empty round number"));
    }
    s.parse::<u32>()
        .with_context(|| format!("invalid round number: {s}"))
}

pub fn parse_bot_csv(input: &str) -> Result<Vec<String>> {
    let mut bots = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        bots.push(token.to_string());
    }
    if bots.is_empty() {
        return Err(anyhow!("no bots parsed from --bots"));
    }
    Ok(bots)
}
