//! Owner tags. Players own tanks; structures carry a category tag.
//!
//! A structure is an ordinary tank without weapon, told apart only by its
//! owner string.

/// Player 1.
pub const RED_TANK: &str = "red";
/// Player 2.
pub const BLUE_TANK: &str = "blue";

/// Rock assigned to no player.
pub const NEUTRAL_ROCK: &str = "neutral_rock";
pub const RED_ROCK: &str = "red_rock";
pub const BLUE_ROCK: &str = "blue_rock";

/// Home bases generate cash and anchor spawns.
pub const RED_BASE: &str = "red_base";
pub const BLUE_BASE: &str = "blue_base";

/// Base tag of a player side, if `owner` is one.
pub fn base_of(owner: &str) -> Option<&'static str> {
    match owner {
        RED_TANK => Some(RED_BASE),
        BLUE_TANK => Some(BLUE_BASE),
        _ => None,
    }
}

/// True if `owner` starts with any non-empty filter prefix.
pub fn matches_any(owner: &str, filters: &[String]) -> bool {
    filters
        .iter()
        .any(|f| !f.is_empty() && owner.starts_with(f.as_str()))
}
