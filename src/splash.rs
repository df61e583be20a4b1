//! Splash captions shown under the logo.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Fixed caption corpus
pub const SPLASH_MESSAGES: &[&str] = &[
    "Join the Discord!",
    "Infinite Levels!",
    "Everything Stacks!",
    "Optional Save Scumming!",
    "Biomes!",
    "Open Source!",
    "Play with 5x Speed!",
    "Live Bug Testing!",
    "Heavy Influence on Roguelite Design!",
    "Now With 33% More Salt!",
    "Infinite Fusion at Home!",
    "Broken Egg Moves!",
    "Magnificent!",
    "Mubstitute!",
    "That's Crazy!",
    "Orance Juice!",
    "Questionable Balancing!",
    "Cool Shaders!",
    "AI-Free!",
    "Sudden Difficulty Spikes!",
    "Based on an Unfinished Flash Game!",
    "More Addictive than Intended!",
    "Mostly Consistent Seeds!",
    "Achievement Points Don't Do Anything!",
    "You Do Not Start at Level 2000!",
    "Don't Talk About the Egg Incident!",
    "Also Try Endless Mode!",
    "Also Try Daily Runs!",
    "Now With Rival Banter!",
    "Your Rival Believes in You!",
];

/// Pick one caption uniformly at random
pub fn random_splash<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SPLASH_MESSAGES.choose(rng).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_corpus_not_empty() {
        assert!(!SPLASH_MESSAGES.is_empty());
        assert!(SPLASH_MESSAGES.iter().all(|m| !m.is_empty()));
    }

    #[test]
    fn test_every_message_reachable() {
        let mut rng = rand::rng();
        let mut seen = HashSet::new();
        for _ in 0..SPLASH_MESSAGES.len() * 200 {
            seen.insert(random_splash(&mut rng));
        }
        assert_eq!(seen.len(), SPLASH_MESSAGES.len());
    }
}
