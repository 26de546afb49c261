use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Severity tier assigned to a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Emergency,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Emergency,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Emergency => "Emergency",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const EMERGENCY_KEYWORDS: [&str; 7] = [
    "fire",
    "gas",
    "short circuit",
    "open",
    "fallen",
    "dead",
    "sparking",
];
pub const HIGH_KEYWORDS: [&str; 5] = ["leak", "blocked", "damaged", "overflow", "burst"];
pub const MEDIUM_KEYWORDS: [&str; 4] = ["not working", "dirty", "low", "smell"];

/// Inclusive severity range drawn for emergency complaints.
pub const EMERGENCY_SCORE_MIN: u8 = 6;
pub const EMERGENCY_SCORE_MAX: u8 = 10;

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Tier decision alone. Matching is substring containment on the lowercased
/// text, tiers are tried emergency -> high -> medium, and the first hit wins.
pub fn tier(text: &str) -> Priority {
    let lower = text.to_lowercase();

    if contains_any(&lower, &EMERGENCY_KEYWORDS) {
        Priority::Emergency
    } else if contains_any(&lower, &HIGH_KEYWORDS) {
        Priority::High
    } else if contains_any(&lower, &MEDIUM_KEYWORDS) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Classify a complaint and draw its emergency score.
///
/// Emergency complaints get a uniform score in `6..=10`; every other tier
/// scores 0.
pub fn classify<R: Rng + ?Sized>(text: &str, rng: &mut R) -> (Priority, u8) {
    match tier(text) {
        Priority::Emergency => (
            Priority::Emergency,
            rng.gen_range(EMERGENCY_SCORE_MIN..=EMERGENCY_SCORE_MAX),
        ),
        other => (other, 0),
    }
}
