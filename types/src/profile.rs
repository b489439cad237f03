//! Athlete profiles shown on the swipe cards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::NonEmptyString;

/// A single headline statistic (`bench = 110kg`).
///
/// Stats are kept as an ordered list so cards render them in the order the
/// roster declares them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub key: NonEmptyString,
    pub value: String,
}

impl Stat {
    fn literal(key: &str, value: &str) -> Self {
        Self {
            key: NonEmptyString::literal(key),
            value: value.to_string(),
        }
    }
}

/// A gym buddy card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub name: NonEmptyString,
    pub age: u8,
    /// Free-form distance label, e.g. `"2 km"` or `"800 m"`.
    pub distance: String,
    pub specialty: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Photo URL. Terminals cannot show it, the card renders its host instead.
    #[serde(default)]
    pub image: Option<String>,
}

impl Profile {
    /// `"{name}, {age}"`
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{}, {}", self.name, self.age)
    }

    /// Host part of the image URL, used as the photo caption.
    #[must_use]
    pub fn image_host(&self) -> Option<&str> {
        let url = self.image.as_deref()?;
        let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
        rest.split(['/', '?', '#']).next().filter(|host| !host.is_empty())
    }

    /// The three-card demo roster.
    #[must_use]
    pub fn builtin_roster() -> Vec<Profile> {
        vec![
            Self::literal(
                1,
                "Mert",
                26,
                "2 km",
                "Bodybuilding",
                &[("bench", "110kg"), ("squat", "140kg")],
                "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?q=80&w=500",
            ),
            Self::literal(
                2,
                "Selin",
                24,
                "5 km",
                "Crossfit",
                &[("deadlift", "90kg"), ("run", "5k/22min")],
                "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?q=80&w=500",
            ),
            Self::literal(
                3,
                "Can",
                29,
                "800 m",
                "Powerlifting",
                &[("squat", "180kg"), ("total", "500kg")],
                "https://images.unsplash.com/photo-1526506118085-60ce8714f8c5?q=80&w=500",
            ),
        ]
    }

    fn literal(
        id: u32,
        name: &str,
        age: u8,
        distance: &str,
        specialty: &str,
        stats: &[(&str, &str)],
        image: &str,
    ) -> Self {
        Self {
            id,
            name: NonEmptyString::literal(name),
            age,
            distance: distance.to_string(),
            specialty: specialty.to_string(),
            stats: stats
                .iter()
                .map(|(key, value)| Stat::literal(key, value))
                .collect(),
            image: Some(image.to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("duplicate profile id {0}")]
    DuplicateId(u32),
    #[error("profile {id} has duplicate stat '{key}'")]
    DuplicateStat { id: u32, key: String },
}

/// Check a user-supplied roster before it reaches the deck.
///
/// Ids key the card animations, so they must be unique. Stat keys must be
/// unique within a profile.
pub fn validate_roster(profiles: &[Profile]) -> Result<(), RosterError> {
    let mut ids = HashSet::new();
    for profile in profiles {
        if !ids.insert(profile.id) {
            return Err(RosterError::DuplicateId(profile.id));
        }
        let mut keys = HashSet::new();
        for stat in &profile.stats {
            if !keys.insert(stat.key.as_str()) {
                return Err(RosterError::DuplicateStat {
                    id: profile.id,
                    key: stat.key.to_string(),
                });
            }
        }
    }
    Ok(())
}
