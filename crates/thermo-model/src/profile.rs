//! Predefined thermal profiles.
//!
//! A profile is one heating/cooling cycle: the temperature (°C) at which each
//! renumbered position was recorded. The three cycles are fixed; selecting one
//! is the only choice a caller makes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const STEPS_23: [u32; 23] = [
    25, 50, 75, 100, 125, 150, 183, 200, 220, 240, 250, 260, 250, 240, 220, 200, 183, 150, 125,
    100, 75, 50, 25,
];
const STEPS_9A: [u32; 9] = [25, 50, 100, 150, 180, 150, 100, 50, 25];
const STEPS_9B: [u32; 9] = [25, 50, 75, 100, 125, 100, 75, 50, 25];

static PROFILES: [ThermalProfile; 3] = [
    ThermalProfile {
        id: ProfileId::Steps23,
        sequence: &STEPS_23,
    },
    ThermalProfile {
        id: ProfileId::Steps9A,
        sequence: &STEPS_9A,
    },
    ThermalProfile {
        id: ProfileId::Steps9B,
        sequence: &STEPS_9B,
    },
];

/// Identifier of a predefined thermal profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileId {
    /// 23 positions, 260 °C peak (selector `a`).
    Steps23,
    /// 9 positions, 180 °C peak (selector `b`).
    Steps9A,
    /// 9 positions, 125 °C peak (selector `c`).
    Steps9B,
}

impl ProfileId {
    pub const ALL: [ProfileId; 3] = [ProfileId::Steps23, ProfileId::Steps9A, ProfileId::Steps9B];

    /// Short selector used on the command line.
    pub fn selector(self) -> char {
        match self {
            ProfileId::Steps23 => 'a',
            ProfileId::Steps9A => 'b',
            ProfileId::Steps9B => 'c',
        }
    }

    /// Peak temperature label shown to operators.
    pub fn peak_label(self) -> &'static str {
        match self {
            ProfileId::Steps23 => "260C",
            ProfileId::Steps9A => "180C",
            ProfileId::Steps9B => "125C",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileId::Steps23 => "23-step",
            ProfileId::Steps9A => "9-step-a",
            ProfileId::Steps9B => "9-step-b",
        }
    }

    /// Looks up the static profile table.
    pub fn profile(self) -> &'static ThermalProfile {
        match self {
            ProfileId::Steps23 => &PROFILES[0],
            ProfileId::Steps9A => &PROFILES[1],
            ProfileId::Steps9B => &PROFILES[2],
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rejected profile selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown thermal profile '{input}' (expected a, b or c)")]
pub struct ProfileParseError {
    pub input: String,
}

impl FromStr for ProfileId {
    type Err = ProfileParseError;

    /// Accepts the selector letter, the peak label (`260`, `260C`) or the id name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let matched = ProfileId::ALL.into_iter().find(|id| {
            let peak = id.peak_label().to_lowercase();
            (normalized.len() == 1 && normalized.starts_with(id.selector()))
                || normalized == peak
                || normalized == peak.trim_end_matches('c')
                || normalized == id.as_str()
        });
        matched.ok_or_else(|| ProfileParseError {
            input: s.to_string(),
        })
    }
}

/// Whether a position sits on the heating or the cooling half of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rising,
    Falling,
}

impl Direction {
    /// Marker prefixed onto final filenames.
    pub fn marker(self) -> &'static str {
        match self {
            Direction::Rising => "0",
            Direction::Falling => "1",
        }
    }
}

/// One labelled position of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStep {
    /// 1-based position.
    pub position: usize,
    pub temperature: u32,
    pub direction: Direction,
}

impl ProfileStep {
    /// Final filename stem, `<direction>_<temperature>`.
    pub fn stem(&self) -> String {
        format!("{}_{}", self.direction.marker(), self.temperature)
    }
}

/// A fixed heating/cooling sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct ThermalProfile {
    pub id: ProfileId,
    pub sequence: &'static [u32],
}

impl ThermalProfile {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Labels the 1-based `position`, or `None` past the end of the cycle.
    ///
    /// The first position is always rising; later positions are falling once
    /// the temperature drops below the previous step.
    pub fn step(&self, position: usize) -> Option<ProfileStep> {
        let index = position.checked_sub(1)?;
        let temperature = *self.sequence.get(index)?;
        let direction = match index.checked_sub(1).map(|prev| self.sequence[prev]) {
            Some(previous) if temperature < previous => Direction::Falling,
            _ => Direction::Rising,
        };
        Some(ProfileStep {
            position,
            temperature,
            direction,
        })
    }

    /// All positions of the cycle in order.
    pub fn steps(&self) -> impl Iterator<Item = ProfileStep> + '_ {
        (1..=self.len()).filter_map(|position| self.step(position))
    }

    /// True when `stem` is the final name of one of this cycle's positions.
    pub fn is_label(&self, stem: &str) -> bool {
        self.steps().any(|step| step.stem() == stem)
    }
}
