use serde::{Deserialize, Serialize};

use crate::points::Points;

/// An enum that encodes all the adjustable settings of a section
#[derive(Serialize, Deserialize, Debug, Hash, Clone, PartialEq, Eq)]
pub enum SectionSetting {
    /// Adjusts how many rounds the section will pair
    PlannedRounds(u64),
    /// Adjusts whether USCF fields are collected at registration
    UscfMode(bool),
    /// Adjusts the points an automatic bye awards
    ByePoints(Points),
}

/// A structure that holds a value for each section setting
#[derive(Serialize, Deserialize, Debug, Hash, Clone, PartialEq, Eq)]
pub struct SectionSettingsTree {
    /// How many rounds the section will pair
    pub planned_rounds: u64,
    /// Whether USCF fields are collected at registration; the engine
    /// itself does not branch on this
    pub uscf_mode: bool,
    /// The points an automatic bye awards
    pub bye_points: Points,
}

impl SectionSettingsTree {
    /// Creates a new, default settings tree
    pub fn new() -> Self {
        Self {
            planned_rounds: 4,
            uscf_mode: false,
            bye_points: Points::ONE,
        }
    }

    /// Updates the settings tree, replacing one setting with the given setting
    pub fn update(&mut self, setting: SectionSetting) {
        match setting {
            SectionSetting::PlannedRounds(count) => self.planned_rounds = count,
            SectionSetting::UscfMode(mode) => self.uscf_mode = mode,
            SectionSetting::ByePoints(points) => self.bye_points = points,
        }
    }

    /// Returns an iterator over all the contained settings
    pub fn iter(&self) -> impl Iterator<Item = SectionSetting> {
        vec![
            SectionSetting::PlannedRounds(self.planned_rounds),
            SectionSetting::UscfMode(self.uscf_mode),
            SectionSetting::ByePoints(self.bye_points),
        ]
        .into_iter()
    }
}

impl Default for SectionSettingsTree {
    fn default() -> Self {
        Self::new()
    }
}
