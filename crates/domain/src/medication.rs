use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Dose counts per daily slot. A slot with count 0 generates no reminder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DosageProfile {
    #[serde(default)]
    pub morning: u32,
    #[serde(default)]
    pub afternoon: u32,
    #[serde(default)]
    pub evening: u32,
    #[serde(default)]
    pub night: u32,
}

impl DosageProfile {
    pub fn dose_count(&self, slot: Slot) -> u32 {
        match slot {
            Slot::Morning => self.morning,
            Slot::Afternoon => self.afternoon,
            Slot::Evening => self.evening,
            Slot::Night => self.night,
        }
    }

    pub fn is_empty(&self) -> bool {
        Slot::ALL.iter().all(|&slot| self.dose_count(slot) == 0)
    }
}

/// Whether the medication is taken before or after food, driving a
/// 30-minute offset from the meal anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimingPreference {
    #[serde(rename = "Before Food")]
    BeforeFood,
    #[serde(rename = "After Food")]
    AfterFood,
}

impl TimingPreference {
    pub fn offset_minutes(&self) -> i32 {
        match self {
            Self::BeforeFood => -30,
            Self::AfterFood => 30,
        }
    }
}

impl Default for TimingPreference {
    fn default() -> Self {
        Self::AfterFood
    }
}

impl Display for TimingPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforeFood => write!(f, "Before Food"),
            Self::AfterFood => write!(f, "After Food"),
        }
    }
}

/// One of the four daily dosage windows, in the fixed order reminders
/// are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Morning, Slot::Afternoon, Slot::Evening, Slot::Night];
}

impl Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => write!(f, "Morning"),
            Self::Afternoon => write!(f, "Afternoon"),
            Self::Evening => write!(f, "Evening"),
            Self::Night => write!(f, "Night"),
        }
    }
}

/// A prescribed medication. Created by prescription ingestion or manual
/// entry and read-only to the scheduling engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: ID,
    pub name: String,
    pub dosage: DosageProfile,
    pub timing: TimingPreference,
    /// Free-form duration text from the prescription, e.g. "5 days".
    pub duration: String,
    pub prescription_id: ID,
    pub user_id: ID,
}

impl Entity for Medication {
    fn id(&self) -> &ID {
        &self.id
    }
}
