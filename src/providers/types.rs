//! Shared types for the account and content providers.

use serde::{Deserialize, Serialize};

/// Color scheme preference. Stored, not acted on beyond the UI accent.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Read-only preference flags supplied by the account provider.
/// The tracker itself never writes these.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub audio_feedback: bool,
    pub show_hijri_date: bool,
    pub show_daily_content: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            audio_feedback: true,
            show_hijri_date: true,
            show_daily_content: true,
        }
    }
}

/// An authenticated local identity. `None` from the provider means guest mode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
}

/// The informational daily citation. Purely decorative — never feeds back
/// into counting logic.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DailyContent {
    Hadith {
        text: String,
        source: String,
        reference: String,
    },
    Ayah {
        surah: String,
        ayah: u32,
        text: String,
        translation: String,
    },
}

impl DailyContent {
    /// Short label for panel titles.
    pub fn label(&self) -> &'static str {
        match self {
            DailyContent::Hadith { .. } => "Hadith of the Day",
            DailyContent::Ayah { .. } => "Ayah of the Day",
        }
    }
}

/// Islamic calendar date, pre-formatted for display.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HijriDate {
    pub day: u32,
    pub month: String,
    pub year: i32,
    pub formatted: String,
}
