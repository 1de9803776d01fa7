//! Misbaha library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod feedback;
pub mod providers;
pub mod tui;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ContentProviderKind {
    /// Built-in offline fixtures (no network)
    #[default]
    Mock,
    /// AlAdhan + AlQuran Cloud HTTP APIs
    Aladhan,
}

impl ContentProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentProviderKind::Mock => "mock",
            ContentProviderKind::Aladhan => "aladhan",
        }
    }
}
