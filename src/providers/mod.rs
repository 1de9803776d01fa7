//! # Providers
//!
//! Swappable collaborators the tracker core treats as external: the account
//! provider (optional identity + preference flags) and the content provider
//! (daily citation + hijri date). Both are trait objects so the fixture
//! mocks and the real HTTP backend are interchangeable without touching
//! counting logic.

pub mod aladhan;
pub mod mock;
pub mod provider;
pub mod types;

pub use aladhan::AladhanContentProvider;
pub use mock::{MockAccountProvider, MockContentProvider};
pub use provider::{AccountProvider, ContentProvider, ProviderError};
pub use types::{DailyContent, HijriDate, Preferences, Theme, UserProfile};
