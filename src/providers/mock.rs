//! # Mock Providers
//!
//! Fixture-backed stand-ins for a real backend. They keep the provider
//! contract honest (async, fallible, artificially delayed) so the rest of
//! the app can't accidentally depend on instant or infallible lookups.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, Local};
use rand::Rng;

use super::provider::{AccountProvider, ContentProvider, ProviderError};
use super::types::{DailyContent, HijriDate, Preferences, Theme, UserProfile};

const HADITH_POOL: &[(&str, &str, &str)] = &[
    (
        "The best of you are those who learn the Quran and teach it.",
        "Sahih al-Bukhari",
        "5027",
    ),
    (
        "The strong person is not the one who can wrestle someone else down. \
         The strong person is the one who can control himself when he is angry.",
        "Sahih al-Bukhari",
        "6114",
    ),
    (
        "Whoever believes in Allah and the Last Day should speak good or remain silent.",
        "Sahih al-Bukhari",
        "6018",
    ),
];

const AYAH_POOL: &[(&str, u32, &str, &str)] = &[
    (
        "Al-Baqarah",
        286,
        "لَا يُكَلِّفُ اللَّهُ نَفْسًا إِلَّا وُسْعَهَا",
        "Allah does not burden a soul beyond that it can bear.",
    ),
    (
        "Al-Imran",
        139,
        "وَلَا تَهِنُوا وَلَا تَحْزَنُوا وَأَنتُمُ الْأَعْلَوْنَ إِن كُنتُم مُّؤْمِنِينَ",
        "Do not lose heart nor fall into despair, for you will triumph if you are believers.",
    ),
    (
        "Ad-Duha",
        5,
        "وَلَسَوْفَ يُعْطِيكَ رَبُّكَ فَتَرْضَىٰ",
        "And your Lord will give you, and you will be satisfied.",
    ),
];

const HIJRI_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Content provider serving fixture citations. Alternates hadith/ayah by
/// calendar day and approximates the hijri date, matching the demo backend
/// this app started with.
pub struct MockContentProvider;

#[async_trait]
impl ContentProvider for MockContentProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn daily_content(&self) -> Result<DailyContent, ProviderError> {
        // Simulated API latency
        tokio::time::sleep(Duration::from_millis(500)).await;

        let content = if Local::now().day() % 2 == 0 {
            let (text, source, reference) =
                HADITH_POOL[rand::thread_rng().gen_range(0..HADITH_POOL.len())];
            DailyContent::Hadith {
                text: text.to_string(),
                source: source.to_string(),
                reference: reference.to_string(),
            }
        } else {
            let (surah, ayah, text, translation) =
                AYAH_POOL[rand::thread_rng().gen_range(0..AYAH_POOL.len())];
            DailyContent::Ayah {
                surah: surah.to_string(),
                ayah,
                text: text.to_string(),
                translation: translation.to_string(),
            }
        };
        Ok(content)
    }

    async fn hijri_date(&self) -> Result<HijriDate, ProviderError> {
        tokio::time::sleep(Duration::from_millis(300)).await;

        // Rough approximation, good enough for a demo fixture: gregorian day
        // and month index with the year offset by 579.
        let today = Local::now();
        let day = today.day();
        let month = HIJRI_MONTHS[today.month0() as usize].to_string();
        let year = today.year() - 579;
        Ok(HijriDate {
            day,
            month: month.clone(),
            year,
            formatted: format!("{day} {month}, {year} AH"),
        })
    }
}

/// Account provider with one fixture identity plus guest mode.
pub struct MockAccountProvider {
    guest: bool,
}

impl MockAccountProvider {
    /// Resolves to the demo identity.
    pub fn demo() -> Self {
        Self { guest: false }
    }

    /// Resolves to no identity (guest mode).
    pub fn guest() -> Self {
        Self { guest: true }
    }
}

#[async_trait]
impl AccountProvider for MockAccountProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn current_user(&self) -> Result<Option<UserProfile>, ProviderError> {
        tokio::time::sleep(Duration::from_millis(200)).await;

        if self.guest {
            return Ok(None);
        }
        Ok(Some(UserProfile {
            id: "1".to_string(),
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            preferences: Preferences {
                theme: Theme::System,
                audio_feedback: true,
                show_hijri_date: true,
                show_daily_content: true,
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_content_serves_a_citation() {
        let provider = MockContentProvider;
        let content = provider.daily_content().await.unwrap();
        match content {
            DailyContent::Hadith { text, .. } => assert!(!text.is_empty()),
            DailyContent::Ayah { translation, .. } => assert!(!translation.is_empty()),
        }
    }

    #[tokio::test]
    async fn test_mock_hijri_date_is_formatted() {
        let provider = MockContentProvider;
        let hijri = provider.hijri_date().await.unwrap();
        assert!(hijri.day >= 1);
        assert!(hijri.formatted.ends_with("AH"));
        assert!(hijri.formatted.contains(&hijri.month));
    }

    #[tokio::test]
    async fn test_demo_account_has_preferences() {
        let user = MockAccountProvider::demo().current_user().await.unwrap();
        let user = user.expect("demo provider should resolve an identity");
        assert_eq!(user.name, "Demo User");
        assert!(user.preferences.show_daily_content);
    }

    #[tokio::test]
    async fn test_guest_account_resolves_none() {
        let user = MockAccountProvider::guest().current_user().await.unwrap();
        assert!(user.is_none());
    }
}
