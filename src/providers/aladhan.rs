//! # AlAdhan / AlQuran Cloud Provider
//!
//! The real-backend implementation of [`ContentProvider`]: hijri dates from
//! the AlAdhan gregorian-to-hijri endpoint and the daily citation from a
//! random AlQuran Cloud ayah (served in both the Uthmani script and an
//! English translation).
//!
//! Base URLs are injectable so integration tests can point both at a
//! wiremock server.

use async_trait::async_trait;
use chrono::Local;
use log::debug;
use rand::Rng;
use serde::Deserialize;

use super::provider::{ContentProvider, ProviderError};
use super::types::{DailyContent, HijriDate};

pub const DEFAULT_ALADHAN_BASE_URL: &str = "https://api.aladhan.com";
pub const DEFAULT_QURAN_BASE_URL: &str = "https://api.alquran.cloud";

/// Total ayah count in the Quran; random citations are drawn from 1..=this.
const AYAH_COUNT: u32 = 6236;

/// Editions requested for the citation: original script + translation.
const AYAH_EDITIONS: &str = "quran-uthmani,en.asad";

pub struct AladhanContentProvider {
    client: reqwest::Client,
    aladhan_base_url: String,
    quran_base_url: String,
}

impl AladhanContentProvider {
    pub fn new(aladhan_base_url: Option<String>, quran_base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            aladhan_base_url: aladhan_base_url
                .unwrap_or_else(|| DEFAULT_ALADHAN_BASE_URL.to_string()),
            quran_base_url: quran_base_url.unwrap_or_else(|| DEFAULT_QURAN_BASE_URL.to_string()),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ProviderError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

// ----------------------------------------------------------------------
// Response shapes (only the fields we read)
// ----------------------------------------------------------------------

#[derive(Deserialize)]
struct AyahEnvelope {
    data: Vec<AyahEdition>,
}

#[derive(Deserialize)]
struct AyahEdition {
    text: String,
    #[serde(rename = "numberInSurah")]
    number_in_surah: u32,
    surah: SurahRef,
}

#[derive(Deserialize)]
struct SurahRef {
    #[serde(rename = "englishName")]
    english_name: String,
}

#[derive(Deserialize)]
struct HijriEnvelope {
    data: HijriData,
}

#[derive(Deserialize)]
struct HijriData {
    hijri: HijriParts,
}

// AlAdhan serves day and year as strings.
#[derive(Deserialize)]
struct HijriParts {
    day: String,
    month: HijriMonth,
    year: String,
}

#[derive(Deserialize)]
struct HijriMonth {
    en: String,
}

#[async_trait]
impl ContentProvider for AladhanContentProvider {
    fn name(&self) -> &str {
        "aladhan"
    }

    async fn daily_content(&self) -> Result<DailyContent, ProviderError> {
        let number = rand::thread_rng().gen_range(1..=AYAH_COUNT);
        let url = format!(
            "{}/v1/ayah/{number}/editions/{AYAH_EDITIONS}",
            self.quran_base_url
        );
        let envelope: AyahEnvelope = self.get_json(&url).await?;

        let mut editions = envelope.data.into_iter();
        let arabic = editions
            .next()
            .ok_or_else(|| ProviderError::Parse("ayah response had no editions".to_string()))?;
        // Second edition is the translation; tolerate its absence.
        let translation = editions.next().map(|e| e.text).unwrap_or_default();

        Ok(DailyContent::Ayah {
            surah: arabic.surah.english_name,
            ayah: arabic.number_in_surah,
            text: arabic.text,
            translation,
        })
    }

    async fn hijri_date(&self) -> Result<HijriDate, ProviderError> {
        let gregorian = Local::now().format("%d-%m-%Y");
        let url = format!("{}/v1/gToH/{gregorian}", self.aladhan_base_url);
        let envelope: HijriEnvelope = self.get_json(&url).await?;

        let parts = envelope.data.hijri;
        let day: u32 = parts
            .day
            .parse()
            .map_err(|_| ProviderError::Parse(format!("bad hijri day: {:?}", parts.day)))?;
        let year: i32 = parts
            .year
            .parse()
            .map_err(|_| ProviderError::Parse(format!("bad hijri year: {:?}", parts.year)))?;

        Ok(HijriDate {
            day,
            month: parts.month.en.clone(),
            year,
            formatted: format!("{day} {}, {year} AH", parts.month.en),
        })
    }
}
