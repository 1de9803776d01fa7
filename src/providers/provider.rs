use std::fmt;

use async_trait::async_trait;

use super::types::{DailyContent, HijriDate, UserProfile};

/// Errors that can occur during provider operations.
/// Every call site absorbs these — a failed fetch leaves a panel empty,
/// never aborts the app.
#[derive(Debug)]
pub enum ProviderError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response. Not retryable.
    Parse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Supplies the optional local identity and its preference flags.
///
/// The tracker only ever reads the preference flags; swapping the mock for a
/// real backend must not touch counting logic.
#[async_trait]
pub trait AccountProvider: Send + Sync {
    fn name(&self) -> &str;

    /// The current identity, or `None` for guest mode.
    async fn current_user(&self) -> Result<Option<UserProfile>, ProviderError>;
}

/// Supplies the decorative daily citation and Islamic calendar date.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn daily_content(&self) -> Result<DailyContent, ProviderError>;

    async fn hijri_date(&self) -> Result<HijriDate, ProviderError>;
}
