//! # Feedback
//!
//! Fire-and-forget audio cues: a short click on every count and a two-tone
//! chime when a cycle completes. Nothing here returns a value the core
//! consumes — a cue that fails to play is logged and forgotten.

pub mod tone;

pub use tone::ToneFeedback;

/// Emits feedback cues. Implementations must be cheap to call from the
/// event loop: actual playback happens elsewhere (or not at all).
pub trait FeedbackEmitter: Send + Sync {
    fn play_click(&self);
    fn play_complete(&self);
}

/// No-op emitter used when audio is disabled or unavailable.
pub struct NullFeedback;

impl FeedbackEmitter for NullFeedback {
    fn play_click(&self) {}
    fn play_complete(&self) {}
}
