//! # Tone Synthesis
//!
//! Synthesized cues played through rodio. The `OutputStream`/`Sink` handles
//! are not `Send`, so a dedicated audio thread owns them and receives cue
//! requests over a channel; the emitter side just sends and returns.

use std::f32::consts::PI;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use log::{debug, warn};
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use super::FeedbackEmitter;

const SAMPLE_RATE: u32 = 44100;
const AMPLITUDE: f32 = 0.3;

/// Quick decaying blip per count.
const CLICK_SEGMENTS: &[(f32, f32)] = &[(880.0, 0.03)];

/// Rising two-tone chime on cycle completion.
const COMPLETE_SEGMENTS: &[(f32, f32)] = &[(660.0, 0.15), (880.0, 0.2)];

/// A finite synthesized cue: consecutive `(frequency_hz, duration_secs)`
/// segments, each with a linear decay envelope.
struct Chime {
    segments: &'static [(f32, f32)],
    num_sample: usize,
    total_samples: usize,
}

impl Chime {
    fn new(segments: &'static [(f32, f32)]) -> Self {
        let total_secs: f32 = segments.iter().map(|&(_, d)| d).sum();
        Self {
            segments,
            num_sample: 0,
            total_samples: (total_secs * SAMPLE_RATE as f32) as usize,
        }
    }

    fn click() -> Self {
        Self::new(CLICK_SEGMENTS)
    }

    fn complete() -> Self {
        Self::new(COMPLETE_SEGMENTS)
    }
}

impl Iterator for Chime {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.num_sample >= self.total_samples {
            return None;
        }
        let t = self.num_sample as f32 / SAMPLE_RATE as f32;
        self.num_sample += 1;

        let mut segment_start = 0.0;
        for &(freq, dur) in self.segments {
            if t < segment_start + dur {
                let local = t - segment_start;
                let envelope = 1.0 - local / dur;
                return Some((2.0 * PI * freq * local).sin() * AMPLITUDE * envelope);
            }
            segment_start += dur;
        }
        // Rounding slack at the tail
        Some(0.0)
    }
}

impl Source for Chime {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.total_samples - self.num_sample)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        let secs: f32 = self.segments.iter().map(|&(_, d)| d).sum();
        Some(Duration::from_secs_f32(secs))
    }
}

enum ToneCommand {
    Click,
    Complete,
}

/// Rodio-backed emitter. Playback failures (no audio device, dead sink)
/// degrade to logged no-ops — counting never stalls on audio.
pub struct ToneFeedback {
    tx: Sender<ToneCommand>,
}

impl ToneFeedback {
    /// Spawns the audio thread. The thread opens the output stream lazily on
    /// the first cue so a machine without audio costs nothing until then.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<ToneCommand>();

        let spawned = thread::Builder::new()
            .name("feedback".to_string())
            .spawn(move || {
                // Keep the stream alive for the life of the thread; dropping
                // it would cut off detached sinks.
                let mut stream: Option<(OutputStream, OutputStreamHandle)> = None;

                while let Ok(cmd) = rx.recv() {
                    if stream.is_none() {
                        match OutputStream::try_default() {
                            Ok(pair) => stream = Some(pair),
                            Err(e) => {
                                debug!("No audio output available: {}", e);
                                continue;
                            }
                        }
                    }
                    let Some((_, ref handle)) = stream else {
                        continue;
                    };
                    let sink = match Sink::try_new(handle) {
                        Ok(sink) => sink,
                        Err(e) => {
                            debug!("Failed to create audio sink: {}", e);
                            continue;
                        }
                    };
                    match cmd {
                        ToneCommand::Click => sink.append(Chime::click()),
                        ToneCommand::Complete => sink.append(Chime::complete()),
                    }
                    sink.detach();
                }
            });

        if let Err(e) = spawned {
            warn!("Failed to spawn feedback thread: {}", e);
        }
        Self { tx }
    }
}

impl FeedbackEmitter for ToneFeedback {
    fn play_click(&self) {
        let _ = self.tx.send(ToneCommand::Click);
    }

    fn play_complete(&self) {
        let _ = self.tx.send(ToneCommand::Complete);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chime_is_finite_and_bounded() {
        let samples: Vec<f32> = Chime::complete().collect();
        let expected = ((0.15 + 0.2) * SAMPLE_RATE as f32) as usize;
        assert_eq!(samples.len(), expected);
        assert!(samples.iter().all(|s| s.abs() <= AMPLITUDE + f32::EPSILON));
    }

    #[test]
    fn test_click_is_shorter_than_complete() {
        let click = Chime::click().count();
        let complete = Chime::complete().count();
        assert!(click < complete);
    }

    #[test]
    fn test_chime_segments_decay_to_silence() {
        let samples: Vec<f32> = Chime::click().collect();
        // Tail of the envelope is near zero
        let tail = samples[samples.len() - 1].abs();
        assert!(tail < 0.01, "tail sample {tail} should have decayed");
    }

    #[test]
    fn test_emitter_survives_missing_audio_device() {
        // On CI there is usually no output device; sends must still be fine.
        let feedback = ToneFeedback::spawn();
        feedback.play_click();
        feedback.play_complete();
    }
}
