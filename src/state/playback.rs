//! Playback sequencing primitives: timing, scheduled timers, and the effects
//! a transition asks the UI layer to carry out.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::OverlayRect;

/// Delays used by the preview sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackTiming {
    /// How long playback runs after the audio permission is granted.
    pub audio_playback_ms: u64,
    /// Pause between the intro video ending and returning to the editor.
    pub intro_return_delay_ms: u64,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            audio_playback_ms: 6000,
            intro_return_delay_ms: 3000,
        }
    }
}

impl PlaybackTiming {
    pub fn delay_for(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::AudioPlaybackTimeout => Duration::from_millis(self.audio_playback_ms),
            TimerKind::IntroReturn => Duration::from_millis(self.intro_return_delay_ms),
        }
    }
}

/// What a scheduled timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Stop playback started by the audio permission gate.
    AudioPlaybackTimeout,
    /// Stop playback and leave the preview after the intro ends.
    IntroReturn,
}

/// Handle for a scheduled timer. Tokens are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// Timers that have been scheduled and neither fired nor been cancelled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerQueue {
    next_token: u64,
    pending: Vec<(TimerToken, TimerKind)>,
}

impl TimerQueue {
    pub fn schedule(&mut self, kind: TimerKind) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending.push((token, kind));
        token
    }

    /// Remove a timer that is firing. `None` means it was cancelled or already fired.
    pub fn take(&mut self, token: TimerToken) -> Option<TimerKind> {
        let index = self.pending.iter().position(|(t, _)| *t == token)?;
        Some(self.pending.remove(index).1)
    }

    /// Forget every pending timer and return their tokens for cancellation.
    pub fn drain(&mut self) -> Vec<TimerToken> {
        self.pending.drain(..).map(|(token, _)| token).collect()
    }

    pub fn contains_kind(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|(_, k)| *k == kind)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Work a transition hands back to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Call `Session::fire_timer(token)` after `delay`.
    ScheduleTimer { token: TimerToken, delay: Duration },
    /// Abort the task waiting on `token`.
    CancelTimer(TimerToken),
    /// Start the background video element.
    PlayBackgroundVideo,
}

/// Where the preview sequencer currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    AwaitingAudioPermission,
    AwaitingDisclaimer,
    Playing,
}

/// What the preview screen should show.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewScene {
    pub background_video: bool,
    pub intro_video: bool,
    pub overlays: Vec<OverlayRect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = PlaybackTiming::default();
        assert_eq!(timing.delay_for(TimerKind::AudioPlaybackTimeout), Duration::from_millis(6000));
        assert_eq!(timing.delay_for(TimerKind::IntroReturn), Duration::from_millis(3000));
    }

    #[test]
    fn test_tokens_are_unique_and_take_once() {
        let mut queue = TimerQueue::default();
        let a = queue.schedule(TimerKind::AudioPlaybackTimeout);
        let b = queue.schedule(TimerKind::IntroReturn);
        assert_ne!(a, b);
        assert_eq!(queue.take(a), Some(TimerKind::AudioPlaybackTimeout));
        assert_eq!(queue.take(a), None);
        assert!(queue.contains_kind(TimerKind::IntroReturn));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_drain_cancels_everything() {
        let mut queue = TimerQueue::default();
        let a = queue.schedule(TimerKind::AudioPlaybackTimeout);
        let b = queue.schedule(TimerKind::IntroReturn);
        assert_eq!(queue.drain(), vec![a, b]);
        assert!(queue.is_empty());
        assert_eq!(queue.take(b), None);
        let c = queue.schedule(TimerKind::IntroReturn);
        assert!(c > b);
    }

    #[test]
    fn test_partial_timing_json_keeps_defaults() {
        let timing: PlaybackTiming = serde_json::from_str(r#"{ "audio_playback_ms": 1500 }"#).unwrap();
        assert_eq!(timing.audio_playback_ms, 1500);
        assert_eq!(timing.intro_return_delay_ms, 3000);
    }
}
