//! The application shell's session state and every transition on it.
//!
//! All mutation goes through the named methods below. Transitions that need
//! timers or video playback return [`Effect`]s instead of doing the work
//! themselves, so the UI layer owns tasks and the session stays synchronous.

use log::debug;
use uuid::Uuid;

use super::{
    seed_projects, DraggableElement, Effect, ElementLayer, Orientation, PlaybackPhase,
    PlaybackTiming, PreviewScene, Project, TimerKind, TimerQueue, TimerToken, View,
};

/// Preview draws overlays at twice their editor size.
pub const PREVIEW_SCALE: f64 = 2.0;

/// Transient state for one run of the app.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    view: View,
    projects: Vec<Project>,
    elements: ElementLayer,
    button_src: String,
    has_intro: bool,
    has_background: bool,
    show_audio_permission: bool,
    show_disclaimer: bool,
    is_playing: bool,
    timing: PlaybackTiming,
    timers: TimerQueue,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PlaybackTiming::default(), "assets/placeholder.svg")
    }
}

impl Session {
    pub fn new(timing: PlaybackTiming, button_src: impl Into<String>) -> Self {
        Self {
            view: View::Home,
            projects: seed_projects(),
            elements: ElementLayer::new(),
            button_src: button_src.into(),
            has_intro: false,
            has_background: false,
            show_audio_permission: false,
            show_disclaimer: false,
            is_playing: false,
            timing,
            timers: TimerQueue::default(),
        }
    }

    // Read access

    pub fn view(&self) -> View {
        self.view
    }

    pub fn orientation(&self) -> Orientation {
        self.view.orientation()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn elements(&self) -> &ElementLayer {
        &self.elements
    }

    pub fn has_intro(&self) -> bool {
        self.has_intro
    }

    pub fn has_background(&self) -> bool {
        self.has_background
    }

    pub fn show_audio_permission(&self) -> bool {
        self.show_audio_permission
    }

    pub fn show_disclaimer(&self) -> bool {
        self.show_disclaimer
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Sequencer phase, or `None` outside the preview.
    pub fn phase(&self) -> Option<PlaybackPhase> {
        if self.view != View::Preview {
            return None;
        }
        let phase = if self.show_audio_permission {
            PlaybackPhase::AwaitingAudioPermission
        } else if self.show_disclaimer {
            PlaybackPhase::AwaitingDisclaimer
        } else if self.is_playing {
            PlaybackPhase::Playing
        } else {
            PlaybackPhase::Idle
        };
        Some(phase)
    }

    /// What the preview should currently draw.
    pub fn preview_scene(&self) -> PreviewScene {
        PreviewScene {
            background_video: self.has_background && self.is_playing,
            intro_video: self.has_intro && self.is_playing,
            overlays: if self.has_intro {
                Vec::new()
            } else {
                self.elements.scaled(PREVIEW_SCALE)
            },
        }
    }

    // Navigation

    /// Home → editor.
    pub fn new_project(&mut self) -> bool {
        if self.view != View::Home {
            return self.ignore("new_project");
        }
        self.set_view(View::Editor);
        true
    }

    /// Home → projects list.
    pub fn open_projects(&mut self) -> bool {
        if self.view != View::Home {
            return self.ignore("open_projects");
        }
        self.set_view(View::Projects);
        true
    }

    /// Projects list → editor. Project content is not loaded.
    pub fn select_project(&mut self, project_id: &str) -> bool {
        if self.view != View::Projects {
            return self.ignore("select_project");
        }
        if !self.projects.iter().any(|p| p.id == project_id) {
            debug!("session: select_project ignored, unknown project {project_id:?}");
            return false;
        }
        debug!("session: selected project {project_id:?}");
        self.set_view(View::Editor);
        true
    }

    /// Projects list or editor → home.
    pub fn navigate_home(&mut self) -> bool {
        if !matches!(self.view, View::Projects | View::Editor) {
            return self.ignore("navigate_home");
        }
        self.set_view(View::Home);
        true
    }

    // Editor tools

    pub fn add_intro(&mut self) {
        if self.view != View::Editor {
            self.ignore("add_intro");
            return;
        }
        self.has_intro = true;
        debug!("session: intro enabled");
    }

    pub fn add_background(&mut self) {
        if self.view != View::Editor {
            self.ignore("add_background");
            return;
        }
        self.has_background = true;
        debug!("session: background enabled");
    }

    /// Append three buttons. Returns their ids.
    pub fn add_buttons(&mut self) -> Vec<Uuid> {
        if self.view != View::Editor {
            self.ignore("add_buttons");
            return Vec::new();
        }
        let ids = self.elements.add_button_batch(&self.button_src);
        debug!("session: added buttons, {} on canvas", self.elements.len());
        ids
    }

    /// Remove the most recently added button, if any.
    pub fn remove_button(&mut self) -> Option<DraggableElement> {
        if self.view != View::Editor {
            self.ignore("remove_button");
            return None;
        }
        let removed = self.elements.remove_last();
        debug!(
            "session: remove_button removed={} remaining={}",
            removed.is_some(),
            self.elements.len()
        );
        removed
    }

    /// Store where a drag left an element.
    pub fn commit_position(&mut self, id: Uuid, x: f64, y: f64) -> bool {
        if self.view != View::Editor {
            return self.ignore("commit_position");
        }
        let committed = self.elements.commit_position(id, x, y);
        debug!("session: commit_position {id} ({x}, {y}) committed={committed}");
        committed
    }

    // Preview sequencing

    /// Editor → preview, raising the intro gate or else the background gate.
    pub fn run(&mut self) -> Vec<Effect> {
        if self.view != View::Editor {
            self.ignore("run");
            return Vec::new();
        }
        let effects = self.cancel_timers();
        self.is_playing = false;
        if self.has_intro {
            self.show_audio_permission = true;
        } else if self.has_background {
            self.show_disclaimer = true;
        }
        self.set_view(View::Preview);
        effects
    }

    pub fn confirm_audio_permission(&mut self) -> Vec<Effect> {
        if self.view != View::Preview || !self.show_audio_permission {
            self.ignore("confirm_audio_permission");
            return Vec::new();
        }
        self.show_audio_permission = false;
        self.is_playing = true;
        debug!("session: audio permitted, playing");
        vec![self.schedule(TimerKind::AudioPlaybackTimeout)]
    }

    pub fn confirm_disclaimer(&mut self) -> Vec<Effect> {
        if self.view != View::Preview || !self.show_disclaimer {
            self.ignore("confirm_disclaimer");
            return Vec::new();
        }
        self.show_disclaimer = false;
        self.is_playing = true;
        debug!("session: disclaimer accepted, playing background");
        vec![Effect::PlayBackgroundVideo]
    }

    /// The intro video reported that it ended.
    pub fn intro_finished(&mut self) -> Vec<Effect> {
        if self.view != View::Preview || !self.has_intro || !self.is_playing {
            self.ignore("intro_finished");
            return Vec::new();
        }
        if self.timers.contains_kind(TimerKind::IntroReturn) {
            debug!("session: intro return already scheduled");
            return Vec::new();
        }
        vec![self.schedule(TimerKind::IntroReturn)]
    }

    /// Preview → editor, clearing playback and every modal and pending timer.
    pub fn back(&mut self) -> Vec<Effect> {
        if self.view != View::Preview {
            self.ignore("back");
            return Vec::new();
        }
        let effects = self.cancel_timers();
        self.is_playing = false;
        self.show_audio_permission = false;
        self.show_disclaimer = false;
        self.set_view(View::Editor);
        effects
    }

    /// Apply a timer whose delay has elapsed. Stale tokens do nothing.
    pub fn fire_timer(&mut self, token: TimerToken) -> Vec<Effect> {
        let Some(kind) = self.timers.take(token) else {
            debug!("session: timer {token:?} is stale, ignoring");
            return Vec::new();
        };
        debug!("session: timer {token:?} fired ({kind:?})");
        match kind {
            TimerKind::AudioPlaybackTimeout => {
                self.is_playing = false;
                Vec::new()
            }
            TimerKind::IntroReturn => {
                self.is_playing = false;
                self.back()
            }
        }
    }

    // Internals

    fn set_view(&mut self, view: View) {
        debug!(
            "session: view {:?} -> {:?} ({:?})",
            self.view,
            view,
            view.orientation()
        );
        self.view = view;
    }

    fn schedule(&mut self, kind: TimerKind) -> Effect {
        let token = self.timers.schedule(kind);
        let delay = self.timing.delay_for(kind);
        debug!("session: scheduled {kind:?} as {token:?} in {delay:?}");
        Effect::ScheduleTimer { token, delay }
    }

    fn cancel_timers(&mut self) -> Vec<Effect> {
        self.timers.drain().into_iter().map(Effect::CancelTimer).collect()
    }

    fn ignore(&self, event: &str) -> bool {
        debug!("session: {event} ignored in {:?}", self.view);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn in_editor() -> Session {
        let mut session = Session::default();
        assert!(session.new_project());
        session
    }

    fn scheduled_token(effects: &[Effect]) -> TimerToken {
        match effects {
            [Effect::ScheduleTimer { token, .. }] => *token,
            other => panic!("expected a single schedule, got {other:?}"),
        }
    }

    #[test]
    fn test_new_project_enters_landscape_editor() {
        let mut session = Session::default();
        assert_eq!(session.orientation(), Orientation::Portrait);
        assert!(session.new_project());
        assert_eq!(session.view(), View::Editor);
        assert_eq!(session.orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_projects_list_round_trip() {
        let mut session = Session::default();
        assert!(session.open_projects());
        assert_eq!(session.view(), View::Projects);
        assert!(session.navigate_home());
        assert_eq!(session.view(), View::Home);
        assert!(session.open_projects());
        assert!(session.select_project("2"));
        assert_eq!(session.view(), View::Editor);
        assert!(session.navigate_home());
        assert_eq!(session.orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_unknown_project_is_ignored() {
        let mut session = Session::default();
        session.open_projects();
        assert!(!session.select_project("99"));
        assert_eq!(session.view(), View::Projects);
    }

    #[test]
    fn test_events_outside_precondition_are_ignored() {
        let mut session = Session::default();
        assert!(session.run().is_empty());
        assert!(session.back().is_empty());
        assert!(!session.navigate_home());
        assert!(!session.select_project("1"));
        session.add_intro();
        assert!(session.add_buttons().is_empty());
        assert!(!session.has_intro());
        assert_eq!(session.view(), View::Home);
    }

    #[test]
    fn test_add_then_remove_buttons_empties() {
        let mut session = in_editor();
        assert_eq!(session.add_buttons().len(), 3);
        for _ in 0..3 {
            assert!(session.remove_button().is_some());
        }
        assert!(session.elements().is_empty());
        assert!(session.remove_button().is_none());
        assert!(session.elements().is_empty());
    }

    #[test]
    fn test_intro_and_background_are_idempotent() {
        let mut session = in_editor();
        session.add_intro();
        session.add_intro();
        session.add_background();
        session.add_background();
        assert!(session.has_intro());
        assert!(session.has_background());
    }

    #[test]
    fn test_run_with_intro_shows_audio_gate_only() {
        for with_background in [false, true] {
            let mut session = in_editor();
            session.add_intro();
            if with_background {
                session.add_background();
            }
            session.run();
            assert_eq!(session.view(), View::Preview);
            assert!(session.show_audio_permission());
            assert!(!session.show_disclaimer());
            assert_eq!(session.phase(), Some(PlaybackPhase::AwaitingAudioPermission));
        }
    }

    #[test]
    fn test_run_with_background_shows_disclaimer_only() {
        let mut session = in_editor();
        session.add_background();
        session.run();
        assert!(session.show_disclaimer());
        assert!(!session.show_audio_permission());
        assert_eq!(session.phase(), Some(PlaybackPhase::AwaitingDisclaimer));
    }

    #[test]
    fn test_run_without_flags_shows_no_gate() {
        let mut session = in_editor();
        session.run();
        assert_eq!(session.view(), View::Preview);
        assert!(!session.show_disclaimer());
        assert!(!session.show_audio_permission());
        assert_eq!(session.phase(), Some(PlaybackPhase::Idle));
    }

    #[test]
    fn test_audio_permission_plays_then_times_out() {
        let mut session = in_editor();
        session.add_intro();
        session.run();
        let effects = session.confirm_audio_permission();
        assert!(matches!(
            effects.as_slice(),
            [Effect::ScheduleTimer { delay, .. }] if *delay == Duration::from_millis(6000)
        ));
        assert!(session.is_playing());
        assert!(!session.show_audio_permission());
        assert!(session.preview_scene().intro_video);

        let token = scheduled_token(&effects);
        assert!(session.fire_timer(token).is_empty());
        assert!(!session.is_playing());
        assert_eq!(session.view(), View::Preview);
        assert_eq!(session.phase(), Some(PlaybackPhase::Idle));
    }

    #[test]
    fn test_disclaimer_plays_background() {
        let mut session = in_editor();
        session.add_background();
        session.run();
        assert_eq!(session.confirm_disclaimer(), vec![Effect::PlayBackgroundVideo]);
        assert!(session.is_playing());
        let scene = session.preview_scene();
        assert!(scene.background_video);
        assert!(!scene.intro_video);
        assert_eq!(session.phase(), Some(PlaybackPhase::Playing));
    }

    #[test]
    fn test_confirm_without_gate_is_ignored() {
        let mut session = in_editor();
        session.run();
        assert!(session.confirm_audio_permission().is_empty());
        assert!(session.confirm_disclaimer().is_empty());
        assert!(!session.is_playing());
    }

    #[test]
    fn test_intro_end_returns_to_editor() {
        let mut session = in_editor();
        session.add_intro();
        session.run();
        let audio = scheduled_token(&session.confirm_audio_permission());
        let effects = session.intro_finished();
        assert!(matches!(
            effects.as_slice(),
            [Effect::ScheduleTimer { delay, .. }] if *delay == Duration::from_millis(3000)
        ));
        assert!(session.intro_finished().is_empty());

        let back_effects = session.fire_timer(scheduled_token(&effects));
        assert_eq!(back_effects, vec![Effect::CancelTimer(audio)]);
        assert_eq!(session.view(), View::Editor);
        assert!(!session.is_playing());
        assert_eq!(session.pending_timers(), 0);
    }

    #[test]
    fn test_back_clears_state_and_cancels_timers() {
        let mut session = in_editor();
        session.add_intro();
        session.run();
        let token = scheduled_token(&session.confirm_audio_permission());

        let effects = session.back();
        assert_eq!(effects, vec![Effect::CancelTimer(token)]);
        assert_eq!(session.view(), View::Editor);
        assert!(!session.is_playing());
        assert!(!session.show_audio_permission());
        assert!(!session.show_disclaimer());
        assert_eq!(session.phase(), None);

        // A late firing of the cancelled timer changes nothing.
        let before = session.clone();
        assert!(session.fire_timer(token).is_empty());
        assert_eq!(session, before);
    }

    #[test]
    fn test_stale_timers_do_not_touch_next_preview() {
        let mut session = in_editor();
        session.add_intro();
        session.run();
        let audio = scheduled_token(&session.confirm_audio_permission());
        let intro_return = scheduled_token(&session.intro_finished());
        assert_eq!(session.pending_timers(), 2);

        assert_eq!(
            session.back(),
            vec![Effect::CancelTimer(audio), Effect::CancelTimer(intro_return)]
        );
        assert!(session.run().is_empty());
        assert_eq!(session.phase(), Some(PlaybackPhase::AwaitingAudioPermission));

        let before = session.clone();
        assert!(session.fire_timer(intro_return).is_empty());
        assert!(session.fire_timer(audio).is_empty());
        assert_eq!(session, before);
        assert_eq!(session.view(), View::Preview);
        assert!(session.show_audio_permission());
    }

    #[test]
    fn test_editor_actions_keep_orientation() {
        let mut session = in_editor();
        let ids = session.add_buttons();
        session.add_intro();
        session.add_background();
        session.commit_position(ids[0], 5.0, 5.0);
        session.remove_button();
        assert_eq!(session.orientation(), Orientation::Landscape);
        session.run();
        assert_eq!(session.orientation(), Orientation::Portrait);
        session.confirm_audio_permission();
        assert_eq!(session.orientation(), Orientation::Portrait);
        session.back();
        assert_eq!(session.orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_back_from_open_gate() {
        let mut session = in_editor();
        session.add_background();
        session.run();
        assert!(session.back().is_empty());
        assert!(!session.show_disclaimer());
        assert_eq!(session.view(), View::Editor);
    }

    #[test]
    fn test_preview_doubles_overlays_without_intro() {
        let mut session = in_editor();
        session.add_buttons();
        while session.elements().len() > 1 {
            session.remove_button();
        }
        session.run();
        let scene = session.preview_scene();
        assert_eq!(scene.overlays.len(), 1);
        let rect = &scene.overlays[0];
        assert_eq!((rect.left, rect.top, rect.width, rect.height), (100.0, 100.0, 160.0, 160.0));
    }

    #[test]
    fn test_overlays_hidden_with_intro() {
        let mut session = in_editor();
        session.add_buttons();
        session.add_intro();
        session.run();
        assert!(session.preview_scene().overlays.is_empty());
    }

    #[test]
    fn test_committed_position_reaches_preview() {
        let mut session = in_editor();
        let ids = session.add_buttons();
        assert!(session.commit_position(ids[0], 20.0, 30.0));
        session.run();
        let scene = session.preview_scene();
        let rect = scene.overlays.iter().find(|r| r.id == ids[0]).unwrap();
        assert_eq!((rect.left, rect.top), (40.0, 60.0));
        assert!(!session.commit_position(ids[0], 0.0, 0.0));
    }

    #[test]
    fn test_custom_timing_is_used() {
        let timing = PlaybackTiming {
            audio_playback_ms: 10,
            intro_return_delay_ms: 20,
        };
        let mut session = Session::new(timing, "b.svg");
        session.new_project();
        session.add_intro();
        session.run();
        assert!(matches!(
            session.confirm_audio_permission().as_slice(),
            [Effect::ScheduleTimer { delay, .. }] if *delay == Duration::from_millis(10)
        ));
        assert!(session.add_buttons().is_empty());
    }
}
