//! Root application component
//!
//! Owns the session signal, carries out the effects returned by session
//! transitions (timers, background video playback) and dispatches to the
//! screen chosen by the view selector.

use dioxus::core::Task;
use dioxus::desktop::{use_window, LogicalSize};
use dioxus::prelude::*;
use log::debug;
use std::collections::HashMap;

use crate::components::{EditorView, HomeView, PreviewView, ProjectsView};
use crate::config::AppConfig;
use crate::constants::*;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{
    select_view, DragGesture, Effect, PlaybackPhase, Session, TimerToken, View, ViewBranch,
};

type TimerTasks = Signal<HashMap<TimerToken, Task>>;

/// Main application component
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let button_image = config.assets.button_image.clone();
    let timing = config.timing;
    let session = use_signal(move || Session::new(timing, button_image));
    let timers: TimerTasks = use_signal(HashMap::new);
    let drag = use_signal(|| None::<DragGesture>);

    // Resize the window whenever the orientation flips.
    let desktop = use_window();
    let (configured_width, configured_height) = (config.window.width, config.window.height);
    let orientation = use_memo(move || session.read().orientation());
    use_effect(move || {
        let orientation = orientation();
        let (width, height) = orientation.window_size(configured_width, configured_height);
        debug!("app: orientation {:?}, window {}x{}", orientation, width, height);
        desktop.window.set_inner_size(LogicalSize::new(width, height));
    });

    let snapshot = session.read().clone();
    let branch = select_view(snapshot.view(), snapshot.orientation());

    let on_keydown = move |e: KeyboardEvent| {
        let (view, phase) = {
            let current = session.read();
            (current.view(), current.phase())
        };
        let audio_gate = phase == Some(PlaybackPhase::AwaitingAudioPermission);
        let context = HotkeyContext {
            view,
            gate_open: audio_gate || phase == Some(PlaybackPhase::AwaitingDisclaimer),
            dragging: drag().is_some(),
        };

        if let HotkeyResult::Action(action) = handle_hotkey(&e.key(), &context) {
            e.prevent_default();
            debug!("app: hotkey {:?}", action);
            match action {
                HotkeyAction::NewProject => {
                    transition(session, |s| s.new_project());
                }
                HotkeyAction::Back if context.view == View::Preview => {
                    dispatch(session, timers, Session::back);
                }
                HotkeyAction::Back => {
                    transition(session, |s| s.navigate_home());
                }
                HotkeyAction::ConfirmGate if audio_gate => {
                    dispatch(session, timers, Session::confirm_audio_permission);
                }
                HotkeyAction::ConfirmGate => {
                    dispatch(session, timers, Session::confirm_disclaimer);
                }
                HotkeyAction::Run => {
                    dispatch(session, timers, Session::run);
                }
            }
        }
    };

    let screen = match branch {
        Some(ViewBranch::Home) => rsx! {
            HomeView {
                on_new_project: move |_| transition(session, |s| s.new_project()),
                on_open_projects: move |_| transition(session, |s| s.open_projects()),
            }
        },
        Some(ViewBranch::Projects) => rsx! {
            ProjectsView {
                projects: snapshot.projects().to_vec(),
                on_back: move |_| transition(session, |s| s.navigate_home()),
                on_select: move |id: String| transition(session, |s| s.select_project(&id)),
            }
        },
        Some(ViewBranch::Editor) => rsx! {
            EditorView {
                has_intro: snapshot.has_intro(),
                has_background: snapshot.has_background(),
                elements: snapshot.elements().iter().cloned().collect::<Vec<_>>(),
                drag,
                on_home: move |_| transition(session, |s| s.navigate_home()),
                on_run: move |_| dispatch(session, timers, Session::run),
                on_add_intro: move |_| transition(session, |s| s.add_intro()),
                on_add_background: move |_| transition(session, |s| s.add_background()),
                on_add_buttons: move |_| transition(session, |s| s.add_buttons()),
                on_remove_button: move |_| transition(session, |s| s.remove_button()),
                on_commit_position: move |(id, x, y): (uuid::Uuid, f64, f64)| transition(session, |s| s.commit_position(id, x, y)),
            }
        },
        Some(ViewBranch::Preview) => rsx! {
            PreviewView {
                scene: snapshot.preview_scene(),
                show_audio_permission: snapshot.show_audio_permission(),
                show_disclaimer: snapshot.show_disclaimer(),
                intro_src: config.assets.intro_video.clone(),
                background_src: config.assets.background_video.clone(),
                on_back: move |_| dispatch(session, timers, Session::back),
                on_confirm_audio: move |_| dispatch(session, timers, Session::confirm_audio_permission),
                on_confirm_disclaimer: move |_| dispatch(session, timers, Session::confirm_disclaimer),
                on_intro_ended: move |_| dispatch(session, timers, Session::intro_finished),
            }
        },
        None => rsx! {},
    };

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_APP}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            .primary-btn {{ transition: background-color 0.15s ease; }}
            .primary-btn:hover {{ background-color: {ACCENT_PRIMARY_HOVER} !important; }}
            .ghost-btn {{ transition: background-color 0.15s ease; }}
            .ghost-btn:hover {{ background-color: {BG_HOVER} !important; }}
            .project-card {{ transition: background-color 0.15s ease; }}
            .project-card:hover {{ background-color: {BG_HOVER} !important; }}
            .preview-overlay {{ transition: transform 0.15s ease; }}
            .preview-overlay:hover {{ transform: scale(1.05); }}
            "#
        }

        div {
            class: "app-container",
            style: "
                width: 100vw; height: 100vh; overflow: hidden;
                background-color: {BG_APP}; color: {TEXT_PRIMARY};
                font-family: {FONT_STACK};
                outline: none; user-select: none;
            ",
            tabindex: "0",
            // Focus on mount so hotkeys work before the first click
            onmounted: move |e: MountedEvent| async move {
                let _ = e.set_focus(true).await;
            },
            onkeydown: on_keydown,

            {screen}
        }
    }
}

/// Run a transition that has no effects.
fn transition<R>(mut session: Signal<Session>, f: impl FnOnce(&mut Session) -> R) {
    let mut guard = session.write();
    f(&mut *guard);
}

/// Run a transition and carry out the effects it returns.
fn dispatch(mut session: Signal<Session>, timers: TimerTasks, f: impl FnOnce(&mut Session) -> Vec<Effect>) {
    let effects = {
        let mut guard = session.write();
        f(&mut *guard)
    };
    if !effects.is_empty() {
        debug!("app: applying {:?}, {} timers pending", effects, session.read().pending_timers());
    }
    apply_effects(effects, session, timers);
}

fn apply_effects(effects: Vec<Effect>, session: Signal<Session>, mut timers: TimerTasks) {
    for effect in effects {
        match effect {
            Effect::ScheduleTimer { token, delay } => {
                let task = spawn(async move {
                    tokio::time::sleep(delay).await;
                    timers.write().remove(&token);
                    dispatch(session, timers, |s| s.fire_timer(token));
                });
                timers.write().insert(token, task);
            }
            Effect::CancelTimer(token) => {
                if let Some(task) = timers.write().remove(&token) {
                    debug!("app: cancelling timer task {:?}", token);
                    task.cancel();
                }
            }
            Effect::PlayBackgroundVideo => {
                let _ = document::eval(BACKGROUND_VIDEO_PLAY_SCRIPT);
            }
        }
    }
}
