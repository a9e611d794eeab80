use dioxus::prelude::*;
use std::path::Path;

use crate::components::{Icon, ModalGate};
use crate::constants::*;
use crate::state::PreviewScene;
use crate::utils::{absolute_box_style, get_local_file_url};

/// Fullscreen run mode: modal gates, intro/background videos and the
/// scaled overlay buttons.
#[component]
pub fn PreviewView(
    scene: PreviewScene,
    show_audio_permission: bool,
    show_disclaimer: bool,
    intro_src: String,
    background_src: String,
    on_back: EventHandler<MouseEvent>,
    on_confirm_audio: EventHandler<MouseEvent>,
    on_confirm_disclaimer: EventHandler<MouseEvent>,
    on_intro_ended: EventHandler<()>,
) -> Element {
    let intro_url = get_local_file_url(Path::new(&intro_src));
    let background_url = get_local_file_url(Path::new(&background_src));
    let overlays: Vec<(String, String, String)> = scene
        .overlays
        .iter()
        .map(|rect| {
            (
                rect.id.to_string(),
                absolute_box_style(rect.left, rect.top, rect.width, rect.height),
                get_local_file_url(Path::new(&rect.src)),
            )
        })
        .collect();

    rsx! {
        div {
            style: "height: 100vh; background-color: {BG_PREVIEW}; position: relative; overflow: hidden;",

            button {
                class: "primary-btn",
                style: "
                    position: absolute; top: 16px; right: 16px; z-index: 50;
                    background-color: {BG_BACK_BUTTON}; color: {TEXT_PRIMARY}; border: none;
                    display: flex; align-items: center; gap: 4px;
                    padding: 6px 12px; border-radius: 6px; font-size: 13px; cursor: pointer;
                ",
                onclick: move |e| on_back.call(e),
                Icon { name: "ArrowLeft", size: 16 }
                "Назад"
            }

            if show_audio_permission {
                ModalGate {
                    title: "Разрешить звук",
                    message: "Для воспроизведения видео необходимо разрешить звук",
                    confirm_label: "Разрешить",
                    on_confirm: on_confirm_audio,
                }
            }

            if show_disclaimer {
                ModalGate {
                    title: "Уведомление",
                    message: "Мы никого не пытаемся оскорбить, помни!",
                    confirm_label: "Ок",
                    on_confirm: on_confirm_disclaimer,
                }
            }

            if scene.background_video {
                video {
                    id: BACKGROUND_VIDEO_ID,
                    style: "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;",
                    src: "{background_url}",
                    r#loop: true,
                    muted: false,
                    playsinline: true,
                }
            }

            if scene.intro_video {
                video {
                    style: "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;",
                    src: "{intro_url}",
                    autoplay: true,
                    muted: false,
                    playsinline: true,
                    onended: move |_| on_intro_ended.call(()),
                }
            }

            for (id, style, url) in overlays {
                div {
                    key: "{id}",
                    class: "preview-overlay",
                    style: "{style} cursor: pointer;",
                    img {
                        src: "{url}",
                        alt: "Button",
                        style: "width: 100%; height: 100%; object-fit: cover; border-radius: 8px;",
                    }
                }
            }
        }
    }
}
