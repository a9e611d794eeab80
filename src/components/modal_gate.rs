use dioxus::prelude::*;

use crate::constants::*;

/// Blocking dialog over the preview that must be confirmed before playback.
#[component]
pub fn ModalGate(
    title: &'static str,
    message: &'static str,
    confirm_label: &'static str,
    on_confirm: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            style: "
                position: absolute; inset: 0; z-index: 40;
                background-color: {BG_SCRIM};
                display: flex; align-items: center; justify-content: center;
            ",
            div {
                style: "
                    background-color: {BG_CANVAS}; padding: 32px; border-radius: 8px;
                    text-align: center; max-width: 448px; margin: 0 16px;
                ",
                onclick: move |e| e.stop_propagation(),
                h3 { style: "font-size: 20px; font-weight: 700; margin: 0 0 16px 0; color: {TEXT_MODAL};", "{title}" }
                p { style: "color: {TEXT_MODAL_BODY}; margin: 0 0 24px 0;", "{message}" }
                button {
                    class: "primary-btn",
                    style: "
                        background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY}; border: none;
                        padding: 8px 16px; border-radius: 6px; font-size: 14px; cursor: pointer;
                    ",
                    onclick: move |e| on_confirm.call(e),
                    "{confirm_label}"
                }
            }
        }
    }
}
