use dioxus::prelude::*;

use crate::components::Icon;
use crate::constants::*;

#[component]
pub fn HomeView(
    on_new_project: EventHandler<MouseEvent>,
    on_open_projects: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            style: "
                min-height: 100vh; background-color: {BG_APP};
                display: flex; flex-direction: column; align-items: center; justify-content: center;
                padding: 0 24px;
            ",
            div {
                style: "width: 100%; max-width: 384px; display: flex; flex-direction: column; gap: 24px;",
                div {
                    style: "text-align: center; margin-bottom: 48px;",
                    h1 { style: "font-size: 30px; font-weight: 700; color: {TEXT_PRIMARY}; margin: 0 0 8px 0;", "Video Creator" }
                    p { style: "color: {TEXT_MUTED}; margin: 0;", "Создавай потрясающие видео" }
                }
                button {
                    class: "primary-btn",
                    style: "
                        width: 100%; height: 56px; display: flex; align-items: center; justify-content: center; gap: 8px;
                        background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY}; border: none; border-radius: 12px;
                        font-size: 18px; font-weight: 500; cursor: pointer;
                    ",
                    onclick: move |e| on_new_project.call(e),
                    Icon { name: "Plus", size: 20 }
                    "Новый проект"
                }
                button {
                    class: "ghost-btn",
                    style: "
                        width: 100%; height: 56px; display: flex; align-items: center; justify-content: center; gap: 8px;
                        background: transparent; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 12px;
                        font-size: 18px; font-weight: 500; cursor: pointer;
                    ",
                    onclick: move |e| on_open_projects.call(e),
                    Icon { name: "FolderOpen", size: 20 }
                    "Мои проекты"
                }
            }
        }
    }
}
