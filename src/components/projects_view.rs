use dioxus::prelude::*;

use crate::components::Icon;
use crate::constants::*;
use crate::state::Project;

#[component]
pub fn ProjectsView(
    projects: Vec<Project>,
    on_back: EventHandler<MouseEvent>,
    on_select: EventHandler<String>,
) -> Element {
    let rows: Vec<(String, String, String)> = projects
        .iter()
        .map(|p| (p.id.clone(), p.name.clone(), p.created_label()))
        .collect();
    rsx! {
        div {
            style: "min-height: 100vh; background-color: {BG_APP}; padding: 24px;",
            div {
                style: "display: flex; align-items: center; margin-bottom: 24px;",
                button {
                    class: "ghost-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        padding: 6px 10px; border-radius: 6px; cursor: pointer;
                    ",
                    onclick: move |e| on_back.call(e),
                    Icon { name: "ArrowLeft", size: 20 }
                }
                h1 { style: "font-size: 24px; font-weight: 700; color: {TEXT_PRIMARY}; margin: 0 0 0 16px;", "Мои проекты" }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                for (id, name, created) in rows {
                    div {
                        key: "{id}",
                        class: "project-card",
                        style: "
                            background-color: {BG_PANEL}; border: 1px solid {BORDER_CARD}; border-radius: 8px;
                            padding: 16px; cursor: pointer;
                            display: flex; align-items: center; justify-content: space-between;
                        ",
                        onclick: {
                            let id = id.clone();
                            move |_| on_select.call(id.clone())
                        },
                        div {
                            h3 { style: "color: {TEXT_PRIMARY}; font-weight: 500; margin: 0;", "{name}" }
                            p { style: "color: {TEXT_MUTED}; font-size: 14px; margin: 4px 0 0 0;", "Создан: {created}" }
                        }
                        Icon { name: "ChevronRight", size: 20, color: TEXT_MUTED }
                    }
                }
            }
        }
    }
}
