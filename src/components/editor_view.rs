use dioxus::prelude::*;
use std::path::Path;
use uuid::Uuid;

use crate::components::Icon;
use crate::constants::*;
use crate::state::{DragGesture, DraggableElement};
use crate::utils::{absolute_box_style, get_local_file_url};

#[component]
pub fn EditorView(
    has_intro: bool,
    has_background: bool,
    elements: Vec<DraggableElement>,
    drag: Signal<Option<DragGesture>>,
    on_home: EventHandler<MouseEvent>,
    on_run: EventHandler<MouseEvent>,
    on_add_intro: EventHandler<MouseEvent>,
    on_add_background: EventHandler<MouseEvent>,
    on_add_buttons: EventHandler<MouseEvent>,
    on_remove_button: EventHandler<MouseEvent>,
    on_commit_position: EventHandler<(Uuid, f64, f64)>,
) -> Element {
    let show_placeholder = !has_background && elements.is_empty();
    let live = drag();
    let boxes: Vec<(Uuid, DraggableElement, String, String)> = elements
        .into_iter()
        .map(|element| {
            let (x, y) = match live {
                Some(gesture) if gesture.element_id == element.id => gesture.position(),
                _ => (element.x, element.y),
            };
            let style = absolute_box_style(x, y, element.width, element.height);
            let url = get_local_file_url(Path::new(&element.src));
            (element.id, element, style, url)
        })
        .collect();
    let canvas_cursor = if live.is_some() { "grabbing" } else { "default" };

    let mut finish_drag = move || {
        if let Some(gesture) = drag() {
            drag.set(None);
            if gesture.moved() {
                let (x, y) = gesture.position();
                on_commit_position.call((gesture.element_id, x, y));
            }
        }
    };

    rsx! {
        div {
            style: "height: 100vh; background-color: {BG_APP}; display: flex;",

            // Tools sidebar
            div {
                style: "
                    width: {EDITOR_SIDEBAR_WIDTH}px; background-color: {BG_PANEL}; padding: 16px;
                    display: flex; flex-direction: column; gap: 12px;
                ",
                h2 { style: "color: {TEXT_PRIMARY}; font-weight: 700; font-size: 18px; margin: 0 0 16px 0;", "Инструменты" }
                ToolButton { icon: "Video", label: "Заставка", active: has_intro, on_click: on_add_intro }
                ToolButton { icon: "Image", label: "Добавить фон", active: has_background, on_click: on_add_background }
                ToolButton { icon: "Square", label: "Добавить кнопки", on_click: on_add_buttons }
                ToolButton { icon: "Trash2", label: "Удалить кнопку", danger: true, on_click: on_remove_button }
            }

            div {
                style: "flex: 1; display: flex; flex-direction: column;",

                // Top bar
                div {
                    style: "
                        background-color: {BG_BAR}; padding: 16px;
                        display: flex; justify-content: space-between; align-items: center;
                    ",
                    button {
                        class: "ghost-btn",
                        style: "
                            background: transparent; border: none; color: {TEXT_PRIMARY};
                            display: flex; align-items: center; gap: 8px;
                            padding: 8px 12px; border-radius: 6px; font-size: 14px; cursor: pointer;
                        ",
                        onclick: move |e| on_home.call(e),
                        Icon { name: "ArrowLeft", size: 20 }
                        "Назад"
                    }
                    button {
                        class: "primary-btn",
                        style: "
                            background-color: {ACCENT_PRIMARY}; color: {TEXT_PRIMARY}; border: none;
                            display: flex; align-items: center; gap: 8px;
                            padding: 8px 24px; border-radius: 6px; font-size: 14px; font-weight: 500; cursor: pointer;
                        ",
                        onclick: move |e| on_run.call(e),
                        Icon { name: "Play", size: 16 }
                        "RUN"
                    }
                }

                // Canvas
                div {
                    style: "flex: 1; padding: 24px; display: flex; align-items: center; justify-content: center;",
                    div {
                        style: "
                            position: relative; width: {EDITOR_CANVAS_WIDTH}px; height: {EDITOR_CANVAS_HEIGHT}px;
                            background-color: {BG_CANVAS}; border-radius: 8px; cursor: {canvas_cursor};
                        ",
                        onmousemove: move |e| {
                            if let Some(mut gesture) = drag() {
                                e.prevent_default();
                                let point = e.client_coordinates();
                                gesture.update((point.x, point.y));
                                drag.set(Some(gesture));
                            }
                        },
                        onmouseup: move |_| finish_drag(),
                        onmouseleave: move |_| finish_drag(),

                        if has_background {
                            div {
                                style: "
                                    position: absolute; inset: 0; border-radius: 8px; opacity: 0.8;
                                    background: linear-gradient(to bottom right, {GRADIENT_FROM}, {GRADIENT_TO});
                                ",
                            }
                        }

                        for (id, element, style, url) in boxes {
                            div {
                                key: "{id}",
                                style: "{style} cursor: move;",
                                onmousedown: move |e| {
                                    e.prevent_default();
                                    e.stop_propagation();
                                    let point = e.client_coordinates();
                                    drag.set(Some(DragGesture::begin(&element, (point.x, point.y))));
                                },
                                img {
                                    src: "{url}",
                                    alt: "Draggable button",
                                    draggable: "false",
                                    style: "
                                        width: 100%; height: 100%; object-fit: cover; pointer-events: none;
                                        border-radius: 8px; border: 2px solid {BORDER_ELEMENT}; box-sizing: border-box;
                                    ",
                                }
                            }
                        }

                        if show_placeholder {
                            div {
                                style: "display: flex; align-items: center; justify-content: center; height: 100%;",
                                Icon { name: "Monitor", size: 48, color: TEXT_MUTED }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ToolButton(
    icon: &'static str,
    label: &'static str,
    #[props(default)] active: bool,
    #[props(default)] danger: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let (background, color, border) = if danger {
        ("transparent", ACCENT_DANGER, ACCENT_DANGER)
    } else if active {
        (ACCENT_PRIMARY, TEXT_PRIMARY, ACCENT_PRIMARY)
    } else {
        ("transparent", TEXT_PRIMARY, BORDER_DEFAULT)
    };
    rsx! {
        button {
            class: "ghost-btn",
            style: "
                width: 100%; display: flex; align-items: center; justify-content: flex-start; gap: 8px;
                background: {background}; color: {color}; border: 1px solid {border};
                padding: 8px 12px; border-radius: 6px; font-size: 14px; cursor: pointer;
            ",
            onclick: move |e| on_click.call(e),
            Icon { name: icon, size: 16 }
            "{label}"
        }
    }
}
