use dioxus::prelude::*;

/// Glyph drawn for an icon name. Unknown names draw nothing.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "Plus" => "+",
        "FolderOpen" => "📂",
        "ArrowLeft" => "←",
        "ChevronRight" => "›",
        "Video" => "🎬",
        "Image" => "🖼",
        "Square" => "□",
        "Trash2" => "🗑",
        "Play" => "▶",
        "Monitor" => "🖥",
        _ => "",
    }
}

#[component]
pub fn Icon(name: &'static str, size: u32, color: Option<&'static str>) -> Element {
    let glyph = icon_glyph(name);
    let color_style = color.map(|c| format!("color: {c};")).unwrap_or_default();
    rsx! {
        span {
            style: "
                display: inline-flex; align-items: center; justify-content: center;
                width: {size}px; height: {size}px; font-size: {size}px; line-height: 1;
                {color_style}
            ",
            aria_hidden: "true",
            "{glyph}"
        }
    }
}
