//! Shared UI constants such as colors, canvas sizing, and scripts.

pub const BG_APP: &str = "#2D2D2D";
pub const BG_PANEL: &str = "#1f2937";
pub const BG_BAR: &str = "#111827";
pub const BG_HOVER: &str = "#374151";
pub const BG_CANVAS: &str = "#ffffff";
pub const BG_PREVIEW: &str = "#000000";
pub const BG_SCRIM: &str = "rgba(0, 0, 0, 0.8)";
pub const BG_BACK_BUTTON: &str = "rgba(0, 0, 0, 0.5)";

pub const BORDER_DEFAULT: &str = "#4b5563";
pub const BORDER_CARD: &str = "#374151";
pub const BORDER_ELEMENT: &str = "#60a5fa";

pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_MUTED: &str = "#9ca3af";
pub const TEXT_MODAL: &str = "#111827";
pub const TEXT_MODAL_BODY: &str = "#4b5563";

pub const ACCENT_PRIMARY: &str = "#3B82F6";
pub const ACCENT_PRIMARY_HOVER: &str = "#2563EB";
pub const ACCENT_DANGER: &str = "#f87171";
pub const GRADIENT_FROM: &str = "#60a5fa";
pub const GRADIENT_TO: &str = "#9333ea";

pub const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif";

pub const EDITOR_SIDEBAR_WIDTH: f64 = 256.0;
pub const EDITOR_CANVAS_WIDTH: f64 = 400.0;
pub const EDITOR_CANVAS_HEIGHT: f64 = 300.0;

pub const BACKGROUND_VIDEO_ID: &str = "background-video";

/// Starts the background video once it is mounted. The element only exists
/// while playing, so the script retries briefly until it appears.
pub const BACKGROUND_VIDEO_PLAY_SCRIPT: &str = r#"
const videoId = "background-video";

function attempt(remaining) {
    const video = document.getElementById(videoId);
    if (!video) {
        if (remaining > 0) {
            setTimeout(() => attempt(remaining - 1), 50);
        }
        return;
    }
    const started = video.play();
    if (started && started.catch) {
        started.catch(() => {});
    }
}

attempt(40);
"#;
