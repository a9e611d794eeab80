//! Top-level screens and the view selector.

use serde::{Deserialize, Serialize};

/// One of the four mutually exclusive top-level screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Home,
    Projects,
    Editor,
    Preview,
}

/// Display mode of the window. Derived from the view, never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl View {
    /// The editor is the only landscape screen.
    pub fn orientation(self) -> Orientation {
        match self {
            View::Editor => Orientation::Landscape,
            _ => Orientation::Portrait,
        }
    }
}

impl Orientation {
    /// Window size for this orientation, from a configured size in either order.
    pub fn window_size(self, width: f64, height: f64) -> (f64, f64) {
        let (short, long) = if width <= height { (width, height) } else { (height, width) };
        match self {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

/// Render branch chosen for a `(view, orientation)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewBranch {
    Home,
    Projects,
    Editor,
    Preview,
}

/// Map the current view and orientation to a render branch.
///
/// Preview matches in either orientation. Any other mismatch (which cannot
/// happen while orientation is derived from the view) renders nothing.
pub fn select_view(view: View, orientation: Orientation) -> Option<ViewBranch> {
    match (view, orientation) {
        (View::Home, Orientation::Portrait) => Some(ViewBranch::Home),
        (View::Projects, Orientation::Portrait) => Some(ViewBranch::Projects),
        (View::Editor, Orientation::Landscape) => Some(ViewBranch::Editor),
        (View::Preview, _) => Some(ViewBranch::Preview),
        _ => None,
    }
}
