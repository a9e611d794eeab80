//! UI components, one per screen plus the shared pieces they are built from.
mod icon;
mod modal_gate;
mod home_view;
mod projects_view;
mod editor_view;
mod preview_view;

pub use icon::Icon;
pub use modal_gate::ModalGate;
pub use home_view::HomeView;
pub use projects_view::ProjectsView;
pub use editor_view::EditorView;
pub use preview_view::PreviewView;
