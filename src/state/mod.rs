//! State management module
//!
//! This module contains all the core data structures for the application:
//! - View: The top-level screens and the view selector
//! - Project: Seeded entries in the projects list
//! - DraggableElement: Overlay buttons placed on the editor canvas
//! - Playback: Timers and effects for the preview sequencer
//! - Session: The single state container and its transitions

mod view;
mod project;
mod element;
mod playback;
mod session;

pub use view::*;
pub use project::*;
pub use element::*;
pub use playback::*;
pub use session::*;
