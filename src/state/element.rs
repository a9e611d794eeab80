//! Draggable overlay elements placed on the editor canvas.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Positions used by "add buttons", in editor canvas pixels.
pub const BUTTON_BATCH_POSITIONS: [(f64, f64); 3] = [(50.0, 50.0), (150.0, 100.0), (100.0, 200.0)];
/// Width and height of every generated button.
pub const BUTTON_SIZE: f64 = 80.0;

/// A user-positioned overlay image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraggableElement {
    pub id: Uuid,
    /// Asset path of the image.
    pub src: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DraggableElement {
    pub fn new(src: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            src: src.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Geometry of this element with position and size multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> OverlayRect {
        OverlayRect {
            id: self.id,
            src: self.src.clone(),
            left: self.x * factor,
            top: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Absolute placement of an overlay in the preview.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRect {
    pub id: Uuid,
    pub src: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Ordered list of overlay elements; the last one is the most recently added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementLayer {
    elements: Vec<DraggableElement>,
}

impl ElementLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the fixed batch of three buttons. Returns the new ids in order.
    pub fn add_button_batch(&mut self, src: &str) -> Vec<Uuid> {
        BUTTON_BATCH_POSITIONS
            .iter()
            .map(|&(x, y)| {
                let element = DraggableElement::new(src, x, y, BUTTON_SIZE, BUTTON_SIZE);
                let id = element.id;
                self.elements.push(element);
                id
            })
            .collect()
    }

    /// Remove the most recently added element. Empty layers stay empty.
    pub fn remove_last(&mut self) -> Option<DraggableElement> {
        self.elements.pop()
    }

    /// Store a dragged element's final position. Returns false for unknown ids.
    pub fn commit_position(&mut self, id: Uuid, x: f64, y: f64) -> bool {
        match self.elements.iter_mut().find(|e| e.id == id) {
            Some(element) => {
                element.x = x;
                element.y = y;
                true
            }
            None => false,
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, id: Uuid) -> Option<&DraggableElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DraggableElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Every element scaled by `factor`, in stacking order.
    pub fn scaled(&self, factor: f64) -> Vec<OverlayRect> {
        self.elements.iter().map(|e| e.scaled(factor)).collect()
    }
}

/// An in-progress drag of one element.
///
/// Holds the pointer position and element origin at mouse-down so the live
/// position is a pure function of the current pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub element_id: Uuid,
    pointer_start: (f64, f64),
    origin: (f64, f64),
    current: (f64, f64),
}

impl DragGesture {
    pub fn begin(element: &DraggableElement, pointer: (f64, f64)) -> Self {
        Self {
            element_id: element.id,
            pointer_start: pointer,
            origin: (element.x, element.y),
            current: (element.x, element.y),
        }
    }

    /// Track the pointer and return the element's live position.
    pub fn update(&mut self, pointer: (f64, f64)) -> (f64, f64) {
        self.current = (
            self.origin.0 + (pointer.0 - self.pointer_start.0),
            self.origin.1 + (pointer.1 - self.pointer_start.1),
        );
        self.current
    }

    pub fn position(&self) -> (f64, f64) {
        self.current
    }

    pub fn moved(&self) -> bool {
        self.current != self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_button_batch_layout() {
        let mut layer = ElementLayer::new();
        let ids = layer.add_button_batch("assets/placeholder.svg");
        assert_eq!(ids.len(), 3);
        let positions: Vec<(f64, f64)> = layer.iter().map(|e| (e.x, e.y)).collect();
        assert_eq!(positions, vec![(50.0, 50.0), (150.0, 100.0), (100.0, 200.0)]);
        assert!(layer.iter().all(|e| e.width == 80.0 && e.height == 80.0));
        assert!(layer.iter().all(|e| e.src == "assets/placeholder.svg"));
    }

    #[test]
    fn test_batches_get_distinct_ids() {
        let mut layer = ElementLayer::new();
        let mut ids = layer.add_button_batch("a.svg");
        ids.extend(layer.add_button_batch("a.svg"));
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6);
        assert_eq!(layer.len(), 6);
    }

    #[test]
    fn test_remove_last_is_lifo() {
        let mut layer = ElementLayer::new();
        let ids = layer.add_button_batch("a.svg");
        assert_eq!(layer.remove_last().map(|e| e.id), Some(ids[2]));
        assert_eq!(layer.remove_last().map(|e| e.id), Some(ids[1]));
        assert_eq!(layer.remove_last().map(|e| e.id), Some(ids[0]));
        assert!(layer.remove_last().is_none());
        assert!(layer.is_empty());
    }

    #[test]
    fn test_commit_position() {
        let mut layer = ElementLayer::new();
        let ids = layer.add_button_batch("a.svg");
        assert!(layer.commit_position(ids[1], 10.0, 20.0));
        let moved = layer.get(ids[1]).unwrap();
        assert_eq!((moved.x, moved.y), (10.0, 20.0));
        assert!(!layer.commit_position(Uuid::new_v4(), 1.0, 1.0));
    }

    #[test]
    fn test_scaled_doubles_geometry() {
        let element = DraggableElement::new("a.svg", 50.0, 50.0, 80.0, 80.0);
        let rect = element.scaled(2.0);
        assert_eq!((rect.left, rect.top, rect.width, rect.height), (100.0, 100.0, 160.0, 160.0));
        assert_eq!(rect.id, element.id);
    }

    #[test]
    fn test_drag_gesture_follows_pointer() {
        let element = DraggableElement::new("a.svg", 150.0, 100.0, 80.0, 80.0);
        let mut drag = DragGesture::begin(&element, (400.0, 300.0));
        assert!(!drag.moved());
        assert_eq!(drag.update((430.0, 290.0)), (180.0, 90.0));
        assert_eq!(drag.update((380.0, 320.0)), (130.0, 120.0));
        assert_eq!(drag.position(), (130.0, 120.0));
        assert!(drag.moved());
    }
}
