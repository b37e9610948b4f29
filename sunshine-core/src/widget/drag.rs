//! Drag-to-move for the borderless window.

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Tracks the press anchor while the pointer button is held.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    anchor: Option<Point>,
}

impl DragState {
    /// Record the pointer position, local to the window, at press time.
    pub fn press(&mut self, local: Point) {
        self.anchor = Some(local);
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// New window origin for a pointer move: `origin + (pointer - anchor)`.
    ///
    /// `pointer` is local to the window. Returns `None` when no press is
    /// being tracked.
    pub fn move_to(&self, origin: Point, pointer: Point) -> Option<Point> {
        let anchor = self.anchor?;
        Some(Point::new(
            origin.x + (pointer.x - anchor.x),
            origin.y + (pointer.y - anchor.y),
        ))
    }

    pub fn release(&mut self) {
        self.anchor = None;
    }
}
