use glam::Vec2;

/// Last known pointer position in surface space.
///
/// `leave` keeps the position so a re-entry without a move event still has
/// something sensible, but an inactive pointer never attracts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl PointerState {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.active = true;
    }

    pub fn leave(&mut self) {
        self.active = false;
    }

    /// The attraction target, if any.
    #[inline]
    pub fn target(&self) -> Option<Vec2> {
        self.active.then_some(self.position)
    }
}
