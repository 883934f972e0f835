use glam::DVec2;

/// Latest raw pointer sample, in the host's client coordinates.
///
/// Written by the `pointermove` listener, read once per frame by the engine.
/// Samples arriving between frames simply overwrite each other.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    pub fn at(position: DVec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }

    /// Overwrite both coordinates together.
    #[inline]
    pub fn record(&mut self, x: f64, y: f64) {
        *self = Self { x, y };
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Reference frame for the initial layout and the anchored blob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.at([0.5, 0.5])
    }

    /// Point at the given fractions of width and height.
    #[inline]
    pub fn at(&self, fraction: [f64; 2]) -> DVec2 {
        DVec2::new(self.width * fraction[0], self.height * fraction[1])
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let [w, h] = crate::constants::FALLBACK_VIEWPORT;
        Self::new(w, h)
    }
}
