/// A closed range of f32 values.
///
/// Used for the camera's valid hit-distance window and for clamping color
/// channels to unit range before they reach the image buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// The unit range [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is within [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Returns true if x is within (min, max] — past min, up to and
    /// including max. This is the forward-hit window: a hit at exactly
    /// the far plane is still visible, a hit at the ray origin is not.
    pub fn admits(&self, x: f32) -> bool {
        self.min < x && x <= self.max
    }

    /// Clamps x to be within [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
