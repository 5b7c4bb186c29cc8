//! Yard-space coordinates and facing direction.
//!
//! `Position` uses `f32` in abstract yard units.  The `z` component is carried
//! so render hosts can pass their transform through unchanged; behavior code
//! keeps it at whatever the host placed it at and never samples into it.

/// A point in yard space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point on the ground plane (`z = 0`).
    #[inline]
    pub const fn planar(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Euclidean distance to `other`, in yard units.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// `true` if every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::ops::Add for Position {
    type Output = Position;
    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// Which way the sprite looks along the x axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing needed to look from `from` toward `to`.
    ///
    /// Strictly greater `x` faces right; anything else (including a target
    /// straight above or below) faces left.
    #[inline]
    pub fn toward(from: Position, to: Position) -> Facing {
        if to.x > from.x { Facing::Right } else { Facing::Left }
    }

    /// Sprite flip flag for renderers whose art faces right.
    #[inline]
    pub fn flip_x(self) -> bool {
        matches!(self, Facing::Left)
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Facing::Left  => "left",
            Facing::Right => "right",
        })
    }
}
