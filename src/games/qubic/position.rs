//! Cube coordinates, line directions, and the packed move encoding.

use serde::{Deserialize, Serialize};

/// Cells per axis.
pub const SIZE: usize = 4;

/// Marks in a row needed to win.
pub const LINE_LENGTH: usize = 4;

/// A move: one cell of the cube, addressed by `(x, y, z)`.
///
/// Every component is always in `0..SIZE`. Construction through
/// [`Move::new`] asserts this; [`Move::try_new`] checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    x: u8,
    y: u8,
    z: u8,
}

impl Move {
    /// Creates a move.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is outside `0..4`. The engine only ever
    /// builds coordinates from its own bounded loops, so this is a
    /// programmer error rather than a recoverable condition.
    #[track_caller]
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        assert!(
            Self::in_range(x, y, z),
            "coordinate out of range: ({x}, {y}, {z})"
        );
        Self { x, y, z }
    }

    /// Creates a move, returning `None` for out-of-range coordinates.
    pub fn try_new(x: u8, y: u8, z: u8) -> Option<Self> {
        Self::in_range(x, y, z).then_some(Self { x, y, z })
    }

    fn in_range(x: u8, y: u8, z: u8) -> bool {
        [x, y, z].iter().all(|&c| usize::from(c) < SIZE)
    }

    /// X coordinate (outermost axis).
    pub fn x(self) -> u8 {
        self.x
    }

    /// Y coordinate.
    pub fn y(self) -> u8 {
        self.y
    }

    /// Z coordinate (innermost axis).
    pub fn z(self) -> u8 {
        self.z
    }

    /// Coordinates as a tuple.
    pub fn coords(self) -> (u8, u8, u8) {
        (self.x, self.y, self.z)
    }

    /// All 64 cells in scan order: x outer, y middle, z inner.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE as u8).flat_map(|x| {
            (0..SIZE as u8).flat_map(move |y| (0..SIZE as u8).map(move |z| Move { x, y, z }))
        })
    }

    /// The cell `k` steps from here along `direction`, if still on the cube.
    pub fn step(self, direction: Direction, k: usize) -> Option<Move> {
        let k = i16::try_from(k).ok()?;
        let shift = |c: u8, d: i8| {
            let next = i16::from(c) + i16::from(d) * k;
            u8::try_from(next).ok()
        };
        Move::try_new(
            shift(self.x, direction.dx)?,
            shift(self.y, direction.dy)?,
            shift(self.z, direction.dz)?,
        )
    }

    /// Packs this move into its single-integer form.
    pub fn pack(self) -> PackedMove {
        MoveCodec::encode(self.x, self.y, self.z)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A unit step through the cube, each component in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    dx: i8,
    dy: i8,
    dz: i8,
}

impl Direction {
    const fn new(dx: i8, dy: i8, dz: i8) -> Self {
        Self { dx, dy, dz }
    }

    /// One representative per undirected line family: the first non-zero
    /// component is always positive.
    pub const CANONICAL: [Direction; 13] = [
        // Axes
        Direction::new(1, 0, 0),
        Direction::new(0, 1, 0),
        Direction::new(0, 0, 1),
        // Face diagonals
        Direction::new(1, 1, 0),
        Direction::new(1, -1, 0),
        Direction::new(1, 0, 1),
        Direction::new(1, 0, -1),
        Direction::new(0, 1, 1),
        Direction::new(0, 1, -1),
        // Space diagonals
        Direction::new(1, 1, 1),
        Direction::new(1, 1, -1),
        Direction::new(1, -1, 1),
        Direction::new(1, -1, -1),
    ];

    /// Step components as `(dx, dy, dz)`.
    pub fn components(self) -> (i8, i8, i8) {
        (self.dx, self.dy, self.dz)
    }
}

/// A move packed into one integer as `(x << 8) | (y << 4) | z`.
///
/// Each field is a nibble, so values written by [`MoveCodec::encode`]
/// never overlap.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
#[display("{:#05x}", _0)]
pub struct PackedMove(u16);

impl PackedMove {
    /// Raw integer value.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Decodes into a move, or `None` if a field is outside the cube.
    pub fn unpack(self) -> Option<Move> {
        let (x, y, z) = MoveCodec::decode(self);
        Move::try_new(x, y, z)
    }
}

/// Converts between coordinate triples and [`PackedMove`].
pub struct MoveCodec;

impl MoveCodec {
    /// Width of one field.
    pub const FIELD_BITS: u16 = 4;

    /// Mask applied to each field when decoding.
    pub const FIELD_MASK: u16 = (1 << Self::FIELD_BITS) - 1;

    /// Packs a coordinate triple.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is outside `0..4`.
    #[track_caller]
    pub fn encode(x: u8, y: u8, z: u8) -> PackedMove {
        let mv = Move::new(x, y, z);
        PackedMove(
            (u16::from(mv.x) << (2 * Self::FIELD_BITS))
                | (u16::from(mv.y) << Self::FIELD_BITS)
                | u16::from(mv.z),
        )
    }

    /// Unpacks into `(x, y, z)`, masking every field with `0xF`.
    pub fn decode(packed: PackedMove) -> (u8, u8, u8) {
        let field = |shift: u16| ((packed.0 >> shift) & Self::FIELD_MASK) as u8;
        (field(2 * Self::FIELD_BITS), field(Self::FIELD_BITS), field(0))
    }
}
