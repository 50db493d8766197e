//! Common value types shared by the hero engine and its collaborators.

use std::fmt;

/// Monotonic game time expressed in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub const fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds elapsed since `earlier`, or zero if `earlier` is in the future.
    #[inline]
    pub const fn saturating_since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::AddAssign<u64> for Tick {
    fn add_assign(&mut self, rhs: u64) {
        self.0 += rhs;
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Pixel coordinates on a map. `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, displacement: Displacement) -> Self {
        Self {
            x: self.x + displacement.dx,
            y: self.y + displacement.dy,
        }
    }

    /// Angle in radians of the vector going from `self` to `target`.
    ///
    /// Angles follow the trigonometric convention (0 is right, π/2 is up),
    /// so the screen `y` axis is inverted.
    pub fn angle_to(self, target: Point) -> f64 {
        let dx = f64::from(target.x - self.x);
        let dy = f64::from(self.y - target.y);
        dy.atan2(dx)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative pixel offset produced by a movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size whose top-left corner is `origin`.
    pub const fn at(origin: Point, width: u32, height: u32) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    pub const fn translated(self, displacement: Displacement) -> Self {
        Self::new(
            self.x + displacement.dx,
            self.y + displacement.dy,
            self.width,
            self.height,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width as i32
            && point.y >= self.y
            && point.y < self.y + self.height as i32
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width as i32
            && other.x < self.x + self.width as i32
            && self.y < other.y + other.height as i32
            && other.y < self.y + self.height as i32
    }
}

/// One of the four main directions, numbered counter-clockwise from the right.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction4 {
    #[default]
    Right = 0,
    Up = 1,
    Left = 2,
    Down = 3,
}

impl Direction4 {
    pub const ALL: [Direction4; 4] = [
        Direction4::Right,
        Direction4::Up,
        Direction4::Left,
        Direction4::Down,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            Direction4::Right => Direction4::Left,
            Direction4::Up => Direction4::Down,
            Direction4::Left => Direction4::Right,
            Direction4::Down => Direction4::Up,
        }
    }

    pub const fn to_direction8(self) -> Direction8 {
        match self {
            Direction4::Right => Direction8::Right,
            Direction4::Up => Direction8::Up,
            Direction4::Left => Direction8::Left,
            Direction4::Down => Direction8::Down,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction4::Right | Direction4::Left)
    }

    /// One-pixel offset in this direction.
    pub const fn unit(self) -> Displacement {
        self.to_direction8().unit()
    }
}

/// One of the eight directions, numbered counter-clockwise from the right.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction8 {
    Right = 0,
    UpRight = 1,
    Up = 2,
    UpLeft = 3,
    Left = 4,
    DownLeft = 5,
    Down = 6,
    DownRight = 7,
}

impl Direction8 {
    pub const ALL: [Direction8; 8] = [
        Direction8::Right,
        Direction8::UpRight,
        Direction8::Up,
        Direction8::UpLeft,
        Direction8::Left,
        Direction8::DownLeft,
        Direction8::Down,
        Direction8::DownRight,
    ];

    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 4) % 8]
    }

    /// Returns the matching main direction, or `None` for diagonals.
    pub const fn to_direction4(self) -> Option<Direction4> {
        match self {
            Direction8::Right => Some(Direction4::Right),
            Direction8::Up => Some(Direction4::Up),
            Direction8::Left => Some(Direction4::Left),
            Direction8::Down => Some(Direction4::Down),
            _ => None,
        }
    }

    /// One-pixel offset in this direction (each axis moves by at most one pixel).
    pub const fn unit(self) -> Displacement {
        match self {
            Direction8::Right => Displacement::new(1, 0),
            Direction8::UpRight => Displacement::new(1, -1),
            Direction8::Up => Displacement::new(0, -1),
            Direction8::UpLeft => Displacement::new(-1, -1),
            Direction8::Left => Displacement::new(-1, 0),
            Direction8::DownLeft => Displacement::new(-1, 1),
            Direction8::Down => Displacement::new(0, 1),
            Direction8::DownRight => Displacement::new(1, 1),
        }
    }
}

/// Identifier of an entity owned by the map's entity registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a loaded map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapId(pub u32);

/// Identifier of an equipment item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// Item command slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSlot {
    #[strum(serialize = "item_1")]
    First,
    #[strum(serialize = "item_2")]
    Second,
}

/// Drawing/collision layer of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer(pub u8);
