use crate::dims::Dims;

bitflags::bitflags! {
    /// State bits of a single cell.
    ///
    /// Wall bits mean the side is closed, so a fresh cell carries [`CellFlags::WALLS`]
    /// (`15`). Renderers depend on this polarity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const NORTH   = 0b0000_0001;
        const SOUTH   = 0b0000_0010;
        const EAST    = 0b0000_0100;
        const WEST    = 0b0000_1000;
        const VISITED = 0b0001_0000;
        const DEAD    = 0b0010_0000;

        const WALLS = Self::NORTH.bits() | Self::SOUTH.bits() | Self::EAST.bits() | Self::WEST.bits();
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Cell {
    x: u16,
    y: u16,
    flags: CellFlags,
}

impl Cell {
    pub fn new(x: u16, y: u16) -> Cell {
        Cell {
            x,
            y,
            flags: CellFlags::WALLS,
        }
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn pos(&self) -> Dims {
        Dims(self.x as i32, self.y as i32)
    }

    pub fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Returns true when every bit of `flag` is set.
    pub fn is_set(&self, flag: CellFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn set(&mut self, flag: CellFlags) {
        self.flags.insert(flag);
    }

    pub fn clear(&mut self, flag: CellFlags) {
        self.flags.remove(flag);
    }

    pub fn has_wall(&self, side: Direction) -> bool {
        self.is_set(side.wall())
    }

    pub fn is_open(&self, side: Direction) -> bool {
        !self.has_wall(side)
    }

    pub fn is_visited(&self) -> bool {
        self.is_set(CellFlags::VISITED)
    }

    pub fn is_dead(&self) -> bool {
        self.is_set(CellFlags::DEAD)
    }

    pub(crate) fn remove_wall(&mut self, side: Direction) {
        self.clear(side.wall());
    }

    pub(crate) fn put_wall(&mut self, side: Direction) {
        self.set(side.wall());
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Grid offset towards this side, `y` grows southwards.
    pub fn offset(self) -> Dims {
        match self {
            Direction::North => Dims(0, -1),
            Direction::South => Dims(0, 1),
            Direction::East => Dims(1, 0),
            Direction::West => Dims(-1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn wall(self) -> CellFlags {
        match self {
            Direction::North => CellFlags::NORTH,
            Direction::South => CellFlags::SOUTH,
            Direction::East => CellFlags::EAST,
            Direction::West => CellFlags::WEST,
        }
    }

    pub fn from_offset(off: Dims) -> Option<Direction> {
        match off {
            Dims(0, -1) => Some(Direction::North),
            Dims(0, 1) => Some(Direction::South),
            Dims(1, 0) => Some(Direction::East),
            Dims(-1, 0) => Some(Direction::West),
            _ => None,
        }
    }
}
