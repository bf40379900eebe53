use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// A numbered tile occupying one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub pos: Position,
    /// Power of two, 2 or greater
    pub value: u32,
    /// Where this tile sat before the current move resolved
    pub previous_position: Option<Position>,
}

impl Tile {
    pub fn new(pos: Position, value: u32) -> Self {
        Self {
            pos,
            value,
            previous_position: None,
        }
    }

    /// Snapshot the current position before a move is resolved
    pub fn save_position(&mut self) {
        self.previous_position = Some(self.pos);
    }
}
