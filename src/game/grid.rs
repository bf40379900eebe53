use super::tile::{Position, Tile};

/// Fixed-size square grid of optional tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Row-major cell storage, one slot per coordinate
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid of the given side length
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a position lies on the grid
    pub fn within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size as i32 && pos.y >= 0 && pos.y < self.size as i32
    }

    fn index(&self, pos: Position) -> usize {
        pos.y as usize * self.size + pos.x as usize
    }

    /// Tile at a position, or None when the cell is empty or out of bounds
    pub fn cell_content(&self, pos: Position) -> Option<&Tile> {
        if self.within_bounds(pos) {
            self.cells[self.index(pos)].as_ref()
        } else {
            None
        }
    }

    pub fn cell_occupied(&self, pos: Position) -> bool {
        self.cell_content(pos).is_some()
    }

    pub fn cell_available(&self, pos: Position) -> bool {
        self.within_bounds(pos) && !self.cell_occupied(pos)
    }

    /// Place a tile at its own position. The caller must ensure the target
    /// cell is empty; an existing occupant is overwritten silently.
    pub fn insert_tile(&mut self, tile: Tile) {
        let index = self.index(tile.pos);
        self.cells[index] = Some(tile);
    }

    /// Clear the cell the tile occupies
    pub fn remove_tile(&mut self, tile: &Tile) {
        let index = self.index(tile.pos);
        self.cells[index] = None;
    }

    /// Take a tile out of one cell and place it in another, updating its
    /// recorded position. No-op when source and target are the same cell.
    pub fn move_tile(&mut self, from: Position, to: Position) {
        if from == to {
            return;
        }
        let from_index = self.index(from);
        if let Some(mut tile) = self.cells[from_index].take() {
            tile.pos = to;
            let to_index = self.index(to);
            self.cells[to_index] = Some(tile);
        }
    }

    /// All empty coordinates, in row-major order
    pub fn available_cells(&self) -> Vec<Position> {
        let mut available = Vec::new();
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let pos = Position::new(x, y);
                if !self.cell_occupied(pos) {
                    available.push(pos);
                }
            }
        }
        available
    }

    pub fn cells_available(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_none())
    }

    /// Iterate over all tiles on the grid
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().filter_map(|cell| cell.as_ref())
    }

    /// Iterate mutably over all tiles on the grid
    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.cells.iter_mut().filter_map(|cell| cell.as_mut())
    }

    /// Build a grid from rows of values, 0 meaning an empty cell
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "grid rows must form a square");
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    grid.insert_tile(Tile::new(Position::new(x as i32, y as i32), value));
                }
            }
        }
        grid
    }

    /// Dump the grid as rows of values, 0 meaning an empty cell
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.size as i32)
            .map(|y| {
                (0..self.size as i32)
                    .map(|x| {
                        self.cell_content(Position::new(x, y))
                            .map_or(0, |tile| tile.value)
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(4);
        assert!(grid.within_bounds(Position::new(0, 0)));
        assert!(grid.within_bounds(Position::new(3, 3)));
        assert!(!grid.within_bounds(Position::new(-1, 0)));
        assert!(!grid.within_bounds(Position::new(4, 0)));
        assert!(!grid.within_bounds(Position::new(0, 4)));
    }

    #[test]
    fn test_cell_content_out_of_bounds_is_none() {
        let grid = Grid::from_rows(&[vec![2, 0], vec![0, 4]]);
        assert_eq!(grid.cell_content(Position::new(-1, 0)), None);
        assert_eq!(grid.cell_content(Position::new(0, 2)), None);
        assert_eq!(grid.cell_content(Position::new(0, 0)).unwrap().value, 2);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut grid = Grid::new(4);
        let tile = Tile::new(Position::new(2, 1), 8);
        grid.insert_tile(tile);
        assert!(grid.cell_occupied(Position::new(2, 1)));
        assert!(!grid.cell_available(Position::new(2, 1)));

        grid.remove_tile(&tile);
        assert!(grid.cell_available(Position::new(2, 1)));
    }

    #[test]
    fn test_move_tile() {
        let mut grid = Grid::from_rows(&[vec![2, 0], vec![0, 0]]);
        grid.move_tile(Position::new(0, 0), Position::new(1, 1));

        assert!(grid.cell_available(Position::new(0, 0)));
        let tile = grid.cell_content(Position::new(1, 1)).unwrap();
        assert_eq!(tile.value, 2);
        assert_eq!(tile.pos, Position::new(1, 1));
    }

    #[test]
    fn test_available_cells_row_major() {
        let grid = Grid::from_rows(&[vec![2, 0, 0], vec![0, 4, 0], vec![0, 0, 8]]);
        assert_eq!(
            grid.available_cells(),
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(0, 2),
                Position::new(1, 2),
            ]
        );
        assert!(grid.cells_available());
    }

    #[test]
    fn test_full_grid_has_no_available_cells() {
        let grid = Grid::from_rows(&[vec![2, 4], vec![8, 16]]);
        assert!(grid.available_cells().is_empty());
        assert!(!grid.cells_available());
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = vec![vec![0, 2, 4, 0], vec![2, 0, 0, 8], vec![0; 4], vec![0; 4]];
        assert_eq!(Grid::from_rows(&rows).to_rows(), rows);
    }
}
