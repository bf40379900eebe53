use std::collections::HashMap;

use super::action::Direction;
use super::grid::Grid;
use super::tile::{Position, Tile};

/// Result of resolving one directional move over a grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveOutcome {
    /// Whether any tile ended up somewhere other than where it started
    pub moved: bool,
    /// Total value of tiles produced by merges this turn
    pub score_delta: u32,
    /// Whether a merge produced the winning tile value
    pub reached_goal: bool,
    /// Merge target position -> the two tiles consumed to produce it.
    /// Valid for this turn only; replaced wholesale on the next resolve.
    pub merge_sources: HashMap<Position, [Tile; 2]>,
}

/// Coordinate visiting order for one move. Rebuilt per move, since the
/// direction decides which axis runs backwards.
struct Traversals {
    xs: Vec<i32>,
    ys: Vec<i32>,
}

impl Traversals {
    /// Axes run ascending, except the axis pointing toward the target edge,
    /// which is reversed so tiles nearer that edge resolve first.
    fn new(size: usize, vector: (i32, i32)) -> Self {
        let mut xs: Vec<i32> = (0..size as i32).collect();
        let mut ys: Vec<i32> = (0..size as i32).collect();
        if vector.0 == 1 {
            xs.reverse();
        }
        if vector.1 == 1 {
            ys.reverse();
        }
        Self { xs, ys }
    }
}

/// Walk from `start` along `vector` while the next cell is on the grid and
/// empty. Returns the last empty cell reached and the first cell beyond it
/// (occupied or out of bounds).
fn find_farthest(grid: &Grid, start: Position, vector: (i32, i32)) -> (Position, Position) {
    let mut farthest = start;
    let mut next = start.moved_by(vector.0, vector.1);
    while grid.cell_available(next) {
        farthest = next;
        next = next.moved_by(vector.0, vector.1);
    }
    (farthest, next)
}

/// Snapshot every tile's position before the traversal mutates the grid
fn prepare_tiles(grid: &mut Grid) {
    for tile in grid.tiles_mut() {
        tile.save_position();
    }
}

/// Resolve a directional move in place.
///
/// Sweeps the grid in traversal order, sliding each tile to its farthest
/// reachable cell and merging it into an equal-valued neighbor when one
/// blocks the way. A tile produced by a merge never merges again in the
/// same turn.
pub fn resolve(grid: &mut Grid, direction: Direction, winning_value: u32) -> MoveOutcome {
    let vector = direction.delta();
    let traversals = Traversals::new(grid.size(), vector);
    let mut outcome = MoveOutcome::default();

    prepare_tiles(grid);

    for &x in &traversals.xs {
        for &y in &traversals.ys {
            let cell = Position::new(x, y);
            let Some(&tile) = grid.cell_content(cell) else {
                continue;
            };

            let (farthest, next) = find_farthest(grid, cell, vector);
            let blocking = grid.cell_content(next).copied();

            match blocking {
                Some(other)
                    if other.value == tile.value
                        && !outcome.merge_sources.contains_key(&next) =>
                {
                    let merged = Tile::new(next, tile.value * 2);
                    grid.remove_tile(&tile);
                    grid.insert_tile(merged);

                    // The consumed tile's bookkeeping position becomes the
                    // merge target, which is what the moved check compares.
                    let mut consumed = tile;
                    consumed.pos = next;
                    outcome.merge_sources.insert(next, [consumed, other]);

                    outcome.score_delta += merged.value;
                    if merged.value == winning_value {
                        outcome.reached_goal = true;
                    }
                    if next != cell {
                        outcome.moved = true;
                    }
                }
                _ => {
                    if farthest != cell {
                        grid.move_tile(cell, farthest);
                        outcome.moved = true;
                    }
                }
            }
        }
    }

    outcome
}

/// True when the position still allows a legal move: an empty cell exists,
/// or two orthogonally adjacent tiles share a value
pub fn moves_available(grid: &Grid) -> bool {
    grid.cells_available() || tile_matches_available(grid)
}

fn tile_matches_available(grid: &Grid) -> bool {
    for y in 0..grid.size() as i32 {
        for x in 0..grid.size() as i32 {
            let pos = Position::new(x, y);
            let Some(tile) = grid.cell_content(pos) else {
                continue;
            };
            for direction in Direction::ALL {
                let neighbor = pos.moved_in_direction(direction);
                if let Some(other) = grid.cell_content(neighbor) {
                    if other.value == tile.value {
                        return true;
                    }
                }
            }
        }
    }
    false
}
