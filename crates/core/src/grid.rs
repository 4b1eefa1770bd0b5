//! Dense row-major grid of cells, plus the land-cover/terrain raster
//! loaders that seed it (`spec.md` §3, §6).

use crate::cell::{Cell, CellState};
use crate::error::EngineError;
use crate::land_cover::LandCover;

/// A caller-supplied land-cover raster: `height` rows of `width` codes in
/// `[1, 17]`. Consumes an already-parsed in-memory array — raster image
/// decoding and file I/O are out of scope (`spec.md` §1, §6).
#[derive(Debug, Clone)]
pub struct LandCoverRaster {
    width: usize,
    height: usize,
    codes: Vec<LandCover>,
}

impl LandCoverRaster {
    /// Builds a raster from row-major `rows`, validating rectangularity,
    /// nonzero area, and that every code is in `[1, 17]` (`spec.md` §7's
    /// data-error kind).
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, EngineError> {
        let height = rows.len();
        if height == 0 {
            return Err(EngineError::Data("raster has zero area".into()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(EngineError::Data("raster has zero area".into()));
        }
        let mut codes = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(EngineError::Data(format!(
                    "raster row {y} has width {}, expected {width}",
                    row.len()
                )));
            }
            for code in row {
                codes.push(LandCover::from_code(code)?);
            }
        }
        Ok(LandCoverRaster { width, height, codes })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn at(&self, x: usize, y: usize) -> LandCover {
        self.codes[y * self.width + x]
    }
}

/// Optional real-valued terrain height map, same shape as the land-cover
/// raster, used only by the weighted-stochastic neighbor policy
/// (`spec.md` §6). Absent heights are treated as zero everywhere.
#[derive(Debug, Clone)]
pub struct TerrainHeights {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl TerrainHeights {
    pub fn from_rows(rows: Vec<Vec<f32>>, width: usize, height: usize) -> Result<Self, EngineError> {
        if rows.len() != height {
            return Err(EngineError::Data(format!(
                "terrain raster has {} rows, expected {height}",
                rows.len()
            )));
        }
        let mut values = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(EngineError::Data(format!(
                    "terrain row {y} has width {}, expected {width}",
                    row.len()
                )));
            }
            values.extend(row);
        }
        Ok(TerrainHeights { width, height, values })
    }

    fn at(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }
}

/// The dense grid of cells the automaton steps. Row-major, origin
/// `(0, 0)` top-left, not toroidal (`spec.md` §3).
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    terrain: Option<TerrainHeights>,
}

impl Grid {
    #[must_use]
    pub fn from_raster(raster: &LandCoverRaster, terrain: Option<TerrainHeights>) -> Self {
        let width = raster.width();
        let height = raster.height();
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::forest(raster.at(x, y)));
            }
        }
        Grid { width, height, cells, terrain }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), EngineError> {
        if x >= self.width || y >= self.height {
            Err(EngineError::Bounds { x, y, width: self.width, height: self.height })
        } else {
            Ok(())
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    pub fn get_state(&self, x: usize, y: usize) -> Result<CellState, EngineError> {
        self.check_bounds(x, y)?;
        Ok(self.cell(x, y).state)
    }

    /// Directly sets a cell's state, for deterministic seeding by callers
    /// and tests. `burn_duration` is reinitialized to `state.seeded_burn_duration()`
    /// so the invariant "`burn_duration = 0` iff `state = FOREST`" holds
    /// immediately after seeding, not just along naturally-reached
    /// transitions (`spec.md` §3).
    pub fn set_state(&mut self, x: usize, y: usize, state: CellState) -> Result<(), EngineError> {
        self.check_bounds(x, y)?;
        let cell = self.cell_mut(x, y);
        cell.state = state;
        cell.next_state = state;
        cell.burn_duration = state.seeded_burn_duration();
        Ok(())
    }

    fn height_at(&self, x: usize, y: usize) -> f32 {
        self.terrain.as_ref().map_or(0.0, |t| t.at(x, y))
    }

    /// Height difference `h_n - h_c` between the neighbor at `(nx, ny)` and
    /// the cell at `(x, y)`. Zero when no terrain map was supplied.
    #[must_use]
    pub fn height_diff(&self, x: usize, y: usize, nx: usize, ny: usize) -> f32 {
        self.height_at(nx, ny) - self.height_at(x, y)
    }

    /// In-bounds 8-neighborhood offsets of `(x, y)`, as `(dy, dx, nx, ny)`
    /// tuples. Edge cells yield 3 neighbors, corners 5, interior 8
    /// (`spec.md` §8's boundary-behavior invariant).
    pub fn neighbor_offsets(&self, x: usize, y: usize) -> impl Iterator<Item = (i8, i8, usize, usize)> + '_ {
        let width = self.width;
        let height = self.height;
        (-1..=1i32).flat_map(move |dy| {
            (-1..=1i32).filter_map(move |dx| {
                if dx == 0 && dy == 0 {
                    return None;
                }
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                    return None;
                }
                Some((dy as i8, dx as i8, nx as usize, ny as usize))
            })
        })
    }

    /// Commits the staged `next_state` of every cell into `state`, per
    /// `spec.md` §4.3's commit phase. `#[must_use]`-free: mutation in
    /// place, disjoint per cell, safe to parallelize.
    pub fn commit_all(&mut self) {
        for cell in &mut self.cells {
            cell.commit();
        }
    }

    /// Dense `H x W` integer snapshot: `FOREST` cells encode as their
    /// land-cover code, other states as `18..=21` (`spec.md` §4.5). Pure;
    /// never mutates the grid.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let cell = self.cell(x, y);
                        match cell.state {
                            CellState::Forest => cell.land_type.code(),
                            CellState::Ignition => 18,
                            CellState::Fire => 19,
                            CellState::BurningOut => 20,
                            CellState::Ash => 21,
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(w: usize, h: usize, code: u8) -> LandCoverRaster {
        LandCoverRaster::from_rows(vec![vec![code; w]; h]).unwrap()
    }

    #[test]
    fn from_raster_seeds_forest_everywhere() {
        let r = raster(3, 3, 1);
        let g = Grid::from_raster(&r, None);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(g.cell(x, y).state, CellState::Forest);
            }
        }
    }

    #[test]
    fn snapshot_round_trips_the_raster_before_any_step() {
        let r = raster(4, 2, 5);
        let g = Grid::from_raster(&r, None);
        let snap = g.snapshot();
        assert_eq!(snap, vec![vec![5; 4]; 2]);
    }

    #[test]
    fn neighbor_counts_match_position_class() {
        let r = raster(3, 3, 1);
        let g = Grid::from_raster(&r, None);
        assert_eq!(g.neighbor_offsets(1, 1).count(), 8); // interior
        assert_eq!(g.neighbor_offsets(0, 1).count(), 5); // edge
        assert_eq!(g.neighbor_offsets(0, 0).count(), 3); // corner
    }

    #[test]
    fn one_by_one_grid_has_no_neighbors() {
        let r = raster(1, 1, 1);
        let g = Grid::from_raster(&r, None);
        assert_eq!(g.neighbor_offsets(0, 0).count(), 0);
    }

    #[test]
    fn out_of_bounds_access_is_an_error_not_a_clamp() {
        let r = raster(2, 2, 1);
        let mut g = Grid::from_raster(&r, None);
        assert!(g.get_state(5, 5).is_err());
        assert!(g.set_state(5, 5, CellState::Ash).is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![1, 1, 1], vec![1, 1]];
        assert!(LandCoverRaster::from_rows(rows).is_err());
    }

    #[test]
    fn rejects_zero_area() {
        assert!(LandCoverRaster::from_rows(vec![]).is_err());
        assert!(LandCoverRaster::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn rejects_out_of_range_codes() {
        assert!(LandCoverRaster::from_rows(vec![vec![18]]).is_err());
        assert!(LandCoverRaster::from_rows(vec![vec![0]]).is_err());
    }

    #[test]
    fn height_diff_is_zero_without_a_terrain_map() {
        let r = raster(2, 2, 1);
        let g = Grid::from_raster(&r, None);
        assert_eq!(g.height_diff(0, 0, 1, 0), 0.0);
    }

    /// `burn_duration = 0` iff `state = FOREST` (spec.md sec 3) must hold
    /// the instant a cell is seeded, not only along naturally-reached
    /// transitions.
    #[test]
    fn set_state_keeps_burn_duration_consistent_with_state() {
        let r = raster(1, 1, 1);
        let mut g = Grid::from_raster(&r, None);
        g.set_state(0, 0, CellState::Ignition).unwrap();
        assert_eq!(g.cell(0, 0).burn_duration, 1);

        g.set_state(0, 0, CellState::Fire).unwrap();
        assert_eq!(g.cell(0, 0).burn_duration, 1);

        g.set_state(0, 0, CellState::Forest).unwrap();
        assert_eq!(g.cell(0, 0).burn_duration, 0);
    }
}
