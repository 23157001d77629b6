//! Fixed-size 2D binary field with a silent bounds policy: reads outside
//! the grid return dead, writes outside the grid do nothing.

use randomize::PCG32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub fn new(alive: bool) -> Self {
        Self { alive }
    }

    pub fn alive(self) -> bool {
        self.alive
    }

    /// The B3/S23 rule: survive on 2 or 3 live neighbors, birth on exactly 3.
    #[must_use]
    pub fn next_state(self, live_neighbors: u8) -> Self {
        let alive = match (self.alive, live_neighbors) {
            (true, 2) | (true, 3) => true,
            (false, 3) => true,
            _ => false,
        };
        Self::new(alive)
    }

    fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    fn toggle(&mut self) {
        self.alive = !self.alive;
    }
}

#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Dimensions derive from a pixel surface divided into `cell_size`
    /// squares; remainder pixels are unused margin. All cells start dead.
    pub fn new(width: usize, height: usize, cell_size: usize) -> Self {
        assert!(cell_size != 0);
        let rows = height / cell_size;
        let columns = width / cell_size;
        assert!(rows != 0 && columns != 0);
        Self {
            cells: vec![Cell::default(); rows * columns],
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Dead for any out-of-range coordinate, no error signaled.
    pub fn value(&self, row: isize, column: isize) -> bool {
        match self.grid_idx(row, column) {
            Some(i) => self.cells[i].alive(),
            None => false,
        }
    }

    /// No-op for any out-of-range coordinate.
    pub fn set_value(&mut self, row: isize, column: isize, alive: bool) {
        if let Some(i) = self.grid_idx(row, column) {
            self.cells[i].set_alive(alive);
        }
    }

    /// Flips the cell; no-op out of range.
    pub fn toggle_cell(&mut self, row: isize, column: isize) {
        if let Some(i) = self.grid_idx(row, column) {
            self.cells[i].toggle();
        }
    }

    /// Each cell independently becomes alive with probability 1/5. Seeding
    /// is the caller's concern, which also keeps tests deterministic.
    pub fn fill_random(&mut self, rng: &mut PCG32) {
        for c in self.cells.iter_mut() {
            let alive = rng.next_u32() % 5 == 4;
            *c = Cell::new(alive);
        }
    }

    pub fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::default();
        }
    }

    fn grid_idx<I: std::convert::TryInto<usize>>(&self, row: I, column: I) -> Option<usize> {
        if let (Ok(row), Ok(column)) = (row.try_into(), column.try_into()) {
            if row < self.rows && column < self.columns {
                Some(row * self.columns + column)
            } else {
                None
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_from_pixel_size() {
        let grid = Grid::new(1200, 800, 10);
        assert_eq!(grid.rows(), 80);
        assert_eq!(grid.columns(), 120);

        // Remainder pixels are margin, not an extra row/column.
        let grid = Grid::new(55, 39, 10);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 5);
    }

    #[test]
    fn starts_dead_and_set_reads_back() {
        let mut grid = Grid::new(50, 50, 10);
        for row in 0..5 {
            for column in 0..5 {
                assert!(!grid.value(row, column));
            }
        }
        grid.set_value(2, 3, true);
        assert!(grid.value(2, 3));
        grid.set_value(2, 3, false);
        assert!(!grid.value(2, 3));
    }

    #[test]
    fn out_of_range_reads_are_dead() {
        let mut grid = Grid::new(50, 50, 10);
        grid.set_value(0, 0, true);
        assert!(!grid.value(-1, 0));
        assert!(!grid.value(0, -1));
        assert!(!grid.value(5, 0));
        assert!(!grid.value(0, 5));
    }

    #[test]
    fn out_of_range_writes_are_noops() {
        let mut grid = Grid::new(50, 50, 10);
        grid.set_value(-1, 2, true);
        grid.set_value(2, 5, true);
        grid.toggle_cell(5, 5);
        grid.toggle_cell(-3, -3);
        for row in 0..5 {
            for column in 0..5 {
                assert!(!grid.value(row, column));
            }
        }
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut grid = Grid::new(50, 50, 10);
        grid.toggle_cell(1, 1);
        assert!(grid.value(1, 1));
        grid.toggle_cell(1, 1);
        assert!(!grid.value(1, 1));
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::new(50, 50, 10);
        let mut rng: PCG32 = (0xdead_beef, 0xcafe).into();
        grid.fill_random(&mut rng);
        grid.clear();
        for row in 0..5 {
            for column in 0..5 {
                assert!(!grid.value(row, column));
            }
        }
    }

    #[test]
    fn fill_random_is_deterministic_under_a_fixed_seed() {
        let mut a = Grid::new(200, 200, 10);
        let mut b = Grid::new(200, 200, 10);
        let mut rng_a: PCG32 = (12345, 67890).into();
        let mut rng_b: PCG32 = (12345, 67890).into();
        a.fill_random(&mut rng_a);
        b.fill_random(&mut rng_b);
        for row in 0..20 {
            for column in 0..20 {
                assert_eq!(a.value(row, column), b.value(row, column));
            }
        }
    }

    #[test]
    fn cell_rule_thresholds() {
        let live = Cell::new(true);
        let dead = Cell::new(false);
        for n in 0..=8 {
            assert_eq!(live.next_state(n).alive(), n == 2 || n == 3);
            assert_eq!(dead.next_state(n).alive(), n == 3);
        }
    }
}
