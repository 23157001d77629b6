//! Double-buffered Game of Life engine. Owns the authoritative grid, a
//! scratch grid of the same dimensions, and the running flag that gates
//! both generation advance and manual editing.

use log::info;
use randomize::PCG32;

use crate::grid::{Cell, Grid};

/// Moore neighborhood: the 8 cells around (row, column).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub struct Simulation {
    grid: Grid,
    scratch: Grid,
    running: bool,
}

impl Simulation {
    /// Starts paused with every cell dead. Both buffers share the
    /// dimensions derived from the pixel surface and cell size.
    pub fn new(width: usize, height: usize, cell_size: usize) -> Self {
        Self {
            grid: Grid::new(width, height, cell_size),
            scratch: Grid::new(width, height, cell_size),
            running: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Current-generation cell state; dead for out-of-range coordinates.
    pub fn value(&self, row: isize, column: isize) -> bool {
        self.grid.value(row, column)
    }

    /// Unconditional direct write, bounds-safe. Not gated on run state.
    pub fn set_cell_value(&mut self, row: isize, column: isize, alive: bool) {
        self.grid.set_value(row, column, alive);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            info!("simulation started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            info!("simulation stopped");
        }
        self.running = false;
    }

    /// Live cells in the Moore neighborhood of (row, column), in [0, 8].
    /// The grid is toroidal: neighbor coordinates wrap modulo the
    /// dimensions, so boundary cells read from the opposite edge.
    pub fn count_live_neighbors(&self, row: usize, column: usize) -> u8 {
        live_neighbors(&self.grid, row, column)
    }

    /// Computes the whole next generation into the scratch grid, reading
    /// only the untouched current generation, then swaps the buffers. A
    /// no-op while paused.
    pub fn advance_generation(&mut self) {
        if !self.running {
            return;
        }
        for row in 0..self.grid.rows() {
            for column in 0..self.grid.columns() {
                let n = live_neighbors(&self.grid, row, column);
                let cell = Cell::new(self.grid.value(row as isize, column as isize));
                // Write into `self.scratch`, since we're still reading from `self.grid`
                self.scratch
                    .set_value(row as isize, column as isize, cell.next_state(n).alive());
            }
        }
        std::mem::swap(&mut self.grid, &mut self.scratch);
    }

    /// Only takes effect while paused.
    pub fn toggle_cell(&mut self, row: isize, column: isize) {
        if !self.running {
            self.grid.toggle_cell(row, column);
        }
    }

    /// Only takes effect while paused.
    pub fn clear_grid(&mut self) {
        if !self.running {
            self.grid.clear();
        }
    }

    /// Takes effect regardless of run state, matching the original
    /// program: re-seeding a dying board mid-run is allowed.
    pub fn create_random_state(&mut self, rng: &mut PCG32) {
        self.grid.fill_random(rng);
    }
}

fn live_neighbors(grid: &Grid, row: usize, column: usize) -> u8 {
    let rows = grid.rows() as isize;
    let columns = grid.columns() as isize;
    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        // `+ dimension` keeps the intermediate non-negative so `%` wraps
        // correctly for the -1 offsets.
        let neighbor_row = (row as isize + dr + rows) % rows;
        let neighbor_column = (column as isize + dc + columns) % columns;
        if grid.value(neighbor_row, neighbor_column) {
            count += 1;
        }
    }
    count
}
