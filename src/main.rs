//! Presentation shell: window, input, pixel rendering and frame pacing.
//! All grid access goes through `Simulation`; the shell never touches cells
//! directly.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::time::{Duration, Instant};

use log::{debug, error};
use pixels::{Error, Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use toroidal_life::randomizer::generate_seed;
use toroidal_life::simulation::Simulation;

mod window;
use window::{create_window, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Grid cells are square, this many pixels on a side. Each cell keeps a
/// 1-pixel gutter on its right and bottom edge so the grid lines show.
const CELL_SIZE: usize = 10;

const ALIVE_COLOR: [u8; 4] = [0, 0xff, 0, 0xff];
const DEAD_COLOR: [u8; 4] = [0x37, 0x37, 0x37, 0xff];
const BACKGROUND_COLOR: [u8; 4] = [0x1d, 0x1d, 0x1d, 0xff];

const TITLE_PAUSED: &str = "toroidal life (paused)";
const TITLE_RUNNING: &str = "toroidal life (running)";

/// Generation pacing, owned by the shell. The core never sees wall-clock
/// time; it advances exactly once per due step.
struct Pacing {
    steps_per_second: u64,
    last_step: Instant,
}

impl Pacing {
    fn new() -> Self {
        Self {
            steps_per_second: 12,
            last_step: Instant::now(),
        }
    }

    fn faster(&mut self) {
        self.steps_per_second += 2;
    }

    fn slower(&mut self) {
        if self.steps_per_second > 5 {
            self.steps_per_second -= 2;
        }
    }

    fn step_due(&mut self) -> bool {
        let interval = Duration::from_millis(1000 / self.steps_per_second);
        if self.last_step.elapsed() >= interval {
            self.last_step = Instant::now();
            true
        } else {
            false
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) = create_window(TITLE_PAUSED, &event_loop);

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let mut pixels = Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface_texture)?;

    let mut life = Simulation::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize, CELL_SIZE);
    let mut rng: randomize::PCG32 = generate_seed().into();
    let mut pacing = Pacing::new();

    let mut draw_state: Option<bool> = None;

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            draw(&life, pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // For everything else, let winit_input_helper collect events to build
        // its state. It returns `true` when it is time to update our game
        // state and request a redraw.
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::Return) {
                life.start();
                window.set_title(TITLE_RUNNING);
            }
            if input.key_pressed(VirtualKeyCode::Space) {
                life.stop();
                window.set_title(TITLE_PAUSED);
            }
            if input.key_pressed(VirtualKeyCode::F) {
                pacing.faster();
            }
            if input.key_pressed(VirtualKeyCode::S) {
                pacing.slower();
            }
            if input.key_pressed(VirtualKeyCode::R) {
                life.create_random_state(&mut rng);
            }
            if input.key_pressed(VirtualKeyCode::C) {
                life.clear_grid();
            }

            // Handle mouse. This is a bit involved since we support simple
            // line drawing: a fast drag must not skip the cells between two
            // polled pointer positions.
            let (mouse_cell, mouse_prev_cell) = input
                .mouse()
                .map(|(mx, my)| {
                    let (dx, dy) = input.mouse_diff();
                    let prev_x = mx - dx;
                    let prev_y = my - dy;

                    let (mx_i, my_i) = pixels
                        .window_pos_to_pixel((mx, my))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    let (px_i, py_i) = pixels
                        .window_pos_to_pixel((prev_x, prev_y))
                        .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));

                    // Pixel position to (row, column) is plain integer
                    // division by the cell size.
                    (
                        ((my_i / CELL_SIZE) as isize, (mx_i / CELL_SIZE) as isize),
                        ((py_i / CELL_SIZE) as isize, (px_i / CELL_SIZE) as isize),
                    )
                })
                .unwrap_or_default();

            if input.mouse_pressed(0) {
                debug!("Mouse click at cell {:?}", mouse_cell);
                if !life.is_running() {
                    life.toggle_cell(mouse_cell.0, mouse_cell.1);
                    draw_state = Some(life.value(mouse_cell.0, mouse_cell.1));
                }
            } else if let Some(draw_alive) = draw_state {
                let release = input.mouse_released(0);
                let held = input.mouse_held(0);
                debug!("Draw at {:?} => {:?}", mouse_prev_cell, mouse_cell);
                // If they either released (finishing the drawing) or are
                // still in the middle of drawing, keep going.
                if (release || held) && !life.is_running() {
                    debug!("Draw line of {:?}", draw_alive);
                    for (row, column) in line_drawing::Bresenham::new(mouse_prev_cell, mouse_cell) {
                        life.set_cell_value(row, column, draw_alive);
                    }
                }
                // If they let go or are otherwise not clicking anymore, stop drawing.
                if release || !held {
                    debug!("Draw end");
                    draw_state = None;
                }
            }

            // Adjust high DPI factor
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            // Resize the window
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }
            if pacing.step_due() {
                life.advance_generation();
            }
            window.request_redraw();
        }
    });
}

/// One `cell_size` square per cell, gutter lines in the background color.
fn draw(life: &Simulation, screen: &mut [u8]) {
    debug_assert_eq!(screen.len(), 4 * (SCREEN_WIDTH * SCREEN_HEIGHT) as usize);
    for (i, pix) in screen.chunks_exact_mut(4).enumerate() {
        let x = i % SCREEN_WIDTH as usize;
        let y = i / SCREEN_WIDTH as usize;
        let color = if x % CELL_SIZE == CELL_SIZE - 1 || y % CELL_SIZE == CELL_SIZE - 1 {
            BACKGROUND_COLOR
        } else if life.value((y / CELL_SIZE) as isize, (x / CELL_SIZE) as isize) {
            ALIVE_COLOR
        } else {
            DEAD_COLOR
        };
        pix.copy_from_slice(&color);
    }
}
