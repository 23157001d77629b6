//! Window creation for the presentation shell.

use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Logical pixel-buffer dimensions. The grid covers the whole buffer at
/// `CELL_SIZE` pixels per cell.
pub const SCREEN_WIDTH: u32 = 1200;
pub const SCREEN_HEIGHT: u32 = 800;

/// Create a window sized to the pixel buffer and return it along with the
/// physical surface dimensions and the DPI factor.
pub fn create_window(title: &str, event_loop: &EventLoop<()>) -> (Window, u32, u32, f64) {
    let size = LogicalSize::new(f64::from(SCREEN_WIDTH), f64::from(SCREEN_HEIGHT));
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(size)
        .with_min_inner_size(size)
        .build(event_loop)
        .expect("failed to create window");

    let hidpi_factor = window.scale_factor();
    let inner = window.inner_size();

    (window, inner.width, inner.height, hidpi_factor)
}
