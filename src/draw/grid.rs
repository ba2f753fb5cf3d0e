use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;
use tracing::debug;

use gridlife::board::Board;
use gridlife::events::RecolorTarget;

use crate::ext::sdl::ColorInterpolationExt;
use crate::ext::sdl::ColorRandomExt;

// How far the grid lines sit from the cell color toward the background
const GRIDLINE_BLEND: f64 = 0.25;

pub struct GridData {
    /// Side length of one cell on screen, in pixels
    pixel_size: u32,

    cell_color: Color,
    background_color: Color,
}

impl GridData {
    pub fn new(pixel_size: u32) -> Self {
        Self {
            pixel_size,

            cell_color: Color::RGBA(255, 127, 0, 255),
            background_color: Color::RGBA(0, 0, 0, 255),
        }
    }

    /// Replace one of the two colors with a random opaque one.
    pub fn recolor<R: Rng>(&mut self, target: RecolorTarget, rng: &mut R) {
        let slot = match target {
            RecolorTarget::Cells => &mut self.cell_color,
            RecolorTarget::Background => &mut self.background_color,
        };

        *slot = Color::random_opaque(rng);
        debug!("{:?} color: {:?}", target, slot);
    }

    // The grid lines fade most of the way into the background
    fn gridline_color(&self) -> Color {
        self.cell_color.lerp(&self.background_color, GRIDLINE_BLEND)
    }

    /// Draw one frame of `board`: background, grid lines at every cell
    /// boundary, then a filled square per live cell.
    pub fn draw(&self, canvas: &mut WindowCanvas, board: &Board) -> Result<(), String> {
        let size = self.pixel_size;
        let extent = (board.side() as u32 * size) as i32;

        // clear the screen
        canvas.set_draw_color(self.background_color);
        canvas.clear();

        // grid lines
        canvas.set_draw_color(self.gridline_color());
        for i in 0..=board.side() as u32 {
            let delta = (i * size) as i32;

            canvas.draw_line(Point::new(0, delta), Point::new(extent, delta))?;
            canvas.draw_line(Point::new(delta, 0), Point::new(delta, extent))?;
        }

        // live cells
        canvas.set_draw_color(self.cell_color);
        for (x, y) in board.live_cells() {
            let rect = Rect::new(x as i32 * size as i32, y as i32 * size as i32, size, size);

            canvas.fill_rect(rect)?;
        }

        Ok(())
    }
}
