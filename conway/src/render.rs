// render.rs - In-place terminal animation of the grid

use std::io::{self, Write};

use crossterm::{cursor, queue, style::Print};

use crate::grid::Grid;

/// Prints one frame, then moves the cursor back to the frame's top-left
/// corner so the next frame overwrites it.
pub fn render<const R: usize, const C: usize>(out: &mut impl Write, grid: &Grid<R, C>) -> io::Result<()> {
    queue!(out, Print(grid))?;
    queue!(out, cursor::MoveUp(R as u16), cursor::MoveLeft(C as u16))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_rows_then_cursor_return() {
        let mut grid = Grid::<3, 5>::new();
        grid.set(0, 0, true);
        grid.set(2, 4, true);

        let mut out = Vec::new();
        render(&mut out, &grid).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "#....\n.....\n....#\n\x1b[3A\x1b[5D");
    }

    #[test]
    fn consecutive_frames_append() {
        let grid = Grid::<2, 2>::filled();
        let mut out = Vec::new();
        render(&mut out, &grid).unwrap();
        render(&mut out, &grid).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("##\n").count(), 4);
        assert_eq!(text.matches("\x1b[2A\x1b[2D").count(), 2);
    }
}
