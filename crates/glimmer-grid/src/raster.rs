//! Integer line rasterization (Bresenham stepping).

use glimmer_core::Cell;

/// Rasterize the line from `(i0, j0)` to `(i1, j1)` into grid cells.
///
/// Classic Bresenham error-accumulation stepping; both endpoints are
/// always included. Used by line-shaped sources to turn two resolved
/// coordinates into a cell set.
///
/// ```
/// use glimmer_grid::bresenham_line;
///
/// let cells = bresenham_line((0, 0), (3, 4));
/// assert_eq!(cells, vec![(0, 0), (1, 1), (1, 2), (2, 3), (3, 4)]);
/// ```
pub fn bresenham_line(start: Cell, end: Cell) -> Vec<Cell> {
    let (mut x, mut y) = (start.0 as i64, start.1 as i64);
    let (x1, y1) = (end.0 as i64, end.1 as i64);

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx: i64 = if x > x1 { -1 } else { 1 };
    let sy: i64 = if y > y1 { -1 } else { 1 };

    let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);

    if dx > dy {
        let mut err = dx as f64 / 2.0;
        while x != x1 {
            cells.push((x as usize, y as usize));
            err -= dy as f64;
            if err < 0.0 {
                y += sy;
                err += dx as f64;
            }
            x += sx;
        }
    } else {
        let mut err = dy as f64 / 2.0;
        while y != y1 {
            cells.push((x as usize, y as usize));
            err -= dx as f64;
            if err < 0.0 {
                x += sx;
                err += dy as f64;
            }
            y += sy;
        }
    }

    cells.push((x1 as usize, y1 as usize));
    cells
}
