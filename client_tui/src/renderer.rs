//! Character-cell renderer for the match snapshot

use crossterm::{cursor::MoveTo, queue, style::Print, terminal};
use game_core::{Rect, Snapshot};
use std::io::{self, Write};

const PADDLE: char = '█';
const BALL: char = '●';
const NET: char = '┆';

// Dashed net in field pixels
const NET_SEGMENT: f64 = 18.0;
const NET_GAP: f64 = 10.0;

/// Rows reserved above (score) and below (help text) the field
const HEADER_ROWS: u16 = 1;

/// Maps field pixels onto a grid of terminal cells
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    scale_x: f64,
    scale_y: f64,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, field_width: f64, field_height: f64) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale_x: f64::from(cols) / field_width,
            scale_y: f64::from(rows) / field_height,
        }
    }

    pub fn col(&self, x: f64) -> u16 {
        Self::cell(x * self.scale_x, self.cols)
    }

    pub fn row(&self, y: f64) -> u16 {
        Self::cell(y * self.scale_y, self.rows)
    }

    /// Inclusive cell span covered by `rect`; never empty
    pub fn span(&self, rect: &Rect) -> (u16, u16, u16, u16) {
        let c0 = self.col(rect.min.x);
        let r0 = self.row(rect.min.y);
        let c1 = Self::cell((rect.max.x * self.scale_x).ceil() - 1.0, self.cols).max(c0);
        let r1 = Self::cell((rect.max.y * self.scale_y).ceil() - 1.0, self.rows).max(r0);
        (c0, r0, c1, r1)
    }

    /// Field y at the middle of a row
    pub fn row_center_y(&self, row: u16) -> f64 {
        (f64::from(row) + 0.5) / self.scale_y
    }

    fn cell(v: f64, limit: u16) -> u16 {
        if v <= 0.0 {
            0
        } else {
            (v.floor() as u64).min(u64::from(limit - 1)) as u16
        }
    }
}

/// Lay out one frame as `rows` lines of exactly `cols` characters
pub fn compose(frame: &Snapshot, cols: u16, rows: u16) -> Vec<String> {
    let info_rows = frame.info.len() as u16;
    let field_rows = rows.saturating_sub(HEADER_ROWS + info_rows).max(1);
    let view = Viewport::new(cols, field_rows, frame.field_width, frame.field_height);
    let width = usize::from(view.cols);

    let mut grid = vec![vec![' '; width]; usize::from(field_rows)];

    let net_col = usize::from(view.col(frame.field_width / 2.0));
    for (row, line) in grid.iter_mut().enumerate() {
        let y = view.row_center_y(row as u16);
        if y % (NET_SEGMENT + NET_GAP) < NET_SEGMENT {
            line[net_col] = NET;
        }
    }

    for paddle in [&frame.left_paddle, &frame.right_paddle] {
        let (c0, r0, c1, r1) = view.span(paddle);
        for line in &mut grid[usize::from(r0)..=usize::from(r1)] {
            for cell in &mut line[usize::from(c0)..=usize::from(c1)] {
                *cell = PADDLE;
            }
        }
    }

    let center = frame.ball.center();
    grid[usize::from(view.row(center.y))][usize::from(view.col(center.x))] = BALL;

    let mut lines = Vec::with_capacity(usize::from(rows));
    let score = format!("{}   {}", frame.score.left, frame.score.right);
    lines.push(fit(&format!("{score:^width$}"), width));
    lines.extend(grid.into_iter().map(|line| line.into_iter().collect::<String>()));
    lines.extend(frame.info.iter().map(|text| fit(&format!(" {text}"), width)));
    lines
}

/// Pad or truncate to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Draws snapshots to a terminal writer
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> game_core::Renderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, frame: &Snapshot) -> Result<(), io::Error> {
        let (cols, rows) = terminal::size()?;
        let lines = compose(frame, cols, rows);
        for (row, line) in lines.iter().take(usize::from(rows)).enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, GameRng, Match};

    fn frame() -> Snapshot {
        Match::new(Config::new(), GameRng::new(1)).unwrap().snapshot()
    }

    #[test]
    fn test_viewport_maps_corners() {
        let view = Viewport::new(80, 24, 800.0, 600.0);
        assert_eq!(view.col(0.0), 0);
        assert_eq!(view.col(800.0), 79, "Right edge clamps into the grid");
        assert_eq!(view.row(300.0), 12);
        assert_eq!(view.row(-50.0), 0);
    }

    #[test]
    fn test_viewport_span_is_never_empty() {
        let view = Viewport::new(80, 24, 800.0, 600.0);
        let ball = frame().ball;
        assert!(ball.width() < 10.0, "Ball is narrower than one cell");
        let (c0, r0, c1, r1) = view.span(&ball);
        assert!(c1 >= c0 && r1 >= r0);
    }

    #[test]
    fn test_compose_dimensions() {
        let lines = compose(&frame(), 80, 27);
        assert_eq!(lines.len(), 27);
        assert!(lines.iter().all(|l| l.chars().count() == 80));
    }

    #[test]
    fn test_compose_draws_score_paddles_and_help() {
        let snapshot = frame();
        let lines = compose(&snapshot, 80, 27);

        assert_eq!(lines[0].trim(), "0   0");
        assert!(lines[25].contains("W/S: Move | Esc: Quit"));
        assert!(lines[26].contains("endless"));

        // Field rows start below the score line; paddles centred vertically
        let view = Viewport::new(80, 24, 800.0, 600.0);
        let row: Vec<char> = lines[1 + usize::from(view.row(300.0))].chars().collect();
        let left_col = usize::from(view.col(snapshot.left_paddle.min.x));
        let right_col = usize::from(view.col(snapshot.right_paddle.min.x));
        assert_eq!(row[left_col], PADDLE);
        assert_eq!(row[right_col], PADDLE);

        // 12x100 px at 10x25 px per cell: two columns by four rows each
        let paddle_cells: usize = lines
            .iter()
            .map(|l| l.chars().filter(|c| *c == PADDLE).count())
            .sum();
        assert_eq!(paddle_cells, 2 * 2 * 4);
    }

    #[test]
    fn test_compose_survives_tiny_terminal() {
        let lines = compose(&frame(), 3, 1);
        assert!(!lines.is_empty());
    }
}
