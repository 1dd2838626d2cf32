use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::grid::Cell;
use crate::session::Session;

const GLYPH_SNAKE_HEAD: &str = "█";
const GLYPH_SNAKE_BODY: &str = "▓";
const GLYPH_FOOD: &str = "●";

/// Renders one frame from immutable session state.
pub fn render(frame: &mut Frame<'_>, session: &Session) {
    let [status_area, field_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    render_status(frame, status_area, session);

    let block = Block::bordered().border_style(Style::new().fg(Color::White));
    let inner = block.inner(field_area);
    frame.render_widget(block, field_area);

    render_food(frame, inner, session);
    render_snake(frame, inner, session);
}

fn render_status(frame: &mut Frame<'_>, area: Rect, session: &Session) {
    let line = Line::from(format!(
        "Round {}  Score {}  Length {}  (arrows/WASD move, q quits)",
        session.round,
        session.score,
        session.snake.len(),
    ));
    frame.render_widget(
        Paragraph::new(line).style(Style::new().fg(Color::DarkGray)),
        area,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &Session) {
    let Some((x, y)) = cell_to_terminal(inner, session, session.food.cell) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &Session) {
    let head_cell = session.snake.head().cell;

    let buffer = frame.buffer_mut();
    for segment in session.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, session, segment.cell) else {
            continue;
        };

        if segment.cell == head_cell {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(Color::Green));
        }
    }
}

/// Maps an absolute grid cell to a terminal coordinate inside `inner`.
///
/// Cells outside the grid or beyond the visible area are skipped rather than
/// clamped, so a head mid-boundary-exit simply is not drawn.
fn cell_to_terminal(inner: Rect, session: &Session, cell: Cell) -> Option<(u16, u16)> {
    let (col, row) = session.grid().col_row(cell)?;

    let x_offset = u16::try_from(col).ok()?;
    let y_offset = u16::try_from(row).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
