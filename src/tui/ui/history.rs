//! Move list rendering: one "go to" link per history entry.

use crate::games::tictactoe::GameView;
use crate::tui::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the move list, marking the displayed step and the selection.
pub fn render_history(f: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::History;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let lines: Vec<Line> = view
        .moves()
        .iter()
        .map(|link| {
            let marker = if *link.current() { "▶ " } else { "  " };
            let mut style = Style::default();
            if *link.current() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if focused && *link.step() == app.selected_step() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::styled(format!("{}{}. {}", marker, link.step() + 1, link.label()), style)
        })
        .collect();

    // Keep the selection (or the current step) in view on long games.
    let anchor = if focused { app.selected_step() } else { *view.current_step() };
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = anchor.saturating_sub(visible.saturating_sub(1)) as u16;

    let list = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Moves"),
    );
    f.render_widget(list, area);
}
