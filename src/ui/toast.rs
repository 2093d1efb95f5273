use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

const TOAST_WIDTH: u16 = 24;
const TOAST_HEIGHT: u16 = 3;
// Rows kept free below the toast for the control hints.
const BOTTOM_OFFSET: u16 = 4;

/// Draw the verdict toast, if one is live, over the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(toast), Some(message)) = (app.toast(), app.toast_message()) else {
        return;
    };

    let color = if toast.verdict.is_correct() {
        Color::Green
    } else {
        Color::Red
    };

    let toast_area = toast_area(area);
    let widget = Paragraph::new(message)
        .alignment(Alignment::Center)
        .fg(color)
        .bold()
        .block(Block::default().borders(Borders::ALL).border_style(color));

    frame.render_widget(Clear, toast_area);
    frame.render_widget(widget, toast_area);
}

fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height.saturating_sub(height + BOTTOM_OFFSET);
    Rect::new(x, y, width, height)
}
