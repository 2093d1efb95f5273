use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app);
    render_question_text(frame, chunks[2], app.current_prompt());
    render_button_row(frame, chunks[3], [("TRUE", 't'), ("FALSE", 'f')], Color::Cyan);
    render_button_row(frame, chunks[4], [("< PREV", 'p'), ("NEXT >", 'n')], Color::Gray);
    render_controls(frame, chunks[6]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let [title_area, progress_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).areas(area);

    let title = Paragraph::new(app.strings().resolve("app_name"))
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, title_area);

    let progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, progress_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_button_row(frame: &mut Frame, area: Rect, buttons: [(&str, char); 2], color: Color) {
    let [left, _, right] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    for ((label, key), button_area) in buttons.into_iter().zip([left, right]) {
        let content = Line::from(vec![
            Span::styled(label, Style::default().fg(color).bold()),
            Span::styled(format!("  ({})", key), Style::default().fg(Color::DarkGray)),
        ]);
        let widget = Paragraph::new(content).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
        frame.render_widget(widget, button_area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("t/f answer  ·  p/n navigate  ·  enter next  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
