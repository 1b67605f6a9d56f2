//! Full-screen status messages: loading, no questions, fetch error.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render_loading(frame: &mut Frame, area: Rect) {
    render_message(
        frame,
        area,
        "LOADING",
        Color::Cyan,
        "fetching today's questions...",
        None,
    );
}

pub fn render_empty(frame: &mut Frame, area: Rect) {
    render_message(
        frame,
        area,
        "NO QUESTIONS",
        Color::Yellow,
        "the question bank cannot fill a session",
        Some("r retry · q quit"),
    );
}

pub fn render_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    render_message(
        frame,
        area,
        "ERROR",
        Color::Red,
        message.unwrap_or("could not load the quiz"),
        Some("r retry · q quit"),
    );
}

fn render_message(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    title_color: Color,
    body: &str,
    controls: Option<&str>,
) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(title_color).bold(),
        )),
        Line::from(""),
        Line::from(body.to_string().fg(Color::DarkGray)),
        Line::from(""),
    ];
    if let Some(controls) = controls {
        content.push(Line::from(controls.to_string().fg(Color::DarkGray)));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
