use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AnswerType;
use crate::session::SessionStatus;

const OPTION_LABELS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
const LOW_TIME_SECONDS: u32 = 10;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.session().current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &question.text);

    match question.answer_type {
        AnswerType::Text => render_options(frame, chunks[2], app),
        AnswerType::Numeric => render_numeric_input(frame, chunks[2], app),
    }

    render_controls(frame, chunks[3], question.answer_type);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let progress = format!(
        "Question {}/{}",
        session.current_index() + 1,
        session.total_questions()
    );

    let remaining = session.remaining_seconds();
    let timer_color = if remaining <= LOW_TIME_SECONDS {
        Color::Red
    } else {
        Color::DarkGray
    };
    let mute_marker = if session.is_muted() { "  [muted]" } else { "" };

    let line = Line::from(vec![
        Span::styled(progress, Style::default().fg(Color::Cyan)),
        Span::raw("  ·  "),
        Span::styled(super::format_time(remaining), Style::default().fg(timer_color)),
        Span::styled(mute_marker, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().bold());
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let question = match session.current_question() {
        Some(q) => q,
        None => return,
    };
    let in_feedback = session.status() == SessionStatus::Feedback;

    let mut lines = vec![Line::from("")];
    for (i, option) in question.options.iter().enumerate() {
        let label = OPTION_LABELS.get(i).copied().unwrap_or('?');
        let style = option_style(app, option, i, in_feedback);
        lines.push(Line::from(Span::styled(
            format!("  {label}) {option}"),
            style,
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

/// Highlight rules: before submission the cursor row is highlighted;
/// during feedback the chosen option turns green or red and the correct
/// one is always revealed in green.
fn option_style(app: &App, option: &str, index: usize, in_feedback: bool) -> Style {
    let session = app.session();
    if in_feedback {
        let question = session.current_question();
        let is_correct_option =
            question.is_some_and(|q| q.correct_answer == option);
        let is_chosen = session.selected_answer() == Some(option);

        if is_correct_option {
            Style::default().fg(Color::Green).bold()
        } else if is_chosen {
            Style::default().fg(Color::Red).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    } else if index == app.cursor() {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default()
    }
}

fn render_numeric_input(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let in_feedback = session.status() == SessionStatus::Feedback;

    let shown = if in_feedback {
        session.selected_answer().unwrap_or("")
    } else {
        app.numeric_input()
    };

    let input_style = match session.feedback_correct() {
        Some(true) => Style::default().fg(Color::Green).bold(),
        Some(false) => Style::default().fg(Color::Red).bold(),
        None => Style::default().fg(Color::Cyan).bold(),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  > {shown}_"), input_style)),
        Line::from(""),
    ];

    if session.feedback_correct() == Some(false)
        && let Some(question) = session.current_question()
    {
        lines.push(Line::from(Span::styled(
            format!("  correct answer: {}", question.correct_answer),
            Style::default().fg(Color::Green),
        )));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, answer_type: AnswerType) {
    let controls = match answer_type {
        AnswerType::Text => "↑/↓ select · ENTER answer · m mute · q quit",
        AnswerType::Numeric => "0-9 type · BACKSPACE erase · ENTER answer · m mute · q quit",
    };
    let widget = Paragraph::new(controls.fg(Color::DarkGray)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
