use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(score) = session.final_score() else {
        return;
    };

    let correct = session.correct_count();
    let total = session.total_questions();
    let percentage = calculate_percentage(correct as usize, total);
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(15),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let (title, title_color) = if score.time_expired {
        ("TIME'S UP", Color::Red)
    } else {
        ("QUIZ COMPLETE", Color::Cyan)
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(title, Style::default().fg(title_color).bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{correct} / {total}"),
                Style::default().fg(grade_color).bold(),
            ),
            Span::raw(format!("  ({percentage:.0}% correct)")),
        ]),
        Line::from(Span::styled(
            format!("finished in {}", super::format_time(score.elapsed_seconds)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(format!("Base score       {:>5}", score.base)),
        Line::from(format!("Time bonus       {:>5}", score.time_bonus)),
    ];

    if score.perfection_bonus > 0 {
        content.push(Line::from(Span::styled(
            format!("Perfection bonus {:>5}", score.perfection_bonus),
            Style::default().fg(Color::Yellow),
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        format!("Total            {:>5}", score.total),
        Style::default().fg(grade_color).bold(),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("r play again · q quit".fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[3]);
}

fn calculate_percentage(correct: usize, total: usize) -> f64 {
    if total > 0 {
        (correct as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
