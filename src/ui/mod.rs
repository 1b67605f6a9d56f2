mod message;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::session::SessionStatus;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.session().status() {
        SessionStatus::Loading => message::render_loading(frame, area),
        SessionStatus::Active | SessionStatus::Feedback => quiz::render(frame, area, app),
        SessionStatus::Complete => result::render(frame, area, app),
        SessionStatus::Empty => message::render_empty(frame, area),
        SessionStatus::Error => {
            message::render_error(frame, area, app.session().error_message())
        }
    }
}

/// MM:SS for the countdown display.
pub(crate) fn format_time(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(119), "01:59");
        assert_eq!(format_time(600), "10:00");
    }
}
