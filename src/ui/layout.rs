//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into location header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Location header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the location line, like an address bar
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ⌂ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.state.location.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(header, area);
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Request activity
    let activity = if app.state.pending_requests > 0 {
        Span::styled(
            format!(" ⟳ {} ", app.state.pending_requests),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(activity);

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    // Constraint failure from the last submit attempt
    if let Some(msg) = &app.state.validation_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::PersonEdit => format!("Tab:next  ^U:clear  Enter/{SUBMIT_SHORTCUT}:save  Esc:quit"),
        View::Listing { .. } => "q/Esc:quit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_header_and_status_lines() {
        let (header, content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 1);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
        assert_eq!(content.height, 22);
    }

    #[test]
    fn test_view_hints() {
        assert!(get_view_hints(&View::PersonEdit).contains("save"));
        assert_eq!(
            get_view_hints(&View::Listing {
                route: "/people".to_string()
            }),
            "q/Esc:quit"
        );
    }
}
