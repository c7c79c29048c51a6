//! Listing page reached after a successful update

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_listing(frame: &mut Frame, area: Rect, app: &App, route: &str) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("Person #{} updated.", app.person_id()),
            Style::default().fg(Color::Green),
        ),
        Line::from(""),
        Line::styled(
            format!("Now at {route}"),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" People ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}
