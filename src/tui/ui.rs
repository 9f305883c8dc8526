use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

use super::colors;
use super::widgets::{render_branch_list, render_help_footer};

const TITLE: &str = "Which branch do you want to checkout?";

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, app, header_area);
    render_branch_list(frame, app, body_area);
    render_help_footer(frame, app, footer_area);
}

/// Render header bar: title on the left, filter or count on the right
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let right = match app.mode {
        Mode::Search => format!("/{}", app.list.query()),
        Mode::Normal if !app.list.query().is_empty() => {
            format!("{}/{}", app.list.visible_len(), app.list.items().len())
        }
        Mode::Normal => format!("{} branches", app.list.items().len()),
    };

    let padding = (area.width as usize).saturating_sub(TITLE.width() + right.width());

    let header_text = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(colors::PRIMARY)),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(colors::BAR_BG));

    frame.render_widget(header, area);
}
