use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Mode};
use crate::git::BranchName;
use crate::tui::colors;

/// Text of a single row; depends only on the branch and its position
pub fn item_label(position: usize, branch: &BranchName, numbered: bool) -> String {
    if numbered {
        format!("{}. {}", position + 1, branch)
    } else {
        branch.to_string()
    }
}

/// Render the branch list widget
pub fn render_branch_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let border = if app.mode == Mode::Search {
        colors::BORDER_FOCUS
    } else {
        colors::BORDER
    };
    let block = Block::default()
        .title(" Branches ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if app.list.visible_len() == 0 {
        let message = if app.list.items().is_empty() {
            "No local branches"
        } else {
            "No branches match the filter"
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(colors::MUTED),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let numbered = app.ui.show_numbers();
    let items: Vec<ListItem> = app
        .list
        .visible_items()
        .enumerate()
        .map(|(pos, branch)| ListItem::new(item_label(pos, branch, numbered)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(colors::HIGHLIGHT)
                .bg(colors::SELECTION_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, &mut app.list.state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_label_numbered() {
        assert_eq!(item_label(0, &BranchName::from("main"), true), "1. main");
        assert_eq!(item_label(9, &BranchName::from("dev"), true), "10. dev");
    }

    #[test]
    fn test_item_label_plain() {
        assert_eq!(item_label(3, &BranchName::from("feature/x"), false), "feature/x");
    }
}
