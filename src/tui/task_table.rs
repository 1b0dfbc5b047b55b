//! Column layout of the task list.
//!
//! Rows are plain fixed-width text so the same layout serves the TUI (with
//! styles) and the `list` command (without).

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::dates::format_date;
use crate::fields::format_status;
use crate::task::Task;
use crate::tui::colors::{COMPLETED, HEADER, HIGHLIGHT, PENDING};

pub const COLUMN_WIDTH: usize = 20;
pub const HEADERS: [&str; 4] = ["NAME", "PROJECT", "DUE DATE", "STATUS"];
pub const EMPTY_MESSAGE: &str = "No tasks have been added";

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

/// Pad and join cells into one row.
pub fn format_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| format!("{:<width$}", truncate(c.as_ref(), COLUMN_WIDTH), width = COLUMN_WIDTH))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn task_cells(task: &Task) -> [String; 4] {
    [
        task.name.clone(),
        task.project.clone(),
        format_date(task.due_date),
        format_status(task.completed).to_string(),
    ]
}

/// Header plus one styled line per task.
///
/// `highlighted` is a position in `tasks`; that row is drawn inverted.
pub fn render_rows<'a, I>(tasks: I, highlighted: Option<usize>) -> Vec<Line<'static>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut lines = vec![Line::from(Span::styled(format_row(&HEADERS), HEADER))];
    for (pos, task) in tasks.into_iter().enumerate() {
        let style = if highlighted == Some(pos) {
            HIGHLIGHT
        } else if task.completed {
            COMPLETED
        } else {
            PENDING
        };
        lines.push(Line::from(Span::styled(format_row(&task_cells(task)), style)));
    }
    lines
}

/// Unstyled table for printing to stdout.
pub fn plain_table<'a, I>(tasks: I) -> String
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut rows = vec![format_row(&HEADERS)];
    rows.extend(tasks.into_iter().map(|t| format_row(&task_cells(t))));
    if rows.len() == 1 {
        return EMPTY_MESSAGE.to_string();
    }
    rows.iter().map(|r| r.trim_end()).collect::<Vec<_>>().join("\n")
}

/// Draw the task table in a bordered block, scrolled so the highlighted row
/// stays visible.
pub fn render_task_table<'a, I>(f: &mut Frame, area: Rect, tasks: I, highlighted: Option<usize>, title: &str)
where
    I: IntoIterator<Item = &'a Task>,
{
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let lines = render_rows(tasks, highlighted);

    if lines.len() == 1 {
        let empty = Paragraph::new(vec![Line::from(Span::styled(EMPTY_MESSAGE, Style::default()))]).block(block);
        f.render_widget(empty, area);
        return;
    }

    // Header line plus as many rows as fit inside the border.
    let visible_rows = (area.height as usize).saturating_sub(3).max(1);
    let offset = highlighted
        .map(|h| h.saturating_sub(visible_rows - 1))
        .unwrap_or(0);

    let mut shown = vec![lines[0].clone()];
    shown.extend(lines.into_iter().skip(1 + offset));
    f.render_widget(Paragraph::new(shown).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_tasks;
    use pretty_assertions::assert_eq;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_header_and_row_layout() {
        let tasks = sample_tasks();
        let lines = render_rows(&tasks[..1], None);

        assert_eq!(lines.len(), 2);
        assert_eq!(
            text(&lines[0]).trim_end(),
            "NAME                 PROJECT              DUE DATE             STATUS"
        );
        assert_eq!(
            text(&lines[1]).trim_end(),
            "Write report         Q3                   2025-03-01           Pending"
        );
        assert_eq!(text(&lines[1]).chars().count(), COLUMN_WIDTH * 4 + 3);
    }

    #[test]
    fn test_status_styles_and_highlight() {
        let tasks = sample_tasks();
        let lines = render_rows(&tasks, Some(2));

        assert_eq!(lines[0].spans[0].style, HEADER);
        assert_eq!(lines[1].spans[0].style, PENDING);
        assert_eq!(lines[2].spans[0].style, COMPLETED);
        assert_eq!(lines[3].spans[0].style, HIGHLIGHT);
        assert!(text(&lines[2]).contains("Completed"));
    }

    #[test]
    fn test_long_values_are_truncated() {
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("abcdefghijklmnopqrstuvwxyz", 5), "abcd…");
        let row = format_row(&["a very long task name indeed", "p", "d", "s"]);
        assert!(row.starts_with("a very long task na… p "));
    }

    #[test]
    fn test_plain_table_empty() {
        assert_eq!(plain_table(&Vec::<Task>::new()), EMPTY_MESSAGE);
        let tasks = sample_tasks();
        assert_eq!(plain_table(&tasks).lines().count(), 4);
    }
}
