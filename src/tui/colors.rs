//! Styles for the terminal user interface.

use ratatui::style::{Color, Modifier, Style};

/// Column header row.
pub const HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const COMPLETED: Style = Style::new().fg(Color::Cyan);
pub const PENDING: Style = Style::new().fg(Color::Magenta);
/// Cursor row in tables and menus. Replaces the status style.
pub const HIGHLIGHT: Style = Style::new().fg(Color::Black).bg(Color::White);
pub const ERROR: Style = Style::new().fg(Color::Red);
pub const STATUS_BAR: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
