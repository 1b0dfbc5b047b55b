//! Cursor-based menu navigation.
//!
//! `Menu` is the selection state behind every list the user moves through:
//! the main menu, the sort menu, the task picker and the edit menu. The cursor
//! wraps at both ends. Confirm hands the selected index back to the caller,
//! which decides what it means.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::colors::HIGHLIGHT;
use crate::tui::input::MenuInput;

/// Result of feeding one input to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The cursor moved or the input was ignored.
    Pending,
    /// The item at this index was confirmed.
    Selected(usize),
    Cancelled,
}

/// Something that can be listed in a menu.
pub trait MenuItem {
    fn label(&self) -> &str;
}

/// A non-empty list of options with one selected.
#[derive(Debug, Clone)]
pub struct Menu<T> {
    items: Vec<T>,
    selected: usize,
}

impl<T> Menu<T> {
    /// Create a menu with the cursor on the first item. `None` if `items` is empty.
    pub fn new(items: Vec<T>) -> Option<Self> {
        Self::with_selected(items, 0)
    }

    /// Create a menu with the cursor on `selected`, clamped to the last item.
    pub fn with_selected(items: Vec<T>, selected: usize) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let selected = selected.min(items.len() - 1);
        Some(Menu { items, selected })
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &T {
        &self.items[self.selected]
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn move_up(&mut self) {
        self.selected = if self.selected == 0 {
            self.items.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn move_down(&mut self) {
        self.selected = if self.selected == self.items.len() - 1 {
            0
        } else {
            self.selected + 1
        };
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Apply one input.
    pub fn handle(&mut self, input: MenuInput) -> MenuOutcome {
        match input {
            MenuInput::MoveUp => self.move_up(),
            MenuInput::MoveDown => self.move_down(),
            MenuInput::Confirm => return MenuOutcome::Selected(self.selected),
            MenuInput::Cancel => return MenuOutcome::Cancelled,
            MenuInput::Other => {}
        }
        MenuOutcome::Pending
    }

    pub fn list_state(&self) -> ListState {
        ListState::default().with_selected(Some(self.selected))
    }
}

impl<T: Copy> Menu<T> {
    /// Menu over a fixed option set known at compile time.
    pub fn fixed(items: &[T]) -> Self {
        assert!(!items.is_empty(), "a fixed menu needs at least one option");
        Menu {
            items: items.to_vec(),
            selected: 0,
        }
    }
}

/// Draw a menu as a bordered list with the selected option highlighted.
pub fn render_menu<T: MenuItem>(f: &mut Frame, area: Rect, menu: &Menu<T>, title: &str) {
    let items: Vec<ListItem> = menu
        .items()
        .iter()
        .map(|item| ListItem::new(Line::from(format!("  {}", item.label()))))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(HIGHLIGHT)
        .highlight_symbol("► ");

    f.render_stateful_widget(list, area, &mut menu.list_state());
}
