use chrono::{Local, NaiveDate};

use crate::models::Bill;
use crate::store::BillStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Bills,
    Optimizer,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Bills, Self::Optimizer]
    }

    pub(crate) fn next(self) -> Self {
        let screens = Self::all();
        let idx = screens.iter().position(|s| *s == self).unwrap_or(0);
        screens[(idx + 1) % screens.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let screens = Self::all();
        let idx = screens.iter().position(|s| *s == self).unwrap_or(0);
        if idx == 0 {
            screens[screens.len() - 1]
        } else {
            screens[idx - 1]
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Bills => write!(f, "Bills"),
            Self::Optimizer => write!(f, "Optimizer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingAction {
    RemoveBill { id: String, description: String },
}

/// Highlighted row and first on-screen row of the bills list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BillCursor {
    pub(crate) index: usize,
    pub(crate) offset: usize,
}

impl BillCursor {
    pub(crate) fn down(&mut self, len: usize, page: usize) {
        if self.index + 1 < len {
            self.index += 1;
            self.reveal(page);
        }
    }

    pub(crate) fn up(&mut self, page: usize) {
        self.index = self.index.saturating_sub(1);
        self.reveal(page);
    }

    pub(crate) fn top(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn bottom(&mut self, len: usize, page: usize) {
        if len > 0 {
            self.index = len - 1;
            self.reveal(page);
        }
    }

    /// Select row `index` of a `len`-row list. Out-of-range rows are ignored.
    pub(crate) fn jump(&mut self, index: usize, len: usize, page: usize) -> bool {
        if index >= len {
            return false;
        }
        self.index = index;
        self.reveal(page);
        true
    }

    /// Pull the cursor back inside a list that shrank to `len` rows.
    pub(crate) fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
        self.offset = self.offset.min(self.index);
    }

    fn reveal(&mut self, page: usize) {
        let page = page.max(1);
        if self.index < self.offset {
            self.offset = self.index;
        } else if self.index >= self.offset + page {
            self.offset = self.index + 1 - page;
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) today: NaiveDate,

    pub(crate) store: BillStore,

    pub(crate) cursor: BillCursor,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: BillStore) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today: Local::now().date_naive(),

            store,

            cursor: BillCursor::default(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Bills shown on the Bills screen: the filtered view while a category
    /// filter is active, otherwise every bill.
    pub(crate) fn visible_bills(&self) -> Vec<&Bill> {
        if self.store.category_filter().is_some() {
            self.store.filtered_bills()
        } else {
            self.store.bills().iter().collect()
        }
    }

    pub(crate) fn selected_bill(&self) -> Option<&Bill> {
        self.visible_bills().get(self.cursor.index).copied()
    }

    pub(crate) fn move_down(&mut self) {
        let len = self.visible_bills().len();
        self.cursor.down(len, self.visible_rows);
    }

    pub(crate) fn move_up(&mut self) {
        self.cursor.up(self.visible_rows);
    }

    pub(crate) fn move_to_bottom(&mut self) {
        let len = self.visible_bills().len();
        self.cursor.bottom(len, self.visible_rows);
    }

    /// Keep the cursor inside the visible list after it shrinks.
    pub(crate) fn clamp_selection(&mut self) {
        let len = self.visible_bills().len();
        self.cursor.clamp(len);
    }

    pub(crate) fn reset_selection(&mut self) {
        self.cursor.top();
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
