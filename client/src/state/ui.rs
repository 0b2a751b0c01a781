//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the auth state so the
//! navigation shell can evolve independently of session data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navigation shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
