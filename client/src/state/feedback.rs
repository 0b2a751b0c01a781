//! Inline error / success message for a single page.
//!
//! DESIGN
//! ======
//! Every view reports failures the same way: one dismissable message with
//! the caught text, leaving the form populated so the user can correct it.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Feedback {
    /// Show `message` as an error, replacing any success message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    /// Show `message` as a success, replacing any error message.
    pub fn succeed(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    /// Hide the error message only.
    pub fn dismiss(&mut self) {
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }
}
