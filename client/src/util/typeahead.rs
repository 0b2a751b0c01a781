//! Typeahead-filtered single-select field state.
//!
//! DESIGN
//! ======
//! One model backs every lookup field (resident, physician, insurer,
//! appointment reason, role). Candidates are fetched once and filtered by a
//! linear case-insensitive substring scan on each keystroke; there is no
//! ranking or debouncing. The committed value is what the enclosing form
//! submits, independent of the free text shown in the input.

#[cfg(test)]
#[path = "typeahead_test.rs"]
mod typeahead_test;

use crate::net::types::{Medecin, Motif, Mutuelle, Resident};

/// One selectable candidate: the value committed to the form and its label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    pub label: String,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }

    /// Candidate whose committed value is a numeric record id.
    pub fn from_id(id: i64, label: impl Into<String>) -> Self {
        Self::new(id.to_string(), label)
    }

    /// Candidate whose committed value is its own label (motifs, roles).
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self { value: label.clone(), label }
    }
}

impl From<&Resident> for Suggestion {
    fn from(resident: &Resident) -> Self {
        Self::from_id(resident.id, resident.full_name())
    }
}

impl From<&Mutuelle> for Suggestion {
    fn from(mutuelle: &Mutuelle) -> Self {
        Self::from_id(mutuelle.id, mutuelle.name.clone())
    }
}

impl From<&Medecin> for Suggestion {
    fn from(medecin: &Medecin) -> Self {
        Self::from_id(medecin.id, medecin.name.clone())
    }
}

/// Appointments store the reason text, not the motif id.
impl From<&Motif> for Suggestion {
    fn from(motif: &Motif) -> Self {
        Self::from_label(motif.name.clone())
    }
}

/// Map records to suggestions, preserving order.
pub fn suggestions<'a, T: 'a>(items: impl IntoIterator<Item = &'a T>) -> Vec<Suggestion>
where
    Suggestion: From<&'a T>,
{
    items.into_iter().map(Suggestion::from).collect()
}

/// Candidates whose label contains `query`, case-insensitively, in input order.
pub fn filter_suggestions(candidates: &[Suggestion], query: &str) -> Vec<Suggestion> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|s| s.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Per-field typeahead state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeaheadState {
    /// Free text currently shown in the input.
    pub query: String,
    /// Candidate committed to the form, if any.
    pub committed: Option<Suggestion>,
    /// Whether the suggestion list is open.
    pub active: bool,
}

impl TypeaheadState {
    /// State pre-filled with an existing selection (edit forms).
    pub fn preset(suggestion: Suggestion) -> Self {
        Self { query: suggestion.label.clone(), committed: Some(suggestion), active: false }
    }

    /// Preset to the candidate whose value is `value`; empty when none matches.
    pub fn preset_matching(candidates: &[Suggestion], value: &str) -> Self {
        candidates.iter().find(|c| c.value == value).cloned().map(Self::preset).unwrap_or_default()
    }

    pub fn focus(&mut self) {
        self.active = true;
    }

    /// Apply a keystroke. A committed value survives only while the text
    /// still equals its label.
    pub fn input(&mut self, text: String) {
        if self.committed.as_ref().is_some_and(|c| c.label != text) {
            self.committed = None;
        }
        self.query = text;
        self.active = true;
    }

    /// Commit `suggestion` and collapse the list.
    pub fn select(&mut self, suggestion: Suggestion) {
        self.query = suggestion.label.clone();
        self.committed = Some(suggestion);
        self.active = false;
    }

    /// Reset text and committed value.
    pub fn clear(&mut self) {
        self.query.clear();
        self.committed = None;
        self.active = false;
    }

    /// Collapse the list without touching the selection.
    pub fn close(&mut self) {
        self.active = false;
    }

    /// Suggestions to render; empty while the list is closed.
    pub fn visible(&self, candidates: &[Suggestion]) -> Vec<Suggestion> {
        if self.active { filter_suggestions(candidates, &self.query) } else { Vec::new() }
    }

    pub fn committed_value(&self) -> Option<&str> {
        self.committed.as_ref().map(|c| c.value.as_str())
    }

    /// Committed value parsed as a record id.
    pub fn committed_id(&self) -> Option<i64> {
        self.committed_value().and_then(|v| v.parse().ok())
    }
}
