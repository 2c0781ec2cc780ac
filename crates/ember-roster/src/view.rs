//! Filtered, sorted projection of the roster.
//!
//! A [`RosterView`] borrows the [`RosterModel`] it presents, so it is
//! rebuilt after every model or filter change and can never outlive or
//! mutate the model. Rows are ordered Online first, then by display name,
//! with insertion order kept for equal keys.

use ember_shared::types::PeerId;

use crate::model::{PeerEntry, RosterModel};

/// Case-insensitive substring filter applied to display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    text: String,
    needle: String,
}

impl RosterFilter {
    pub fn new(text: impl Into<String>) -> Self {
        let mut filter = Self::default();
        filter.set_text(text);
        filter
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.needle = self.text.to_lowercase();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// An empty filter matches every entry.
    pub fn matches(&self, entry: &PeerEntry) -> bool {
        self.needle.is_empty() || entry.display_name().to_lowercase().contains(&self.needle)
    }
}

#[derive(Debug, Clone)]
pub struct RosterView<'m> {
    rows: Vec<&'m PeerEntry>,
}

impl<'m> RosterView<'m> {
    pub fn new(model: &'m RosterModel, filter: &RosterFilter) -> Self {
        let mut rows: Vec<&PeerEntry> = model
            .entries()
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect();

        // `sort_by` is stable, so ties keep insertion order.
        rows.sort_by(|a, b| {
            a.status()
                .sort_rank()
                .cmp(&b.status().sort_rank())
                .then_with(|| a.display_name().cmp(b.display_name()))
        });

        Self { rows }
    }

    /// Entry shown at `row`, if any.
    pub fn entry(&self, row: usize) -> Option<&'m PeerEntry> {
        self.rows.get(row).copied()
    }

    /// Row at which `id` is shown, or `None` if it is filtered out or unknown.
    pub fn row_of(&self, id: &PeerId) -> Option<usize> {
        self.rows.iter().position(|entry| entry.id() == id)
    }

    pub fn rows(&self) -> impl Iterator<Item = &'m PeerEntry> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use ember_shared::types::PresenceStatus;

    use super::*;

    fn names(view: &RosterView<'_>) -> Vec<String> {
        view.rows().map(|e| e.display_name().to_string()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut model = RosterModel::new();
        model.add_peer(PeerId::new("1"), "Anna").unwrap();
        model.add_peer(PeerId::new("2"), "Bob").unwrap();
        model.add_peer(PeerId::new("3"), "Annabelle").unwrap();

        for text in ["ann", "ANN", "aNn"] {
            let view = RosterView::new(&model, &RosterFilter::new(text));
            assert_eq!(names(&view), vec!["Anna", "Annabelle"]);
        }

        let all = RosterView::new(&model, &RosterFilter::default());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_sort_online_first_then_name() {
        let mut model = RosterModel::new();
        model.add_peer(PeerId::new("c"), "C").unwrap();
        model.add_peer(PeerId::new("a"), "A").unwrap();
        model.add_peer(PeerId::new("b"), "B").unwrap();
        model
            .set_status(&PeerId::new("b"), PresenceStatus::Online)
            .unwrap();

        let view = RosterView::new(&model, &RosterFilter::default());
        assert_eq!(names(&view), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_is_case_sensitive_and_stable() {
        let mut model = RosterModel::new();
        model.add_peer(PeerId::new("1"), "bob").unwrap();
        model.add_peer(PeerId::new("2"), "Zed").unwrap();
        model.add_peer(PeerId::new("3"), "Zed").unwrap();

        let view = RosterView::new(&model, &RosterFilter::default());
        assert_eq!(names(&view), vec!["Zed", "Zed", "bob"]);
        assert_eq!(view.entry(0).unwrap().id(), &PeerId::new("2"));
        assert_eq!(view.entry(1).unwrap().id(), &PeerId::new("3"));
    }

    #[test]
    fn test_row_mapping_roundtrip() {
        let mut model = RosterModel::new();
        model.add_peer(PeerId::new("x"), "Xavier").unwrap();
        model.add_peer(PeerId::new("y"), "Yann").unwrap();

        let view = RosterView::new(&model, &RosterFilter::new("yan"));
        assert_eq!(view.len(), 1);
        assert_eq!(view.row_of(&PeerId::new("y")), Some(0));
        assert_eq!(view.row_of(&PeerId::new("x")), None);
        assert_eq!(view.entry(0).unwrap().id(), &PeerId::new("y"));
        assert!(view.entry(1).is_none());
    }
}
