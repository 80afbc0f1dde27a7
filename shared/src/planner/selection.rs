//! Pending exercise selection
//!
//! Tracks catalog exercises tapped but not yet committed to a day. Whether
//! an exercise is "checked" is always read from the pending list itself.

use crate::catalog::{BodyPart, Exercise};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog exercise placed in a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedExercise {
    /// Unique per selection, distinct from the catalog id
    pub instance_id: Uuid,
    /// Category the exercise was picked under
    pub body_part: BodyPart,
    pub exercise: Exercise,
}

impl SelectedExercise {
    pub fn new(exercise: &Exercise, body_part: BodyPart) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            body_part,
            exercise: exercise.clone(),
        }
    }
}

/// Pending selection keyed by catalog id, in tap order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    category: BodyPart,
    pending: Vec<SelectedExercise>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            category: BodyPart::Chest,
            pending: Vec::new(),
        }
    }
}

impl Selection {
    pub fn category(&self) -> BodyPart {
        self.category
    }

    /// Switch the browsed category; pending items are kept
    pub fn set_category(&mut self, category: BodyPart) {
        self.category = category;
    }

    /// Add or remove `exercise`; returns whether it is now pending
    pub fn toggle(&mut self, exercise: &Exercise) -> bool {
        if let Some(pos) = self.pending.iter().position(|s| s.exercise.id == exercise.id) {
            self.pending.remove(pos);
            false
        } else {
            self.pending.push(SelectedExercise::new(exercise, self.category));
            true
        }
    }

    pub fn is_checked(&self, exercise_id: &str) -> bool {
        self.pending.iter().any(|s| s.exercise.id == exercise_id)
    }

    /// Catalog ids currently pending
    pub fn checked_ids(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(|s| s.exercise.id.as_str())
    }

    pub fn pending(&self) -> &[SelectedExercise] {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use proptest::prelude::*;

    fn bench_press() -> &'static Exercise {
        catalog().exercise("c1").unwrap()
    }

    #[test]
    fn test_toggle_on_annotates_category() {
        let mut selection = Selection::default();
        assert!(selection.toggle(bench_press()));

        let picked = &selection.pending()[0];
        assert_eq!(picked.body_part, BodyPart::Chest);
        assert_eq!(picked.exercise.id, "c1");
        assert_ne!(picked.instance_id.to_string(), "c1");
        assert!(selection.is_checked("c1"));
    }

    #[test]
    fn test_toggle_off_removes() {
        let mut selection = Selection::default();
        selection.toggle(bench_press());
        assert!(!selection.toggle(bench_press()));
        assert_eq!(selection.pending_count(), 0);
        assert!(!selection.is_checked("c1"));
    }

    #[test]
    fn test_category_switch_keeps_pending() {
        let mut selection = Selection::default();
        selection.toggle(bench_press());
        selection.set_category(BodyPart::Legs);
        selection.toggle(catalog().exercise("l1").unwrap());

        let parts: Vec<_> = selection.pending().iter().map(|s| s.body_part).collect();
        assert_eq!(parts, vec![BodyPart::Chest, BodyPart::Legs]);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = Selection::default();
        selection.toggle(bench_press());
        selection.set_category(BodyPart::Legs);
        selection.toggle(catalog().exercise("l1").unwrap());

        selection.clear();
        assert_eq!(selection.pending_count(), 0);
        assert!(!selection.is_checked("c1"));
        assert!(!selection.is_checked("l1"));
        assert_eq!(selection.checked_ids().count(), 0);
        assert_eq!(selection.category(), BodyPart::Legs);
    }

    fn exercise_index() -> impl Strategy<Value = usize> {
        0..catalog().exercises().len()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Toggling the same exercise twice restores the pending list
        #[test]
        fn prop_toggle_twice_is_identity(
            setup in prop::collection::vec(exercise_index(), 0..10),
            target in exercise_index(),
        ) {
            let mut selection = Selection::default();
            for i in setup {
                selection.toggle(&catalog().exercises()[i]);
            }
            let before: Vec<String> = selection.checked_ids().map(String::from).collect();
            let was_checked = selection.is_checked(&catalog().exercises()[target].id);

            selection.toggle(&catalog().exercises()[target]);
            selection.toggle(&catalog().exercises()[target]);

            let after: Vec<String> = selection.checked_ids().map(String::from).collect();
            prop_assert_eq!(before.len(), after.len());
            prop_assert_eq!(was_checked, selection.is_checked(&catalog().exercises()[target].id));
            let mut before_sorted = before;
            let mut after_sorted = after;
            before_sorted.sort();
            after_sorted.sort();
            prop_assert_eq!(before_sorted, after_sorted);
        }

        /// Checked view always agrees with the pending list
        #[test]
        fn prop_checked_view_matches_pending(
            taps in prop::collection::vec(exercise_index(), 0..40),
        ) {
            let mut selection = Selection::default();
            for i in taps {
                selection.toggle(&catalog().exercises()[i]);
            }
            let ids: Vec<&str> = selection.checked_ids().collect();
            let mut deduped = ids.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(ids.len(), deduped.len());
            for exercise in catalog().exercises() {
                prop_assert_eq!(
                    selection.is_checked(&exercise.id),
                    ids.contains(&exercise.id.as_str())
                );
            }
        }
    }
}
