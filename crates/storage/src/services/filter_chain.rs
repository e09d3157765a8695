//! Cascading dependent-selection chains (team → skater, modality →
//! category → age bracket).
//!
//! One transition function owns the invariant "changing upstream clears
//! downstream", instead of every call site clearing selections by hand.
//! A generation counter guards against applying a candidate list computed
//! for a selection that has since changed.

use crate::entity::Stored;

/// Selection state machine for one chain of dependent slots.
#[derive(Debug, Clone)]
pub struct FilterChain {
    slots: Vec<&'static str>,
    selections: Vec<Option<String>>,
    generation: u64,
}

impl FilterChain {
    pub fn new(slots: &[&'static str]) -> Self {
        Self {
            slots: slots.to_vec(),
            selections: vec![None; slots.len()],
            generation: 0,
        }
    }

    pub fn slot_name(&self, level: usize) -> &'static str {
        self.slots[level]
    }

    pub fn selection(&self, level: usize) -> Option<&str> {
        self.selections[level].as_deref()
    }

    /// The single transition: set a slot and clear every slot downstream
    /// of it, in one step. Selecting `None` clears the slot itself too.
    pub fn select(&mut self, level: usize, value: Option<String>) -> u64 {
        self.selections[level] = value;
        for downstream in self.selections[level + 1..].iter_mut() {
            *downstream = None;
        }
        self.generation += 1;
        self.generation
    }

    /// Generation issued by the most recent transition. Candidate lists
    /// computed asynchronously should carry the generation of the
    /// transition that triggered them.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a response computed at `generation` may still be applied.
    /// A stale response (an older transition's generation) must be
    /// discarded, never rendered over newer state.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Drop a downstream selection that is no longer inside its candidate
    /// list. Returns true when the selection survived.
    pub fn retain_if_candidate(&mut self, level: usize, candidate_ids: &[&str]) -> bool {
        match &self.selections[level] {
            Some(id) if candidate_ids.contains(&id.as_str()) => true,
            Some(_) => {
                self.select(level, None);
                false
            }
            None => false,
        }
    }
}

/// Candidate list for a slot: records whose parent-reference equals the
/// upstream key, or the whole collection when upstream is unselected
/// (pass-through).
pub fn filter_candidates<'a, T>(
    records: &'a [Stored<T>],
    upstream_key: Option<&str>,
    parent_ref: impl Fn(&T) -> &str,
) -> Vec<&'a Stored<T>> {
    records
        .iter()
        .filter(|stored| upstream_key.is_none_or(|key| parent_ref(&stored.record) == key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Child {
        parent: String,
    }

    fn child(id: &str, parent: &str) -> Stored<Child> {
        Stored {
            id: id.to_string(),
            record: Child {
                parent: parent.to_string(),
            },
        }
    }

    #[test]
    fn upstream_change_clears_all_downstream_slots() {
        let mut chain = FilterChain::new(&["modality", "category", "age_bracket"]);
        chain.select(0, Some("mod-1".to_string()));
        chain.select(1, Some("cat-1".to_string()));
        chain.select(2, Some("bracket-1".to_string()));

        chain.select(0, Some("mod-2".to_string()));

        assert_eq!(chain.selection(0), Some("mod-2"));
        assert_eq!(chain.selection(1), None);
        assert_eq!(chain.selection(2), None);
    }

    #[test]
    fn unselecting_upstream_also_clears_downstream() {
        let mut chain = FilterChain::new(&["team", "skater"]);
        chain.select(0, Some("alpha".to_string()));
        chain.select(1, Some("jane".to_string()));

        chain.select(0, None);
        assert_eq!(chain.selection(1), None);
    }

    #[test]
    fn candidates_filter_by_upstream_or_pass_through() {
        let skaters = vec![child("jane", "alpha"), child("bob", "beta")];

        let filtered = filter_candidates(&skaters, Some("alpha"), |s| &s.parent);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "jane");

        let all = filter_candidates(&skaters, None, |s| &s.parent);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn downstream_selection_outside_new_candidates_is_cleared() {
        let mut chain = FilterChain::new(&["team", "skater"]);
        chain.select(0, Some("alpha".to_string()));
        chain.select(1, Some("jane".to_string()));

        // Team switches to beta; Jane is not among beta's members.
        chain.select(0, Some("beta".to_string()));
        assert_eq!(chain.selection(1), None);
        assert!(!chain.retain_if_candidate(1, &["bob"]));
    }

    #[test]
    fn surviving_downstream_selection_is_retained() {
        let mut chain = FilterChain::new(&["team", "skater"]);
        chain.select(1, Some("jane".to_string()));
        assert!(chain.retain_if_candidate(1, &["jane", "bob"]));
        assert_eq!(chain.selection(1), Some("jane"));
    }

    #[test]
    fn stale_candidate_response_is_discarded() {
        let mut chain = FilterChain::new(&["team", "skater"]);
        let first = chain.select(0, Some("alpha".to_string()));
        let second = chain.select(0, Some("beta".to_string()));

        // The alpha response arrives after the beta transition.
        assert!(!chain.is_current(first));
        assert!(chain.is_current(second));
    }
}
