//! Resolution of selected parent ids against parent collections already
//! loaded in memory. Resolution happens exactly once, at submit time, and
//! never goes back to the store per reference.

use crate::entity::Stored;
use crate::error::{Result, StorageError};

/// Resolve a required reference. A selection that does not match any
/// loaded candidate aborts the write with a domain error naming the slot.
pub fn resolve_required<'a, T>(
    id: &str,
    candidates: &'a [Stored<T>],
    what: &'static str,
) -> Result<&'a T> {
    candidates
        .iter()
        .find(|stored| stored.id == id)
        .map(|stored| &stored.record)
        .ok_or(StorageError::MissingReference(what))
}

/// Resolve the display field of an optional/secondary reference. A missing
/// selection or a selection with no matching candidate degrades to an
/// empty string rather than failing the write.
pub fn resolve_display<T>(
    id: Option<&str>,
    candidates: &[Stored<T>],
    display: impl Fn(&T) -> &str,
) -> String {
    id.and_then(|id| candidates.iter().find(|stored| stored.id == id))
        .map(|stored| display(&stored.record).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Named {
        name: String,
    }

    fn stored(id: &str, name: &str) -> Stored<Named> {
        Stored {
            id: id.to_string(),
            record: Named {
                name: name.to_string(),
            },
        }
    }

    #[test]
    fn required_reference_resolves_to_loaded_record() {
        let candidates = vec![stored("a", "Alpha"), stored("b", "Beta")];
        let record = resolve_required("b", &candidates, "team").unwrap();
        assert_eq!(record.name, "Beta");
    }

    #[test]
    fn missing_required_reference_aborts() {
        let candidates = vec![stored("a", "Alpha")];
        let err = resolve_required::<Named>("gone", &candidates, "modality").unwrap_err();
        assert!(matches!(err, StorageError::MissingReference("modality")));
    }

    #[test]
    fn optional_display_degrades_to_empty_string() {
        let candidates = vec![stored("a", "Alpha")];
        assert_eq!(
            resolve_display(Some("a"), &candidates, |n: &Named| &n.name),
            "Alpha"
        );
        assert_eq!(
            resolve_display(Some("gone"), &candidates, |n: &Named| &n.name),
            ""
        );
        assert_eq!(resolve_display(None, &candidates, |n: &Named| &n.name), "");
    }
}
