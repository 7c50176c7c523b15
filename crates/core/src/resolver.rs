//! Delimiter sniffing
//!
//! Collection always joins tags with the placeholder, but namespaced tags
//! carry their own `}` inside each segment. The resolver looks at the root
//! entry to decide which character actually separates the levels.

use crate::models::{Delimiter, PathSet};
use thiserror::Error;
use tracing::debug;

/// Neither `}` nor `.` appears in the sampled root entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot infer tree structure from path {sample:?}")]
pub struct AmbiguousStructure {
    /// Entry that was inspected (empty when there were no paths)
    pub sample: String,
}

/// Pick the delimiter for a collected path set
///
/// The sample is the first produced entry, the root's path. Every other
/// entry extends it, so it is also the smallest entry in sorted order and
/// the outcome does not depend on how the set is ordered.
pub fn resolve(paths: &PathSet) -> Result<Delimiter, AmbiguousStructure> {
    let sample = paths.first().unwrap_or_default();

    let delimiter = if sample.contains(Delimiter::Brace.as_char()) {
        Delimiter::Brace
    } else if sample.contains(Delimiter::Dot.as_char()) {
        Delimiter::Dot
    } else {
        return Err(AmbiguousStructure {
            sample: sample.to_string(),
        });
    };

    debug!(?delimiter, sample, "resolved delimiter");
    Ok(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[&str]) -> PathSet {
        let mut paths = PathSet::new();
        for entry in entries {
            paths.insert(entry.to_string());
        }
        paths
    }

    #[test]
    fn test_brace_wins_over_dot() {
        let paths = set(&[".{urn:u}a", ".{urn:u}a.{urn:u}b"]);
        assert_eq!(resolve(&paths), Ok(Delimiter::Brace));
    }

    #[test]
    fn test_plain_paths_use_dot() {
        let paths = set(&[".a", ".a.b"]);
        assert_eq!(resolve(&paths), Ok(Delimiter::Dot));
    }

    #[test]
    fn test_no_known_character_is_ambiguous() {
        let paths = set(&["|a", "|a|b"]);
        assert_eq!(
            resolve(&paths),
            Err(AmbiguousStructure {
                sample: "|a".to_string()
            })
        );
    }

    #[test]
    fn test_empty_set_is_ambiguous() {
        assert!(resolve(&PathSet::new()).is_err());
    }

    #[test]
    fn test_only_root_entry_is_inspected() {
        // A brace deeper in the tree does not change the decision
        let paths = set(&[".a", ".a.{urn:u}b"]);
        assert_eq!(resolve(&paths), Ok(Delimiter::Dot));
    }
}
