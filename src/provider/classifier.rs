//! Detection of the in-memory provider.
//!
//! Detection is a name heuristic: a provider whose reported name contains
//! [`IN_MEMORY_PROVIDER_MARKER`], in any casing, is treated as the
//! non-durable in-memory substitute.

use crate::error::{require, InvalidArgument};
use crate::provider::facade::DatabaseFacade;

/// Substring identifying the in-memory provider.
pub const IN_MEMORY_PROVIDER_MARKER: &str = "InMemory";

/// Check whether a provider name identifies the in-memory provider.
///
/// Absent and empty names are never in-memory.
pub fn provider_name_is_in_memory(name: Option<&str>) -> bool {
    name.is_some_and(|name| {
        name.to_lowercase()
            .contains(&IN_MEMORY_PROVIDER_MARKER.to_lowercase())
    })
}

/// Check whether `db` is backed by the in-memory provider.
pub fn is_in_memory_provider<D: DatabaseFacade>(db: Option<&D>) -> Result<bool, InvalidArgument> {
    let db = require(db, "database")?;
    Ok(provider_name_is_in_memory(db.provider_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::testing::RecordingFacade;
    use proptest::prelude::*;

    #[test]
    fn test_known_provider_names() {
        assert!(provider_name_is_in_memory(Some("Microsoft.EntityFrameworkCore.InMemory")));
        assert!(!provider_name_is_in_memory(Some("Microsoft.EntityFrameworkCore.SqlServer")));
        assert!(!provider_name_is_in_memory(Some("Npgsql.EntityFrameworkCore.PostgreSQL")));
    }

    #[test]
    fn test_partial_markers_do_not_match() {
        for name in [
            "InMem",
            "In.Memory",
            "In Memory",
            "In-Memory",
            "in_memory",
            "Memory",
            "InMemor",
            "nMemory",
            "nulltx.MemoryIn",
        ] {
            assert!(!provider_name_is_in_memory(Some(name)), "{} matched", name);
        }
    }

    #[test]
    fn test_absent_and_empty_names() {
        assert!(!provider_name_is_in_memory(None));
        assert!(!provider_name_is_in_memory(Some("")));
    }

    #[test]
    fn test_classify_facade() {
        let in_memory = RecordingFacade::new(Some("nulltx.inmemory"));
        let sqlite = RecordingFacade::new(Some("nulltx.Sqlite"));
        let unnamed = RecordingFacade::new(None);

        assert_eq!(is_in_memory_provider(Some(&in_memory)), Ok(true));
        assert_eq!(is_in_memory_provider(Some(&sqlite)), Ok(false));
        assert_eq!(is_in_memory_provider(Some(&unnamed)), Ok(false));
    }

    #[test]
    fn test_classify_absent_facade() {
        let err = is_in_memory_provider::<RecordingFacade>(None).unwrap_err();
        assert_eq!(err.name, "database");
    }

    fn any_casing(word: &'static str) -> impl Strategy<Value = String> {
        proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
            word.chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_marker_in_any_casing_matches(
            prefix in "[A-Za-z0-9.]{0,12}",
            marker in any_casing("inmemory"),
            suffix in "[A-Za-z0-9.]{0,12}",
        ) {
            let name = format!("{}{}{}", prefix, marker, suffix);
            prop_assert!(provider_name_is_in_memory(Some(&name)));
        }

        #[test]
        fn prop_names_without_marker_do_not_match(name in "[A-HJ-Za-hj-z0-9.]{0,32}") {
            prop_assert!(!provider_name_is_in_memory(Some(&name)));
        }
    }
}
