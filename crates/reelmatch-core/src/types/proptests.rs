//! Property-based tests for core types.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::types::{Movie, TitleId, split_list};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_split_list_items_are_trimmed(raw in "[A-Za-z ,-]{0,40}") {
            for item in split_list(&raw) {
                prop_assert!(!item.is_empty());
                prop_assert_eq!(item.trim(), item.as_str());
                prop_assert!(!item.contains(','));
            }
        }

        #[test]
        fn test_split_list_rejoin_is_stable(items in prop::collection::vec("[A-Za-z-]{1,10}", 0..6)) {
            let joined = items.join(", ");
            prop_assert_eq!(split_list(&joined), items);
        }

        #[test]
        fn test_title_id_digits_are_well_formed(n in 1_000_000u32..=9_999_999) {
            let id = TitleId::new(format!("tt{n}"));
            prop_assert!(id.is_well_formed());
        }

        #[test]
        fn test_movie_genres_match_raw(items in prop::collection::vec("[A-Za-z]{1,8}", 1..5)) {
            let movie = Movie::new("tt0000001", "x", items.join(","), 90);
            prop_assert_eq!(movie.genres, items);
        }
    }
}
