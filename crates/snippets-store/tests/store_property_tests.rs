// Property tests for upsert and round-trip behaviour

use proptest::prelude::*;
use snippets_core::Lookup;
use snippets_store::SnippetStore;

fn row_count(store: &SnippetStore, name: &str) -> i64 {
    store
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM snippets WHERE keyword = ?1",
            [name],
            |row| row.get(0),
        )
        .unwrap()
}

proptest! {
    #[test]
    fn prop_second_put_wins(name in "[^\\x00]{0,24}", first in "[^\\x00]*", second in "[^\\x00]*") {
        let mut store = SnippetStore::open_in_memory().unwrap();

        store.put(&name, &first).unwrap();
        store.put(&name, &second).unwrap();

        prop_assert_eq!(row_count(&store, &name), 1);
        prop_assert_eq!(store.get(&name).unwrap(), Lookup::Found(second));
    }

    #[test]
    fn prop_put_get_round_trip(name in "[^\\x00]{0,24}", text in "[^\\x00]*") {
        let mut store = SnippetStore::open_in_memory().unwrap();

        let stored = store.put(&name, &text).unwrap();

        prop_assert_eq!(store.get(&stored.keyword).unwrap(), Lookup::Found(text));
    }

    #[test]
    fn prop_catalog_is_sorted_and_unique(names in proptest::collection::vec("[a-z]{1,6}", 1..12)) {
        let mut store = SnippetStore::open_in_memory().unwrap();
        for name in &names {
            store.put(name, "x").unwrap();
        }

        let mut expected = names.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(store.catalog().unwrap(), Lookup::Found(expected));
    }

    #[test]
    fn prop_search_is_literal_containment(
        messages in proptest::collection::vec("[a-c%_']{0,8}", 1..8),
        needle in "[a-c%_']{1,3}",
    ) {
        let mut store = SnippetStore::open_in_memory().unwrap();
        for (i, message) in messages.iter().enumerate() {
            store.put(&format!("k{:03}", i), message).unwrap();
        }

        let expected: Vec<String> = messages
            .iter()
            .filter(|m| m.contains(needle.as_str()))
            .cloned()
            .collect();

        prop_assert_eq!(store.search(&needle).unwrap(), Lookup::from_rows(expected));
    }
}
