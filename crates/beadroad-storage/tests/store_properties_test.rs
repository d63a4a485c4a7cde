use beadroad_core::history::RecordDraft;
use beadroad_core::traits::HistoryStore;
use beadroad_core::types::CompositeCode;
use beadroad_storage::{MemoryHistoryStore, SqliteHistoryStore};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

fn codes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ab]{3}", 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sqlite_and_memory_link_identically(triples in codes()) {
        let sqlite = SqliteHistoryStore::open_in_memory().unwrap();
        let memory = MemoryHistoryStore::new();
        let at = Utc.with_ymd_and_hms(2024, 10, 19, 0, 0, 0).unwrap();

        for (i, triple) in triples.iter().enumerate() {
            let code: CompositeCode = triple.parse().unwrap();
            let draft = RecordDraft::new(at, format!("{}-{}", i + 1, i + 3), Some(code), None);
            let a = sqlite.append(&draft).unwrap();
            let b = memory.append(&draft).unwrap();
            prop_assert_eq!(a, b);
        }
        prop_assert_eq!(sqlite.count_all().unwrap(), triples.len() as u64);
    }

    #[test]
    fn transition_counts_match_occurrences(triples in codes()) {
        let store = MemoryHistoryStore::new();
        let at = Utc.with_ymd_and_hms(2024, 10, 19, 0, 0, 0).unwrap();
        for triple in &triples {
            let draft = RecordDraft::new(at, "1-3", Some(triple.parse().unwrap()), None);
            store.append(&draft).unwrap();
        }

        let records = store.all().unwrap();
        for (i, record) in records.iter().enumerate() {
            if let Some(transition) = &record.link.transition {
                let occurrences = records[i..]
                    .iter()
                    .filter(|r| r.link.transition.as_ref() == Some(transition))
                    .count();
                prop_assert_eq!(record.link.transition_count as usize, occurrences);
            }
        }
    }
}
