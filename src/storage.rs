//! Score persistence over a key-value store. The browser's localStorage is
//! the real backing; tests swap in an in-memory fake.

use crate::model::ScoreRecord;
use std::fmt;
use std::rc::Rc;

pub const SCORE_KEY: &str = "score";
pub const HIGH_SCORE_KEY: &str = "highscore";

/// Key-value service holding the persisted score record.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "score store: {}", self.0)
    }
}

/// Browser localStorage. Reads on a missing store come back empty; writes
/// report the failure so the caller can log it.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalScoreStore;

impl LocalScoreStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    }
}

impl ScoreStore for LocalScoreStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()
            .and_then(|store| store.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let store = self
            .storage()
            .ok_or_else(|| StoreError("localStorage unavailable".into()))?;
        store
            .set_item(key, value)
            .map_err(|_| StoreError(format!("write to \"{key}\" rejected")))
    }

    fn clear(&self) -> Result<(), StoreError> {
        let store = self
            .storage()
            .ok_or_else(|| StoreError("localStorage unavailable".into()))?;
        store
            .clear()
            .map_err(|_| StoreError("clear rejected".into()))
    }
}

/// Store reference handed down through props. Compared by identity so
/// derived `Properties` stay cheap.
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn ScoreStore>);

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Read the persisted record. Anything missing or malformed reads as zero;
/// a broken store never reaches the player.
pub fn load_scores(store: &dyn ScoreStore) -> ScoreRecord {
    ScoreRecord {
        score: load_value(store, SCORE_KEY),
        high_score: load_value(store, HIGH_SCORE_KEY),
    }
}

fn load_value(store: &dyn ScoreStore, key: &str) -> u32 {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or(0)
}

// Stored values are JSON-encoded integers.
fn encode(value: u32) -> String {
    serde_json::to_string(&value).unwrap_or_else(|_| value.to_string())
}

/// Persist a won round: the score always, the high score only when the
/// latest win reached it.
pub fn persist_win(store: &dyn ScoreStore, scores: ScoreRecord) -> Result<(), StoreError> {
    store.set(SCORE_KEY, &encode(scores.score))?;
    if scores.high_score == scores.score {
        store.set(HIGH_SCORE_KEY, &encode(scores.high_score))?;
    }
    Ok(())
}

/// Drop the whole persisted record, high score included. Safe to repeat.
pub fn wipe_scores(store: &dyn ScoreStore) -> Result<(), StoreError> {
    store.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl ScoreStore for FakeStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.items.borrow_mut().insert(key.into(), value.into());
            Ok(())
        }

        fn clear(&self) -> Result<(), StoreError> {
            self.items.borrow_mut().clear();
            Ok(())
        }
    }

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError("store offline".into()))
        }

        fn clear(&self) -> Result<(), StoreError> {
            Err(StoreError("store offline".into()))
        }
    }

    #[test]
    fn empty_store_reads_as_zero() {
        assert_eq!(load_scores(&FakeStore::default()), ScoreRecord::default());
    }

    #[test]
    fn stored_record_round_trips() {
        let store = FakeStore::default();
        persist_win(
            &store,
            ScoreRecord {
                score: 3,
                high_score: 3,
            },
        )
        .unwrap();
        assert_eq!(
            load_scores(&store),
            ScoreRecord {
                score: 3,
                high_score: 3,
            }
        );
    }

    #[test]
    fn malformed_values_read_as_zero() {
        let store = FakeStore::default();
        store.set(SCORE_KEY, "not a number").unwrap();
        store.set(HIGH_SCORE_KEY, "{\"nested\":true}").unwrap();
        assert_eq!(load_scores(&store), ScoreRecord::default());
    }

    #[test]
    fn values_are_stored_as_json_integers() {
        let store = FakeStore::default();
        persist_win(
            &store,
            ScoreRecord {
                score: 7,
                high_score: 7,
            },
        )
        .unwrap();
        assert_eq!(store.get(SCORE_KEY).as_deref(), Some("7"));
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("7"));
    }

    #[test]
    fn high_score_key_is_untouched_by_a_lower_win() {
        let store = FakeStore::default();
        store.set(HIGH_SCORE_KEY, "9").unwrap();
        persist_win(
            &store,
            ScoreRecord {
                score: 4,
                high_score: 9,
            },
        )
        .unwrap();
        assert_eq!(
            load_scores(&store),
            ScoreRecord {
                score: 4,
                high_score: 9,
            }
        );
    }

    #[test]
    fn wipe_is_idempotent() {
        let store = FakeStore::default();
        persist_win(
            &store,
            ScoreRecord {
                score: 2,
                high_score: 2,
            },
        )
        .unwrap();
        wipe_scores(&store).unwrap();
        assert_eq!(load_scores(&store), ScoreRecord::default());
        wipe_scores(&store).unwrap();
        assert_eq!(load_scores(&store), ScoreRecord::default());
    }

    #[test]
    fn write_failure_surfaces_without_panicking() {
        let result = persist_win(
            &FailingStore,
            ScoreRecord {
                score: 1,
                high_score: 1,
            },
        );
        assert!(result.is_err());
    }
}
