//! Browser Snapshot Cache
//!
//! `LocalCache` on `window.localStorage`.

use web_sys::Storage;

use crate::models::Todo;
use crate::sync::LocalCache;

/// Storage key of the snapshot
pub const CACHE_KEY: &str = "todos";

/// Last confirmed todo list, kept in `localStorage`
#[derive(Debug, Clone, Default)]
pub struct BrowserCache;

impl BrowserCache {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

/// Parse a stored snapshot; anything unreadable counts as no snapshot
fn decode_snapshot(raw: &str) -> Option<Vec<Todo>> {
    match serde_json::from_str(raw) {
        Ok(todos) => Some(todos),
        Err(e) => {
            log::warn!("[cache] Ignoring unreadable snapshot: {}", e);
            None
        }
    }
}

impl LocalCache for BrowserCache {
    fn read(&self) -> Option<Vec<Todo>> {
        let raw = Self::storage()?.get_item(CACHE_KEY).ok().flatten()?;
        decode_snapshot(&raw)
    }

    fn write(&self, todos: &[Todo]) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let raw = match serde_json::to_string(todos) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("[cache] Failed to serialize snapshot: {}", e);
                return;
            }
        };
        if storage.set_item(CACHE_KEY, &raw).is_err() {
            log::warn!("[cache] Failed to write snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_snapshot() {
        let raw = r#"[{"id":1,"title":"A","isDone":false},{"id":2,"title":"B","isDone":true,"description":"x"}]"#;
        let todos = decode_snapshot(raw).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0], Todo::new(1, "A", false));
        assert_eq!(todos[1].description.as_deref(), Some("x"));

        assert_eq!(decode_snapshot("[]"), Some(vec![]));
    }

    #[test]
    fn test_decode_garbage_is_none() {
        assert_eq!(decode_snapshot("not json"), None);
        assert_eq!(decode_snapshot(""), None);
        assert_eq!(decode_snapshot(r#"[{"id":1,"title":"A""#), None);
    }

    #[test]
    fn test_decode_wrong_shape_is_none() {
        assert_eq!(decode_snapshot(r#"{"id":1,"title":"A","isDone":false}"#), None);
        assert_eq!(decode_snapshot(r#"[{"id":"one","title":"A","isDone":false}]"#), None);
        // One bad entry rejects the whole snapshot
        assert_eq!(
            decode_snapshot(r#"[{"id":1,"title":"A","isDone":false},{"title":"B"}]"#),
            None
        );
    }

    #[test]
    fn test_snapshot_survives_write_format() {
        let todos = vec![Todo::new(1, "A", false), Todo::new(2, "B", true)];
        let raw = serde_json::to_string(&todos).unwrap();
        assert_eq!(decode_snapshot(&raw), Some(todos));
    }
}
