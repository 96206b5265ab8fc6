use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::domain::error::DomainError;
use crate::domain::message::Message;

/// In-memory custodian of all messages.
///
/// A single mutex guards both the id counter and the message list, so id
/// allocation and the list mutation commit at the same serialization point.
/// Every read hands out value copies; callers never hold references into
/// the store.
#[derive(Debug, Default)]
pub struct MessageStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all live messages in insertion order.
    pub fn get_all(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    /// Inserts a new message. Expects pre-validated fields; the id counter
    /// advances only when construction succeeds and is never rewound.
    pub fn create(&self, username: String, content: String) -> Result<Message, DomainError> {
        let mut inner = self.lock();
        let now = Utc::now();
        let message = Message::new(inner.last_id + 1, username, content, now, now)?;
        inner.last_id = message.id;
        inner.messages.push(message.clone());
        Ok(message)
    }

    /// Replaces the content of the message with the given id and refreshes
    /// `updated_at`. `id`, `username` and `created_at` stay untouched.
    pub fn update(&self, id: i64, content: String) -> Result<Message, DomainError> {
        let mut inner = self.lock();
        let message = inner
            .messages
            .iter_mut()
            .find(|message| message.id == id)
            .ok_or_else(|| not_found(id))?;

        message.content = content;
        message.updated_at = Utc::now();
        Ok(message.clone())
    }

    pub fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut inner = self.lock();
        let index = inner
            .messages
            .iter()
            .position(|message| message.id == id)
            .ok_or_else(|| not_found(id))?;

        inner.messages.remove(index);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.lock().messages.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("message store mutex poisoned")
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::NotFound(format!("message id: {id}"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::{DomainError, MessageStore};

    #[test]
    fn create_assigns_strictly_increasing_ids() {
        let store = MessageStore::new();

        for expected_id in 1..=5i64 {
            let message = store
                .create("alice".to_string(), "hi".to_string())
                .expect("create must succeed");
            assert_eq!(message.id, expected_id);
            assert_eq!(message.created_at, message.updated_at);
        }
    }

    #[test]
    fn get_all_returns_messages_in_insertion_order() {
        let store = MessageStore::new();
        store
            .create("alice".to_string(), "first".to_string())
            .expect("create must succeed");
        store
            .create("bob".to_string(), "second".to_string())
            .expect("create must succeed");

        let all = store.get_all();
        assert_eq!(all.len(), 2);
        assert!(all[0].id < all[1].id);
        assert_eq!(all[0].content, "first");
        assert_eq!(all[1].content, "second");
    }

    #[test]
    fn update_touches_content_and_updated_at_only() {
        let store = MessageStore::new();
        let created = store
            .create("alice".to_string(), "hi".to_string())
            .expect("create must succeed");

        let updated = store
            .update(created.id, "bye".to_string())
            .expect("update must succeed");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.username, created.username);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.content, "bye");
        assert!(updated.updated_at >= created.created_at);
    }

    #[test]
    fn update_missing_id_returns_not_found() {
        let store = MessageStore::new();
        let err = store
            .update(999, "x".to_string())
            .expect_err("missing id must fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn delete_removes_message_and_keeps_counter() {
        let store = MessageStore::new();
        let first = store
            .create("alice".to_string(), "hi".to_string())
            .expect("create must succeed");

        store.delete(first.id).expect("delete must succeed");
        assert_eq!(store.count(), 0);

        let second_delete = store.delete(first.id);
        assert!(matches!(second_delete, Err(DomainError::NotFound(_))));
        let update_after_delete = store.update(first.id, "x".to_string());
        assert!(matches!(update_after_delete, Err(DomainError::NotFound(_))));

        // Deleted ids are never reused.
        let next = store
            .create("bob".to_string(), "again".to_string())
            .expect("create must succeed");
        assert_eq!(next.id, first.id + 1);
    }

    #[test]
    fn count_matches_get_all_length() {
        let store = MessageStore::new();
        for n in 0..4usize {
            assert_eq!(store.count(), store.get_all().len());
            assert_eq!(store.count(), n);
            store
                .create("alice".to_string(), format!("message {n}"))
                .expect("create must succeed");
        }
    }

    #[test]
    fn concurrent_creates_keep_ids_unique_and_monotonic() {
        let store = Arc::new(MessageStore::new());
        let mut handles = Vec::new();

        for worker in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                let mut ids = Vec::new();
                for n in 0..50 {
                    let message = store
                        .create(format!("worker{worker}"), format!("message {n}"))
                        .expect("create must succeed");
                    ids.push(message.id);
                }
                ids
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            let ids = handle.join().expect("worker thread must not panic");
            // Ids handed to one worker are strictly increasing.
            assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
            for id in ids {
                assert!(seen.insert(id), "id {id} allocated twice");
            }
        }

        assert_eq!(seen.len(), 8 * 50);
        assert_eq!(store.count(), 8 * 50);
        assert_eq!(seen.iter().max(), Some(&(8 * 50 as i64)));
    }
}
