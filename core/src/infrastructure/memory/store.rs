use std::sync::Arc;

use tokio::sync::RwLock;

/// Entity kept in an [`InMemoryStore`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Everything but the identifier.
    type Draft: Send;

    fn id(&self) -> u64;

    fn assemble(id: u64, draft: Self::Draft) -> Self;
}

#[derive(Debug)]
struct Table<T> {
    records: Vec<T>,
    next_id: u64,
}

/// Insertion-ordered collection with monotonically increasing identifiers.
///
/// Identifiers start at 1 and are never handed out twice, even after the
/// record holding one is removed. Clones share the same table.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                records: Vec::new(),
                next_id: 1,
            })),
        }
    }

    pub async fn all(&self) -> Vec<T> {
        self.table.read().await.records.clone()
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        self.table
            .read()
            .await
            .records
            .iter()
            .filter(|record| predicate(*record))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: u64) -> Option<T> {
        self.table
            .read()
            .await
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub async fn insert(&self, draft: T::Draft) -> T {
        let mut table = self.table.write().await;

        let record = T::assemble(table.next_id, draft);
        table.next_id += 1;
        table.records.push(record.clone());

        record
    }

    /// Swaps the stored record with the same id, keeping its position.
    pub async fn replace(&self, record: T) -> Option<T> {
        let mut table = self.table.write().await;

        let slot = table
            .records
            .iter_mut()
            .find(|stored| stored.id() == record.id())?;
        *slot = record.clone();

        Some(record)
    }

    pub async fn remove(&self, id: u64) -> bool {
        let mut table = self.table.write().await;

        let before = table.records.len();
        table.records.retain(|record| record.id() != id);

        table.records.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: u64,
        text: String,
    }

    impl Record for Note {
        type Draft = String;

        fn id(&self) -> u64 {
            self.id
        }

        fn assemble(id: u64, text: String) -> Self {
            Self { id, text }
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryStore::<Note>::new();

        let first = store.insert("a".to_string()).await;
        let second = store.insert("b".to_string()).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.all().await, vec![first, second]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_remove() {
        let store = InMemoryStore::<Note>::new();
        store.insert("a".to_string()).await;
        let second = store.insert("b".to_string()).await;

        assert!(store.remove(second.id).await);
        let third = store.insert("c".to_string()).await;

        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_remove_twice_reports_missing() {
        let store = InMemoryStore::<Note>::new();
        let note = store.insert("a".to_string()).await;

        assert!(store.remove(note.id).await);
        assert!(!store.remove(note.id).await);
        assert_eq!(store.get(note.id).await, None);
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let store = InMemoryStore::<Note>::new();
        store.insert("a".to_string()).await;
        store.insert("b".to_string()).await;
        store.insert("c".to_string()).await;

        let updated = store
            .replace(Note {
                id: 2,
                text: "B".to_string(),
            })
            .await;

        assert!(updated.is_some());
        let texts: Vec<String> = store.all().await.into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["a", "B", "c"]);
    }

    #[tokio::test]
    async fn test_replace_missing_record_is_rejected() {
        let store = InMemoryStore::<Note>::new();

        let result = store
            .replace(Note {
                id: 7,
                text: "ghost".to_string(),
            })
            .await;

        assert_eq!(result, None);
        assert!(store.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryStore::<Note>::new();
        let handle = store.clone();

        handle.insert("shared".to_string()).await;

        assert_eq!(store.all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let store = InMemoryStore::<Note>::new();

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(format!("n{i}")).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
    }
}
