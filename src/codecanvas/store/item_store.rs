use super::backend::KvBackend;
use super::ITEMS_KEY;
use crate::error::{CanvasError, Result};
use crate::model::{fresh_id, Item};
use log::{debug, warn};

/// Ordered, persisted collection of items.
///
/// Store order is insertion order. Every mutation serializes the whole
/// collection to the items slot before returning; if that write fails the
/// error is returned and the in-memory collection is left as it was.
pub struct ItemStore<B: KvBackend> {
    backend: B,
    items: Vec<Item>,
}

impl<B: KvBackend> ItemStore<B> {
    /// Loads the snapshot once. A missing or unparsable snapshot starts the
    /// store empty; a failed read is returned so the slot is never
    /// overwritten with a partial collection.
    pub fn open(backend: B) -> Result<Self> {
        let items = match backend.get(ITEMS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Item>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!("discarding unparsable items snapshot: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!("item store opened with {} items", items.len());
        Ok(Self { backend, items })
    }

    /// Appends to the end. No id uniqueness check is made here.
    pub fn add(&mut self, item: Item) -> Result<()> {
        let mut next = self.items.clone();
        next.push(item);
        self.commit(next)
    }

    /// Appends several items with a single write.
    pub fn extend(&mut self, items: Vec<Item>) -> Result<()> {
        let mut next = self.items.clone();
        next.extend(items);
        self.commit(next)
    }

    /// Replaces the first item with `id` in place. Returns `Ok(false)` and
    /// leaves the store untouched when no such item exists.
    pub fn update(&mut self, id: i64, item: Item) -> Result<bool> {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return Ok(false);
        };
        let mut next = self.items.clone();
        next[pos] = item;
        self.commit(next)?;
        Ok(true)
    }

    /// Removes every item with `id`. Returns whether anything was removed;
    /// deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let next: Vec<Item> = self.items.iter().filter(|i| i.id != id).cloned().collect();
        let removed = next.len() != self.items.len();
        self.commit(next)?;
        Ok(removed)
    }

    /// Drops the items slot. An absent slot reopens as an empty store.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove(ITEMS_KEY)?;
        debug!("removed items slot");
        self.items.clear();
        Ok(())
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// An id not used by any stored item, later than all of them.
    pub fn next_id(&self) -> Result<i64> {
        fresh_id(self.items.iter().map(|i| i.id).max())
    }

    fn commit(&mut self, next: Vec<Item>) -> Result<()> {
        let raw = serde_json::to_string(&next).map_err(CanvasError::Serialization)?;
        self.backend.set(ITEMS_KEY, &raw)?;
        debug!("persisted {} items", next.len());
        self.items = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Template};
    use crate::store::mem_backend::MemBackend;

    fn item(id: i64, title: &str) -> Item {
        Item::new(
            id,
            title.into(),
            format!("content of {}", title),
            Template::Classic,
            Color::Blue,
        )
    }

    fn titles<B: KvBackend>(store: &ItemStore<B>) -> Vec<String> {
        store.list().iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store.add(item(1, "a")).unwrap();
        store.add(item(2, "b")).unwrap();
        store.add(item(3, "c")).unwrap();
        assert_eq!(titles(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn add_does_not_check_uniqueness() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store.add(item(1, "a")).unwrap();
        store.add(item(1, "a again")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store.add(item(1, "a")).unwrap();
        store.add(item(2, "b")).unwrap();
        store.add(item(3, "c")).unwrap();

        let replacement = item(2, "B");
        assert!(store.update(2, replacement.clone()).unwrap());
        assert_eq!(titles(&store), vec!["a", "B", "c"]);
        assert_eq!(store.get(2), Some(&replacement));
    }

    #[test]
    fn update_without_copying_id_changes_identity() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store.add(item(1, "a")).unwrap();
        assert!(store.update(1, item(99, "z")).unwrap());
        assert!(store.get(1).is_none());
        assert!(store.get(99).is_some());
    }

    #[test]
    fn update_unknown_id_leaves_store_unchanged() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store.add(item(1, "a")).unwrap();
        let before = store.list().to_vec();

        assert!(!store.update(5, item(5, "x")).unwrap());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn delete_is_idempotent_and_keeps_order() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store.add(item(1, "a")).unwrap();
        store.add(item(2, "b")).unwrap();
        store.add(item(3, "c")).unwrap();

        assert!(store.delete(2).unwrap());
        let once = store.list().to_vec();
        assert!(!store.delete(2).unwrap());
        assert_eq!(store.list(), once.as_slice());
        assert_eq!(titles(&store), vec!["a", "c"]);
    }

    #[test]
    fn delete_removes_all_duplicates() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store.add(item(1, "a")).unwrap();
        store.add(item(2, "b")).unwrap();
        store.add(item(1, "a dup")).unwrap();

        store.delete(1).unwrap();
        assert_eq!(titles(&store), vec!["b"]);
    }

    #[test]
    fn clear_empties_store() {
        let backend = MemBackend::new();
        let mut store = ItemStore::open(backend.clone()).unwrap();
        store.add(item(1, "a")).unwrap();
        store.clear().unwrap();
        assert!(store.is_empty());
        assert_eq!(backend.get(ITEMS_KEY).unwrap(), None);
        assert!(ItemStore::open(backend).unwrap().is_empty());
    }

    #[test]
    fn mutations_survive_reopen() {
        let backend = MemBackend::new();
        let mut store = ItemStore::open(backend.clone()).unwrap();
        store.add(item(1, "a")).unwrap();
        store.add(item(2, "b")).unwrap();
        store.delete(1).unwrap();

        let reopened = ItemStore::open(backend).unwrap();
        assert_eq!(reopened.list(), store.list());
    }

    #[test]
    fn malformed_snapshot_starts_empty() {
        let backend = MemBackend::new();
        backend.put_raw(ITEMS_KEY, "{not json");
        let store = ItemStore::open(backend).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn wrong_shaped_snapshot_starts_empty() {
        let backend = MemBackend::new();
        backend.put_raw(ITEMS_KEY, r#"{"items": []}"#);
        let store = ItemStore::open(backend).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn failed_write_is_reported_and_memory_untouched() {
        let backend = MemBackend::new();
        let mut store = ItemStore::open(backend.clone()).unwrap();
        store.add(item(1, "a")).unwrap();

        backend.set_simulate_write_error(true);
        assert!(store.add(item(2, "b")).is_err());
        assert!(store.update(1, item(1, "A")).is_err());
        assert!(store.delete(1).is_err());
        assert!(store.clear().is_err());

        assert_eq!(titles(&store), vec!["a"]);
    }

    #[test]
    fn next_id_is_unused_and_increasing() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        let first = store.next_id().unwrap();
        store.add(item(first, "a")).unwrap();
        let second = store.next_id().unwrap();
        assert!(second > first);
        assert!(!store.contains(second));
    }

    #[test]
    fn next_id_errors_instead_of_wrapping() {
        let mut store = ItemStore::open(MemBackend::new()).unwrap();
        store.add(item(i64::MAX, "last")).unwrap();
        assert!(matches!(store.next_id(), Err(CanvasError::Store(_))));
    }

    /// Reads fail, writes go through to the wrapped backend.
    #[derive(Clone)]
    struct UnreadableSlots(MemBackend);

    impl KvBackend for UnreadableSlots {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(CanvasError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "slot unreadable",
            )))
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.0.remove(key)
        }
    }

    #[test]
    fn read_failure_is_returned_and_snapshot_kept() {
        let backend = MemBackend::new();
        let mut store = ItemStore::open(backend.clone()).unwrap();
        for (id, title) in [(1, "a"), (2, "b"), (3, "c")] {
            store.add(item(id, title)).unwrap();
        }

        let reopened = ItemStore::open(UnreadableSlots(backend.clone()));
        assert!(matches!(reopened, Err(CanvasError::Io(_))));

        let intact = ItemStore::open(backend).unwrap();
        assert_eq!(titles(&intact), vec!["a", "b", "c"]);
    }

    #[test]
    fn extend_appends_with_one_write() {
        let backend = MemBackend::new();
        let mut store = ItemStore::open(backend.clone()).unwrap();
        store.add(item(1, "a")).unwrap();
        store.extend(vec![item(2, "b"), item(3, "c")]).unwrap();

        let reopened = ItemStore::open(backend).unwrap();
        assert_eq!(titles(&reopened), vec!["a", "b", "c"]);
    }
}
