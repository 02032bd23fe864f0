//! In-memory task storage
//!
//! A `BTreeMap` keyed by [`TaskId`] plus a monotonic counter. The counter
//! starts at 1 and advances on every successful insert, so ids are strictly
//! increasing and a deleted id is never handed out again. Because ids are
//! assigned in creation order, map iteration order equals insertion order.

use std::collections::BTreeMap;

use crate::domain::{Task, TaskId};

/// Owns the mapping from id to task and the id counter
#[derive(Debug)]
pub struct TaskStore {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store; the first insert gets id 1
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: TaskId::FIRST,
        }
    }

    /// Inserts a new task, assigning the next id. Caller validates fields.
    pub fn insert(&mut self, title: impl Into<String>, description: impl Into<String>) -> &Task {
        let id = self.next_id;
        self.next_id = id.next();
        self.tasks.insert(id, Task::new(id, title, description));
        &self.tasks[&id]
    }

    /// Returns the task with the given id, if present
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Mutable lookup for in-place updates
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(&id)
    }

    /// Returns an independent snapshot of all tasks in creation order
    pub fn all(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Removes a task; returns whether it existed. The id is retired.
    pub fn remove(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some()
    }

    /// Number of stored tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if no tasks are stored
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The id the next successful insert will receive
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ids_start_at_one_and_increment() {
        let mut store = TaskStore::new();

        assert_eq!(store.insert("first", "").id.value(), 1);
        assert_eq!(store.insert("second", "").id.value(), 2);
        assert_eq!(store.insert("third", "").id.value(), 3);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut store = TaskStore::new();

        let first = store.insert("first", "").id;
        let second = store.insert("second", "").id;
        assert!(store.remove(first));
        assert!(store.remove(second));

        let third = store.insert("third", "").id;
        assert_eq!(third.value(), 3);
        assert!(store.get(first).is_none());
        assert!(store.get(second).is_none());
    }

    #[test]
    fn remove_missing_returns_false() {
        let mut store = TaskStore::new();
        assert!(!store.remove(TaskId::FIRST));
    }

    #[test]
    fn all_returns_creation_order() {
        let mut store = TaskStore::new();
        store.insert("a", "");
        store.insert("b", "");
        store.insert("c", "");

        let titles: Vec<_> = store.all().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn all_is_a_snapshot() {
        let mut store = TaskStore::new();
        store.insert("a", "");

        let snapshot = store.all();
        store.get_mut(TaskId::FIRST).unwrap().set_title("changed");

        assert_eq!(snapshot[0].title, "a");
    }

    #[test]
    fn get_does_not_mutate() {
        let mut store = TaskStore::new();
        let id = store.insert("a", "").id;
        let before = store.get(id).unwrap().clone();

        let _ = store.get(id);
        assert_eq!(store.get(id), Some(&before));
    }

    proptest! {
        /// Ids increase by exactly 1 per insert no matter how deletes
        /// interleave: true = insert, false = delete the oldest survivor.
        #[test]
        fn ids_strictly_increase_under_interleaved_deletes(
            ops in proptest::collection::vec(any::<bool>(), 1..64)
        ) {
            let mut store = TaskStore::new();
            let mut live: Vec<TaskId> = Vec::new();
            let mut expected = 1u64;

            for op in ops {
                if op {
                    let id = store.insert("task", "").id;
                    prop_assert_eq!(id.value(), expected);
                    expected += 1;
                    live.push(id);
                } else if let Some(oldest) = live.first().copied() {
                    prop_assert!(store.remove(oldest));
                    live.remove(0);
                }
            }

            prop_assert_eq!(store.len(), live.len());
        }
    }
}
