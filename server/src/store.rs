//! In-memory todo collection.
//!
//! The store is a plain owned value. The server wraps it in a
//! [`SharedStore`] and hands it to the router as state, so every test can
//! build a fresh one and nothing lives in a static.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::types::{Todo, UpdateTodo};

pub type SharedStore = Arc<RwLock<TodoStore>>;

const SEED: [(&str, bool); 3] = [
    ("Learn Kubernetes", true),
    ("Deploy to AKS", true),
    ("Setup CI/CD Pipeline", false),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("title is required")]
    TitleRequired,

    #[error("todo {0} not found")]
    NotFound(u64),
}

/// Insertion-ordered list of todos.
///
/// Ids are assigned as one past the largest id present. `high_water`
/// remembers the largest id ever handed out, so deleting the newest todo
/// does not make its id available again.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    high_water: u64,
}

impl TodoStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The three-item demo list every process starts with.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let mut store = Self::empty();
        for (title, completed) in SEED {
            let id = store.next_id();
            store.high_water = id;
            store.todos.push(Todo {
                id,
                title: title.to_string(),
                completed,
                created_at: now,
            });
        }
        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Id the next successful `create` will assign.
    pub fn next_id(&self) -> u64 {
        let max = self.todos.iter().map(|t| t.id).max().unwrap_or(0);
        max.max(self.high_water) + 1
    }

    pub fn create(&mut self, title: String, now: DateTime<Utc>) -> Result<Todo, StoreError> {
        if title.is_empty() {
            return Err(StoreError::TitleRequired);
        }
        let id = self.next_id();
        let todo = Todo {
            id,
            title,
            completed: false,
            created_at: now,
        };
        self.high_water = id;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Apply the fields present in `patch`. `id` and `created_at` are never
    /// touched.
    pub fn update(&mut self, id: u64, patch: UpdateTodo) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<Todo, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.todos.remove(index))
    }
}
