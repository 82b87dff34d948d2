//! In-memory session store. Sessions live for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::session::Session;

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: Session) -> Session {
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    /// Returns a snapshot; later updates do not affect it.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Applies `f` under the write lock and bumps `updated_at`.
    /// Returns `None` if the session does not exist.
    pub async fn update<F, R>(&self, id: Uuid, f: F) -> Option<(Session, R)>
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        let result = f(session);
        session.updated_at = Utc::now();
        Some((session.clone(), result))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = SessionStore::new();
        let session = store.insert(Session::new("Ada")).await;
        let fetched = store.get(session.id).await.unwrap();
        assert_eq!(fetched.name, "Ada");
        assert_eq!(fetched.skills, vec!["Python", "SQL"]);
        assert_eq!(fetched.learning_style, "balanced");
        assert!(fetched.target_career.is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let store = SessionStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_update_mutates_and_returns_result() {
        let store = SessionStore::new();
        let session = store.insert(Session::new("Ada")).await;

        let (updated, previous) = store
            .update(session.id, |s| {
                s.target_career.replace("Data Engineer".to_string())
            })
            .await
            .unwrap();

        assert!(previous.is_none());
        assert_eq!(updated.target_career.as_deref(), Some("Data Engineer"));
        assert!(updated.updated_at >= session.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_is_none() {
        let store = SessionStore::new();
        assert!(store.update(Uuid::new_v4(), |_| ()).await.is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = SessionStore::new();
        let session = store.insert(Session::new("Ada")).await;
        assert!(store.remove(session.id).await);
        assert!(!store.remove(session.id).await);
        assert!(store.get(session.id).await.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let store = SessionStore::new();
        let session = store.insert(Session::new("Ada")).await;
        let snapshot = store.get(session.id).await.unwrap();
        store
            .update(session.id, |s| s.skills = vec!["Rust".to_string()])
            .await;
        assert_eq!(snapshot.skills, vec!["Python", "SQL"]);
    }
}
