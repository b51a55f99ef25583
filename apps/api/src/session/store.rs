//! File-backed session store.
//!
//! Sessions live in memory behind an `RwLock` and are mirrored to one JSON
//! document per session under the data directory. Documents are loaded once
//! at open; every mutation rewrites that session's document. An unreadable
//! document is skipped with a warning instead of failing startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use super::models::Session;

#[derive(Clone)]
pub struct SessionStore {
    dir: PathBuf,
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    /// Opens the store, creating `dir` if needed and loading every `*.json`
    /// session document found there.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("creating session data directory {}", dir.display()))?;

        let mut sessions = HashMap::new();
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .with_context(|| format!("reading session data directory {}", dir.display()))?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match load_document(&path).await {
                Ok(session) => {
                    sessions.insert(session.id, session);
                }
                Err(e) => {
                    warn!("Skipping unreadable session document {}: {e}", path.display());
                }
            }
        }

        Ok(Self {
            dir,
            sessions: Arc::new(RwLock::new(sessions)),
        })
    }

    pub async fn create(&self, name: Option<String>) -> Result<Session> {
        let session = Session::new(name);
        let doc = serde_json::to_vec_pretty(&session).context("serializing session document")?;
        self.sessions.write().await.insert(session.id, session.clone());
        self.persist(session.id, doc).await?;
        Ok(session)
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Applies `mutate` to the session, persists the result, and returns the
    /// updated snapshot. `None` means the session does not exist.
    pub async fn update<F>(&self, id: Uuid, mutate: F) -> Result<Option<Session>>
    where
        F: FnOnce(&mut Session),
    {
        // Serialize inside the lock so the document matches the map; write
        // the file after releasing it.
        let (snapshot, doc) = {
            let mut sessions = self.sessions.write().await;
            let Some(session) = sessions.get_mut(&id) else {
                return Ok(None);
            };
            mutate(session);
            let doc = serde_json::to_vec_pretty(session).context("serializing session document")?;
            (session.clone(), doc)
        };
        self.persist(id, doc).await?;
        Ok(Some(snapshot))
    }

    /// Removes the session and its document. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> Result<bool> {
        let existed = self.sessions.write().await.remove(&id).is_some();
        if existed {
            let path = self.doc_path(id);
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(anyhow::Error::new(e)
                        .context(format!("removing session document {}", path.display())));
                }
            }
        }
        Ok(existed)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn persist(&self, id: Uuid, doc: Vec<u8>) -> Result<()> {
        let path = self.doc_path(id);
        tokio::fs::write(&path, doc)
            .await
            .with_context(|| format!("writing session document {}", path.display()))
    }

    fn doc_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

async fn load_document(path: &Path) -> Result<Session> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
