use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc, oneshot};

/// String-keyed asynchronous key-value storage. Values are JSON documents
/// produced by the managers; the store does not interpret them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// File-backed store: one `<key>.json` file per key under the data
/// directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub async fn open(data_dir: &str) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        Ok(FileStore {
            dir: PathBuf::from(data_dir),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::write(self.path_for(key), value).await?;
        Ok(())
    }
}

/// In-memory store used by tests and benches.
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

enum WriteCommand {
    Set { key: String, value: String },
    Flush(oneshot::Sender<()>),
}

/// Detached writer task. Callers enqueue a write and move on; the task
/// applies writes one at a time in arrival order, so a slow write can never
/// clobber a later snapshot with stale data. Failures are logged and the
/// in-memory state is left as the source of truth.
#[derive(Clone)]
pub struct WriteQueue {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl WriteQueue {
    /// Spawns the writer task on the current runtime.
    pub fn start(store: SharedStore) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    WriteCommand::Set { key, value } => {
                        if let Err(e) = store.set(&key, &value).await {
                            log::error!("failed to persist {}: {}", key, e);
                        } else {
                            log::debug!("persisted {} ({} bytes)", key, value.len());
                        }
                    }
                    WriteCommand::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });
        WriteQueue { tx }
    }

    /// Fire-and-forget write of `value` under `key`.
    pub fn enqueue(&self, key: &str, value: String) {
        let command = WriteCommand::Set {
            key: key.to_string(),
            value,
        };
        if self.tx.send(command).is_err() {
            log::error!("write queue is closed; dropping write for {}", key);
        }
    }

    /// Resolves once every write enqueued before this call has been applied.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }
}
