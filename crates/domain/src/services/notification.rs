//! Notifier contract and implementations.
//!
//! Critical configuration changes are forwarded to a notifier, which durably
//! records a textual alert. Delivery is best-effort from the caller's point of
//! view; the recorder never fails because a notification could not be written.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Failure to deliver a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to write notification: {0}")]
    Io(#[from] std::io::Error),
}

/// Accepts a textual alert and durably records it.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// Notifier that appends timestamped lines to a log file.
pub struct FileNotifier {
    path: PathBuf,
}

impl FileNotifier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl Notifier for FileNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let line = format!("{} - {}\n", Utc::now(), message);
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Test notifier that captures messages in memory.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier whose deliveries always fail, for exercising the
    /// fire-and-forget contract.
    pub fn failing() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Messages delivered so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Io(std::io::Error::other(
                "notification sink unavailable",
            )));
        }
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}
