/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Append-only text log of client calls.
//!
//! Every call made through [`crate::application::client::Client`] hands its outcome to
//! [`RequestLog::observe`], which appends a human readable block to a file and gives the
//! outcome back untouched. The file is shared by the whole process, grows without
//! bound and is never rotated. It is meant for people, not for parsers.

use crate::error::{AppError, PetResult};
use crate::model::http::ApiResponse;
use crate::utils::id::get_id;
use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Serialises writers so blocks from concurrent calls never interleave.
static LOG_WRITE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Which outcomes end up in the log file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogPolicy {
    /// Completed calls and failed ones
    #[default]
    All,
    /// Completed calls only; failures leave no trace (historic behaviour)
    CompletedOnly,
    /// Nothing is written
    Disabled,
}

impl FromStr for LogPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(LogPolicy::All),
            "completed" | "completed_only" => Ok(LogPolicy::CompletedOnly),
            "off" | "none" | "disabled" => Ok(LogPolicy::Disabled),
            other => Err(AppError::InvalidInput(format!("unknown log policy: {other}"))),
        }
    }
}

/// One block of the log file
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Random identifier of the entry
    pub id: String,
    /// When the call finished
    pub time: DateTime<Utc>,
    /// HTTP method of the call
    pub method: Method,
    /// Endpoint path relative to the base URL
    pub path: String,
    /// What happened
    pub outcome: LogOutcome,
}

/// Result part of a [`LogEntry`]
#[derive(Debug, Clone)]
pub enum LogOutcome {
    /// The server answered
    Completed {
        /// HTTP status
        status: u16,
        /// Body rendered as text
        body: String,
    },
    /// No response was obtained
    Failed {
        /// Rendered error
        error: String,
    },
}

impl LogEntry {
    /// Builds the entry describing `result`
    pub fn from_result(method: &Method, path: &str, result: &PetResult<ApiResponse>) -> Self {
        let outcome = match result {
            Ok(response) => LogOutcome::Completed {
                status: response.status,
                body: response.body.to_string(),
            },
            Err(e) => LogOutcome::Failed {
                error: e.to_string(),
            },
        };
        Self {
            id: get_id(),
            time: Utc::now(),
            method: method.clone(),
            path: path.to_string(),
            outcome,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- Request ---")?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(
            f,
            "Time: {}",
            self.time.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "Path: {}", self.path)?;
        match &self.outcome {
            LogOutcome::Completed { status, body } => {
                writeln!(f, "Status: {status}")?;
                writeln!(f, "Response: {body}")
            }
            LogOutcome::Failed { error } => writeln!(f, "Error: {error}"),
        }
    }
}

/// Handle on the shared request log file
#[derive(Debug, Clone)]
pub struct RequestLog {
    path: PathBuf,
    policy: LogPolicy,
}

impl RequestLog {
    /// Creates a handle writing to `path` under `policy`. The file is created lazily.
    pub fn new(path: impl Into<PathBuf>, policy: LogPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    /// A handle that never writes
    pub fn disabled() -> Self {
        Self::new(PathBuf::new(), LogPolicy::Disabled)
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current policy
    pub fn policy(&self) -> LogPolicy {
        self.policy
    }

    /// True when an outcome of this kind would be written
    #[must_use]
    pub fn records(&self, result: &PetResult<ApiResponse>) -> bool {
        match self.policy {
            LogPolicy::All => true,
            LogPolicy::CompletedOnly => result.is_ok(),
            LogPolicy::Disabled => false,
        }
    }

    /// Records the outcome of a finished call and returns it unchanged.
    ///
    /// A failure to write the log is reported as a warning and never replaces `result`.
    pub async fn observe(
        &self,
        method: &Method,
        path: &str,
        result: PetResult<ApiResponse>,
    ) -> PetResult<ApiResponse> {
        if self.records(&result) {
            let entry = LogEntry::from_result(method, path, &result);
            if let Err(e) = self.append(&entry).await {
                warn!(
                    "Failed to write request log {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
        result
    }

    /// Appends one entry to the file, creating it if needed
    pub async fn append(&self, entry: &LogEntry) -> PetResult<()> {
        let _guard = LOG_WRITE_LOCK.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(entry.to_string().as_bytes()).await?;
        file.flush().await?;
        debug!("Request log entry {} written", entry.id);
        Ok(())
    }

    /// Empties the log file, creating it if missing.
    ///
    /// The client never calls this itself; it is for harnesses that want one file per run.
    pub async fn truncate(&self) -> PetResult<()> {
        let _guard = LOG_WRITE_LOCK.lock().await;
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .await?;
        Ok(())
    }
}
