//! JSONL file writer for resolution events.
//!
//! Each [`ResolutionEvent`] becomes one JSON line carrying its payload plus
//! `type` and `timestamp`. The file is opened in append mode so records from
//! successive CLI runs accumulate in one log.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use visa_advisor_application::{ResolutionEvent, ResolutionLogger};

/// Append-only JSONL resolution logger.
pub struct JsonlResolutionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlResolutionLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` when the file cannot be opened; callers then run
    /// without a resolution log.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create resolution log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open resolution log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ResolutionEvent) -> serde_json::Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        match event.payload {
            serde_json::Value::Object(mut map) => {
                map.insert("type".to_string(), event.event_type.into());
                map.insert("timestamp".to_string(), timestamp.into());
                serde_json::Value::Object(map)
            }
            other => serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": other,
            }),
        }
    }
}

impl ResolutionLogger for JsonlResolutionLogger {
    fn log(&self, event: ResolutionEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlResolutionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
