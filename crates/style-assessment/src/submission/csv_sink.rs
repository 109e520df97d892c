use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::sink::{RecordSink, SinkError};
use crate::assessment::{record_header, SubmissionPayload};

/// Appends records to a local CSV file, writing a header when the file is new.
#[derive(Debug)]
pub struct CsvRecordSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvRecordSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_row(path: &Path, row: &[String], question_count: usize) -> Result<(), SinkError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let is_new = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if is_new {
        writer.write_record(record_header(question_count))?;
    }
    writer.write_record(row)?;
    writer.flush()?;
    Ok(())
}

#[async_trait]
impl RecordSink for CsvRecordSink {
    async fn append(&self, payload: &SubmissionPayload) -> Result<(), SinkError> {
        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();
        let row = payload.to_row();
        let question_count = payload.answers().len();

        tokio::task::spawn_blocking(move || write_row(&path, &row, question_count))
            .await
            .map_err(|err| SinkError::Unavailable(err.to_string()))?
    }
}
