//! Shared append-only result sink.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use parking_lot::Mutex;

use crate::utils::error::{MuError, MuResult};

/// The single output channel for match records.
///
/// Opened (created or truncated) before any worker spawns and closed only
/// after the join barrier, so a write after close cannot happen. One lock
/// acquisition covers every record produced for one instruction, so
/// concurrent workers never interleave within such a batch and never tear
/// a record line.
pub struct ResultSink {
    out: Mutex<BufWriter<File>>,
    eager_flush: bool,
}

impl ResultSink {
    /// Create or truncate the output file at `path`.
    pub fn create(path: &Path, eager_flush: bool) -> MuResult<Self> {
        let file = File::create(path).map_err(|source| MuError::SinkOpen {
            source,
            file: path.display().to_string(),
        })?;

        Ok(ResultSink {
            out: Mutex::new(BufWriter::new(file)),
            eager_flush,
        })
    }

    /// Append a batch of records, one per line, as one non-interleaved unit.
    pub fn append_all(&self, records: &[String]) -> MuResult<()> {
        let mut out = self.out.lock();
        for record in records {
            out.write_all(record.as_bytes())?;
            out.write_all(b"\n")?;
        }
        if self.eager_flush {
            out.flush()?;
        }
        Ok(())
    }

    /// Flush and close the sink.
    ///
    /// Taking `self` by value means no shared borrow can survive the
    /// close: callers must have joined every worker first.
    pub fn finish(self) -> MuResult<()> {
        let mut out = self.out.into_inner();
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_come_back_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.txt");

        let sink = ResultSink::create(&path, false).unwrap();
        sink.append_all(&["first".to_string(), "second".to_string()])
            .unwrap();
        sink.append_all(&[]).unwrap();
        sink.append_all(&["third".to_string()]).unwrap();
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\nthird\n");
    }

    #[test]
    fn create_truncates_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.txt");
        std::fs::write(&path, "stale\n").unwrap();

        let sink = ResultSink::create(&path, true).unwrap();
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn unwritable_path_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("locations.txt");

        match ResultSink::create(&path, false) {
            Err(MuError::SinkOpen { file, .. }) => {
                assert!(file.contains("locations.txt"));
            }
            other => panic!("expected SinkOpen error, got {:?}", other.map(|_| ())),
        }
    }
}
