use std::sync::Arc;

use contracts::usecases::u101_import_payroll_file::{ImportReport, ImportedFile, SkippedRow};
use thiserror::Error;

use super::field_schema::NATURAL_KEY_LEN;
use super::row_parser::{parse_line, split_lines};
use super::store::PayrollStore;

/// Uploaded file payload as received from the multipart handler
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Failures that reject the upload before any row is attempted.
/// Row-level conditions (duplicates, single-row store errors) are not
/// errors; they are accounted in the report.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no payroll file was supplied")]
    MissingFile,
    #[error("uploaded file is not valid UTF-8 text")]
    InvalidEncoding,
}

/// Executor for the flat-file payroll import.
///
/// Stateless across runs; the store handle is an explicit dependency so
/// tests can substitute a mock and count calls.
pub struct ImportExecutor {
    store: Arc<dyn PayrollStore>,
}

impl ImportExecutor {
    pub fn new(store: Arc<dyn PayrollStore>) -> Self {
        Self { store }
    }

    /// Run one import: parse every line, attempt an idempotent insert per
    /// non-empty row, and report exactly what happened.
    ///
    /// Inserts are issued strictly sequentially. A row whose insert
    /// affects zero rows is a duplicate and is accounted as skipped with
    /// a diagnostic; a row whose insert errs is logged and accounted the
    /// same way, and the run continues.
    pub async fn run(&self, file: Option<UploadedFile>) -> Result<ImportReport, ImportError> {
        let file = file.ok_or(ImportError::MissingFile)?;
        let text = std::str::from_utf8(&file.bytes).map_err(|_| ImportError::InvalidEncoding)?;

        let lines = split_lines(text);
        let total_lines = lines.len();

        let mut inserted = 0usize;
        let mut skipped = 0usize;
        let mut skipped_rows: Vec<SkippedRow> = Vec::new();

        for (idx, raw) in lines.iter().enumerate() {
            let line_no = idx + 1;

            let row = match parse_line(raw) {
                Some(row) => row,
                // blank line: counts toward total_lines only
                None => continue,
            };
            if row.is_empty() {
                // delimiters and whitespace only: not inserted, not diagnosed
                continue;
            }

            match self.store.insert_if_absent(&row.values).await {
                Ok(0) => {
                    skipped += 1;
                    skipped_rows.push(SkippedRow {
                        line: line_no,
                        values: row.key_values(NATURAL_KEY_LEN),
                    });
                }
                Ok(_) => inserted += 1,
                Err(e) => {
                    tracing::warn!(line = line_no, error = %e, "payroll row insert failed");
                    skipped += 1;
                    skipped_rows.push(SkippedRow {
                        line: line_no,
                        values: row.key_values(NATURAL_KEY_LEN),
                    });
                }
            }
        }

        tracing::info!(
            file = %file.name,
            total_lines,
            inserted,
            skipped,
            "payroll file import finished"
        );

        Ok(ImportReport {
            file: ImportedFile {
                name: file.name,
                content_type: file.content_type,
                size_kb: (file.bytes.len() as u64) / 1024,
            },
            inserted,
            skipped,
            total_lines,
            skipped_rows,
            message: ImportReport::summary_message(inserted, skipped),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory store keyed on the natural-key triple, with call counting
    struct MockStore {
        calls: AtomicUsize,
        seen: Mutex<HashSet<Vec<String>>>,
        /// 1-based call numbers that should fail with a store error
        fail_on_calls: Vec<usize>,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen: Mutex::new(HashSet::new()),
                fail_on_calls: Vec::new(),
            }
        }

        fn failing_on(calls: Vec<usize>) -> Self {
            Self {
                fail_on_calls: calls,
                ..Self::new()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PayrollStore for MockStore {
        async fn insert_if_absent(&self, values: &[String]) -> anyhow::Result<u64> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on_calls.contains(&call) {
                anyhow::bail!("disk I/O error");
            }
            let key: Vec<String> = values.iter().take(3).cloned().collect();
            let mut seen = self.seen.lock().unwrap();
            if seen.insert(key) {
                Ok(1)
            } else {
                Ok(0)
            }
        }
    }

    fn upload(content: &str) -> Option<UploadedFile> {
        Some(UploadedFile {
            name: "payroll.txt".into(),
            content_type: "text/plain".into(),
            bytes: content.as_bytes().to_vec(),
        })
    }

    fn executor(store: Arc<MockStore>) -> ImportExecutor {
        ImportExecutor::new(store)
    }

    #[tokio::test]
    async fn test_missing_file_rejected_before_any_store_call() {
        let store = Arc::new(MockStore::new());
        let result = executor(store.clone()).run(None).await;
        assert!(matches!(result, Err(ImportError::MissingFile)));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_utf8_rejected_before_any_store_call() {
        let store = Arc::new(MockStore::new());
        let file = UploadedFile {
            name: "payroll.txt".into(),
            content_type: "text/plain".into(),
            bytes: vec![0xff, 0xfe, 0x24],
        };
        let result = executor(store.clone()).run(Some(file)).await;
        assert!(matches!(result, Err(ImportError::InvalidEncoding)));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_line_within_one_file() {
        let store = Arc::new(MockStore::new());
        let report = executor(store.clone())
            .run(upload("A$B$C\nA$B$C"))
            .await
            .unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.total_lines, 2);
        assert_eq!(report.skipped_rows.len(), 1);
        assert_eq!(report.skipped_rows[0].line, 2);
        assert_eq!(report.skipped_rows[0].values, vec!["A", "B", "C"]);
        assert_eq!(store.call_count(), 2);
    }

    #[tokio::test]
    async fn test_blank_and_delimiter_only_lines_count_toward_total_only() {
        let store = Arc::new(MockStore::new());
        let report = executor(store.clone())
            .run(upload("2024$01$PC100\n\n   \n$$$$$\n2024$01$PC200"))
            .await
            .unwrap();

        assert_eq!(report.total_lines, 5);
        assert_eq!(report.inserted, 2);
        assert_eq!(report.skipped, 0);
        assert!(report.skipped_rows.is_empty());
        // only the two real rows reached the store
        assert_eq!(store.call_count(), 2);
    }

    #[tokio::test]
    async fn test_reimport_of_identical_file_is_idempotent() {
        let store = Arc::new(MockStore::new());
        let content = "2024$01$PC100\n2024$01$PC200\n2024$01$PC300";

        let first = executor(store.clone()).run(upload(content)).await.unwrap();
        assert_eq!(first.inserted, 3);
        assert_eq!(first.skipped, 0);

        let second = executor(store.clone()).run(upload(content)).await.unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, first.inserted);
        assert_eq!(second.skipped_rows.len(), 3);
    }

    #[tokio::test]
    async fn test_crlf_file_parses_like_lf() {
        let store = Arc::new(MockStore::new());
        let report = executor(store.clone())
            .run(upload("2024$01$PC100\r\n2024$01$PC200\r\n"))
            .await
            .unwrap();

        assert_eq!(report.inserted, 2);
        // trailing terminator yields one final blank line
        assert_eq!(report.total_lines, 3);
    }

    #[tokio::test]
    async fn test_row_level_store_error_is_accounted_and_run_continues() {
        let store = Arc::new(MockStore::failing_on(vec![2]));
        let report = executor(store.clone())
            .run(upload("2024$01$PC100\n2024$01$PC200\n2024$01$PC300"))
            .await
            .unwrap();

        assert_eq!(report.inserted, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.skipped_rows[0].line, 2);
        assert_eq!(report.skipped_rows[0].values, vec!["2024", "01", "PC200"]);
        assert_eq!(store.call_count(), 3);
    }

    #[tokio::test]
    async fn test_report_message_embeds_counts() {
        let store = Arc::new(MockStore::new());
        let report = executor(store.clone())
            .run(upload("2024$01$PC100\n2024$01$PC100"))
            .await
            .unwrap();

        assert!(report.message.contains("1 rows inserted"));
        assert!(report.message.contains("1 rows skipped"));
    }

    #[tokio::test]
    async fn test_short_line_is_padded_and_inserted() {
        let store = Arc::new(MockStore::new());
        let report = executor(store.clone())
            .run(upload("2024$01$1234567890123$$$"))
            .await
            .unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.skipped, 0);
    }
}
