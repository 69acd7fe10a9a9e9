use std::{
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Result;
use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt},
};
use tracing::{debug, warn};

use crate::store::{
    entry::{COLUMNS, Entry},
    tabular::{encode_row, parse_table},
};

pub const JOURNAL_FILE_NAME: &str = "reflections.csv";

/// Interface for abstracting persistence of reflection entries. The store is
/// append-only, entries are never rewritten once saved.
pub trait JournalStore {
    /// Appends a single entry, creating the journal file with its header row
    /// on first use.
    fn append(&self, entry: &Entry) -> impl Future<Output = Result<()>>;

    /// Reads back every entry ever appended. A missing journal file is an
    /// empty journal, not an error.
    fn load_all(&self) -> impl Future<Output = Result<Vec<Entry>>>;
}

/// The main realization of [JournalStore], backed by a single tabular file.
pub struct JournalStoreImpl {
    journal_path: PathBuf,
}

impl JournalStoreImpl {
    pub fn new(dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&dir)?;

        Ok(Self {
            journal_path: dir.join(JOURNAL_FILE_NAME),
        })
    }

    async fn read_locked(path: &Path) -> std::io::Result<String> {
        debug!("Reading {path:?}");
        let mut file = File::open(path).await?;
        file.lock_shared()?;
        let mut content = String::new();
        let read = file.read_to_string(&mut content).await;
        file.unlock_async().await?;
        read?;
        Ok(content)
    }

    fn decode_entries(content: &str, path: &Path) -> Vec<Entry> {
        let mut rows = parse_table(content).into_iter();
        match rows.next() {
            None => return vec![],
            Some(header) if header.iter().map(String::as_str).ne(COLUMNS) => {
                warn!("Unexpected header in {path:?}: {header:?}")
            }
            Some(_) => {}
        }

        let mut entries = vec![];
        for row in rows {
            match Entry::from_row(&row) {
                Ok(entry) => entries.push(entry),
                // One bad row shouldn't take the whole summary down.
                Err(e) => warn!("Skipping malformed row in {path:?}: {e}"),
            }
        }
        entries
    }

    async fn append_with_file(file: &mut File, entry: &Entry) -> Result<()> {
        let end = file.seek(std::io::SeekFrom::End(0)).await?;

        let mut buffer = String::new();
        if end == 0 {
            buffer.push_str(&encode_row(&COLUMNS.map(str::to_string)));
        }
        buffer.push_str(&encode_row(&entry.to_row()));

        file.write_all(buffer.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

impl JournalStore for JournalStoreImpl {
    async fn append(&self, entry: &Entry) -> Result<()> {
        let mut file = File::options()
            .write(true)
            .create(true)
            .read(true)
            .truncate(false)
            .open(&self.journal_path)
            .await?;

        // Semi-safe acquire-release for the file
        file.lock_exclusive()?;
        let result = Self::append_with_file(&mut file, entry).await;
        file.unlock_async().await?;
        result
    }

    async fn load_all(&self) -> Result<Vec<Entry>> {
        let content = match Self::read_locked(&self.journal_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };
        Ok(Self::decode_entries(&content, &self.journal_path))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::tempdir;

    use crate::store::{
        entry::Entry,
        journal_store::{JOURNAL_FILE_NAME, JournalStore, JournalStoreImpl},
    };

    #[tokio::test]
    async fn test_missing_file_is_empty_journal() -> Result<()> {
        let dir = tempdir()?;
        let store = JournalStoreImpl::new(dir.path().to_owned())?;

        assert_eq!(store.load_all().await?, vec![]);
        Ok(())
    }

    #[tokio::test]
    async fn test_append_then_load_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let store = JournalStoreImpl::new(dir.path().to_owned())?;

        let mut first = Entry::test_entry("the exam, again", "held my \"focus\"", "");
        first.small_step = "sleep\nearlier".into();
        let second = Entry::test_entry("quiet day", "a walk", "nothing");

        store.append(&first).await?;
        store.append(&second).await?;

        assert_eq!(store.load_all().await?, vec![first, second]);
        Ok(())
    }

    #[tokio::test]
    async fn test_header_is_written_exactly_once() -> Result<()> {
        let dir = tempdir()?;
        let store = JournalStoreImpl::new(dir.path().to_owned())?;

        store.append(&Entry::test_entry("one", "", "")).await?;
        store.append(&Entry::test_entry("two", "", "")).await?;

        let content = std::fs::read_to_string(dir.path().join(JOURNAL_FILE_NAME))?;
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "timestamp,energy,tone,mood_score,stress_hint,on_mind,went_well,difficult,small_step"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_row_is_skipped() -> Result<()> {
        let dir = tempdir()?;
        let store = JournalStoreImpl::new(dir.path().to_owned())?;

        let good = Entry::test_entry("fine", "", "");
        store.append(&good).await?;

        let path = dir.path().join(JOURNAL_FILE_NAME);
        let mut content = std::fs::read_to_string(&path)?;
        content.push_str("not,a,valid,row\n");
        std::fs::write(&path, content)?;

        assert_eq!(store.load_all().await?, vec![good]);
        Ok(())
    }
}
