use crate::core::{CountStorage, Result, YearCount};
use crate::domain::model::CSV_HEADER;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Append-only CSV file. Every call opens and closes the file.
#[derive(Debug, Clone)]
pub struct CsvFileStorage {
    path: PathBuf,
}

impl CsvFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CountStorage for CsvFileStorage {
    async fn ensure_header(&self) -> Result<bool> {
        if self.path.is_file() {
            tracing::debug!("Output file {} already exists", self.path.display());
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;

        tracing::info!("📄 Created {} with header", self.path.display());
        Ok(true)
    }

    async fn append(&self, row: &YearCount) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(row)?;
        writer.flush()?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_header_written_once() {
        let temp_dir = TempDir::new().unwrap();
        let storage = CsvFileStorage::new(temp_dir.path().join("counts.csv"));

        assert!(storage.ensure_header().await.unwrap());
        assert!(!storage.ensure_header().await.unwrap());

        let content = std::fs::read_to_string(storage.path()).unwrap();
        assert_eq!(content, "Year,Article Count\n");
    }

    #[tokio::test]
    async fn test_existing_file_left_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counts.csv");
        std::fs::write(&path, "").unwrap();

        let storage = CsvFileStorage::new(path.clone());
        assert!(!storage.ensure_header().await.unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_append_rows_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let storage = CsvFileStorage::new(temp_dir.path().join("nested/dir/counts.csv"));

        storage.ensure_header().await.unwrap();
        storage.append(&YearCount::new(1980, 512)).await.unwrap();
        storage.append(&YearCount::new(1981, 0)).await.unwrap();

        let content = std::fs::read_to_string(storage.path()).unwrap();
        assert_eq!(content, "Year,Article Count\n1980,512\n1981,0\n");
    }
}
