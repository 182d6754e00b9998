//! CSV export of a backtest frame.
//!
//! Writes are atomic: the frame goes to `{path}.tmp` first and is renamed into
//! place, so a reader never sees a half-written file. An existing file at the
//! same path is replaced.

use super::provider::DataError;
use polars::prelude::*;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write `frame` as a headed, comma-separated file at `path`.
pub fn write_csv(frame: &mut DataFrame, path: &Path) -> Result<(), DataError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| DataError::Io(format!("failed to create {}: {e}", parent.display())))?;
    }

    let tmp_path = tmp_path_for(path);
    if let Err(e) = write_to(frame, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        DataError::Io(format!("atomic rename failed: {e}"))
    })
}

fn write_to(frame: &mut DataFrame, path: &Path) -> Result<(), DataError> {
    let file = fs::File::create(path)
        .map_err(|e| DataError::Io(format!("create {}: {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(b',')
        .finish(frame)
        .map_err(|e| DataError::Csv(format!("write csv: {e}")))?;
    writer
        .flush()
        .map_err(|e| DataError::Io(format!("flush {}: {e}", path.display())))
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("timestamps".into(), vec!["2024-01-02", "2024-01-03"]),
            Column::new("close".into(), vec![101.5, 102.0]),
            Column::new("volume".into(), vec![1000u64, 1100]),
        ])
        .unwrap()
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SPY_2024-01-01_2024-01-04.csv");

        write_csv(&mut sample_frame(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "timestamps,close,volume");
        assert_eq!(lines[1], "2024-01-02,101.5,1000");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/out.csv");

        write_csv(&mut sample_frame(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&mut sample_frame(), &path).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["out.csv".to_string()]);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale").unwrap();

        write_csv(&mut sample_frame(), &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with("timestamps,"));
    }

    #[test]
    fn tmp_path_keeps_full_name() {
        assert_eq!(
            tmp_path_for(Path::new("data/BRK.B_2024-01-01_2024-02-01.csv")),
            PathBuf::from("data/BRK.B_2024-01-01_2024-02-01.csv.tmp")
        );
    }
}
