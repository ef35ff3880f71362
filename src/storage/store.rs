//! File storage for the task list
//!
//! Tasks live in a plain text file, one line per task (see [`super::codec`]).
//! Reads take a shared lock and writes go through a locked temp file that
//! is renamed over the target.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::codec;
use crate::domain::TaskList;

/// A line that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub reason: String,
}

/// Result of loading the task file
#[derive(Debug, Default)]
pub struct LoadReport {
    pub tasks: TaskList,
    pub skipped: Vec<SkippedLine>,
    /// The file did not exist and an empty one was created
    pub created: bool,
    /// The file could not be read (fully); `tasks` holds what was read
    pub load_error: Option<String>,
}

impl LoadReport {
    fn unreadable(reason: String) -> Self {
        Self {
            load_error: Some(reason),
            ..Self::default()
        }
    }
}

/// Store for the task file
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a new task store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all tasks, skipping lines that cannot be decoded
    ///
    /// A missing file is created empty; failing to create it is the only
    /// error. A file that exists but cannot be opened or read yields the
    /// tasks read so far (possibly none) with `load_error` set.
    pub fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            self.create_empty()?;
            return Ok(LoadReport {
                created: true,
                ..LoadReport::default()
            });
        }

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                return Ok(LoadReport::unreadable(format!(
                    "Failed to open task file {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if let Err(e) = file.lock_shared() {
            return Ok(LoadReport::unreadable(format!(
                "Failed to acquire read lock on task file {}: {}",
                self.path.display(),
                e
            )));
        }

        let mut reader = BufReader::new(&file);
        let mut report = LoadReport::default();
        let mut tasks = Vec::new();
        let mut buf = Vec::new();
        let mut line_num = 0;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => line_num += 1,
                Err(e) => {
                    // Keep what was read; the rest of the file is unreachable
                    report.load_error = Some(format!(
                        "Failed to read task file {} after line {}, remaining lines not loaded: {}",
                        self.path.display(),
                        line_num,
                        e
                    ));
                    break;
                }
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches(['\n', '\r']),
                Err(_) => {
                    report.skipped.push(SkippedLine {
                        line: line_num,
                        reason: format!(
                            "not valid UTF-8 ({})",
                            String::from_utf8_lossy(&buf).trim_end()
                        ),
                    });
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match codec::decode(line) {
                Ok(task) => tasks.push(task),
                Err(e) => report.skipped.push(SkippedLine {
                    line: line_num,
                    reason: format!("{} ({})", e, line),
                }),
            }
        }

        report.tasks = TaskList::from_tasks(tasks);
        Ok(report)
    }

    /// Writes all tasks to the store (full rewrite)
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        self.ensure_parent()?;

        let temp_path = self.temp_path();

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on task file")?;

            let mut writer = BufWriter::new(&file);
            for task in tasks {
                writeln!(writer, "{}", codec::encode(task)).context("Failed to write task")?;
            }

            writer.flush().context("Failed to flush task file")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    fn create_empty(&self) -> Result<()> {
        self.ensure_parent()?;
        File::create(&self.path)
            .with_context(|| format!("Failed to create task file: {}", self.path.display()))?;
        Ok(())
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
