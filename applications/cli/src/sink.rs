/// File system sink
use bytes::Bytes;
use snip_core::{Result, SnipError, Sink};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes delivered files into a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
    overwrite: bool,
    last_written: Option<PathBuf>,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            directory: directory.into(),
            overwrite,
            last_written: None,
        }
    }

    /// Where a file named `file_name` would be written
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }

    /// Path of the most recently delivered file
    pub fn last_written(&self) -> Option<&Path> {
        self.last_written.as_deref()
    }

    fn open(&self, path: &Path) -> io::Result<fs::File> {
        let mut options = OpenOptions::new();
        options.write(true);
        if self.overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        options.open(path)
    }
}

impl Sink for FileSink {
    fn deliver(&mut self, file_name: &str, bytes: Bytes) -> Result<()> {
        let is_plain_name = Path::new(file_name)
            .file_name()
            .is_some_and(|name| name == file_name);
        if !is_plain_name {
            return Err(SnipError::sink(format!(
                "{:?} is not a plain file name",
                file_name
            )));
        }

        fs::create_dir_all(&self.directory)?;
        let path = self.path_for(file_name);

        let mut file = self.open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => SnipError::sink(format!(
                "{} already exists (pass --force to overwrite)",
                path.display()
            )),
            _ => SnipError::Io(e),
        })?;

        if let Err(e) = file.write_all(&bytes).and_then(|()| file.sync_all()) {
            // never leave a truncated file behind
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(e.into());
        }

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote file");
        self.last_written = Some(path);
        Ok(())
    }
}
