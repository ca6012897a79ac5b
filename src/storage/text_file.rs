use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::warn;

/// Filesystem capability used by text file generation.
#[cfg_attr(test, mockall::automock)]
pub trait TextFileStore: Send + Sync {
    fn directory_exists(&self, path: &Path) -> bool;

    /// Writes `contents` to a file that must not exist yet; an existing file
    /// fails with `io::ErrorKind::AlreadyExists` and is left untouched.
    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTextFileStore;

impl LocalTextFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl TextFileStore for LocalTextFileStore {
    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        let file = OpenOptions::new().write(true).create_new(true).open(path)?;
        write_or_remove(path, file, contents)
    }
}

/// Writes `contents` into the freshly created `path`, deleting it again when
/// the write fails so no partial file survives.
fn write_or_remove<W: Write>(path: &Path, mut writer: W, contents: &str) -> io::Result<()> {
    let written = writer
        .write_all(contents.as_bytes())
        .and_then(|()| writer.flush());
    drop(writer);

    written.inspect_err(|_| {
        if let Err(e) = fs::remove_file(path) {
            warn!("Failed to remove partial file {}: {}", path.display(), e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts a few bytes, then fails like a full disk.
    struct FailingWriter {
        remaining: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::other("no space left"));
            }
            let written = buf.len().min(self.remaining);
            self.remaining -= written;
            Ok(written)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn directory_exists_only_for_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let store = LocalTextFileStore::new();
        assert!(store.directory_exists(dir.path()));
        assert!(!store.directory_exists(&file));
        assert!(!store.directory_exists(&dir.path().join("missing")));
    }

    #[test]
    fn create_new_writes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        LocalTextFileStore::new().create_new(&path, "one two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one two");
    }

    #[test]
    fn create_new_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "original").unwrap();

        let err = LocalTextFileStore::new().create_new(&path, "replacement").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn failed_write_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.txt");
        fs::write(&path, "").unwrap();

        let err = write_or_remove(&path, FailingWriter { remaining: 3 }, "one two three")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(!path.exists());
    }

    #[test]
    fn successful_write_keeps_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.txt");
        fs::write(&path, "").unwrap();

        write_or_remove(&path, FailingWriter { remaining: 64 }, "one two").unwrap();
        assert!(path.exists());
    }
}
