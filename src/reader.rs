use std::path::PathBuf;

use log::{debug, warn};
use tokio::fs;
use tokio::task::JoinHandle;

use crate::error::ReadError;
use crate::request::ReadRequest;

/// Outcome of a single read: the decoded content or the fault.
pub type ReadResult = Result<String, ReadError>;

/// Reads the file named by a [`ReadRequest`] without blocking the runtime.
#[derive(Debug, Clone)]
pub struct FileReader {
    request: ReadRequest,
}

impl FileReader {
    pub fn new(request: ReadRequest) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &ReadRequest {
        &self.request
    }

    /// Read and decode the whole file. The handle is opened and closed
    /// inside this call.
    pub async fn read(&self) -> ReadResult {
        let path = self.request.path();
        debug!("Reading {} as {}", path.display(), self.request.encoding());

        let result = match fs::read(path).await {
            Ok(bytes) => {
                self.request
                    .encoding()
                    .decode(bytes)
                    .map_err(|source| ReadError::Decode {
                        path: path.to_path_buf(),
                        source,
                    })
            }
            Err(source) => Err(ReadError::Io {
                path: path.to_path_buf(),
                source,
            }),
        };

        match &result {
            Ok(content) => debug!("Read {} bytes from {}", content.len(), path.display()),
            Err(err) => warn!("Read of {} failed: {}", path.display(), err),
        }

        result
    }

    /// Issue the read on the runtime and hand control straight back.
    pub fn spawn(self) -> JoinHandle<ReadResult> {
        tokio::spawn(async move { self.read().await })
    }

    /// Continuation form: exactly one of the two handlers runs, once.
    pub async fn read_with<T, S, F>(self, on_success: S, on_failure: F) -> T
    where
        S: FnOnce(String) -> T,
        F: FnOnce(ReadError) -> T,
    {
        match self.read().await {
            Ok(content) => on_success(content),
            Err(err) => on_failure(err),
        }
    }
}

/// Read `path` decoded with the encoding called `encoding`.
pub async fn read(path: impl Into<PathBuf>, encoding: &str) -> ReadResult {
    let request = ReadRequest::new(path, encoding)?;
    FileReader::new(request).read().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn reader_for(dir: &TempDir, name: &str) -> FileReader {
        let request = ReadRequest::new(dir.path().join(name), "utf-8").unwrap();
        FileReader::new(request)
    }

    #[tokio::test]
    async fn reads_whole_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), "Hello").await.unwrap();

        let content = reader_for(&dir, "file.txt").read().await.unwrap();

        assert_eq!(content, "Hello");
    }

    #[tokio::test]
    async fn keeps_multibyte_text_and_newlines() {
        let dir = TempDir::new().unwrap();
        let text = "linha um\nação é ótima\n";
        fs::write(dir.path().join("file.txt"), text).await.unwrap();

        let content = read(dir.path().join("file.txt"), "UTF-8").await.unwrap();

        assert_eq!(content, text);
    }

    #[tokio::test]
    async fn missing_file_is_enoent() {
        let dir = TempDir::new().unwrap();

        let err = reader_for(&dir, "file.txt").read().await.unwrap_err();

        assert!(matches!(err, ReadError::Io { .. }));
        assert_eq!(err.code(), "ENOENT");
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_decode_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), [0x48, 0xff, 0x49])
            .await
            .unwrap();

        let err = reader_for(&dir, "file.txt").read().await.unwrap_err();

        assert!(matches!(err, ReadError::Decode { .. }));
        assert_eq!(err.code(), "EILSEQ");
    }

    #[tokio::test]
    async fn directory_is_an_io_failure() {
        let dir = TempDir::new().unwrap();

        let err = read(dir.path(), "utf-8").await.unwrap_err();

        assert!(matches!(err, ReadError::Io { .. }));
    }

    #[tokio::test]
    async fn unsupported_encoding_fails_before_touching_disk() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), "Hello").await.unwrap();

        let err = read(dir.path().join("file.txt"), "utf-16").await.unwrap_err();

        assert!(matches!(err, ReadError::UnsupportedEncoding(_)));
    }

    #[tokio::test]
    async fn repeated_reads_see_the_same_content() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), "stable").await.unwrap();
        let reader = reader_for(&dir, "file.txt");

        let first = reader.read().await.unwrap();
        let second = reader.read().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn spawned_read_completes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), "Hello").await.unwrap();

        let handle = reader_for(&dir, "file.txt").spawn();

        assert_eq!(handle.await.unwrap().unwrap(), "Hello");
    }

    #[tokio::test]
    async fn only_success_handler_fires() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), "Hello").await.unwrap();
        let successes = Cell::new(0);
        let failures = Cell::new(0);

        reader_for(&dir, "file.txt")
            .read_with(
                |content| {
                    assert_eq!(content, "Hello");
                    successes.set(successes.get() + 1);
                },
                |_| failures.set(failures.get() + 1),
            )
            .await;

        assert_eq!((successes.get(), failures.get()), (1, 0));
    }

    #[tokio::test]
    async fn only_failure_handler_fires() {
        let dir = TempDir::new().unwrap();
        let successes = Cell::new(0);
        let failures = Cell::new(0);

        reader_for(&dir, "absent.txt")
            .read_with(
                |_| successes.set(successes.get() + 1),
                |err| {
                    assert_eq!(err.code(), "ENOENT");
                    failures.set(failures.get() + 1);
                },
            )
            .await;

        assert_eq!((successes.get(), failures.get()), (0, 1));
    }
}
