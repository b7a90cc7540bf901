// File: src/image.rs
//! Turns a picture file into an embeddable `data:` URI, optionally off-thread.

use crate::core::draft::ImageTicket;
use base64::Engine;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use tracing::debug;

/// Completion of a background image read.
#[derive(Debug)]
pub struct ImageLoaded {
    pub ticket: ImageTicket,
    pub result: io::Result<String>,
}

/// Reads `path` and encodes it as `data:<mime>;base64,<payload>`.
pub fn encode_data_uri(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{mime};base64,{payload}"))
}

/// Reads the picture on a worker thread and reports back on `tx`.
/// The receiver decides whether the result is still wanted.
pub fn spawn_read(ticket: ImageTicket, path: PathBuf, tx: Sender<ImageLoaded>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let result = encode_data_uri(&path);
        debug!(path = %path.display(), ok = result.is_ok(), "image read finished");
        // receiver gone means the board was dropped; nothing left to do
        let _ = tx.send(ImageLoaded { ticket, result });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draft::DraftId;
    use std::sync::mpsc;

    fn ticket(draft: u64, attempt: u64) -> ImageTicket {
        ImageTicket { draft: DraftId::new(draft), attempt }
    }

    #[test]
    fn test_encodes_png_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mango.png");
        fs::write(&path, b"hi!").unwrap();
        assert_eq!(encode_data_uri(&path).unwrap(), "data:image/png;base64,aGkh");
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.zzunknown");
        fs::write(&path, b"hi!").unwrap();
        assert!(encode_data_uri(&path)
            .unwrap()
            .starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_spawn_read_reports_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.jpg");
        fs::write(&path, b"meow").unwrap();

        let (tx, rx) = mpsc::channel();
        spawn_read(ticket(7, 3), path, tx).join().unwrap();
        let loaded = rx.recv().unwrap();
        assert_eq!(loaded.ticket, ticket(7, 3));
        assert!(loaded.result.unwrap().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_spawn_read_reports_missing_file() {
        let (tx, rx) = mpsc::channel();
        spawn_read(ticket(1, 1), PathBuf::from("/no/such/picture.png"), tx)
            .join()
            .unwrap();
        assert!(rx.recv().unwrap().result.is_err());
    }
}
