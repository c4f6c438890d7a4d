//! Input sources for segmentation

use crate::error::{EngineError, Result};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where the text to segment comes from
pub enum Input {
    /// Text already in memory
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to decode as UTF-8
    Bytes(Vec<u8>),
    /// Reader stream (stdin, pipes and so on)
    Reader(Box<dyn Read + Send>),
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => write!(f, "Text({} bytes)", text.len()),
            Input::File(path) => write!(f, "File({})", path.display()),
            Input::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            Input::Reader(_) => f.write_str("Reader"),
        }
    }
}

impl Input {
    /// Text already in memory
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Text read from `path` when consumed
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// UTF-8 bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Stream drained to the end when consumed
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input as a UTF-8 string
    pub fn into_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => {
                let bytes = fs::read(&path).map_err(|e| {
                    EngineError::IoError(format!("cannot read {}: {e}", path.display()))
                })?;
                decode(bytes, &path.display().to_string())
            }
            Input::Bytes(bytes) => decode(bytes, "byte input"),
            Input::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|e| EngineError::IoError(format!("cannot read stream: {e}")))?;
                decode(bytes, "stream")
            }
        }
    }

    /// Size in bytes, when known without reading
    pub fn estimated_size(&self) -> Option<usize> {
        match self {
            Input::Text(text) => Some(text.len()),
            Input::Bytes(bytes) => Some(bytes.len()),
            Input::File(path) => fs::metadata(path).ok().map(|m| m.len() as usize),
            Input::Reader(_) => None,
        }
    }
}

fn decode(bytes: Vec<u8>, source: &str) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| EngineError::EncodingError(format!("{source} is not valid UTF-8: {e}")))
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_and_bytes() {
        assert_eq!(Input::from("abc").into_text().unwrap(), "abc");
        let bytes = "\u{3042}".as_bytes().to_vec();
        assert_eq!(Input::from_bytes(bytes).into_text().unwrap(), "\u{3042}");
    }

    #[test]
    fn test_invalid_utf8() {
        let result = Input::from_bytes(vec![0xff, 0xfe]).into_text();
        assert!(matches!(result, Err(EngineError::EncodingError(_))));

        let result = Input::from_reader(Cursor::new(vec![0xc3])).into_text();
        assert!(matches!(result, Err(EngineError::EncodingError(_))));
    }

    #[test]
    fn test_file_and_size() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "hello").unwrap();
        let input = Input::from_file(file.path());
        assert_eq!(input.estimated_size(), Some(5));
        assert_eq!(input.into_text().unwrap(), "hello");

        let missing = Input::from_file("/nonexistent/input.txt");
        assert!(matches!(missing.into_text(), Err(EngineError::IoError(_))));
    }

    #[test]
    fn test_reader_size_unknown() {
        let input = Input::from_reader(Cursor::new(b"x".to_vec()));
        assert_eq!(input.estimated_size(), None);
        assert_eq!(input.into_text().unwrap(), "x");
    }
}
