//! Line reader with iterator interface
//!
//! Provides a streaming iterator over the lines typed (or scripted) into the
//! shell. Each menu choice and each field value is one line.
//!
//! # Error Handling
//!
//! - Fatal errors (script file not found) are returned from `open()`
//! - Read errors are yielded as Err variants in the iterator
//! - End of input ends the iterator

use crate::types::ShellError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Line-oriented input source for the shell
///
/// Strips the trailing `\n` or `\r\n` from every line and counts lines
/// read so far.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line_num: u64,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            line_num: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> u64 {
        self.line_num
    }
}

impl LineReader<BufReader<File>> {
    /// Open a script file for reading
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist, or `IoError` if it
    /// cannot be opened.
    pub fn open(path: &Path) -> Result<Self, ShellError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ShellError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ShellError::from(e),
        })?;

        Ok(LineReader::new(BufReader::with_capacity(8 * 1024, file)))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, ShellError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_num += 1;
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(ShellError::from(e))),
        }
    }
}
