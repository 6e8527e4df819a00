use log::trace;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a file for buffered line reading.
pub fn open_buffered<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::with_capacity(8192 * 16, file))
}

/// Line reader reusing a single buffer, stripping `\n` / `\r\n` terminators
/// and counting the lines and bytes consumed so far.
#[derive(Debug)]
pub struct LineReader<B> {
    buf: B,
    line: String,
    lines: usize,
    bytes: u64,
}

impl<B: BufRead> LineReader<B> {
    pub fn new(buf: B) -> Self {
        LineReader {
            buf,
            line: String::new(),
            lines: 0,
            bytes: 0,
        }
    }

    /// Read the next line, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.line.clear();
        let read = self.buf.read_line(&mut self.line)?;
        if read == 0 {
            trace!("end of input after {} lines", self.lines);
            return Ok(None);
        }
        self.lines += 1;
        self.bytes += read as u64;
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        Ok(Some(&self.line))
    }

    /// Number of lines read so far; also the 1-based number of the current line.
    pub fn lines_read(&self) -> usize {
        self.lines
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_reader_strips_terminators() {
        let mut rdr = LineReader::new(Cursor::new("aaa\nbb\r\nc"));
        assert_eq!(rdr.next_line().unwrap(), Some("aaa"));
        assert_eq!(rdr.next_line().unwrap(), Some("bb"));
        assert_eq!(rdr.next_line().unwrap(), Some("c"));
        assert_eq!(rdr.next_line().unwrap(), None);
        assert_eq!(rdr.lines_read(), 3);
        assert_eq!(rdr.bytes_read(), 9);
    }

    #[test]
    fn test_line_reader_keeps_blank_lines() {
        let mut rdr = LineReader::new(Cursor::new("\n\nx\n"));
        assert_eq!(rdr.next_line().unwrap(), Some(""));
        assert_eq!(rdr.next_line().unwrap(), Some(""));
        assert_eq!(rdr.next_line().unwrap(), Some("x"));
        assert_eq!(rdr.next_line().unwrap(), None);
    }

    #[test]
    fn test_line_reader_rejects_invalid_utf8() {
        let mut rdr = LineReader::new(Cursor::new(vec![0x66, 0xff, 0x0a]));
        let err = rdr.next_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
