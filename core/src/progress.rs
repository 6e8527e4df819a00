use pbr::{ProgressBar, Units};
use std::fs;
use std::io::{self, Stderr, Write};
use std::path::Path;

/// Receives load progress as a running count of lines and bytes consumed.
pub trait Progress {
    fn update(&mut self, lines: usize, bytes: u64);

    /// Called once after the last line has been read.
    fn finish(&mut self, lines: usize, bytes: u64) {
        self.update(lines, bytes);
    }
}

/// Discard all progress reports.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _lines: usize, _bytes: u64) {}
}

/// Any `FnMut(usize)` receives the line count.
impl<F: FnMut(usize)> Progress for F {
    fn update(&mut self, lines: usize, _bytes: u64) {
        self(lines)
    }
}

/// Draw a byte-based progress bar while reading a file.
pub struct ProgressBarReporter<W: Write> {
    bar: ProgressBar<W>,
}

impl ProgressBarReporter<Stderr> {
    /// Create a progress bar on stderr for a source of `total_bytes` bytes,
    /// keeping stdout free for results.
    pub fn new(total_bytes: u64) -> Self {
        ProgressBarReporter::on(io::stderr(), total_bytes)
    }

    /// Create a progress bar on stderr sized to the file at `path`.
    pub fn for_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        ProgressBarReporter::for_file_on(io::stderr(), path)
    }
}

impl<W: Write> ProgressBarReporter<W> {
    /// Create a progress bar drawn on `handle` sized to the file at `path`.
    pub fn for_file_on<P: AsRef<Path>>(handle: W, path: P) -> io::Result<Self> {
        let total = fs::metadata(path)?.len();
        Ok(ProgressBarReporter::on(handle, total))
    }

    pub fn on(handle: W, total_bytes: u64) -> Self {
        let mut bar = ProgressBar::on(handle, total_bytes);
        bar.set_units(Units::Bytes);
        ProgressBarReporter { bar }
    }
}

impl<W: Write> Progress for ProgressBarReporter<W> {
    fn update(&mut self, lines: usize, bytes: u64) {
        self.bar.message(&format!("{} lines ", lines));
        self.bar.set(bytes);
    }

    fn finish(&mut self, lines: usize, bytes: u64) {
        self.update(lines, bytes);
        self.bar.finish();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn drive<P: Progress>(progress: &mut P) {
        progress.update(10, 100);
        progress.update(20, 200);
        progress.finish(25, 250);
    }

    #[test]
    fn test_closure_receives_line_counts() {
        let mut seen: Vec<usize> = vec![];
        drive(&mut |lines: usize| seen.push(lines));
        assert_eq!(seen, vec![10, 20, 25]);
    }

    #[test]
    fn test_progress_bar_writes_to_handle() {
        let mut out = vec![];
        {
            let mut reporter = ProgressBarReporter::on(&mut out, 250);
            drive(&mut reporter);
        }
        assert!(!out.is_empty());
    }

    #[test]
    fn test_file_progress_bar_draws_on_stderr() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let _reporter: ProgressBarReporter<Stderr> =
            ProgressBarReporter::for_file(file.path()).unwrap();
    }

    #[test]
    fn test_file_progress_bar_on_handle() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"cat 0.4 0.5\n").unwrap();
        let mut out = vec![];
        {
            let mut reporter = ProgressBarReporter::for_file_on(&mut out, file.path()).unwrap();
            reporter.finish(1, 12);
        }
        let drawn = String::from_utf8_lossy(&out);
        assert!(drawn.contains("1 lines"));
    }

    #[test]
    fn test_no_progress_is_silent() {
        drive(&mut NoProgress);
    }
}
