//! Line reading from a byte stream into the arena.
//!
//! [`LineReader`] reads one line at a time from any `Read` source,
//! accumulating bytes in a transient `LineBuffer` and materializing the
//! finished line as a [`Str`] in a caller-supplied arena. The paired
//! `Write` sink is flushed before every read so that prompts written to it
//! are visible before the reader blocks.

use std::io::{self, Read, Write};

use twine_arena::Arena;

use crate::buffer::LineBuffer;
use crate::error::ReadError;
use crate::string::Str;

/// The byte that ends a line. It is consumed but never included.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Reads lines from a byte stream into arena-backed strings.
///
/// Generic over `R: Read` and `W: Write` so tests can use `&[u8]` and
/// `io::sink()` while interactive code uses [`LineReader::stdio`].
/// Reading is synchronous and blocking; there is no timeout or
/// cancellation. Each call consumes exactly one transient buffer,
/// independent of the arena.
///
/// # Examples
///
/// ```
/// use twine_arena::Arena;
/// use twine_text::LineReader;
///
/// let mut arena = Arena::with_defaults();
/// let mut reader = LineReader::new(&b"one\ntwo\n"[..], std::io::sink());
///
/// let one = reader.read_line(&mut arena).unwrap().unwrap();
/// assert_eq!(one.as_bytes(&arena), b"one");
///
/// let two = reader.read_line(&mut arena).unwrap().unwrap();
/// assert_eq!(two.as_bytes(&arena), b"two");
///
/// // Exhausted stream: no line, not an empty one.
/// assert!(reader.read_line(&mut arena).unwrap().is_none());
/// ```
pub struct LineReader<R: Read, W: Write> {
    input: R,
    prompt: W,
    lines_read: u64,
}

impl LineReader<io::Stdin, io::Stdout> {
    /// A reader over standard input that flushes standard output before
    /// each read.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: Read, W: Write> LineReader<R, W> {
    /// Create a reader over `input`, flushing `prompt` before each read.
    pub fn new(input: R, prompt: W) -> Self {
        Self {
            input,
            prompt,
            lines_read: 0,
        }
    }

    /// Read one line into `arena`.
    ///
    /// Consumes bytes up to and including the next [`LINE_TERMINATOR`];
    /// the terminator itself is not part of the result, and the stream is
    /// left positioned just past it. A final line without a terminator is
    /// still returned.
    ///
    /// Returns `Ok(None)` when the stream was already exhausted —
    /// distinct from `Ok(Some(s))` with `s` empty, which means a bare
    /// terminator was read.
    pub fn read_line(&mut self, arena: &mut Arena) -> Result<Option<Str>, ReadError> {
        self.prompt.flush()?;

        let mut buf = LineBuffer::new();
        let mut saw_terminator = false;
        while let Some(byte) = self.read_byte()? {
            if byte == LINE_TERMINATOR {
                saw_terminator = true;
                break;
            }
            buf.push(byte);
        }

        // End-of-stream with nothing accumulated: no line, not an empty one.
        if buf.is_empty() && !saw_terminator {
            return Ok(None);
        }

        let line = Str::from_bytes(arena, buf.as_slice())?;
        self.lines_read += 1;
        Ok(Some(line))
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Convert into an iterator over the remaining lines.
    pub fn lines(self, arena: &mut Arena) -> Lines<'_, R, W> {
        Lines {
            reader: self,
            arena,
            done: false,
        }
    }

    /// Read a single byte, retrying on interruption.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Iterator adapter over the remaining lines of a [`LineReader`].
///
/// Yields each line as a [`Str`] allocated in the borrowed arena; ends at
/// end-of-stream and fuses after the first error.
pub struct Lines<'a, R: Read, W: Write> {
    reader: LineReader<R, W>,
    arena: &'a mut Arena,
    done: bool,
}

impl<R: Read, W: Write> Iterator for Lines<'_, R, W> {
    type Item = Result<Str, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_line(self.arena) {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twine_arena::ArenaConfig;

    /// A `Write` sink that counts flushes.
    #[derive(Default)]
    struct FlushCounter {
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    /// A `Read` source that always fails.
    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }
    }

    #[test]
    fn reads_one_line_and_leaves_position_past_terminator() {
        let mut arena = Arena::with_defaults();
        let mut reader = LineReader::new(&b"hello\nworld\n"[..], io::sink());

        let line = reader.read_line(&mut arena).unwrap().unwrap();
        assert_eq!(line.as_bytes(&arena), b"hello");

        // The terminator was consumed: the next read starts at "world".
        let line = reader.read_line(&mut arena).unwrap().unwrap();
        assert_eq!(line.as_bytes(&arena), b"world");
    }

    #[test]
    fn exhausted_stream_is_none_not_empty() {
        let mut arena = Arena::with_defaults();
        let mut reader = LineReader::new(&b""[..], io::sink());
        assert!(reader.read_line(&mut arena).unwrap().is_none());
        assert_eq!(reader.lines_read(), 0);
    }

    #[test]
    fn bare_terminator_is_an_empty_line() {
        let mut arena = Arena::with_defaults();
        let mut reader = LineReader::new(&b"\n"[..], io::sink());

        let line = reader.read_line(&mut arena).unwrap().unwrap();
        assert!(line.is_empty());

        assert!(reader.read_line(&mut arena).unwrap().is_none());
    }

    #[test]
    fn final_line_without_terminator_is_returned() {
        let mut arena = Arena::with_defaults();
        let mut reader = LineReader::new(&b"tail"[..], io::sink());

        let line = reader.read_line(&mut arena).unwrap().unwrap();
        assert_eq!(line.as_bytes(&arena), b"tail");

        assert!(reader.read_line(&mut arena).unwrap().is_none());
    }

    #[test]
    fn long_line_crosses_multiple_growth_steps() {
        let mut arena = Arena::with_defaults();
        let mut input = vec![b'x'; 100];
        input.push(LINE_TERMINATOR);
        let mut reader = LineReader::new(input.as_slice(), io::sink());

        let line = reader.read_line(&mut arena).unwrap().unwrap();
        assert_eq!(line.len(), 100);
        assert!(line.as_bytes(&arena).iter().all(|&b| b == b'x'));
    }

    #[test]
    fn prompt_is_flushed_before_each_read() {
        let mut arena = Arena::with_defaults();
        let mut sink = FlushCounter::default();
        {
            let mut reader = LineReader::new(&b"a\nb\n"[..], &mut sink);
            reader.read_line(&mut arena).unwrap();
            reader.read_line(&mut arena).unwrap();
        }
        assert_eq!(sink.flushes, 2);
    }

    #[test]
    fn counts_lines_including_empty_ones() {
        let mut arena = Arena::with_defaults();
        let mut reader = LineReader::new(&b"a\n\nb\n"[..], io::sink());
        while reader.read_line(&mut arena).unwrap().is_some() {}
        assert_eq!(reader.lines_read(), 3);
    }

    #[test]
    fn io_error_propagates() {
        let mut arena = Arena::with_defaults();
        let mut reader = LineReader::new(BrokenPipe, io::sink());
        let result = reader.read_line(&mut arena);
        assert!(matches!(result, Err(ReadError::Io(_))));
    }

    #[test]
    fn arena_exhaustion_propagates_after_buffering() {
        let mut arena = Arena::new(ArenaConfig {
            segment_size: 4,
            max_segments: 1,
        });
        let mut reader = LineReader::new(&b"too long for the arena\n"[..], io::sink());
        let result = reader.read_line(&mut arena);
        assert!(matches!(result, Err(ReadError::Arena(_))));
    }

    #[test]
    fn iterator_yields_each_line() {
        let mut arena = Arena::with_defaults();
        let reader = LineReader::new(&b"a\nbb\nccc\n"[..], io::sink());

        let lines: Vec<Str> = reader
            .lines(&mut arena)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_bytes(&arena), b"a");
        assert_eq!(lines[1].as_bytes(&arena), b"bb");
        assert_eq!(lines[2].as_bytes(&arena), b"ccc");
    }

    #[test]
    fn iterator_fuses_after_error() {
        let mut arena = Arena::with_defaults();
        let reader = LineReader::new(BrokenPipe, io::sink());
        let mut lines = reader.lines(&mut arena);
        assert!(matches!(lines.next(), Some(Err(ReadError::Io(_)))));
        assert!(lines.next().is_none());
    }
}
