use std::io::{self, BufRead, ErrorKind};

// Byte-at-a-time view over a buffered stream.
// Bytes can be inspected without being consumed, which is how
// a terminating quote is left behind for the next token.
#[derive(Debug)]
pub struct SourceReader<R: BufRead> {
    inner: R,
    at_line_start: bool,
}

impl<R: BufRead> SourceReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            at_line_start: true,
        }
    }

    /// Whether the most recently consumed byte was a newline,
    /// or nothing has been consumed yet.
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buffer) => return Ok(buffer.first().copied()),
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(error),
            }
        }
    }

    /// Consumes a byte previously returned by `peek`
    pub fn bump(&mut self, byte: u8) {
        self.inner.consume(1);
        self.at_line_start = byte == b'\n';
    }

    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek()?;

        if let Some(byte) = byte {
            self.bump(byte);
        }

        Ok(byte)
    }
}

#[test]
fn tracks_line_starts() {
    let mut reader = SourceReader::new(&b"a\nb"[..]);
    assert!(reader.at_line_start());
    assert_eq!(reader.next_byte().unwrap(), Some(b'a'));
    assert!(!reader.at_line_start());
    assert_eq!(reader.next_byte().unwrap(), Some(b'\n'));
    assert!(reader.at_line_start());
    assert_eq!(reader.peek().unwrap(), Some(b'b'));
    assert!(reader.at_line_start());
    assert_eq!(reader.next_byte().unwrap(), Some(b'b'));
    assert_eq!(reader.next_byte().unwrap(), None);
}

#[test]
fn retries_interrupted_reads() {
    use std::io::Read;

    struct InterruptedOnce {
        data: &'static [u8],
        interrupted: bool,
    }

    impl Read for InterruptedOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(ErrorKind::Interrupted.into());
            }

            self.data.read(buf)
        }
    }

    let stream = InterruptedOnce {
        data: b"#x",
        interrupted: false,
    };

    let mut reader = SourceReader::new(io::BufReader::new(stream));
    assert_eq!(reader.peek().unwrap(), Some(b'#'));
    assert_eq!(reader.next_byte().unwrap(), Some(b'#'));
    assert_eq!(reader.next_byte().unwrap(), Some(b'x'));
    assert_eq!(reader.next_byte().unwrap(), None);
}

#[test]
fn other_read_errors_propagate() {
    struct Failing;

    impl std::io::Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(ErrorKind::PermissionDenied.into())
        }
    }

    let mut reader = SourceReader::new(io::BufReader::new(Failing));
    assert_eq!(
        reader.peek().unwrap_err().kind(),
        ErrorKind::PermissionDenied
    );
}
