use crate::{SourceReader, read_token};
use directive::{Boundary, Directive, DirectiveKind, Token};
use std::io::{self, BufRead};

/// Reads `#include` and `#pragma` directives from a stream, one per call.
///
/// A pragma line with several arguments, such as `#pragma link "a.o" "b.o"`,
/// produces one directive per argument across successive calls. The kind that
/// still has arguments left on the line is remembered between calls, so a
/// scanner belongs to exactly one stream.
#[derive(Debug)]
pub struct DirectiveScanner<R: BufRead> {
    reader: SourceReader<R>,
    pending: Option<DirectiveKind>,
    finished: bool,
}

// Result of reading the argument of a directive
enum Argument {
    Directive(Directive),
    Invalid,
    EndOfFile,
}

impl<R: BufRead> DirectiveScanner<R> {
    pub fn new(stream: R) -> Self {
        Self {
            reader: SourceReader::new(stream),
            pending: None,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the next directive, or `None` once the stream is exhausted.
    ///
    /// After end of stream or a read error, every later call returns `Ok(None)`
    /// without touching the stream again.
    pub fn next_directive(&mut self) -> io::Result<Option<Directive>> {
        if self.finished {
            return Ok(None);
        }

        let result = self.scan();

        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }

        result
    }

    fn scan(&mut self) -> io::Result<Option<Directive>> {
        let mut start_of_line = true;

        if let Some(kind) = self.pending.take() {
            match self.read_argument(kind, true)? {
                Argument::Directive(directive) => return Ok(Some(directive)),
                Argument::EndOfFile => return Ok(None),
                Argument::Invalid => start_of_line = self.reader.at_line_start(),
            }
        }

        loop {
            if !self.find_next_marker(start_of_line)? {
                return Ok(None);
            }

            let name = read_token(&mut self.reader)?;

            match name.boundary {
                Boundary::EndOfToken => (),
                Boundary::EndOfFile => return Ok(None),
                Boundary::EndOfLine | Boundary::Invalid => {
                    start_of_line = self.reader.at_line_start();
                    continue;
                }
            }

            let argument = if name.is_name("include") {
                self.read_argument(DirectiveKind::Include, false)?
            } else if name.is_name("pragma") {
                let pragma_name = read_token(&mut self.reader)?;

                match pragma_name.boundary {
                    Boundary::EndOfToken => (),
                    Boundary::EndOfFile => return Ok(None),
                    Boundary::EndOfLine | Boundary::Invalid => {
                        start_of_line = self.reader.at_line_start();
                        continue;
                    }
                }

                let kind = DirectiveKind::from_pragma_name(&pragma_name.text());
                self.read_argument(kind, true)?
            } else {
                // Some other preprocessor directive
                start_of_line = false;
                continue;
            };

            match argument {
                Argument::Directive(directive) => return Ok(Some(directive)),
                Argument::EndOfFile => return Ok(None),
                Argument::Invalid => start_of_line = self.reader.at_line_start(),
            }
        }
    }

    fn read_argument(&mut self, kind: DirectiveKind, may_continue: bool) -> io::Result<Argument> {
        let Token { content, boundary } = read_token(&mut self.reader)?;

        match boundary {
            Boundary::Invalid => return Ok(Argument::Invalid),
            Boundary::EndOfFile if content.is_empty() => return Ok(Argument::EndOfFile),
            Boundary::EndOfToken if may_continue => self.pending = Some(kind),
            _ => (),
        }

        let argument = String::from_utf8_lossy(&content).into_owned();
        Ok(Argument::Directive(kind.at(argument)))
    }

    // Advances past the next `#` that starts a line, ignoring leading blanks.
    // Does not understand string literals that span lines.
    fn find_next_marker(&mut self, mut start_of_line: bool) -> io::Result<bool> {
        while let Some(c) = self.reader.next_byte()? {
            match c {
                b'\n' => start_of_line = true,
                b' ' | b'\t' => (),
                b'#' if start_of_line => return Ok(true),
                _ => start_of_line = false,
            }
        }

        Ok(false)
    }
}

impl<R: BufRead> Iterator for DirectiveScanner<R> {
    type Item = io::Result<Directive>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_directive().transpose()
    }
}
