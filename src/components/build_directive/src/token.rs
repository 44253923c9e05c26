use crate::SourceReader;
use directive::{Boundary, Token};
use std::io::{self, BufRead};

pub const TOKEN_CAPACITY: usize = 256;

fn is_blank(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// Reads a single whitespace or quote delimited token.
///
/// Leading blanks are skipped and an opening `"` switches to quoted mode,
/// where blanks no longer end the token. A newline always ends the token,
/// and so does any `"`. A `"` that ends an unquoted token is left in the stream,
/// so it opens the next token.
///
/// Unquoted `<` or `>` makes the token invalid, which is how `#include <header>`
/// is rejected. So does a newline where the token should have started.
pub fn read_token<R: BufRead>(reader: &mut SourceReader<R>) -> io::Result<Token> {
    let mut content = Vec::with_capacity(TOKEN_CAPACITY);
    let mut quoted = false;

    while let Some(c) = reader.peek()? {
        if content.is_empty() {
            if c == b'"' && !quoted {
                reader.bump(c);
                quoted = true;
                continue;
            }

            if is_blank(c) {
                reader.bump(c);
                continue;
            }

            if c == b'\n' {
                reader.bump(c);
                return Ok(Token::invalid());
            }
        }

        if c == b'\n' || (!quoted && is_blank(c)) || c == b'"' {
            // Unquoted tokens leave the quote for whoever reads next
            if c != b'"' || quoted {
                reader.bump(c);
            }

            content.shrink_to_fit();

            let boundary = if c == b'\n' {
                Boundary::EndOfLine
            } else {
                Boundary::EndOfToken
            };

            return Ok(Token::new(content, boundary));
        }

        reader.bump(c);

        if !quoted && (c == b'<' || c == b'>') {
            return Ok(Token::invalid());
        }

        content.push(c);
    }

    content.shrink_to_fit();
    Ok(Token::new(content, Boundary::EndOfFile))
}
