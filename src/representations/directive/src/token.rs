use derive_more::IsVariant;

/// How a token ended.
///
/// Read errors are not a boundary, they are reported through `io::Result`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum Boundary {
    /// More tokens may follow on the same line
    EndOfToken,
    /// The newline terminating the token was consumed
    EndOfLine,
    /// The stream ended, content may be empty
    EndOfFile,
    /// Malformed token, its content was discarded
    Invalid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub content: Vec<u8>,
    pub boundary: Boundary,
}

impl Token {
    pub fn new(content: Vec<u8>, boundary: Boundary) -> Self {
        Self { content, boundary }
    }

    pub fn invalid() -> Self {
        Self {
            content: Vec::new(),
            boundary: Boundary::Invalid,
        }
    }

    pub fn is_name(&self, name: &str) -> bool {
        self.content.eq_ignore_ascii_case(name.as_bytes())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

#[test]
fn names_compare_case_insensitively() {
    let token = Token::new(b"PrAgMa".to_vec(), Boundary::EndOfToken);
    assert!(token.is_name("pragma"));
    assert!(!token.is_name("pragmas"));
}

#[test]
fn text_is_lossy() {
    let token = Token::new(vec![b'a', 0xFF, b'b'], Boundary::EndOfLine);
    assert_eq!(token.text(), "a\u{FFFD}b");
}
