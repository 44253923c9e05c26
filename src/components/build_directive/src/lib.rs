mod reader;
mod scanner;
mod token;

pub use reader::SourceReader;
pub use scanner::DirectiveScanner;
pub use token::{TOKEN_CAPACITY, read_token};

use directive::Directive;
use std::io::{self, BufRead};

/// Convenience for scanning a whole stream at once
pub fn scan_directives(stream: impl BufRead) -> io::Result<Vec<Directive>> {
    DirectiveScanner::new(stream).collect()
}
