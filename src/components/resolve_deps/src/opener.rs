use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

/// Opens dependency files for scanning
pub trait SourceOpener {
    type Reader: BufRead;

    fn open(&self, path: &str) -> io::Result<Self::Reader>;
}

impl<T: SourceOpener> SourceOpener for &T {
    type Reader = T::Reader;

    fn open(&self, path: &str) -> io::Result<Self::Reader> {
        (**self).open(path)
    }
}

/// Opens paths relative to the working directory
#[derive(Copy, Clone, Debug, Default)]
pub struct FileSystem;

impl SourceOpener for FileSystem {
    type Reader = BufReader<File>;

    fn open(&self, path: &str) -> io::Result<Self::Reader> {
        File::open(path).map(BufReader::new)
    }
}
