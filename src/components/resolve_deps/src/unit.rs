use std::path::Path;

const SOURCE_EXTENSION: &str = "c";
const OBJECT_EXTENSION: &str = "o";

/// `foo.c` -> `foo.o`
pub fn object_for_source(path: &str) -> Option<String> {
    swap_last(path, SOURCE_EXTENSION, OBJECT_EXTENSION)
}

/// `foo.o` -> `foo.c`
pub fn source_for_object(path: &str) -> Option<String> {
    swap_last(path, OBJECT_EXTENSION, SOURCE_EXTENSION)
}

// Only the trailing character changes, the rest of the path is kept verbatim
fn swap_last(path: &str, from: &str, to: &str) -> Option<String> {
    if Path::new(path).extension()? != from {
        return None;
    }

    let stem = path.strip_suffix(from)?;
    Some(format!("{stem}{to}"))
}

#[test]
fn swaps_trailing_character() {
    assert_eq!(object_for_source("main.c").as_deref(), Some("main.o"));
    assert_eq!(object_for_source("src/lib/util.c").as_deref(), Some("src/lib/util.o"));
    assert_eq!(source_for_object("preproc.o").as_deref(), Some("preproc.c"));
}

#[test]
fn other_extensions_do_not_swap() {
    assert_eq!(object_for_source("main.cpp"), None);
    assert_eq!(object_for_source("main"), None);
    assert_eq!(source_for_object("libx.so"), None);
    assert_eq!(source_for_object("libfoo"), None);
    assert_eq!(source_for_object("dir.o/libx"), None);
}
