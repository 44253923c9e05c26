mod invoke;

use indoc::indoc;

pub const USAGE: &str = indoc! {"
    Usage: vmk [OPTIONS] FILE.c ...

    Resolves the #include and #pragma link/dep directives of each FILE
    and compiles the result.

    Options:
      -h, --help       Show this message
      -n, --dry-run    Print the compiler command without running it
      -q, --quiet      Do not report each file as it is scanned
      --cc NAME        Compiler to invoke (default: cc)
      --               Treat the remaining arguments as files
"};

#[derive(Clone, Debug)]
pub struct HelpCommand;
