use super::{HelpCommand, USAGE};
use crate::Invoke;

impl Invoke for HelpCommand {
    fn invoke(self) -> Result<(), ()> {
        print!("{USAGE}");
        Ok(())
    }
}
