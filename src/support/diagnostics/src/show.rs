pub trait Show {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result;

    fn to_message(&self) -> String {
        let mut message = String::new();

        // Writing into a String cannot fail
        let _ = self.show(&mut message);
        message
    }
}
