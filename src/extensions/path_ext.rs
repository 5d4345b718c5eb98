use std::path::Path;

pub trait FileName {
    /// The final path component for log messages, `unknown` if there is none.
    fn string_file_name(&self) -> &str;
}

impl<P: AsRef<Path> + ?Sized> FileName for P {
    fn string_file_name(&self) -> &str {
        self.as_ref().file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
    }
}
