use std::io::{self, Write};

/// The process boundary that demonstration output is written to.
pub trait Host {
    fn write(&self, f: &dyn Fn(&mut dyn Write) -> io::Result<()>) -> io::Result<()>;
}

/// A host backed by the real process stdout.
pub struct StdioHost;

impl Host for StdioHost {
    fn write(&self, f: &dyn Fn(&mut dyn Write) -> io::Result<()>) -> io::Result<()> {
        f(&mut io::stdout())
    }
}
