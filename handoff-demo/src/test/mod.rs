use handoff_library::Host;
use std::fmt::{self, Debug};
use std::io::{self, Write};
use std::sync::Mutex;
use tap::pipe::Pipe;

/// Captures everything a machine writes, so tests can assert on the
/// exact output lines.
pub struct TestHost {
    out: Mutex<Vec<u8>>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(Vec::new()),
        }
    }

    /// The captured output, split into lines.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.out.lock().unwrap().clone())
            .expect("captured output was not utf-8")
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Host for TestHost {
    fn write(&self, f: &dyn Fn(&mut dyn Write) -> io::Result<()>) -> io::Result<()> {
        let mut out = self.out.lock().unwrap();
        f(&mut *out)
    }
}

impl Debug for TestHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestHost")
            .pipe(|mut d| {
                match self.out.try_lock() {
                    Ok(out) => d.field("captured_bytes", &out.len()),
                    Err(_) => d.field("captured_bytes", &"<locked>"),
                }
                .finish()
            })
    }
}

#[cfg(test)]
mod host_tests {
    use super::TestHost;
    use crate::Machine;

    #[test]
    fn captures_lines_in_order() {
        let host = TestHost::new();
        let mut mx = Machine::new(&host);

        mx.println("one").unwrap();
        mx.println(2).unwrap();

        assert_eq!(host.lines(), ["one", "2"]);
    }
}
