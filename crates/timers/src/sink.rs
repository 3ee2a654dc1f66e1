use std::io::{self, Write};
use std::sync::Arc;
use parking_lot::Mutex;

/// Destination for timing report lines.
///
/// Every [`io::Write`] is a sink, including `&mut W`, which is how a caller
/// lends a stream to a timer while keeping ownership of it.
pub trait LineSink {
    /// Writes `line` followed by a newline and flushes.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<W: Write + ?Sized> LineSink for W {
    #[inline]
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{}", line)?;
        self.flush()
    }
}

/// Cloneable in-memory sink. All clones append to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
