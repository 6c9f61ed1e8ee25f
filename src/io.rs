//! Handing finished buffers to storage or transport, and getting them back.
//!
//! The codec itself never does I/O. These traits describe the only two operations it needs from
//! whatever moves the bytes around: write a whole buffer, and read a whole buffer.

use std::io::{self, Read, Write};

use tracing::debug;

/// Accepts a finished buffer.
pub trait BufferSink {
    /// Writes all of `bytes`.
    fn write_buffer(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// Produces a complete buffer to decode.
pub trait BufferSource {
    /// Returns the whole buffer.
    fn read_buffer(&mut self) -> io::Result<Vec<u8>>;
}

impl<W: Write + ?Sized> BufferSink for W {
    fn write_buffer(&mut self, bytes: &[u8]) -> io::Result<()> {
        debug!(len = bytes.len(), "writing buffer");
        self.write_all(bytes)?;
        self.flush()
    }
}

impl<R: Read + ?Sized> BufferSource for R {
    fn read_buffer(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.read_to_end(&mut buf)?;
        debug!(len = buf.len(), "read buffer");
        Ok(buf)
    }
}
