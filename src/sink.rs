//! Text sinks over byte streams

use core::fmt;

/// [`core::fmt::Write`] adapter for a [`std::io::Write`] stream
///
/// Lines reach the stream as they are written, nothing is held back.
/// The first I/O error is kept and reported as [`core::fmt::Error`].
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
    error: Option<std::io::Error>,
}

impl<W: std::io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// The first I/O error, if any
    pub fn error(&self) -> Option<&std::io::Error> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: std::io::Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let ret = self.inner.write_all(s.as_bytes()).and_then(|()| {
            if s.ends_with('\n') {
                self.inner.flush()
            } else {
                Ok(())
            }
        });
        ret.map_err(|e| {
            self.error.get_or_insert(e);
            fmt::Error
        })
    }
}
