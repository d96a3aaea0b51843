use std::io::{self, Read};

use indicatif::ProgressStyle;
use tracing::{info_span, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Span carrying a byte progress bar for reading a file of `len` bytes.
/// The bar is drawn by the `IndicatifLayer` installed in `main`, which also routes
/// log lines around it. Returns a disabled span when `hidden` is set.
pub fn progress_span(len: u64, hidden: bool) -> Span {
    if hidden {
        return Span::none();
    }

    let span = info_span!("read_puzzles");
    if let Ok(style) = ProgressStyle::default_bar()
        .template("Reading puzzles [{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {bytes:>10}/{total_bytes:10}")
    {
        span.pb_set_style(&style.progress_chars("##-"));
    }
    span.pb_set_length(len);
    span.pb_start();

    span
}

/// Advances the progress bar of `span` by every byte read through it.
/// The bar is removed once the reader, and with it the span, is dropped.
pub struct ProgressReader<R> {
    inner: R,
    span: Span
}

impl<R: Read> ProgressReader<R> {
    pub fn new(inner: R, span: Span) -> Self {
        ProgressReader { inner, span }
    }
}

impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.span.pb_inc(n as u64);
        Ok(n)
    }
}
