//! Progress spinner shown while a request is outstanding.

use std::io::Write;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Glyphs cycled by the spinner.
pub const GLYPHS: [char; 4] = ['|', '/', '-', '\\'];

/// Time each glyph stays on screen.
pub const INTERVAL: Duration = Duration::from_millis(100);

/// A spinner running on its own task.
///
/// Each glyph is written as `\r<glyph>`, so it overwrites the current line.
/// After [`Spinner::stop`] returns nothing more is written; the caller emits
/// a `\r` before printing anything else.
pub struct Spinner {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Spinner {
    /// Start spinning on `out`.
    pub fn start<W>(out: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_interval(out, INTERVAL)
    }

    /// Start spinning with a custom glyph interval.
    pub fn with_interval<W>(out: W, interval: Duration) -> Self
    where
        W: Write + Send + 'static,
    {
        let token = CancellationToken::new();
        let handle = tokio::spawn(spin(out, token.clone(), interval));
        Self { token, handle }
    }

    /// Stop the spinner and wait for its task to finish.
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            tracing::debug!(error = %e, "spinner task ended abnormally");
        }
    }
}

async fn spin<W: Write>(mut out: W, token: CancellationToken, interval: Duration) {
    loop {
        if token.is_cancelled() {
            return;
        }
        for glyph in GLYPHS {
            if token.is_cancelled() {
                return;
            }
            // A broken stdout is not worth failing the request over.
            let _ = write!(out, "\r{}", glyph).and_then(|_| out.flush());
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(interval) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Writer that appends into a shared buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_cycles_glyphs_in_order() {
        let buf = SharedBuf::default();
        let spinner = Spinner::with_interval(buf.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(95)).await;
        spinner.stop().await;

        let text = buf.contents();
        assert!(text.starts_with("\r|\r/\r-\r\\\r|"), "got {:?}", text);
    }

    #[tokio::test]
    async fn test_no_output_after_stop() {
        let buf = SharedBuf::default();
        let spinner = Spinner::start(buf.clone());
        tokio::time::sleep(Duration::from_millis(150)).await;
        spinner.stop().await;

        let written = buf.contents();
        assert!(!written.is_empty());

        tokio::time::sleep(INTERVAL * 2).await;
        assert_eq!(buf.contents(), written);
    }

    #[tokio::test]
    async fn test_stop_is_prompt() {
        let buf = SharedBuf::default();
        let spinner = Spinner::with_interval(buf.clone(), Duration::from_secs(10));
        tokio::time::sleep(Duration::from_millis(20)).await;

        let started = std::time::Instant::now();
        spinner.stop().await;
        assert!(started.elapsed() < INTERVAL);
        assert_eq!(buf.contents(), "\r|");
    }
}
