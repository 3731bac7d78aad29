//! Tracing setup. In the browser each formatted event goes to the developer
//! console; elsewhere it goes to stderr.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber once. `RUST_LOG` wins over `level` where
/// an environment exists; an unparsable `level` falls back to `info`.
pub fn init_tracing(level: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        // wasm32 has no wall clock for the timer and no terminal for colors.
        let builder = fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .without_time()
            .with_target(false);

        #[cfg(target_arch = "wasm32")]
        let installed = builder.with_writer(console::MakeConsoleWriter).try_init();
        #[cfg(not(target_arch = "wasm32"))]
        let installed = builder.with_writer(std::io::stderr).try_init();

        if installed.is_err() {
            tracing::debug!("a global subscriber was already installed");
        }
    });
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct MakeConsoleWriter;

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter(Vec::new())
        }
    }

    /// Buffers one formatted event and logs it when dropped.
    pub struct ConsoleWriter(Vec<u8>);

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.0);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&JsValue::from_str(line));
            }
        }
    }
}
