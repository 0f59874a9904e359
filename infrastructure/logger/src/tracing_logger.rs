use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub const LOG_TARGET: &str = "shop";

/// [`Logger`] adapter that forwards every message to `tracing` under
/// [`LOG_TARGET`], so `RUST_LOG=shop=debug` scopes the business layer.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedOutput {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(log: impl FnOnce(&dyn Logger)) -> String {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || log(&TracingLogger));
        output.contents()
    }

    #[test]
    fn should_emit_messages_under_shop_target() {
        let output = capture(|logger| logger.info("Fetching all products"));

        assert!(output.contains("INFO"));
        assert!(output.contains("shop"));
        assert!(output.contains("Fetching all products"));
    }

    #[test]
    fn should_map_each_method_to_its_level() {
        let output = capture(|logger| {
            logger.warn("low stock");
            logger.error("catalog unreadable");
            logger.debug("cart is empty");
        });

        assert!(output.contains("WARN"));
        assert!(output.contains("ERROR"));
        assert!(output.contains("DEBUG"));
    }
}
