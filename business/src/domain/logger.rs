/// Logging port. Application services receive it as `Arc<dyn Logger>` so the
/// sink (tracing, a test double) is chosen at wiring time.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
