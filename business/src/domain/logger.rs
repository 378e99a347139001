/// Logging port used by the application layer.
///
/// Use cases depend on this trait only; the concrete sink is wired in by
/// the presentation layer.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
