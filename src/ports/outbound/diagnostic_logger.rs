/// DiagnosticLogger port for debug and error sinks
///
/// The core reports per-node resolution failures and per-entry scan
/// diagnostics through this interface instead of writing to a console
/// directly.
pub trait DiagnosticLogger {
    /// Records a diagnostic message useful when tracing a scan.
    fn debug(&self, message: &str);

    /// Records a failure that will surface in the build output.
    fn error(&self, message: &str);
}

impl<T: DiagnosticLogger + ?Sized> DiagnosticLogger for &T {
    fn debug(&self, message: &str) {
        (**self).debug(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
