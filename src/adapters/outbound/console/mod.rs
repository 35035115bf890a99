/// Console adapters for diagnostic output
mod stderr_logger;

pub use stderr_logger::StderrLogger;
