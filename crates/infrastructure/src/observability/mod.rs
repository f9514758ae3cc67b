mod error_sink;

pub use error_sink::TracingErrorSink;
