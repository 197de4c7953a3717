mod log_service;
mod tracing_logger;

pub use log_service::TracingLogService;
pub use tracing_logger::TracingLogger;
