use push_contact_reconciler::environment::Environment;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct Logging;

impl Logging {
    /// Installs the global subscriber. Logs are flushed until the returned guard is dropped.
    pub fn init() -> WorkerGuard {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());

        let rust_log = Environment::string("RUST_LOG", "INFO");

        tracing_subscriber::registry()
            .with(EnvFilter::new(rust_log))
            .with(Box::new(tracing_subscriber::fmt::layer().with_writer(non_blocking)))
            .init();

        guard
    }
}
