use log::error;

/// Title used for every connection-failure alert.
pub const CONNECTION_FAILED_TITLE: &str = "Connection Failed";

/// Fire-and-forget user alerts. The UI layer supplies its own sink (toast,
/// modal); the manager only hands it resolved messages.
pub trait NotificationSink {
    fn error(&self, message: &str, title: &str);
}

/// Sink that writes alerts to the log.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn error(&self, message: &str, title: &str) {
        error!("{title}: {message}");
    }
}
