use std::sync::Arc;

pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Progress reporter that forwards every stage message to `log::info!`.
pub fn log_progress() -> ProgressCallback {
    Arc::new(|message: &str| log::info!("{message}"))
}

pub(crate) fn report(progress: Option<&ProgressCallback>, message: &str) {
    if let Some(cb) = progress {
        cb(message);
    }
}
