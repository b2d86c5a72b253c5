use tracing::warn;

/// Raises the dangerous-event notice for `container_number`.
///
/// This is a log line only. It never fails and never touches container state.
pub fn notify_hazard(container_number: &str) {
    warn!(target: "stowr::hazard", "Dangerous event detected in container {container_number}");
}
