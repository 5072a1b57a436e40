//! Scheduler cooperation helpers.

/// Yields to the runtime for one scheduler tick so queued tasks (for
/// example pending UI updates) get a chance to run before the caller
/// resumes. Resolves with no value; ordering relative to other pending
/// tasks follows the runtime's queue and is not otherwise guaranteed.
pub async fn wait_for_next_tick() {
    tokio::task::yield_now().await;
}
