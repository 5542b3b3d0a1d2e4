use tokio::time::Instant;

/// Resolves when `deadline` passes; never resolves when there is none.
///
/// The owner of a [`super::PlaybackEngine`] re-reads `next_deadline()` on
/// every loop iteration and selects on this together with its input, so a
/// pause or reset handled in between simply drops the old wait.
pub async fn wait_for_tick(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
