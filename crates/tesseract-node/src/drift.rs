//! Background spacetime drift.

use std::sync::Arc;

use rand::Rng;
use tokio::time;
use tracing::debug;

use crate::state::AppState;

/// Run the background drift loop.
///
/// Every interval the node advances its clock by one tick and wanders a
/// small random amount in space, through the same lock the request
/// handlers use.
pub async fn run_drift(state: Arc<AppState>) {
    let mut interval = time::interval(state.config.drift_interval);
    // The first tick completes immediately; consume it so the node
    // starts at rest.
    interval.tick().await;

    loop {
        interval.tick().await;

        let (dx, dy, dz) = {
            let mut rng = rand::thread_rng();
            (
                rng.r#gen::<f64>() - 0.5,
                rng.r#gen::<f64>() - 0.5,
                rng.r#gen::<f64>() - 0.5,
            )
        };

        let position = state.spacetime.write().await.shift(1.0, dx, dy, dz);
        debug!(?position, "4D drift");
    }
}
