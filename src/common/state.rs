// Application state shared across all modules

use std::sync::Arc;

use crate::challenge::service::ChallengeService;

/// Application state. Nothing here mutates after startup, so it is shared as
/// a plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub challenge_service: Arc<ChallengeService>,
}
