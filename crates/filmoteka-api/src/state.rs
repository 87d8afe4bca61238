//! Application state.
//!
//! All collaborators are wired explicitly at startup and handed to handlers
//! through this state; there is no ambient registry.

use filmoteka_core::Config;

use crate::services::MovieCatalog;

/// Main application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: MovieCatalog,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
