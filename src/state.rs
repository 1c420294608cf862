//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::notifier::Notifier;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::web::flash::FlashSigner;

/// Services and settings shared by all handlers.
///
/// Built once at startup and cloned per request; every field is cheap to
/// clone.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub notifier: Arc<dyn Notifier>,
    pub flash: Arc<FlashSigner>,
    /// Send a background notification after each successful redirect.
    pub notify_on_visit: bool,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<SqliteLinkRepository>>,
        notifier: Arc<dyn Notifier>,
        flash: Arc<FlashSigner>,
        notify_on_visit: bool,
    ) -> Self {
        Self {
            link_service,
            notifier,
            flash,
            notify_on_visit,
        }
    }
}
