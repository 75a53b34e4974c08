//! Application state for the CLI layer.

use crate::accounts::UserRegistry;
use crate::config::AppConfig;
use crate::notify::NotificationQueue;

/// Everything the menu loop needs, passed in explicitly.
///
/// The program is single-threaded, so plain ownership suffices; there
/// are no shared-state globals.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Demo network, starting balance, and default preferences
    pub config: AppConfig,

    /// All registered users
    pub registry: UserRegistry,

    /// Pending notifications, delivered at the user menu
    pub notifications: NotificationQueue,
}

impl AppState {
    /// Creates fresh state from a configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            registry: UserRegistry::new(),
            notifications: NotificationQueue::new(),
        }
    }
}
