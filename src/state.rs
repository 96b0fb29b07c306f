use std::sync::Arc;

use crate::auth::AdminAuthority;
use crate::database::Gateway;

/// Shared handler dependencies, built once in `main` (or a test) and cloned per request
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn Gateway>,
    pub admin: Arc<dyn AdminAuthority>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn Gateway>, admin: Arc<dyn AdminAuthority>) -> Self {
        Self { gateway, admin }
    }

    pub fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }
}
