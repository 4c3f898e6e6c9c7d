//! Ownership of the live [`ApiFacade`] and its hot reload.
//!
//! Responsibilities:
//! - Build a façade from the current credentials and hand out shared handles.
//! - Replace the façade wholesale when credentials change.
//! - Share one [`ActivityLogger`] between the façade and query sessions.
//!
//! Does NOT handle:
//! - Re-reading the config file (see `tygenie_config::SharedSettings::reload`).
//!
//! Invariants:
//! - There is always a façade, even before credentials are configured: the
//!   first one is built from empty credentials.
//! - `reload()` never mutates a façade in place. Calls already running keep
//!   their own `Arc` to the old façade and finish against it.
//! - A failed reload leaves the previous façade in service.

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};
use tygenie_config::{Credentials, SettingsProvider};

use crate::activity::ActivityLogger;
use crate::client::ApiFacade;
use crate::error::Result;
use crate::query::QueryState;

/// Holder of the live [`ApiFacade`].
pub struct ClientManager {
    settings: Arc<dyn SettingsProvider>,
    logger: ActivityLogger,
    api: RwLock<Arc<ApiFacade>>,
}

impl std::fmt::Debug for ClientManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientManager")
            .field("api", &self.api())
            .finish_non_exhaustive()
    }
}

impl ClientManager {
    /// Create a manager and load the façade from the current settings.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the HTTP client cannot be built.
    pub fn new(settings: Arc<dyn SettingsProvider>) -> Result<Self> {
        let logger = ActivityLogger::new(settings.clone());
        let placeholder = Self::build(&Credentials::empty(), &logger)?;
        let manager = Self {
            settings,
            logger,
            api: RwLock::new(Arc::new(placeholder)),
        };
        manager.reload()?;
        Ok(manager)
    }

    /// The live façade.
    pub fn api(&self) -> Arc<ApiFacade> {
        self.api
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Rebuild the façade from the current credentials and swap it in.
    ///
    /// # Errors
    ///
    /// Returns the construction error; the previous façade stays in place.
    pub fn reload(&self) -> Result<()> {
        let credentials = self.settings.settings().credentials();
        match Self::build(&credentials, &self.logger) {
            Ok(api) => {
                debug!(
                    host = %api.base_url(),
                    configured = credentials.is_configured(),
                    "API client loaded"
                );
                *self.api.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(api);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "API client reload failed, keeping previous client");
                Err(e)
            }
        }
    }

    /// Activity logger shared by the façade and query sessions.
    pub fn logger(&self) -> &ActivityLogger {
        &self.logger
    }

    /// Settings the manager reads credentials from.
    pub fn settings(&self) -> &Arc<dyn SettingsProvider> {
        &self.settings
    }

    /// A fresh pagination session bound to the same settings and logger.
    pub fn query_state(&self) -> QueryState {
        QueryState::new(self.settings.clone(), self.logger.clone())
    }

    fn build(credentials: &Credentials, logger: &ActivityLogger) -> Result<ApiFacade> {
        ApiFacade::builder()
            .from_credentials(credentials)
            .logger(logger.clone())
            .build()
    }
}
