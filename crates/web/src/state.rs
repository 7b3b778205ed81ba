//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::db::{ProductRepository, StaticProductRepository};
use crate::services::auth::{CredentialVerifier, StaticCredentials};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    products: Arc<dyn ProductRepository>,
    credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Create the application state with the stock catalog and the configured
    /// login account.
    #[must_use]
    pub fn new(config: WebConfig) -> Self {
        let credentials = Arc::new(StaticCredentials::from_config(&config.login));
        Self::with_parts(config, Arc::new(StaticProductRepository::seeded()), credentials)
    }

    /// Create the application state from explicit collaborators.
    ///
    /// # Arguments
    ///
    /// * `config` - Web configuration
    /// * `products` - Source of the catalog's products
    /// * `credentials` - Verifier used by `POST /login`
    #[must_use]
    pub fn with_parts(
        config: WebConfig,
        products: Arc<dyn ProductRepository>,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                credentials,
            }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get the product repository.
    #[must_use]
    pub fn products(&self) -> &dyn ProductRepository {
        self.inner.products.as_ref()
    }

    /// Get the login credential verifier.
    #[must_use]
    pub fn credentials(&self) -> &dyn CredentialVerifier {
        self.inner.credentials.as_ref()
    }
}
