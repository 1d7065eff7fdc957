//! Module wiring: store selection, router assembly and the serve loop

use crate::api::rest::build_router;
use crate::config::{Config, StoreKind};
use crate::domain::{ContactStore, Service};
use crate::infra::storage::{InMemoryContactStore, RestContactStore};
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Contacts service module
pub struct ContactsServiceModule {
    config: Config,
    service: Arc<Service>,
}

impl ContactsServiceModule {
    /// Build the store client named by the configuration and the domain service on top of it
    pub fn init(config: Config) -> Result<Self> {
        let store = build_store(&config)?;
        tracing::info!(store = ?config.store.kind, table = %config.store.table, "contacts service initialized");
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn ContactStore>) -> Self {
        Self {
            config,
            service: Arc::new(Service::new(store)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn router(&self) -> Router {
        build_router(self.service.clone())
    }

    /// Bind the configured address and serve until `cancel` fires
    pub async fn serve(self, cancel: CancellationToken) -> Result<()> {
        let addr = SocketAddr::new(self.config.bind_addr, self.config.port);
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("could not bind {}", addr))?;

        self.serve_on(listener, cancel).await
    }

    /// Serve on an already bound listener until `cancel` fires
    pub async fn serve_on(self, listener: TcpListener, cancel: CancellationToken) -> Result<()> {
        let addr = listener.local_addr().context("listener has no local address")?;
        tracing::info!("Server is running on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(cancel.cancelled_owned())
            .await
            .context("error serving contacts api")?;

        tracing::info!("contacts service stopped");
        Ok(())
    }
}

fn build_store(config: &Config) -> Result<Arc<dyn ContactStore>> {
    let store: Arc<dyn ContactStore> = match config.store.kind {
        StoreKind::Rest => {
            let (url, api_key) = config.store.rest_target()?;
            let store =
                RestContactStore::new(&url, &config.store.table, api_key, config.store.timeout)?;
            tracing::info!(endpoint = %store.endpoint(), "using hosted contacts store");
            Arc::new(store)
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory contacts store; data is lost on restart");
            Arc::new(InMemoryContactStore::new())
        }
    };
    Ok(store)
}
