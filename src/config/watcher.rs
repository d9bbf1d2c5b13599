//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::allowlist::composite::AllowlistHandle;
use crate::config::loader::load_config;
use crate::config::schema::GatewayConfig;
use crate::config::validation::validate_allowlist;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<GatewayConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for validated configuration
    /// updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<GatewayConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        match load_config(&path) {
                            Ok(new_config) => {
                                let _ = tx.send(new_config);
                            }
                            Err(e) => {
                                tracing::error!(
                                    "Failed to reload config: {}. Keeping current allowlist.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

/// Drive allowlist reloads from validated configuration updates.
///
/// Each update is recompiled and published through the handle as one
/// atomic swap; updates arriving here already passed validation, so a
/// non-empty diagnostic set indicates a race with the loader and the
/// current allowlist is kept.
pub async fn apply_updates(
    handle: AllowlistHandle,
    mut updates: mpsc::UnboundedReceiver<GatewayConfig>,
) {
    while let Some(config) = updates.recv().await {
        let (allowlist, diagnostics) = validate_allowlist(&config.allowlist);
        if diagnostics.is_empty() {
            handle.store(allowlist);
            tracing::info!("Allowlist reloaded");
        } else {
            tracing::error!(
                diagnostics = diagnostics.len(),
                "Rebuilt allowlist had diagnostics, keeping current allowlist"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allowlist::composite::CompositeAllowlist;
    use crate::http::request::TrustRequest;

    #[tokio::test]
    async fn test_apply_updates_publishes_new_allowlist() {
        let handle = AllowlistHandle::new(CompositeAllowlist::default());
        let (tx, rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(apply_updates(handle.clone(), rx));

        let mut config = GatewayConfig::default();
        config.allowlist.skip_auth_preflight = true;
        tx.send(config).expect("send update");
        drop(tx);
        task.await.expect("apply task");

        assert!(handle.is_trusted(&TrustRequest::new("OPTIONS", "/any", "")));
        assert!(!handle.is_trusted(&TrustRequest::new("GET", "/any", "")));
    }
}
