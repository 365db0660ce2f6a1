use std::fs;
use std::io;
use std::path::Path;

use ron::ser::{to_string_pretty, PrettyConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::ProductId;
use crate::{targets, Error, StorageAction};

pub const DEFAULT_CONFIG_PATH: &str = "dashboard.ron";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
pub const DEFAULT_INITIAL_PRODUCT: &str = "PRD123456";
pub const DEFAULT_SCAN_PRODUCT: &str = "PRD789012";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub endpoint: String,
    pub initial_product: ProductId,
    pub scan_product: ProductId,
    pub user_agent: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            initial_product: ProductId::new(DEFAULT_INITIAL_PRODUCT),
            scan_product: ProductId::new(DEFAULT_SCAN_PRODUCT),
            user_agent: default_user_agent(),
        }
    }
}

impl DashboardConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn validated_endpoint(&self) -> Result<String, Error> {
        let trimmed = self.endpoint.trim().trim_end_matches('/');
        let url = reqwest::Url::parse(trimmed).map_err(|error| Error::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            details: error.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                details: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(trimmed.to_string())
    }

    pub fn to_ron_pretty(&self) -> Result<String, Error> {
        to_string_pretty(self, PrettyConfig::default()).map_err(|source| Error::Ron {
            action: StorageAction::Save,
            path: None,
            source,
        })
    }
}

fn default_user_agent() -> String {
    format!("dpp-dashboard/{}", env!("CARGO_PKG_VERSION"))
}

pub fn load_config(path: &Path) -> Result<DashboardConfig, Error> {
    let path_label = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            info!(
                target: targets::CONFIG,
                path = %path_label,
                "Config file not found, using defaults"
            );
            return Ok(DashboardConfig::default());
        }
        Err(source) => {
            return Err(Error::StorageIo {
                action: StorageAction::Load,
                path: Some(path_label),
                source,
            });
        }
    };

    let config: DashboardConfig = ron::from_str(&contents).map_err(|error| Error::Ron {
        action: StorageAction::Load,
        path: Some(path_label.clone()),
        source: error.code,
    })?;

    debug!(
        target: targets::CONFIG,
        path = %path_label,
        endpoint = %config.endpoint,
        "Config loaded"
    );
    Ok(config)
}

pub fn save_config(path: &Path, config: &DashboardConfig) -> Result<(), Error> {
    let path_label = path.display().to_string();
    let contents = config.to_ron_pretty().map_err(|error| match error {
        Error::Ron { action, source, .. } => Error::Ron {
            action,
            path: Some(path_label.clone()),
            source,
        },
        other => other,
    })?;

    fs::write(path, contents).map_err(|source| Error::StorageIo {
        action: StorageAction::Save,
        path: Some(path_label.clone()),
        source,
    })?;

    info!(target: targets::CONFIG, path = %path_label, "Config saved");
    Ok(())
}
