use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch product")]
    Status { url: String, status: u16 },
    #[error("{details}")]
    Transport { url: String, details: String },
    #[error("{details}")]
    Decode { url: String, details: String },
    #[error("HTTP client setup failed")]
    ClientBuild { details: String },
    #[error("Invalid endpoint {endpoint}")]
    InvalidEndpoint { endpoint: String, details: String },
    #[error("RON {action} error")]
    Ron {
        action: StorageAction,
        path: Option<String>,
        #[source]
        source: ron::Error,
    },
    #[error("Storage {action} error")]
    StorageIo {
        action: StorageAction,
        path: Option<String>,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    Load,
    Save,
}

impl fmt::Display for StorageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageAction::Load => f.write_str("load"),
            StorageAction::Save => f.write_str("save"),
        }
    }
}

impl Error {
    pub fn user_summary(&self) -> String {
        match self {
            Error::Status { .. } => "Failed to fetch product.".to_string(),
            Error::Transport { .. } => "Passport service unreachable.".to_string(),
            Error::Decode { .. } => "Passport payload could not be read.".to_string(),
            Error::ClientBuild { .. } => "HTTP client could not be created.".to_string(),
            Error::InvalidEndpoint { endpoint, .. } => {
                format!("Invalid passport endpoint: {endpoint}.")
            }
            Error::Ron { action, .. } => format!("Failed to {action} dashboard configuration."),
            Error::StorageIo { action, .. } => {
                format!("Failed to {action} dashboard configuration file.")
            }
        }
    }

    pub fn technical_detail(&self) -> String {
        match self {
            Error::Status { url, status } => format!("GET {url} returned HTTP {status}."),
            Error::Transport { url, details } => format!("GET {url} failed: {details}"),
            Error::Decode { url, details } => {
                format!("GET {url} returned an unreadable body: {details}")
            }
            Error::ClientBuild { details } => format!("reqwest client build failed: {details}"),
            Error::InvalidEndpoint { endpoint, details } => {
                format!("Endpoint {endpoint} rejected: {details}")
            }
            Error::Ron {
                action,
                path,
                source,
            } => {
                let path = path
                    .as_ref()
                    .map(|value| format!(" path={value}."))
                    .unwrap_or_default();
                format!("RON {action} error.{path} {source}")
            }
            Error::StorageIo {
                action,
                path,
                source,
            } => {
                let path = path
                    .as_ref()
                    .map(|value| format!(" path={value}."))
                    .unwrap_or_default();
                format!("Storage {action} error.{path} {source}")
            }
        }
    }
}
