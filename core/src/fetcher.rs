use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::model::{ProductId, ProductRecord};
use crate::{targets, Error};

pub type RecordFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ProductRecord, Error>> + Send + 'a>>;

pub trait RecordFetcher: Send + Sync {
    fn fetch<'a>(&'a self, id: &'a ProductId) -> RecordFuture<'a>;
}

// No retries and no request timeout: a stalled server keeps the future pending.
#[derive(Debug, Clone)]
pub struct HttpRecordFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRecordFetcher {
    pub fn new(config: &DashboardConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|error| Error::ClientBuild {
                details: error.to_string(),
            })?;

        Self::with_client(client, config)
    }

    pub fn with_client(client: reqwest::Client, config: &DashboardConfig) -> Result<Self, Error> {
        let endpoint = config.validated_endpoint()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn product_url(&self, id: &ProductId) -> String {
        format!(
            "{}/products/{}",
            self.endpoint,
            urlencoding::encode(id.as_str())
        )
    }

    pub async fn fetch_record(&self, id: &ProductId) -> Result<ProductRecord, Error> {
        let url = self.product_url(id);
        debug!(target: targets::FETCH, url = %url, "Requesting product record");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|error| Error::Transport {
                url: url.clone(),
                details: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                target: targets::FETCH,
                url = %url,
                status = status.as_u16(),
                "Passport service returned failure status"
            );
            return Err(Error::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|error| Error::Transport {
            url: url.clone(),
            details: error.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|error| Error::Decode {
            url,
            details: error.to_string(),
        })
    }
}

impl RecordFetcher for HttpRecordFetcher {
    fn fetch<'a>(&'a self, id: &'a ProductId) -> RecordFuture<'a> {
        Box::pin(self.fetch_record(id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockRecordFetcher {
    queue: Arc<Mutex<VecDeque<Result<ProductRecord, Error>>>>,
    requested: Arc<Mutex<Vec<ProductId>>>,
}

impl MockRecordFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_record(&self, record: ProductRecord) {
        self.push_result(Ok(record));
    }

    pub fn push_error(&self, error: Error) {
        self.push_result(Err(error));
    }

    pub fn requested_ids(&self) -> Vec<ProductId> {
        if let Ok(requested) = self.requested.lock() {
            return requested.clone();
        }
        Vec::new()
    }

    fn push_result(&self, result: Result<ProductRecord, Error>) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(result);
        }
    }

    fn pop_result(&self) -> Option<Result<ProductRecord, Error>> {
        if let Ok(mut queue) = self.queue.lock() {
            return queue.pop_front();
        }
        None
    }
}

impl RecordFetcher for MockRecordFetcher {
    fn fetch<'a>(&'a self, id: &'a ProductId) -> RecordFuture<'a> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(id.clone());
        }

        Box::pin(async move {
            if let Some(result) = self.pop_result() {
                return result;
            }

            Err(Error::Transport {
                url: format!("mock://products/{id}"),
                details: "MockRecordFetcher queue is empty".to_string(),
            })
        })
    }
}
