use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::fetcher::RecordFetcher;
use crate::model::{ProductId, ProductRecord};
use crate::{targets, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOrigin {
    Mount,
    Scan,
}

impl fmt::Display for RequestOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestOrigin::Mount => f.write_str("mount"),
            RequestOrigin::Scan => f.write_str("scan"),
        }
    }
}

// The sequence number is for log correlation only; late results still apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub sequence: u64,
    pub origin: RequestOrigin,
    pub product_id: ProductId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
    pub detail: String,
}

impl From<&Error> for FetchFailure {
    fn from(error: &Error) -> Self {
        Self {
            message: error.to_string(),
            detail: error.technical_detail(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchSettled {
    pub ticket: FetchTicket,
    pub result: Result<ProductRecord, FetchFailure>,
}

pub async fn perform_fetch(fetcher: Arc<dyn RecordFetcher>, ticket: FetchTicket) -> FetchSettled {
    let result = fetcher
        .fetch(&ticket.product_id)
        .await
        .map_err(|error| {
            warn!(
                target: targets::FETCH,
                sequence = ticket.sequence,
                origin = %ticket.origin,
                detail = %error.technical_detail(),
                "Product fetch failed"
            );
            FetchFailure::from(&error)
        });

    FetchSettled { ticket, result }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Loaded(ProductRecord),
    // `stale` is held but never rendered.
    Failed {
        failure: FetchFailure,
        stale: Option<ProductRecord>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Render<'a> {
    Error { message: &'a str },
    Loading,
    Passport {
        record: &'a ProductRecord,
        scanning: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    phase: Phase,
    scanning: bool,
    next_sequence: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            scanning: false,
            next_sequence: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn record(&self) -> Option<&ProductRecord> {
        match &self.phase {
            Phase::Loading => None,
            Phase::Loaded(record) => Some(record),
            Phase::Failed { stale, .. } => stale.as_ref(),
        }
    }

    pub fn mount(&mut self, config: &DashboardConfig) -> FetchTicket {
        let ticket = self.issue(RequestOrigin::Mount, config.initial_product.clone());
        info!(
            target: targets::FETCH,
            sequence = ticket.sequence,
            product = %ticket.product_id,
            "Loading initial product"
        );
        ticket
    }

    pub fn begin_scan(&mut self, config: &DashboardConfig) -> FetchTicket {
        self.scanning = true;
        let ticket = self.issue(RequestOrigin::Scan, config.scan_product.clone());
        info!(
            target: targets::SCAN,
            sequence = ticket.sequence,
            product = %ticket.product_id,
            "Scanner active, simulated code read"
        );
        ticket
    }

    pub fn settle(&mut self, settled: FetchSettled) {
        let FetchSettled { ticket, result } = settled;

        if ticket.origin == RequestOrigin::Scan {
            self.scanning = false;
        }

        match result {
            Ok(record) => {
                info!(
                    target: targets::FETCH,
                    sequence = ticket.sequence,
                    origin = %ticket.origin,
                    product = %record.id,
                    "Product loaded"
                );
                self.phase = Phase::Loaded(record);
            }
            Err(failure) => {
                let stale = self.take_record();
                self.phase = Phase::Failed { failure, stale };
            }
        }
    }

    pub fn render(&self) -> Render<'_> {
        match &self.phase {
            Phase::Failed { failure, .. } => Render::Error {
                message: &failure.message,
            },
            Phase::Loading => Render::Loading,
            Phase::Loaded(record) => Render::Passport {
                record,
                scanning: self.scanning,
            },
        }
    }

    pub fn status_line(&self) -> String {
        let phase = match &self.phase {
            Phase::Loading => "loading".to_string(),
            Phase::Loaded(record) => format!("loaded {}", record.id),
            Phase::Failed { failure, stale } => {
                let stale = stale
                    .as_ref()
                    .map(|record| format!(" (holding {})", record.id))
                    .unwrap_or_default();
                format!("failed: {}{stale}", failure.detail)
            }
        };
        format!("{phase}; scanning={}", self.scanning)
    }

    fn issue(&mut self, origin: RequestOrigin, product_id: ProductId) -> FetchTicket {
        self.next_sequence = self.next_sequence.wrapping_add(1);
        FetchTicket {
            sequence: self.next_sequence,
            origin,
            product_id,
        }
    }

    fn take_record(&mut self) -> Option<ProductRecord> {
        match std::mem::replace(&mut self.phase, Phase::Loading) {
            Phase::Loading => None,
            Phase::Loaded(record) => Some(record),
            Phase::Failed { stale, .. } => stale,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use super::*;
    use crate::fetcher::MockRecordFetcher;
    use crate::model::{CarbonFootprint, Location, Material};

    fn run_future<T>(future: impl Future<Output = T>) -> T {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("tokio runtime");
        runtime.block_on(future)
    }

    fn sample_record(id: &str, name: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id),
            name: name.to_string(),
            manufacturer: "GreenTech Industries".to_string(),
            carbon_footprint: CarbonFootprint::Text("45.2 kg CO2e".to_string()),
            repair_score: 8.0,
            materials: vec![Material {
                name: "Recycled Aluminum".to_string(),
                percentage: 35.0,
            }],
            location: Location {
                current: "Berlin".to_string(),
                history: vec!["Shenzhen".to_string()],
            },
            recycling_instructions: "Return to retailer.".to_string(),
        }
    }

    fn status_error(id: &str) -> Error {
        Error::Status {
            url: format!("http://localhost:8080/products/{id}"),
            status: 500,
        }
    }

    fn setup() -> (Dashboard, DashboardConfig, MockRecordFetcher, Arc<dyn RecordFetcher>) {
        let mock = MockRecordFetcher::new();
        let fetcher: Arc<dyn RecordFetcher> = Arc::new(mock.clone());
        (Dashboard::new(), DashboardConfig::default(), mock, fetcher)
    }

    #[test]
    fn mount_fetches_initial_product_once() {
        let (mut dashboard, config, mock, fetcher) = setup();
        mock.push_record(sample_record("PRD123456", "EcoPhone X"));

        assert_eq!(dashboard.render(), Render::Loading);
        let ticket = dashboard.mount(&config);
        assert_eq!(ticket.origin, RequestOrigin::Mount);
        let settled = run_future(perform_fetch(fetcher, ticket));
        dashboard.settle(settled);

        assert_eq!(mock.requested_ids(), vec![ProductId::new("PRD123456")]);
        match dashboard.render() {
            Render::Passport { record, scanning } => {
                assert_eq!(record.name, "EcoPhone X");
                assert!(!scanning);
            }
            other => panic!("unexpected render: {other:?}"),
        }
    }

    #[test]
    fn mount_failure_shows_error_message() {
        let (mut dashboard, config, mock, fetcher) = setup();
        mock.push_error(status_error("PRD123456"));

        let ticket = dashboard.mount(&config);
        dashboard.settle(run_future(perform_fetch(fetcher, ticket)));

        assert_eq!(
            dashboard.render(),
            Render::Error {
                message: "Failed to fetch product"
            }
        );
        assert!(dashboard.record().is_none());
    }

    #[test]
    fn scan_sets_flag_until_settled() {
        let (mut dashboard, config, mock, fetcher) = setup();
        mock.push_record(sample_record("PRD123456", "EcoPhone X"));
        mock.push_record(sample_record("PRD789012", "SolarLamp"));

        let ticket = dashboard.mount(&config);
        dashboard.settle(run_future(perform_fetch(fetcher.clone(), ticket)));

        let ticket = dashboard.begin_scan(&config);
        assert!(dashboard.is_scanning());
        assert_eq!(ticket.product_id, ProductId::new("PRD789012"));
        assert!(matches!(
            dashboard.render(),
            Render::Passport { scanning: true, .. }
        ));

        dashboard.settle(run_future(perform_fetch(fetcher, ticket)));

        assert!(!dashboard.is_scanning());
        assert_eq!(
            mock.requested_ids(),
            vec![ProductId::new("PRD123456"), ProductId::new("PRD789012")]
        );
        assert_eq!(dashboard.record().map(|record| record.name.as_str()), Some("SolarLamp"));
    }

    #[test]
    fn failed_scan_clears_flag_and_hides_stale_record() {
        let (mut dashboard, config, mock, fetcher) = setup();
        mock.push_record(sample_record("PRD123456", "EcoPhone X"));
        mock.push_error(status_error("PRD789012"));

        let ticket = dashboard.mount(&config);
        dashboard.settle(run_future(perform_fetch(fetcher.clone(), ticket)));
        let ticket = dashboard.begin_scan(&config);
        dashboard.settle(run_future(perform_fetch(fetcher, ticket)));

        assert!(!dashboard.is_scanning());
        assert_eq!(
            dashboard.record().map(|record| record.id.as_str()),
            Some("PRD123456")
        );
        assert_eq!(
            dashboard.render(),
            Render::Error {
                message: "Failed to fetch product"
            }
        );
    }

    #[test]
    fn success_after_failure_clears_error() {
        let (mut dashboard, config, mock, fetcher) = setup();
        mock.push_error(status_error("PRD123456"));
        mock.push_record(sample_record("PRD789012", "SolarLamp"));

        let ticket = dashboard.mount(&config);
        dashboard.settle(run_future(perform_fetch(fetcher.clone(), ticket)));
        let ticket = dashboard.begin_scan(&config);
        dashboard.settle(run_future(perform_fetch(fetcher, ticket)));

        assert!(matches!(dashboard.phase(), Phase::Loaded(_)));
    }

    #[test]
    fn later_settlement_wins_regardless_of_issue_order() {
        let (mut dashboard, config, _mock, _fetcher) = setup();

        let mount = dashboard.mount(&config);
        let scan = dashboard.begin_scan(&config);
        assert!(scan.sequence > mount.sequence);

        dashboard.settle(FetchSettled {
            ticket: scan,
            result: Ok(sample_record("PRD789012", "SolarLamp")),
        });
        dashboard.settle(FetchSettled {
            ticket: mount,
            result: Ok(sample_record("PRD123456", "EcoPhone X")),
        });

        assert!(!dashboard.is_scanning());
        assert_eq!(
            dashboard.record().map(|record| record.name.as_str()),
            Some("EcoPhone X")
        );
    }

    #[test]
    fn scanning_while_loading_still_renders_loading() {
        let (mut dashboard, config, _mock, _fetcher) = setup();
        dashboard.mount(&config);
        dashboard.begin_scan(&config);

        assert_eq!(dashboard.render(), Render::Loading);
        assert!(dashboard.status_line().ends_with("scanning=true"));
    }
}
