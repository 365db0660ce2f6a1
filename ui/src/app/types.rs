use std::sync::Arc;

use dpp_core::{DashboardConfig, FetchSettled, RecordFetcher};

use crate::logging::{LogLevel, LogStore, ReloadHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Passport,
    Debug,
}

#[derive(Debug, Clone)]
pub enum Message {
    LogTick,
    LogLevelChanged(LogLevel),
    ToggleTarget(String, bool),
    CopyDiagnostics,
    CopyPassport,
    SelectTab(Tab),
    ScanProduct,
    RecordFetched(FetchSettled),
}

pub struct Flags {
    pub log_store: LogStore,
    pub reload_handle: ReloadHandle,
    pub log_level: LogLevel,
    pub config: DashboardConfig,
    pub fetcher: Arc<dyn RecordFetcher>,
}
