mod helpers;
mod styles;
mod types;
mod views;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use iced::widget::{column, container, row, text};
use iced::{theme, Alignment, Application, Command, Element, Length, Subscription, Theme};

use dpp_core::layout::PASSPORT_TITLE;
use dpp_core::{
    perform_fetch, render_text, targets, Dashboard, DashboardConfig, FetchTicket, PassportLayout,
    RecordFetcher, Render,
};

use crate::logging::{apply_log_level, LogEntry, LogLevel, LogStore, ReloadHandle};
use helpers::{copy_to_clipboard, HEADING_COLOR, LABEL_COLOR};

pub use types::{Flags, Message, Tab};

pub struct PassportApp {
    log_store: LogStore,
    reload_handle: ReloadHandle,
    log_entries: Vec<LogEntry>,
    log_level: LogLevel,
    known_targets: HashSet<String>,
    enabled_targets: HashSet<String>,
    copy_status: Option<String>,
    active_tab: Tab,
    config: DashboardConfig,
    fetcher: Arc<dyn RecordFetcher>,
    dashboard: Dashboard,
}

impl Application for PassportApp {
    type Executor = crate::executor::DashboardExecutor;
    type Message = Message;
    type Theme = Theme;
    type Flags = Flags;

    fn new(flags: Flags) -> (Self, Command<Message>) {
        let known_targets: HashSet<String> =
            targets::ALL.iter().map(|value| value.to_string()).collect();
        let enabled_targets = known_targets.clone();

        let mut app = Self {
            log_store: flags.log_store,
            reload_handle: flags.reload_handle,
            log_entries: Vec::new(),
            log_level: flags.log_level,
            known_targets,
            enabled_targets,
            copy_status: None,
            active_tab: Tab::Passport,
            config: flags.config,
            fetcher: flags.fetcher,
            dashboard: Dashboard::new(),
        };

        let ticket = app.dashboard.mount(&app.config);
        let command = app.fetch(ticket);
        (app, command)
    }

    fn title(&self) -> String {
        match self.dashboard.render() {
            Render::Passport { record, .. } => format!("{} - {PASSPORT_TITLE}", record.name),
            _ => PASSPORT_TITLE.to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::LogTick => {
                self.refresh_logs();
                Command::none()
            }
            Message::LogLevelChanged(level) => {
                self.log_level = level;
                apply_log_level(&self.reload_handle, level);
                tracing::info!(target: targets::UI, "Log level set to {}", level);
                Command::none()
            }
            Message::ToggleTarget(target, enabled) => {
                if enabled {
                    self.enabled_targets.insert(target);
                } else {
                    self.enabled_targets.remove(&target);
                }
                Command::none()
            }
            Message::CopyDiagnostics => {
                self.copy_status = Some(copy_to_clipboard("Diagnostics", self.diagnostics_text()));
                Command::none()
            }
            Message::CopyPassport => {
                if let Some(record) = self.dashboard.record() {
                    let text = PassportLayout::from_record(record).to_string();
                    self.copy_status = Some(copy_to_clipboard("Passport", text));
                }
                Command::none()
            }
            Message::SelectTab(tab) => {
                self.active_tab = tab;
                Command::none()
            }
            Message::ScanProduct => {
                let ticket = self.dashboard.begin_scan(&self.config);
                self.fetch(ticket)
            }
            Message::RecordFetched(settled) => {
                self.dashboard.settle(settled);
                Command::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(Duration::from_millis(250)).map(|_| Message::LogTick)
    }

    fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("DPP Dashboard")
                .size(28)
                .style(theme::Text::Color(HEADING_COLOR)),
            text(self.config.endpoint.as_str())
                .size(14)
                .style(theme::Text::Color(LABEL_COLOR)),
        ]
        .spacing(12)
        .align_items(Alignment::Center);

        let tabs = self.tab_bar();

        let body = match self.active_tab {
            Tab::Passport => self.passport_tab_view(),
            Tab::Debug => self.debug_tab_view(),
        };

        let content = column![header, tabs, body].spacing(20).padding(16);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl PassportApp {
    fn fetch(&self, ticket: FetchTicket) -> Command<Message> {
        Command::perform(
            perform_fetch(Arc::clone(&self.fetcher), ticket),
            Message::RecordFetched,
        )
    }

    fn refresh_logs(&mut self) {
        let entries = self.log_store.snapshot();
        for entry in &entries {
            if self.known_targets.insert(entry.target.clone()) {
                self.enabled_targets.insert(entry.target.clone());
            }
        }
        self.log_entries = entries;
    }

    fn sorted_targets(&self) -> Vec<String> {
        let mut targets: Vec<String> = self.known_targets.iter().cloned().collect();
        targets.sort();
        targets
    }

    fn visible_entries(&self) -> Vec<&LogEntry> {
        self.log_entries
            .iter()
            .filter(|entry| self.enabled_targets.contains(&entry.target))
            .collect()
    }

    fn diagnostics_text(&self) -> String {
        let mut output = String::new();
        output.push_str("DPP dashboard diagnostics\n");
        output.push_str(&format!("Log level: {}\n", self.log_level));
        output.push_str(&format!("Dashboard: {}\n", self.dashboard.status_line()));
        output.push_str(&format!(
            "Targets enabled: {}\n",
            self.sorted_targets()
                .into_iter()
                .filter(|target| self.enabled_targets.contains(target))
                .collect::<Vec<String>>()
                .join(", ")
        ));
        output.push_str("Config:\n");
        match self.config.to_ron_pretty() {
            Ok(ron) => output.push_str(&ron),
            Err(error) => output.push_str(&error.technical_detail()),
        }
        output.push_str("\nCurrent view:\n");
        output.push_str(&render_text(self.dashboard.render()));
        output.push_str("\nRecent logs:\n");

        let entries = self.visible_entries();
        let start = entries.len().saturating_sub(50);
        for entry in entries.into_iter().skip(start) {
            output.push_str(&entry.format_line());
            output.push('\n');
        }

        output
    }
}
