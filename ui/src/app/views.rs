use iced::alignment::Horizontal;
use iced::theme;
use iced::widget::{button, checkbox, column, container, pick_list, row, scrollable, text, Space};
use iced::{Alignment, Color, Element, Length};

use dpp_core::layout::{
    ERROR_HEADING, LOADING_TEXT, PASSPORT_TITLE, SCANNER_NOTICE_BODY, SCANNER_NOTICE_TITLE,
    SCAN_ACTION_LABEL,
};
use dpp_core::{PassportLayout, Render};

use super::helpers::{
    level_color, BODY_COLOR, HEADING_COLOR, LABEL_COLOR, MATERIALS_COLOR, REPAIR_COLOR,
    SUSTAINABILITY_COLOR,
};
use super::styles::{CardStyle, ErrorPanelStyle, ScannerNoticeStyle};
use super::{Message, PassportApp, Tab};
use crate::logging::LogLevel;

impl PassportApp {
    pub(super) fn tab_bar(&self) -> Element<'_, Message> {
        row![
            self.tab_button(Tab::Passport, "Passport"),
            self.tab_button(Tab::Debug, "Debug")
        ]
        .spacing(8)
        .align_items(Alignment::Center)
        .into()
    }

    fn tab_button(&self, tab: Tab, label: &str) -> Element<'_, Message> {
        let style = if self.active_tab == tab {
            theme::Button::Primary
        } else {
            theme::Button::Secondary
        };

        button(text(label))
            .style(style)
            .on_press(Message::SelectTab(tab))
            .into()
    }

    pub(super) fn passport_tab_view(&self) -> Element<'_, Message> {
        match self.dashboard.render() {
            Render::Error { message } => self.error_view(message),
            Render::Loading => container(text(LOADING_TEXT).size(16))
                .width(Length::Fill)
                .padding(24)
                .center_x()
                .into(),
            Render::Passport { record, scanning } => {
                self.passport_view(PassportLayout::from_record(record), scanning)
            }
        }
    }

    fn error_view(&self, message: &str) -> Element<'_, Message> {
        let panel = column![
            text(ERROR_HEADING).size(18),
            text(message.to_string()).size(14),
        ]
        .spacing(6);

        container(panel)
            .padding(16)
            .width(Length::Fill)
            .style(theme::Container::Custom(Box::new(ErrorPanelStyle)))
            .into()
    }

    fn passport_view(&self, layout: PassportLayout, scanning: bool) -> Element<'_, Message> {
        let header = row![
            text(PASSPORT_TITLE)
                .size(24)
                .style(theme::Text::Color(HEADING_COLOR)),
            Space::with_width(Length::Fill),
            button("Copy passport")
                .style(theme::Button::Secondary)
                .on_press(Message::CopyPassport),
            button(text(SCAN_ACTION_LABEL))
                .style(theme::Button::Primary)
                .on_press(Message::ScanProduct),
        ]
        .spacing(8)
        .align_items(Alignment::Center);

        let mut content = column![header].spacing(16);

        if scanning {
            content = content.push(scanner_notice());
        }

        let mut identity = row![].spacing(24);
        for field in &layout.identity {
            identity = identity.push(labeled_value(field.label, field.value.clone()));
        }

        let sustainability = column![
            text(layout.carbon_footprint.clone())
                .size(22)
                .style(theme::Text::Color(SUSTAINABILITY_COLOR)),
            caption("Carbon Footprint"),
        ]
        .spacing(4);

        let mut materials = column![].spacing(6);
        for line in &layout.materials {
            materials = materials.push(
                row![
                    text(line.name.clone()).size(14),
                    Space::with_width(Length::Fill),
                    text(line.share.clone()).size(14),
                ]
                .align_items(Alignment::Center),
            );
        }

        let repairability = column![
            text(layout.repair_score.clone())
                .size(22)
                .style(theme::Text::Color(REPAIR_COLOR)),
            caption("Repair Score"),
        ]
        .spacing(4);

        let metrics = row![
            card("Sustainability", SUSTAINABILITY_COLOR, sustainability.into()),
            card("Materials", MATERIALS_COLOR, materials.into()),
            card("Repairability", REPAIR_COLOR, repairability.into()),
        ]
        .spacing(16);

        let mut history = column![].spacing(8).padding([0, 0, 0, 16]);
        for stop in &layout.history {
            history = history.push(caption(format!("• {stop}")));
        }

        let journey = column![
            text("Current Location").size(14),
            caption(layout.current_location.clone()),
            history,
        ]
        .spacing(8);

        let end_of_life = text(layout.recycling_instructions.clone())
            .size(14)
            .style(theme::Text::Color(BODY_COLOR));

        content = content
            .push(card(
                &layout.product_name,
                HEADING_COLOR,
                identity.into(),
            ))
            .push(metrics)
            .push(card("Product Journey", HEADING_COLOR, journey.into()))
            .push(card(
                "End-of-Life Instructions",
                HEADING_COLOR,
                end_of_life.into(),
            ));

        scrollable(content)
            .height(Length::Fill)
            .width(Length::Fill)
            .into()
    }

    pub(super) fn debug_tab_view(&self) -> Element<'_, Message> {
        let level_picker = pick_list(
            &LogLevel::ALL[..],
            Some(self.log_level),
            Message::LogLevelChanged,
        )
        .placeholder("Log level");

        let console_header = row![
            text("Console")
                .size(20)
                .style(theme::Text::Color(HEADING_COLOR)),
            level_picker
        ]
        .spacing(12)
        .align_items(Alignment::Center);

        let console = column![
            console_header,
            self.target_filters_view(),
            self.log_lines_view()
        ]
        .spacing(12)
        .width(Length::FillPortion(2));

        row![console, self.debug_panel_view()]
            .spacing(16)
            .align_items(Alignment::Start)
            .into()
    }

    fn target_filters_view(&self) -> Element<'_, Message> {
        let mut filter_column = column![text("Targets")
            .size(14)
            .style(theme::Text::Color(Color::from_rgb8(0x3a, 0x4a, 0x5a)))]
        .spacing(6);

        for target in self.sorted_targets() {
            let enabled = self.enabled_targets.contains(&target);
            filter_column = filter_column.push(
                checkbox(target.clone(), enabled)
                    .on_toggle(move |value| Message::ToggleTarget(target.clone(), value)),
            );
        }

        container(filter_column)
            .padding(8)
            .style(theme::Container::Box)
            .into()
    }

    fn log_lines_view(&self) -> Element<'_, Message> {
        let mut lines = column![].spacing(4);

        for entry in self.visible_entries() {
            let line = text(entry.format_line())
                .size(13)
                .horizontal_alignment(Horizontal::Left)
                .style(theme::Text::Color(level_color(entry.level)));
            lines = lines.push(line);
        }

        scrollable(lines)
            .height(Length::Fill)
            .width(Length::Fill)
            .into()
    }

    fn debug_panel_view(&self) -> Element<'_, Message> {
        let copy_status = self.copy_status.as_deref().unwrap_or("Ready");
        let panel = column![
            text("Debug panel")
                .size(20)
                .style(theme::Text::Color(HEADING_COLOR)),
            caption(format!("Endpoint: {}", self.config.endpoint)),
            caption(format!("Initial product: {}", self.config.initial_product)),
            caption(format!("Scan product: {}", self.config.scan_product)),
            caption(format!("State: {}", self.dashboard.status_line())),
            button("Copy diagnostics").on_press(Message::CopyDiagnostics),
            text(format!("Clipboard: {copy_status}"))
                .size(12)
                .style(theme::Text::Color(LABEL_COLOR)),
        ]
        .spacing(10);

        container(panel)
            .padding(12)
            .width(Length::FillPortion(1))
            .style(theme::Container::Box)
            .into()
    }
}

fn scanner_notice<'a>() -> Element<'a, Message> {
    container(
        column![
            text(SCANNER_NOTICE_TITLE).size(16),
            text(SCANNER_NOTICE_BODY).size(13),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(theme::Container::Custom(Box::new(ScannerNoticeStyle)))
    .into()
}

fn card<'a>(title: &str, accent: Color, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![
            text(title.to_string())
                .size(18)
                .style(theme::Text::Color(accent)),
            body
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::Container::Custom(Box::new(CardStyle)))
    .into()
}

fn labeled_value<'a>(label: &str, value: String) -> Element<'a, Message> {
    column![caption(label.to_string()), text(value).size(15)]
        .spacing(2)
        .width(Length::FillPortion(1))
        .into()
}

fn caption<'a>(value: impl ToString) -> iced::widget::Text<'a> {
    text(value).size(13).style(theme::Text::Color(LABEL_COLOR))
}
