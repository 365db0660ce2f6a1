use iced::{Background, Border, Color, Theme};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ScannerNoticeStyle;

impl iced::widget::container::StyleSheet for ScannerNoticeStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> iced::widget::container::Appearance {
        iced::widget::container::Appearance {
            text_color: Some(Color::from_rgb8(0x1e, 0x3a, 0x8a)),
            background: Some(Background::Color(Color::from_rgb8(0xef, 0xf6, 0xff))),
            border: Border {
                color: Color::from_rgb8(0xbf, 0xdb, 0xfe),
                width: 1.0,
                radius: 8.0.into(),
            },
            ..iced::widget::container::Appearance::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ErrorPanelStyle;

impl iced::widget::container::StyleSheet for ErrorPanelStyle {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> iced::widget::container::Appearance {
        let palette = style.extended_palette();
        iced::widget::container::Appearance {
            text_color: Some(palette.danger.base.color),
            background: Some(Background::Color(palette.background.base.color)),
            border: Border {
                color: palette.danger.base.color,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..iced::widget::container::Appearance::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CardStyle;

impl iced::widget::container::StyleSheet for CardStyle {
    type Style = Theme;

    fn appearance(&self, style: &Self::Style) -> iced::widget::container::Appearance {
        let palette = style.extended_palette();
        iced::widget::container::Appearance {
            background: Some(Background::Color(palette.background.base.color)),
            border: Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..iced::widget::container::Appearance::default()
        }
    }
}
