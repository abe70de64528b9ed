// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::tab_bar::{self, ViewContext as TabBarViewContext};
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{Column, Container, Space, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub tab_bar: &'a tab_bar::State,
}

/// Renders the window: a heading and the tab bar docked at the bottom.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Text::new(ctx.i18n.tr_or("window-title", "Animated Tabs"))
        .size(typography::TITLE_MD)
        .color(ctx.colors.inactive);

    let tab_bar = ctx
        .tab_bar
        .view(TabBarViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
        })
        .map(Message::TabBar);

    let column = Column::new()
        .padding(spacing::MD)
        .spacing(spacing::MD)
        .align_x(iced::alignment::Horizontal::Center)
        .push(heading)
        .push(Space::new().height(Length::Fill))
        .push(tab_bar);

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
