use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Color, Element, Length, Task, Theme,
    widget::{Column, button, column, container, row, text},
};

use crate::{
    core::{Icon, Resource},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{BOLD, MUTED, dialog, icon, labelled},
    },
};

/// Metadata of the selected resource.
#[derive(Debug, Clone)]
pub struct DetailPanel;

#[derive(Debug, Clone)]
pub enum DetailMessage {
    Close,
}

impl Screen for DetailPanel {
    type Message = DetailMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match state.catalog.selected_resource() {
            Some(resource) => dialog(details(resource), 672.0),
            None => Column::new().into(),
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            DetailMessage::Close => state.catalog.close_detail(),
        }
        Task::none()
    }
}

fn details<'a>(resource: &'static Resource) -> Element<'a, ScreenMessage<DetailPanel>> {
    let title_bar = row![
        text(resource.title).size(24).font(BOLD).width(Length::Fill),
        button(text("\u{2715}").size(18))
            .style(button::text)
            .on_press(ScreenMessage::ScreenMessage(DetailMessage::Close)),
    ]
    .align_y(Center)
    .padding([16, 24]);

    let kind = row![
        icon(Icon::for_kind(resource.kind), 24),
        column![
            text("Resource Type").size(14).color(MUTED),
            text(resource.kind.to_string()).size(18).font(BOLD),
        ],
    ]
    .spacing(16)
    .align_y(Center);

    let stats = row![
        labelled("Last Updated", resource.updated.to_string()),
        labelled("Used by Students", resource.users.to_string()),
    ]
    .spacing(16);

    let notice = container(
        text(
            "This resource is available for download. \
             Click the button below to view or download the file.",
        )
        .size(14),
    )
    .padding(16)
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let primary = theme.extended_palette().primary.weak;
        container::Style::default()
            .background(primary.color)
            .color(primary.text)
    });

    // No document is ever transferred, so the actions carry no message.
    let actions = row![
        button(text("\u{1F441} View Document").width(Length::Fill).center())
            .width(Length::Fill)
            .padding(12)
            .style(button::primary),
        button(text("\u{2B07} Download").width(Length::Fill).center())
            .width(Length::Fill)
            .padding(12)
            .style(button::success),
    ]
    .spacing(12);

    let preview = column![
        text("Document Preview").size(14).font(BOLD),
        container(
            column![
                text(Icon::FileText.glyph()).size(48).color(Color::from_rgb8(156, 163, 175)),
                text("Document preview will appear here").color(MUTED),
            ]
            .spacing(8)
            .align_x(Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(256.0))
        .style(container::rounded_box),
    ]
    .spacing(8);

    column![
        title_bar,
        column![kind, stats, notice, actions, preview]
            .spacing(24)
            .padding(24),
    ]
    .into()
}
