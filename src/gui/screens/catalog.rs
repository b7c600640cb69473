use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    mouse::Interaction,
    widget::{Column, Row, button, column, container, mouse_area, row, scrollable, text},
};

use crate::{
    core::{COURSES, ColorClasses, Course, Icon, Resource, ResourceId},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{BOLD, MUTED, badge, card_style, icon, pill},
    },
};

const CARDS_PER_ROW: usize = 3;

/// Header, course sections and footer; the base layer under both modals.
#[derive(Debug, Clone)]
pub struct CatalogScreen;

#[derive(Debug, Clone)]
pub enum CatalogMessage {
    ResourcePressed(ResourceId),
    UploadPressed,
}

impl Screen for CatalogScreen {
    type Message = CatalogMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let header = row![
            column![
                text("Student Resources Hub").size(26).font(BOLD),
                text("École Supérieure d'Informatique").size(14).color(MUTED),
            ]
            .width(Length::Fill),
            button(text("Upload Resource").font(BOLD))
                .padding([12, 24])
                .style(button::success)
                .on_press(ScreenMessage::ScreenMessage(CatalogMessage::UploadPressed)),
        ]
        .align_y(Center)
        .padding([24, 32]);

        let intro = column![
            text("Course Resources").size(30).font(BOLD),
            text("Access lecture notes, slides, and past exams shared by students and faculty")
                .color(MUTED),
        ]
        .spacing(8);

        let sections = Column::with_children(COURSES.iter().map(course_section)).spacing(48);

        let footer = container(text("Cloud-based prototype for Senegalese students").color(MUTED))
            .center_x(Length::Fill)
            .padding(32);

        let body = column![intro, sections, footer].spacing(48).padding([48, 32]);

        column![header, scrollable(body).height(Length::Fill)].into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            CatalogMessage::ResourcePressed(id) => {
                state.catalog.select_resource(id);
            }
            CatalogMessage::UploadPressed => state.catalog.open_upload(),
        }
        Task::none()
    }
}

fn course_section<'a>(course: &'static Course) -> Element<'a, ScreenMessage<CatalogScreen>> {
    let title = row![
        badge(course.code, ColorClasses::for_tag(course.color_tag)),
        text(course.name).size(24).font(BOLD),
    ]
    .spacing(16)
    .align_y(Center);

    let grid = Column::with_children(course.resources.chunks(CARDS_PER_ROW).map(|chunk| {
        Row::with_children(chunk.iter().map(resource_card))
            .spacing(24)
            .into()
    }))
    .spacing(24);

    column![title, grid].spacing(24).into()
}

fn resource_card<'a>(resource: &'static Resource) -> Element<'a, ScreenMessage<CatalogScreen>> {
    let top = row![
        container(icon(Icon::for_kind(resource.kind), 20)).width(Length::Fill),
        pill(resource.kind.to_string()),
    ]
    .align_y(Center);

    let meta = row![
        text(format!("\u{1F552} {}", resource.updated))
            .size(14)
            .color(MUTED)
            .width(Length::Fill),
        text(format!("\u{1F465} {} students", resource.users))
            .size(14)
            .color(MUTED),
    ];

    let card = container(
        column![top, text(resource.title).size(18).font(BOLD), meta].spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(card_style);

    mouse_area(card)
        .on_press(ScreenMessage::ScreenMessage(CatalogMessage::ResourcePressed(
            resource.id,
        )))
        .interaction(Interaction::Pointer)
        .into()
}
