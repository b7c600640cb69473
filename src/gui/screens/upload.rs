use std::fmt;

use iced::{
    Alignment::Center,
    Element, Length, Task, Theme, border,
    widget::{button, column, container, pick_list, row, text, text_input},
};

use crate::{
    core::{COURSES, Course, ResourceKind, UploadField, UploadForm},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{BOLD, MUTED, dialog},
    },
};

/// The upload form. Submitting only resets it; nothing is stored or sent.
#[derive(Debug, Clone)]
pub struct UploadPanel;

#[derive(Debug, Clone)]
pub enum UploadMessage {
    Field(UploadField),
    Cancel,
    Submit,
}

#[derive(Debug, Clone)]
pub enum UploadParentMessage {
    Submitted(UploadForm),
}

/// Course entry of the course selector, shown as "Name (CODE)".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseChoice {
    pub code: &'static str,
    pub name: &'static str,
}

impl From<&'static Course> for CourseChoice {
    fn from(course: &'static Course) -> Self {
        Self {
            code: course.code,
            name: course.name,
        }
    }
}

impl fmt::Display for CourseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KindChoice(ResourceKind);

impl fmt::Display for KindChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label())
    }
}

static KIND_CHOICES: [KindChoice; 3] = [
    KindChoice(ResourceKind::ALL[0]),
    KindChoice(ResourceKind::ALL[1]),
    KindChoice(ResourceKind::ALL[2]),
];

fn field_message(field: UploadField) -> ScreenMessage<UploadPanel> {
    ScreenMessage::ScreenMessage(UploadMessage::Field(field))
}

impl Screen for UploadPanel {
    type Message = UploadMessage;
    type ParentMessage = UploadParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let form = state.catalog.form();
        // Enter and the Upload button share the required-title gate.
        let submit_message = form
            .is_submittable()
            .then_some(ScreenMessage::ScreenMessage(UploadMessage::Submit));

        let title_bar = row![
            text("Upload Resource").size(20).font(BOLD).width(Length::Fill),
            button(text("\u{2715}").size(18))
                .style(button::text)
                .on_press(ScreenMessage::ScreenMessage(UploadMessage::Cancel)),
        ]
        .align_y(Center)
        .padding([16, 24]);

        let title_input = column![
            text("Resource Title").size(14),
            text_input("e.g., Cloud Architecture Basics", &form.title)
                .on_input(|title| field_message(UploadField::Title(title)))
                .on_submit_maybe(submit_message.clone())
                .padding(10),
        ]
        .spacing(8);

        let courses: Vec<CourseChoice> = COURSES.iter().map(CourseChoice::from).collect();
        let course_input = column![
            text("Course").size(14),
            pick_list(
                courses,
                form.selected_course().map(CourseChoice::from),
                |choice: CourseChoice| field_message(UploadField::Course(choice.code.to_string())),
            )
            .width(Length::Fill)
            .padding(10),
        ]
        .spacing(8);

        let kind_input = column![
            text("Resource Type").size(14),
            pick_list(&KIND_CHOICES[..], Some(KindChoice(form.kind)), |choice: KindChoice| {
                field_message(UploadField::Kind(choice.0))
            })
            .width(Length::Fill)
            .padding(10),
        ]
        .spacing(8);

        // Drop zone is decorative: no file is picked or transferred.
        let drop_zone = container(
            column![
                text("\u{2B06}").size(28).color(MUTED),
                text("Click to upload or drag and drop").size(14),
                text("PDF, DOC, or DOCX up to 50MB").size(12).color(MUTED),
            ]
            .spacing(4)
            .align_x(Center),
        )
        .center_x(Length::Fill)
        .padding(24)
        .style(|theme: &Theme| {
            container::Style::default().border(
                border::rounded(8)
                    .width(2)
                    .color(theme.extended_palette().background.strong.color),
            )
        });

        let actions = row![
            button(text("Cancel").width(Length::Fill).center())
                .width(Length::Fill)
                .padding(10)
                .style(button::secondary)
                .on_press(ScreenMessage::ScreenMessage(UploadMessage::Cancel)),
            button(text("Upload").width(Length::Fill).center())
                .width(Length::Fill)
                .padding(10)
                .style(button::success)
                .on_press_maybe(submit_message),
        ]
        .spacing(12);

        let hint = text(if form.is_submittable() {
            ""
        } else {
            "A title is required."
        })
        .size(12)
        .color(MUTED);

        dialog(
            column![
                title_bar,
                column![title_input, course_input, kind_input, drop_zone, actions, hint]
                    .spacing(16)
                    .padding(24),
            ],
            448.0,
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            UploadMessage::Field(field) => {
                state.catalog.update_upload_field(field);
                Task::none()
            }
            UploadMessage::Cancel => {
                state.catalog.cancel_upload();
                Task::none()
            }
            UploadMessage::Submit => Task::done(ScreenMessage::ParentMessage(submit(state))),
        }
    }
}

/// Resets the form and hands the entered values to the application.
fn submit(state: &mut AppState) -> UploadParentMessage {
    UploadParentMessage::Submitted(state.catalog.submit_upload())
}
