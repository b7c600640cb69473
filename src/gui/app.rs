use iced::{Element, Task, Theme};
use tracing::{debug, info};

use crate::{
    config::{AppConfig, ThemeChoice},
    core::CatalogState,
    gui::{
        AppState, Message,
        screens::{
            Screen, ScreenMessage, catalog::CatalogScreen, detail::DetailPanel,
            upload::{UploadPanel, UploadParentMessage},
        },
        widgets::modal,
    },
};

pub struct ResourceHubApp {
    state: AppState,
    catalog: CatalogScreen,
    detail: DetailPanel,
    upload: UploadPanel,
}

impl ResourceHubApp {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        info!(theme = %config.theme, "starting resource hub");
        (
            Self {
                state: AppState::new(config.theme),
                catalog: CatalogScreen,
                detail: DetailPanel,
                upload: UploadPanel,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        match self.state.catalog.selected_resource() {
            Some(resource) => format!("{} - Student Resources Hub", resource.title),
            None => "Student Resources Hub".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.state.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }

    pub fn catalog_state(&self) -> &CatalogState {
        &self.state.catalog
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Catalog(ScreenMessage::ScreenMessage(msg)) => self
                .catalog
                .update(msg, &mut self.state)
                .map(Message::Catalog),
            Message::Catalog(ScreenMessage::ParentMessage(never)) => match never {},
            Message::Detail(ScreenMessage::ScreenMessage(msg)) => self
                .detail
                .update(msg, &mut self.state)
                .map(Message::Detail),
            Message::Detail(ScreenMessage::ParentMessage(never)) => match never {},
            Message::Upload(ScreenMessage::ScreenMessage(msg)) => self
                .upload
                .update(msg, &mut self.state)
                .map(Message::Upload),
            Message::Upload(ScreenMessage::ParentMessage(parent_msg)) => match parent_msg {
                UploadParentMessage::Submitted(form) => {
                    // Nothing to persist; the catalog stays as it is.
                    debug!(?form, "discarding submitted upload");
                    Task::none()
                }
            },
        }
    }

    /// Catalog at the bottom, then the detail modal, then the upload modal.
    /// Both modals may be open together.
    pub fn view(&self) -> Element<'_, Message> {
        let mut content = self.catalog.view(&self.state).map(Message::Catalog);

        if self.state.catalog.is_detail_visible() {
            content = modal(content, self.detail.view(&self.state).map(Message::Detail));
        }
        if self.state.catalog.is_upload_visible() {
            content = modal(content, self.upload.view(&self.state).map(Message::Upload));
        }

        content
    }
}
