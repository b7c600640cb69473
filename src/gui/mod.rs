mod app;
mod message;
mod state;
mod screens;
mod widgets;

pub use app::ResourceHubApp;
pub use message::Message;
pub use screens::{
    Screen, ScreenMessage,
    catalog::{CatalogMessage, CatalogScreen},
    detail::{DetailMessage, DetailPanel},
    upload::{CourseChoice, UploadMessage, UploadPanel, UploadParentMessage},
};
pub use state::AppState;

use crate::config::AppConfig;

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    iced::application(
        move || ResourceHubApp::new(config.clone()),
        ResourceHubApp::update,
        ResourceHubApp::view,
    )
    .title(ResourceHubApp::title)
    .theme(ResourceHubApp::theme)
    .window_size(iced::Size::new(1200.0, 900.0))
    .run()?;
    Ok(())
}
