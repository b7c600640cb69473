use crate::{config::ThemeChoice, core::CatalogState};

#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub theme: ThemeChoice,
}

impl AppState {
    pub fn new(theme: ThemeChoice) -> Self {
        Self {
            catalog: CatalogState::new(),
            theme,
        }
    }
}
