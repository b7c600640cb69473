use reshub::{CatalogState, ResourceKind, UploadField, UploadForm};

/// A state with the upload modal open and every field changed from its default.
pub fn state_with_filled_form() -> CatalogState {
    let mut state = CatalogState::new();
    state.open_upload();
    state.update_upload_field(UploadField::Title("Kubernetes Cheat Sheet".into()));
    state.update_upload_field(UploadField::Course("CS201".into()));
    state.update_upload_field(UploadField::Kind(ResourceKind::Notes));
    state
}

/// The form `CatalogState` starts with and returns to after a submit.
pub fn default_form() -> UploadForm {
    UploadForm {
        title: String::new(),
        course: "CS401".to_string(),
        kind: ResourceKind::Pdf,
    }
}

/// Color tags that are not part of the palette.
pub const UNKNOWN_TAGS: &[&str] = &["", "blue", "Emerald", "EMERALD", "emerald "];
