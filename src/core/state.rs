use tracing::{debug, info, warn};

use crate::core::catalog::{self, Resource, ResourceId};
use crate::core::upload::{UploadField, UploadForm};

/// Local state of the catalog view.
///
/// The detail modal (driven by `selected`) and the upload modal are
/// independent flags; both can be open at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    selected: Option<ResourceId>,
    upload_visible: bool,
    form: UploadForm,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the detail modal for a catalog resource.
    ///
    /// Ids outside the catalog leave the selection untouched and return `None`.
    pub fn select_resource(&mut self, id: ResourceId) -> Option<&'static Resource> {
        let Some(resource) = catalog::resource(id) else {
            warn!(id, "ignoring selection of resource outside the catalog");
            return None;
        };
        debug!(id, title = resource.title, "resource selected");
        self.selected = Some(id);
        Some(resource)
    }

    pub fn close_detail(&mut self) {
        debug!(id = ?self.selected, "detail closed");
        self.selected = None;
    }

    pub fn open_upload(&mut self) {
        debug!("upload opened");
        self.upload_visible = true;
    }

    /// Hides the upload modal. Entered values are kept for the next open.
    pub fn cancel_upload(&mut self) {
        debug!("upload cancelled");
        self.upload_visible = false;
    }

    pub fn update_upload_field(&mut self, field: UploadField) {
        debug!(field = field.name(), "upload field changed");
        self.form.apply(field);
    }

    /// Hides the upload modal and resets the form, returning what was entered.
    pub fn submit_upload(&mut self) -> UploadForm {
        self.upload_visible = false;
        let submitted = std::mem::take(&mut self.form);
        info!(
            title = %submitted.title,
            course = %submitted.course,
            kind = %submitted.kind,
            "upload submitted"
        );
        submitted
    }

    pub fn selected_id(&self) -> Option<ResourceId> {
        self.selected
    }

    pub fn selected_resource(&self) -> Option<&'static Resource> {
        self.selected.and_then(catalog::resource)
    }

    pub fn is_detail_visible(&self) -> bool {
        self.selected_resource().is_some()
    }

    pub fn is_upload_visible(&self) -> bool {
        self.upload_visible
    }

    pub fn form(&self) -> &UploadForm {
        &self.form
    }
}
