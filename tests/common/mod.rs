mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from reshub for tests
pub use reshub::core::catalog::{self, COURSES};
pub use reshub::{
    CatalogError, CatalogState, ColorClasses, CourseColor, Icon, Resource, ResourceKind,
    UploadField, UploadForm,
};
