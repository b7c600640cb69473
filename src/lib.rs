pub mod config;
pub mod core;
pub mod error;

pub use crate::config::{AppConfig, ThemeChoice};
pub use crate::core::{
    COURSES, CatalogState, ColorClasses, Course, CourseColor, Icon, Resource, ResourceId,
    ResourceKind, UploadField, UploadForm,
};
pub use crate::error::CatalogError;

#[cfg(feature = "gui")]
pub mod gui;
