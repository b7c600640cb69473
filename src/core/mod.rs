pub mod catalog;
pub mod state;
pub mod style;
pub mod upload;

pub use catalog::{COURSES, Course, CourseId, Resource, ResourceId, ResourceKind};
pub use state::CatalogState;
pub use style::{ColorClasses, CourseColor, Icon, Rgb};
pub use upload::{UploadField, UploadForm};
