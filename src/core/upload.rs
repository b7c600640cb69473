use crate::core::catalog::{self, Course, DEFAULT_COURSE_CODE, ResourceKind};

/// Values of the upload form. Nothing is ever stored from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub title: String,
    /// Course code, e.g. "CS401".
    pub course: String,
    pub kind: ResourceKind,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            course: DEFAULT_COURSE_CODE.to_string(),
            kind: ResourceKind::default(),
        }
    }
}

impl UploadForm {
    pub fn apply(&mut self, field: UploadField) {
        match field {
            UploadField::Title(title) => self.title = title,
            UploadField::Course(code) => self.course = code,
            UploadField::Kind(kind) => self.kind = kind,
        }
    }

    /// The title is the only required field; an empty one blocks submission.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn selected_course(&self) -> Option<&'static Course> {
        catalog::course_by_code(&self.course)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadField {
    Title(String),
    Course(String),
    Kind(ResourceKind),
}

impl UploadField {
    pub fn name(&self) -> &'static str {
        match self {
            UploadField::Title(_) => "title",
            UploadField::Course(_) => "course",
            UploadField::Kind(_) => "type",
        }
    }
}
