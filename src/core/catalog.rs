use std::str::FromStr;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::core::style::CourseColor;
use crate::error::CatalogError;

pub type ResourceId = u32;
pub type CourseId = u32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumIter)]
pub enum ResourceKind {
    #[default]
    #[serde(rename = "PDF")]
    #[strum(to_string = "PDF")]
    Pdf,
    Notes,
    Exam,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Pdf, ResourceKind::Notes, ResourceKind::Exam];

    /// Long label shown in the upload form selector.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Pdf => "PDF Slides",
            ResourceKind::Notes => "Lecture Notes",
            ResourceKind::Exam => "Past Exam",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::iter()
            .find(|kind| kind.as_ref() == s)
            .ok_or_else(|| CatalogError::UnknownResourceType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Free-text recency label, e.g. "2 days ago".
    pub updated: &'static str,
    pub users: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: &'static str,
    pub code: &'static str,
    /// Raw color tag; see [`Course::color`].
    #[serde(rename = "color")]
    pub color_tag: &'static str,
    pub resources: &'static [Resource],
}

impl Course {
    pub fn color(&self) -> CourseColor {
        CourseColor::from_tag(self.color_tag)
    }
}

pub const DEFAULT_COURSE_CODE: &str = "CS401";

pub const COURSES: &[Course] = &[
    Course {
        id: 1,
        name: "Cloud Computing",
        code: "CS401",
        color_tag: "emerald",
        resources: &[
            Resource {
                id: 1,
                title: "Introduction to AWS Services",
                kind: ResourceKind::Pdf,
                updated: "2 days ago",
                users: 124,
            },
            Resource {
                id: 2,
                title: "Azure Fundamentals Lecture Notes",
                kind: ResourceKind::Notes,
                updated: "5 days ago",
                users: 98,
            },
            Resource {
                id: 3,
                title: "Midterm Exam 2024",
                kind: ResourceKind::Exam,
                updated: "1 week ago",
                users: 156,
            },
        ],
    },
    Course {
        id: 2,
        name: "Cybersecurity",
        code: "CS302",
        color_tag: "red",
        resources: &[
            Resource {
                id: 4,
                title: "Network Security Principles",
                kind: ResourceKind::Pdf,
                updated: "3 days ago",
                users: 142,
            },
            Resource {
                id: 5,
                title: "Cryptography Study Guide",
                kind: ResourceKind::Notes,
                updated: "1 week ago",
                users: 87,
            },
            Resource {
                id: 6,
                title: "Final Exam 2023",
                kind: ResourceKind::Exam,
                updated: "2 weeks ago",
                users: 203,
            },
        ],
    },
    Course {
        id: 3,
        name: "Programming",
        code: "CS101",
        color_tag: "amber",
        resources: &[
            Resource {
                id: 7,
                title: "Python Basics Slides",
                kind: ResourceKind::Pdf,
                updated: "1 day ago",
                users: 189,
            },
            Resource {
                id: 8,
                title: "Object-Oriented Programming Notes",
                kind: ResourceKind::Notes,
                updated: "4 days ago",
                users: 167,
            },
            Resource {
                id: 9,
                title: "Practice Exam Questions",
                kind: ResourceKind::Exam,
                updated: "6 days ago",
                users: 145,
            },
        ],
    },
    Course {
        id: 4,
        name: "Networking",
        code: "CS201",
        color_tag: "emerald",
        resources: &[
            Resource {
                id: 10,
                title: "TCP/IP Protocol Suite",
                kind: ResourceKind::Pdf,
                updated: "2 days ago",
                users: 131,
            },
            Resource {
                id: 11,
                title: "Routing and Switching Notes",
                kind: ResourceKind::Notes,
                updated: "1 week ago",
                users: 109,
            },
            Resource {
                id: 12,
                title: "CCNA Practice Exam",
                kind: ResourceKind::Exam,
                updated: "3 days ago",
                users: 178,
            },
        ],
    },
];

/// All resources in catalog order, course by course.
pub fn resources() -> impl Iterator<Item = &'static Resource> {
    COURSES.iter().flat_map(|course| course.resources.iter())
}

pub fn resource(id: ResourceId) -> Option<&'static Resource> {
    resources().find(|resource| resource.id == id)
}

pub fn course_by_code(code: &str) -> Option<&'static Course> {
    COURSES.iter().find(|course| course.code == code)
}

/// The course a resource belongs to.
pub fn course_of(id: ResourceId) -> Option<&'static Course> {
    COURSES
        .iter()
        .find(|course| course.resources.iter().any(|resource| resource.id == id))
}
