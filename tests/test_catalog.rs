//! Integration tests for the seed catalog and its lookup helpers.

mod common;

use common::*;

#[test]
fn test_catalog_shape() {
    assert_eq!(COURSES.len(), 4);
    for course in COURSES {
        assert_eq!(course.resources.len(), 3, "course {}", course.code);
    }
    assert_eq!(catalog::resources().count(), 12);
}

#[test]
fn test_cryptography_study_guide() {
    let resource = catalog::resource(5).expect("resource 5 should exist");
    assert_eq!(resource.title, "Cryptography Study Guide");
    assert_eq!(resource.kind, ResourceKind::Notes);
    assert_eq!(resource.users, 87);
    assert_eq!(resource.updated, "1 week ago");
    assert_eq!(catalog::course_of(5).map(|c| c.name), Some("Cybersecurity"));
}

#[test]
fn test_courses_in_display_order() {
    let codes: Vec<&str> = COURSES.iter().map(|c| c.code).collect();
    assert_eq!(codes, ["CS401", "CS302", "CS101", "CS201"]);

    for course in COURSES {
        assert_eq!(catalog::course_by_code(course.code), Some(course));
    }
    assert!(catalog::course_by_code("CS999").is_none());
}

#[test]
fn test_each_course_has_one_of_each_kind() {
    for course in COURSES {
        let kinds: Vec<ResourceKind> = course.resources.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, ResourceKind::ALL);
    }
}

#[test]
fn test_course_colors() {
    let colors: Vec<CourseColor> = COURSES.iter().map(|c| c.color()).collect();
    assert_eq!(
        colors,
        [
            CourseColor::Emerald,
            CourseColor::Red,
            CourseColor::Amber,
            CourseColor::Emerald
        ]
    );
}

#[test]
fn test_unknown_color_tags_fall_back_to_emerald() {
    let emerald = ColorClasses::for_tag("emerald");
    for tag in UNKNOWN_TAGS {
        assert_eq!(ColorClasses::for_tag(tag), emerald, "tag {tag:?}");
        assert_eq!(
            tag.parse::<CourseColor>(),
            Err(CatalogError::UnknownColor(tag.to_string()))
        );
    }
}

#[test]
fn test_icons() {
    assert_eq!(Icon::for_kind(ResourceKind::Pdf), Icon::FileText);
    assert_eq!(Icon::for_kind(ResourceKind::Notes), Icon::BookOpen);
    assert_eq!(Icon::for_kind(ResourceKind::Exam), Icon::FileText);
    assert_eq!(Icon::for_type("Video"), Icon::FALLBACK);
    assert_eq!(Icon::for_type("pdf"), Icon::FALLBACK);
}

#[test]
fn test_json_field_names() -> anyhow::Result<()> {
    let value = serde_json::to_value(&COURSES[1])?;
    assert_eq!(value["code"], "CS302");
    assert_eq!(value["color"], "red");
    assert_eq!(value["resources"][1]["type"], "Notes");
    assert_eq!(value["resources"][0]["type"], "PDF");
    assert_eq!(value["resources"][2]["users"], 203);
    Ok(())
}
