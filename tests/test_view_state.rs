//! Integration tests for the catalog view state transitions.
//!
//! Tests cover:
//! - Selecting and closing every catalog resource
//! - Cancel keeps the upload form, submit resets it
//! - Detail and upload modals toggle independently

mod common;

use common::*;

#[test]
fn test_select_then_close_each_resource() {
    let mut state = CatalogState::new();
    for resource in catalog::resources() {
        state.select_resource(resource.id);
        let selected: &Resource = state.selected_resource().expect("selection should be visible");
        assert_eq!(selected, resource);
        assert!(state.is_detail_visible());

        state.close_detail();
        assert!(state.selected_resource().is_none());
        assert!(!state.is_detail_visible());
    }
}

#[test]
fn test_reselect_replaces_selection() {
    let mut state = CatalogState::new();
    state.select_resource(1);
    state.select_resource(12);
    assert_eq!(state.selected_id(), Some(12));
}

#[test]
fn test_cancel_preserves_form() {
    let mut state = state_with_filled_form();
    let before = state.form().clone();

    state.cancel_upload();
    assert!(!state.is_upload_visible());
    assert_eq!(state.form(), &before);

    state.open_upload();
    assert!(state.is_upload_visible());
    assert_eq!(state.form(), &before);
}

#[test]
fn test_submit_always_resets() {
    let mut state = state_with_filled_form();
    let submitted = state.submit_upload();
    assert_eq!(submitted.title, "Kubernetes Cheat Sheet");
    assert!(!state.is_upload_visible());
    assert_eq!(state.form(), &default_form());

    // Submitting an untouched, hidden form still lands on the defaults.
    let mut fresh = CatalogState::new();
    fresh.submit_upload();
    assert!(!fresh.is_upload_visible());
    assert_eq!(fresh.form(), &default_form());
}

#[test]
fn test_submit_does_not_grow_catalog() {
    let before = catalog::resources().count();
    let mut state = state_with_filled_form();
    state.submit_upload();
    assert_eq!(catalog::resources().count(), before);
}

#[test]
fn test_update_title_leaves_other_fields() {
    let mut state = CatalogState::new();
    state.update_upload_field(UploadField::Title("X".into()));
    assert_eq!(state.form().title, "X");
    assert_eq!(state.form().course, "CS401");
    assert_eq!(state.form().kind, ResourceKind::Pdf);
}

#[test]
fn test_update_course_accepts_any_code() {
    let mut state = CatalogState::new();
    state.update_upload_field(UploadField::Course("CS999".into()));
    assert_eq!(state.form().course, "CS999");
    assert!(state.form().selected_course().is_none());
}

#[test]
fn test_modals_toggle_independently() {
    let mut state = CatalogState::new();
    state.open_upload();
    state.select_resource(7);
    assert!(state.is_upload_visible());
    assert!(state.is_detail_visible());

    state.cancel_upload();
    assert!(state.is_detail_visible());

    state.open_upload();
    state.close_detail();
    assert!(state.is_upload_visible());
}

#[test]
fn test_selection_survives_upload_submit() {
    let mut state = state_with_filled_form();
    state.select_resource(3);
    state.submit_upload();
    assert_eq!(state.selected_id(), Some(3));
}
