use leptos::prelude::{GetUntracked, Owner};

use super::*;

// =============================================================
// Helpers
// =============================================================

fn resource(id: u64, name: &str, level: &str, hours: &str) -> Resource {
    Resource {
        id,
        name: name.to_owned(),
        access_level: level.to_owned(),
        available_hours: hours.to_owned(),
        description: None,
    }
}

// =============================================================
// Empty state
// =============================================================

#[test]
fn missing_list_renders_empty_state() {
    assert_eq!(ResourcesView::from_list(ResourceList { resources: None }), ResourcesView::Empty);
}

#[test]
fn empty_list_renders_empty_state() {
    let view = ResourcesView::from_list(ResourceList { resources: Some(Vec::new()) });
    assert_eq!(view, ResourcesView::Empty);
    assert_eq!(view.card_count(), 0);
}

#[test]
fn empty_state_text() {
    assert_eq!(EMPTY_RESOURCES_TEXT, "No resources available");
}

// =============================================================
// Cards
// =============================================================

#[test]
fn two_resources_render_two_cards() {
    let view = ResourcesView::from_list(ResourceList {
        resources: Some(vec![
            resource(1, "Python Basics", "basic", "09:00-18:00"),
            resource(3, "SQL Database", "basic", "09:00-20:00"),
        ]),
    });
    let ResourcesView::Cards(cards) = &view else {
        panic!("expected cards, got {view:?}");
    };
    assert_eq!(view.card_count(), 2);

    assert_eq!(cards[0].name, "Python Basics");
    assert_eq!(cards[0].access_line(), "Access level: basic");
    assert_eq!(cards[0].hours_line(), "Available hours: 09:00-18:00");
    assert_eq!(cards[0].href, "/resource/1");

    assert_eq!(cards[1].name, "SQL Database");
    assert_eq!(cards[1].hours_line(), "Available hours: 09:00-20:00");
    assert!(cards[1].href.contains('3'));
}

#[test]
fn cards_keep_server_order_and_values_verbatim() {
    let view = ResourcesView::from_list(ResourceList {
        resources: Some(vec![
            resource(9, "<b>Raw</b>", "premium", "00:00-23:59"),
            resource(2, "Second", "basic", "anytime"),
        ]),
    });
    let ResourcesView::Cards(cards) = view else {
        panic!("expected cards");
    };
    let ids: Vec<u64> = cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, [9, 2]);
    assert_eq!(cards[0].name, "<b>Raw</b>");
}

// =============================================================
// apply_listing
// =============================================================

#[test]
fn failed_load_keeps_rendered_cards() {
    Owner::new().with(|| {
        let before = ResourcesView::from_list(ResourceList {
            resources: Some(vec![resource(1, "Python Basics", "basic", "09:00-18:00")]),
        });
        let listing = RwSignal::new(Some(before.clone()));
        apply_listing(listing, Err(ApiError::Status { status: 401 }));
        assert_eq!(listing.get_untracked(), Some(before));
    });
}

#[test]
fn fresh_load_replaces_cards_wholesale() {
    Owner::new().with(|| {
        let listing = RwSignal::new(Some(ResourcesView::from_list(ResourceList {
            resources: Some(vec![resource(1, "Python Basics", "basic", "09:00-18:00")]),
        })));
        apply_listing(listing, Ok(ResourcesView::Empty));
        assert_eq!(listing.get_untracked(), Some(ResourcesView::Empty));
    });
}
