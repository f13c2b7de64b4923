//! Integration tests for the project store: append, status changes and
//! listener notification as seen from outside the crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use projboard::state::{ProjectStore, shared_store};
use projboard::validation::{InputRules, gather_input};
use projboard_proto::project::{Project, ProjectId, ProjectStatus};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

type Recorded = Rc<RefCell<Vec<Vec<Project>>>>;

/// Registers a listener that records every snapshot it receives.
fn record(store: &mut ProjectStore) -> Recorded {
    let calls: Recorded = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    store.add_listener(move |projects| sink.borrow_mut().push(projects));
    calls
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn build_shed_scenario() {
    let mut store = ProjectStore::new();
    let calls = record(&mut store);

    let id = store.add_project("Build shed", "Construct a garden shed", 3);
    {
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        let snapshot = &calls[0];
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "Build shed");
        assert_eq!(snapshot[0].description, "Construct a garden shed");
        assert_eq!(snapshot[0].people, 3);
        assert_eq!(snapshot[0].status, ProjectStatus::Active);
    }

    assert!(store.move_project(id, ProjectStatus::Finished));
    {
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].len(), 1);
        assert_eq!(calls[1][0].id, id);
        assert_eq!(calls[1][0].status, ProjectStatus::Finished);
    }

    assert!(!store.move_project(id, ProjectStatus::Finished));
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn validated_form_feeds_store() {
    let mut store = ProjectStore::new();
    let calls = record(&mut store);
    let rules = InputRules::default();

    let input = gather_input("Build shed", "Construct a garden shed", "3", &rules).unwrap();
    store.add_project(&input.title, &input.description, input.people);

    // Rejected input never reaches the store.
    assert!(gather_input("Build shed", "shed", "3", &rules).is_err());

    assert_eq!(store.len(), 1);
    assert_eq!(calls.borrow().len(), 1);
}

// ---------------------------------------------------------------------------
// Ordering and uniqueness
// ---------------------------------------------------------------------------

#[test]
fn appends_keep_order_and_unique_ids() {
    let mut store = ProjectStore::new();
    let ids: Vec<ProjectId> = (0..50)
        .map(|i| store.add_project(&format!("Project {i}"), "some description", 1))
        .collect();

    let snapshot = store.snapshot();
    let titles: Vec<String> = snapshot.iter().map(|p| p.title.clone()).collect();
    let expected: Vec<String> = (0..50).map(|i| format!("Project {i}")).collect();
    assert_eq!(titles, expected);

    let mut unique = ids.clone();
    unique.sort_by_key(|id| *id.as_uuid());
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn each_notification_is_a_full_snapshot() {
    let mut store = ProjectStore::new();
    let calls = record(&mut store);
    let a = store.add_project("A", "first one", 1);
    store.add_project("B", "second one", 2);
    store.move_project(a, ProjectStatus::Finished);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2].len(), 2);
    assert_eq!(calls[2][0].status, ProjectStatus::Finished);
    assert_eq!(calls[2][1].status, ProjectStatus::Active);
}

// ---------------------------------------------------------------------------
// Silent no-ops
// ---------------------------------------------------------------------------

#[test]
fn unknown_id_changes_nothing_and_notifies_nobody() {
    let mut store = ProjectStore::new();
    store.add_project("A", "first one", 1);
    store.add_project("B", "second one", 2);
    let before = store.snapshot();
    let calls = record(&mut store);

    for status in ProjectStatus::ALL {
        assert!(!store.move_project(ProjectId::new(), status));
    }

    assert_eq!(store.snapshot(), before);
    assert!(calls.borrow().is_empty());
}

#[test]
fn repeated_moves_notify_once() {
    let mut store = ProjectStore::new();
    let id = store.add_project("A", "first one", 1);
    let calls = record(&mut store);

    for _ in 0..5 {
        store.move_project(id, ProjectStatus::Finished);
    }

    assert_eq!(calls.borrow().len(), 1);
}

// ---------------------------------------------------------------------------
// Listeners
// ---------------------------------------------------------------------------

#[test]
fn every_listener_gets_exactly_one_call_per_change() {
    let mut store = ProjectStore::new();
    let first = record(&mut store);
    let second = record(&mut store);
    let id = store.add_project("A", "first one", 1);
    store.move_project(id, ProjectStatus::Finished);

    assert_eq!(first.borrow().len(), 2);
    assert_eq!(second.borrow().len(), 2);
    assert_eq!(*first.borrow(), *second.borrow());
}

#[test]
fn same_closure_registered_twice_fires_twice() {
    let mut store = ProjectStore::new();
    let hits = Rc::new(RefCell::new(0_u32));
    let make = || {
        let hits = Rc::clone(&hits);
        move |_: Vec<Project>| *hits.borrow_mut() += 1
    };
    store.add_listener(make());
    store.add_listener(make());
    store.add_project("A", "first one", 1);
    assert_eq!(*hits.borrow(), 2);
}

#[test]
fn listener_side_mutation_is_isolated() {
    let mut store = ProjectStore::new();
    store.add_listener(|mut projects: Vec<Project>| {
        projects.reverse();
        projects.truncate(0);
    });
    let calls = record(&mut store);

    let a = store.add_project("A", "first one", 1);
    let b = store.add_project("B", "second one", 2);
    store.move_project(b, ProjectStatus::Finished);

    let calls = calls.borrow();
    let last = calls.last().unwrap();
    assert_eq!(last.len(), 2);
    assert_eq!(last[0].id, a);
    assert_eq!(last[1].id, b);
    assert_eq!(store.len(), 2);
}

#[test]
fn shared_store_handle_is_one_instance() {
    let store = shared_store();
    let other = Rc::clone(&store);
    let id = store.borrow_mut().add_project("A", "first one", 1);
    assert!(other.borrow_mut().move_project(id, ProjectStatus::Finished));
    assert_eq!(
        store.borrow().get(id).unwrap().status,
        ProjectStatus::Finished
    );
}
