//! Tests for the store module.

use std::collections::HashSet;

use jiff::Timestamp;
use tokio::sync::broadcast::error::TryRecvError;

use super::*;
use crate::{
    DeskError,
    models::{Priority, RequestCategory, RequestFilter, RequestStatus, UpdateRequestFields},
    params::{CreateRequest, Id, ListRequests, UpdateRequest, UpdateStatus},
};

fn create_params(title: &str) -> CreateRequest {
    CreateRequest {
        title: title.to_string(),
        description: format!("{title} description"),
        category: RequestCategory::EquipmentRequest,
        priority: Priority::High,
        requester_name: "Ana".to_string(),
        requester_email: "ana@x.com".to_string(),
        department: "IT".to_string(),
    }
}

/// Store on a frozen clock, plus a handle to move the clock.
fn create_test_store() -> (ManualClock, RequestStore) {
    let clock = ManualClock::at_second(1_700_000_000);
    let store = StoreBuilder::new().with_clock(clock.clone()).build();
    (clock, store)
}

fn permissive_store() -> RequestStore {
    StoreBuilder::new()
        .with_transition_policy(TransitionPolicy::Permissive)
        .with_clock(ManualClock::at_second(1_700_000_000))
        .build()
}

#[test]
fn test_create_sets_initial_state() {
    let (clock, mut store) = create_test_store();

    let request = store.create(&create_params("Laptop"));

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.created_at, request.updated_at);
    assert_eq!(request.created_at, clock.now());
    assert_eq!(request.completed_at, None);
    assert_eq!(request.assigned_to, None);
    assert_eq!(request.notes, None);
    assert!(request.attachments.is_empty());
    assert_eq!(store.find_by_id(request.id), Some(&request));
}

#[test]
fn test_create_yields_unique_ids() {
    let (_clock, mut store) = create_test_store();

    let ids: HashSet<u64> = (0..50)
        .map(|i| store.create(&create_params(&format!("Request {i}"))).id)
        .collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(store.len(), 50);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let (_clock, mut store) = create_test_store();

    let first = store.create(&create_params("First"));
    store.delete(first.id);
    let second = store.create(&create_params("Second"));

    assert_ne!(first.id, second.id);
}

#[test]
fn test_collection_is_newest_first() {
    let (_clock, mut store) = create_test_store();

    let c1 = store.create(&create_params("C1"));
    let c2 = store.create(&create_params("C2"));
    let c3 = store.create(&create_params("C3"));

    let ids: Vec<u64> = store.requests().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![c3.id, c2.id, c1.id]);
}

#[test]
fn test_full_workflow_scenario() {
    let (clock, mut store) = create_test_store();

    let request = store.create(&create_params("Laptop"));
    assert_eq!(request.status, RequestStatus::Pending);

    clock.advance_seconds(10);
    let reviewed = store
        .update_status(request.id, RequestStatus::InReview)
        .unwrap()
        .unwrap();
    assert_eq!(reviewed.status, RequestStatus::InReview);
    assert_eq!(reviewed.completed_at, None);

    clock.advance_seconds(10);
    let approved = store
        .update_status(request.id, RequestStatus::Approved)
        .unwrap()
        .unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);
    assert_eq!(approved.completed_at, None);

    clock.advance_seconds(10);
    let completed = store
        .update_status(request.id, RequestStatus::Completed)
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, RequestStatus::Completed);
    assert_eq!(completed.completed_at, Some(clock.now()));
    assert_eq!(completed.updated_at, clock.now());
    assert_eq!(completed.created_at, request.created_at);
}

#[test]
fn test_updated_at_strictly_increases_on_frozen_clock() {
    let (_clock, mut store) = create_test_store();

    let request = store.create(&create_params("Laptop"));
    let reviewed = store
        .update_status(request.id, RequestStatus::InReview)
        .unwrap()
        .unwrap();
    let edited = store
        .update_fields(
            request.id,
            UpdateRequestFields {
                notes: Some("Checked stock".to_string()),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

    assert!(reviewed.updated_at > request.updated_at);
    assert!(edited.updated_at > reviewed.updated_at);
    assert!(edited.created_at <= edited.updated_at);
}

#[test]
fn test_illegal_transition_rejected_and_untouched() {
    let (clock, mut store) = create_test_store();

    let request = store.create(&create_params("Laptop"));
    clock.advance_seconds(5);

    let err = store
        .update_status(request.id, RequestStatus::Completed)
        .unwrap_err();
    match err {
        DeskError::InvalidTransition { id, from, to } => {
            assert_eq!(id, request.id);
            assert_eq!(from, RequestStatus::Pending);
            assert_eq!(to, RequestStatus::Completed);
        }
        other => panic!("Expected InvalidTransition, got {other:?}"),
    }

    // Nothing changed, not even the timestamp
    assert_eq!(store.find_by_id(request.id), Some(&request));
}

#[test]
fn test_terminal_statuses_are_final_when_enforced() {
    let (_clock, mut store) = create_test_store();

    let request = store.create(&create_params("Laptop"));
    store
        .update_status(request.id, RequestStatus::InReview)
        .unwrap();
    store
        .update_status(request.id, RequestStatus::Rejected)
        .unwrap();

    for status in RequestStatus::ALL {
        assert!(store.update_status(request.id, status).is_err());
    }
}

#[test]
fn test_permissive_policy_accepts_any_status() {
    let mut store = permissive_store();

    let request = store.create(&create_params("Laptop"));
    let completed = store
        .update_status(request.id, RequestStatus::Completed)
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, RequestStatus::Completed);
    assert!(completed.completed_at.is_some());

    // Reopening keeps the completion timestamp
    let reopened = store
        .update_status(request.id, RequestStatus::Pending)
        .unwrap()
        .unwrap();
    assert_eq!(reopened.status, RequestStatus::Pending);
    assert_eq!(reopened.completed_at, completed.completed_at);

    // Completing again moves it forward
    let recompleted = store
        .update_status(request.id, RequestStatus::Completed)
        .unwrap()
        .unwrap();
    assert!(recompleted.completed_at > completed.completed_at);
}

#[test]
fn test_completed_at_unset_for_non_completed_targets() {
    let mut store = permissive_store();
    let request = store.create(&create_params("Laptop"));

    for status in [
        RequestStatus::InReview,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Pending,
    ] {
        let updated = store.update_status(request.id, status).unwrap().unwrap();
        assert_eq!(updated.completed_at, None);
    }
}

#[test]
fn test_missing_id_is_noop() {
    let (_clock, mut store) = create_test_store();
    store.create(&create_params("A"));
    store.create(&create_params("B"));
    let before = store.requests().to_vec();

    assert!(
        store
            .update_status(999, RequestStatus::InReview)
            .unwrap()
            .is_none()
    );
    assert!(
        store
            .update_fields(
                999,
                UpdateRequestFields {
                    title: Some("Nope".to_string()),
                    ..Default::default()
                }
            )
            .unwrap()
            .is_none()
    );
    assert!(store.delete(999).is_none());
    assert!(store.find_by_id(999).is_none());

    assert_eq!(store.requests(), before.as_slice());
}

#[test]
fn test_delete_removes_exactly_one_and_keeps_order() {
    let (_clock, mut store) = create_test_store();
    let c1 = store.create(&create_params("C1"));
    let c2 = store.create(&create_params("C2"));
    let c3 = store.create(&create_params("C3"));

    let removed = store.delete(c2.id).unwrap();
    assert_eq!(removed.id, c2.id);

    let ids: Vec<u64> = store.requests().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![c3.id, c1.id]);
    assert_eq!(store.find_by_id(c3.id), Some(&c3));
    assert_eq!(store.find_by_id(c1.id), Some(&c1));
}

#[test]
fn test_update_fields_merges_subset() {
    let (clock, mut store) = create_test_store();
    let request = store.create(&create_params("Laptop"));
    clock.advance_seconds(30);

    let updated = store
        .update_fields(
            request.id,
            UpdateRequestFields {
                title: Some("Laptop and dock".to_string()),
                priority: Some(Priority::Medium),
                assigned_to: Some("Helpdesk".to_string()),
                attachments: Some(vec!["quote.pdf".to_string()]),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Laptop and dock");
    assert_eq!(updated.priority, Priority::Medium);
    assert_eq!(updated.assigned_to.as_deref(), Some("Helpdesk"));
    assert_eq!(updated.attachments, vec!["quote.pdf".to_string()]);
    // Untouched fields keep their values
    assert_eq!(updated.description, request.description);
    assert_eq!(updated.category, request.category);
    assert_eq!(updated.status, RequestStatus::Pending);
    assert_eq!(updated.created_at, request.created_at);
    assert_eq!(updated.updated_at, clock.now());
}

#[test]
fn test_update_fields_empty_refreshes_updated_at() {
    let (_clock, mut store) = create_test_store();
    let request = store.create(&create_params("Laptop"));

    let updated = store
        .update_fields(request.id, UpdateRequestFields::default())
        .unwrap()
        .unwrap();

    assert!(updated.updated_at > request.updated_at);
    assert_eq!(updated.title, request.title);
}

#[test]
fn test_update_fields_clears_placeholders_with_blank_text() {
    let (_clock, mut store) = create_test_store();
    let request = store.create(&create_params("Laptop"));

    store
        .update_fields(
            request.id,
            UpdateRequestFields {
                notes: Some("Urgent".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let cleared = store
        .update_fields(
            request.id,
            UpdateRequestFields {
                notes: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(cleared.notes, None);
}

#[test]
fn test_update_fields_status_follows_workflow() {
    let (_clock, mut store) = create_test_store();
    let request = store.create(&create_params("Laptop"));

    let err = store
        .update_fields(
            request.id,
            UpdateRequestFields {
                title: Some("Should not stick".to_string()),
                status: Some(RequestStatus::Approved),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, DeskError::InvalidTransition { .. }));
    assert_eq!(store.find_by_id(request.id).unwrap().title, "Laptop");

    store
        .update_status(request.id, RequestStatus::InReview)
        .unwrap();
    store
        .update_status(request.id, RequestStatus::Approved)
        .unwrap();
    let completed = store
        .update_fields(
            request.id,
            UpdateRequestFields {
                status: Some(RequestStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, RequestStatus::Completed);
    assert_eq!(completed.completed_at, Some(completed.updated_at));
}

#[test]
fn test_list_filters_newest_first() {
    let (_clock, mut store) = create_test_store();
    let a = store.create(&create_params("Keyboard"));
    let b = store.create(&create_params("Mouse"));
    let c = store.create(&create_params("Keyboard cover"));
    store.update_status(b.id, RequestStatus::InReview).unwrap();

    let pending = store.list(&RequestFilter::for_status(RequestStatus::Pending));
    assert_eq!(pending.ids(), vec![c.id, a.id]);

    let keyboards = store.list(&RequestFilter {
        title_contains: Some("keyboard".to_string()),
        ..Default::default()
    });
    assert_eq!(keyboards.ids(), vec![c.id, a.id]);

    assert_eq!(store.list(&RequestFilter::default()).len(), 3);
}

#[test]
fn test_dashboard_reflects_statuses() {
    let mut store = permissive_store();
    let statuses = [
        RequestStatus::Pending,
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Completed,
        RequestStatus::Rejected,
    ];
    for (i, status) in statuses.into_iter().enumerate() {
        let request = store.create(&create_params(&format!("R{i}")));
        if status != RequestStatus::Pending {
            store.update_status(request.id, status).unwrap();
        }
    }

    let stats = store.dashboard();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.approved_total(), 2);
    assert_eq!(stats.rejected, 1);
}

#[test]
fn test_events_delivered_in_mutation_order() {
    let (_clock, mut store) = create_test_store();
    let mut events = store.subscribe();

    let request = store.create(&create_params("Laptop"));
    store
        .update_status(request.id, RequestStatus::InReview)
        .unwrap();
    store
        .update_fields(
            request.id,
            UpdateRequestFields {
                notes: Some("Ordered".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    store.delete(request.id);
    // Misses publish nothing
    store.delete(request.id);

    let id = request.id;
    assert_eq!(events.try_recv().unwrap(), StoreEvent::Created { id });
    assert_eq!(
        events.try_recv().unwrap(),
        StoreEvent::StatusChanged {
            id,
            from: RequestStatus::Pending,
            to: RequestStatus::InReview,
        }
    );
    assert_eq!(events.try_recv().unwrap(), StoreEvent::Updated { id });
    assert_eq!(events.try_recv().unwrap(), StoreEvent::Deleted { id });
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn test_rejected_transition_publishes_nothing() {
    let (_clock, mut store) = create_test_store();
    let request = store.create(&create_params("Laptop"));
    let mut events = store.subscribe();

    assert!(
        store
            .update_status(request.id, RequestStatus::Approved)
            .is_err()
    );
    assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn test_mutations_without_subscribers_do_not_fail() {
    let (_clock, mut store) = create_test_store();
    let request = store.create(&create_params("Laptop"));
    assert!(
        store
            .update_status(request.id, RequestStatus::InReview)
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_independent_stores_do_not_share_state() {
    let (_clock, mut first) = create_test_store();
    let (_clock, second) = create_test_store();

    first.create(&create_params("Only in first"));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn test_export_json() {
    let (_clock, mut store) = create_test_store();
    store.create(&create_params("Older"));
    store.create(&create_params("Newer"));

    let json = store.export_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Newer");
    assert_eq!(items[0]["status"], "pending");
}

#[test]
fn test_create_request_validated_rejects_bad_form() {
    let (_clock, mut store) = create_test_store();
    let mut params = create_params("Laptop");
    params.requester_email = "not-an-email".to_string();

    let err = store.create_request_validated(&params).unwrap_err();
    assert_eq!(err.field(), Some("requester_email"));
    assert!(store.is_empty());
}

#[test]
fn test_update_status_validated() {
    let (_clock, mut store) = create_test_store();
    let request = store.create(&create_params("Laptop"));

    let updated = store
        .update_status_validated(&UpdateStatus {
            id: request.id,
            status: "in_review".to_string(),
        })
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, RequestStatus::InReview);

    let err = store
        .update_status_validated(&UpdateStatus {
            id: request.id,
            status: "done".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.field(), Some("status"));
}

#[test]
fn test_update_request_validated() {
    let (_clock, mut store) = create_test_store();
    let request = store.create(&create_params("Laptop"));

    let updated = store
        .update_request_validated(&UpdateRequest {
            id: request.id,
            category: Some("it_support".to_string()),
            department: Some("Engineering".to_string()),
            ..Default::default()
        })
        .unwrap()
        .unwrap();
    assert_eq!(updated.category, RequestCategory::ItSupport);
    assert_eq!(updated.department, "Engineering");

    assert!(
        store
            .update_request_validated(&UpdateRequest {
                id: 404,
                ..Default::default()
            })
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_show_and_delete_request_handlers() {
    let (_clock, mut store) = create_test_store();
    let request = store.create(&create_params("Laptop"));

    assert_eq!(store.show_request(&Id { id: request.id }), Some(request.clone()));
    assert_eq!(store.delete_request(&Id { id: request.id }), Some(request.clone()));
    assert_eq!(store.show_request(&Id { id: request.id }), None);
    assert_eq!(store.delete_request(&Id { id: request.id }), None);
}

#[test]
fn test_list_requests_handler() {
    let (_clock, mut store) = create_test_store();
    let a = store.create(&create_params("A"));
    store.create(&create_params("B"));
    store.update_status(a.id, RequestStatus::InReview).unwrap();

    let all = store
        .list_requests(&ListRequests {
            status: Some("all".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(all.len(), 2);

    let in_review = store
        .list_requests(&ListRequests {
            status: Some("in_review".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(in_review.ids(), vec![a.id]);

    let err = store
        .list_requests(&ListRequests {
            priority: Some("urgent".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.field(), Some("priority"));
}

#[test]
fn test_system_clock_default() {
    let before = Timestamp::now();
    let mut store = RequestStore::default();
    let request = store.create(&create_params("Laptop"));

    assert!(request.created_at >= before);
    assert_eq!(store.policy(), TransitionPolicy::Enforced);
}
