//! Request lifecycle operations for the RequestStore.

use jiff::{SignedDuration, Timestamp};
use log::{debug, trace, warn};
use tokio::sync::broadcast;

use super::{RequestStore, StoreEvent};
use crate::{
    display::Requests,
    error::{DeskError, Result},
    models::{DashboardStats, Request, RequestFilter, RequestStatus, UpdateRequestFields},
    params::CreateRequest,
};

/// Write a new status and the lifecycle timestamps that go with it.
fn apply_status(request: &mut Request, status: RequestStatus, now: Timestamp) {
    request.status = status;
    request.updated_at = now;
    if status == RequestStatus::Completed {
        request.completed_at = Some(now);
    }
}

/// Empty text clears an optional placeholder field.
fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl RequestStore {
    /// Current time, pushed past `floor` when the clock has not moved.
    fn stamp(&self, floor: Option<Timestamp>) -> Timestamp {
        let now = self.clock.now();
        match floor {
            Some(previous) if now <= previous => previous
                .checked_add(SignedDuration::from_nanos(1))
                .unwrap_or(previous),
            _ => now,
        }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.requests.iter().position(|request| request.id == id)
    }

    fn publish(&self, event: StoreEvent) {
        if self.events.send(event).is_err() {
            trace!("No subscribers for {event:?}");
        }
    }

    fn check_transition(&self, id: u64, from: RequestStatus, to: RequestStatus) -> Result<()> {
        if self.policy.allows(from, to) {
            Ok(())
        } else {
            warn!("Rejected status change of request {id} from {from} to {to}");
            Err(DeskError::InvalidTransition { id, from, to })
        }
    }

    /// Submits a new request.
    ///
    /// The request gets a fresh id, starts as `pending` with
    /// `created_at == updated_at`, and becomes the first element of the
    /// collection. The data is taken as given; see
    /// [`CreateRequest::validate`] for the form checks.
    pub fn create(&mut self, data: &CreateRequest) -> Request {
        let id = self.next_id;
        self.next_id += 1;
        let now = self.stamp(None);

        let request = Request {
            id,
            title: data.title.clone(),
            description: data.description.clone(),
            category: data.category,
            priority: data.priority,
            status: RequestStatus::Pending,
            requester_name: data.requester_name.clone(),
            requester_email: data.requester_email.clone(),
            department: data.department.clone(),
            created_at: now,
            updated_at: now,
            completed_at: None,
            assigned_to: None,
            notes: None,
            attachments: Vec::new(),
        };

        self.requests.insert(0, request.clone());
        debug!("Created request {id}: {}", request.title);
        self.publish(StoreEvent::Created { id });
        request
    }

    /// Moves a request to another status.
    ///
    /// Returns the updated request, or `None` when no request has this id
    /// (nothing changes in that case). Reaching `completed` stamps
    /// `completed_at`; any other status leaves it as it was.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidTransition` - When the transition policy does not
    ///   allow the move. The request is left untouched.
    pub fn update_status(&mut self, id: u64, status: RequestStatus) -> Result<Option<Request>> {
        let Some(index) = self.position(id) else {
            debug!("Status update for unknown request {id} ignored");
            return Ok(None);
        };

        let from = self.requests[index].status;
        self.check_transition(id, from, status)?;

        let now = self.stamp(Some(self.requests[index].updated_at));
        let request = &mut self.requests[index];
        apply_status(request, status, now);
        let updated = request.clone();

        debug!("Request {id} moved from {from} to {status}");
        self.publish(StoreEvent::StatusChanged {
            id,
            from,
            to: status,
        });
        Ok(Some(updated))
    }

    /// Merges the supplied fields into a request and refreshes `updated_at`.
    ///
    /// Returns the updated request, or `None` when no request has this id.
    /// An empty `assigned_to` or `notes` clears the field.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidTransition` - When the update carries a status the
    ///   policy does not allow. No field is changed in that case.
    pub fn update_fields(
        &mut self,
        id: u64,
        update: UpdateRequestFields,
    ) -> Result<Option<Request>> {
        let Some(index) = self.position(id) else {
            debug!("Field update for unknown request {id} ignored");
            return Ok(None);
        };

        let from = self.requests[index].status;
        if let Some(to) = update.status {
            self.check_transition(id, from, to)?;
        }

        let now = self.stamp(Some(self.requests[index].updated_at));
        let request = &mut self.requests[index];
        let UpdateRequestFields {
            title,
            description,
            category,
            priority,
            status,
            requester_name,
            requester_email,
            department,
            assigned_to,
            notes,
            attachments,
        } = update;

        if let Some(title) = title {
            request.title = title;
        }
        if let Some(description) = description {
            request.description = description;
        }
        if let Some(category) = category {
            request.category = category;
        }
        if let Some(priority) = priority {
            request.priority = priority;
        }
        if let Some(requester_name) = requester_name {
            request.requester_name = requester_name;
        }
        if let Some(requester_email) = requester_email {
            request.requester_email = requester_email;
        }
        if let Some(department) = department {
            request.department = department;
        }
        if let Some(assigned_to) = assigned_to {
            request.assigned_to = non_blank(assigned_to);
        }
        if let Some(notes) = notes {
            request.notes = non_blank(notes);
        }
        if let Some(attachments) = attachments {
            request.attachments = attachments;
        }
        match status {
            Some(status) => apply_status(request, status, now),
            None => request.updated_at = now,
        }
        let updated = request.clone();

        debug!("Updated request {id}");
        if let Some(to) = status {
            self.publish(StoreEvent::StatusChanged { id, from, to });
        }
        self.publish(StoreEvent::Updated { id });
        Ok(Some(updated))
    }

    /// Removes a request, keeping the order of the others.
    ///
    /// Returns the removed request, or `None` when no request has this id.
    pub fn delete(&mut self, id: u64) -> Option<Request> {
        let Some(index) = self.position(id) else {
            debug!("Delete of unknown request {id} ignored");
            return None;
        };

        let removed = self.requests.remove(index);
        debug!("Deleted request {id}");
        self.publish(StoreEvent::Deleted { id });
        Some(removed)
    }

    /// Looks up a request by id.
    pub fn find_by_id(&self, id: u64) -> Option<&Request> {
        self.requests.iter().find(|request| request.id == id)
    }

    /// All requests, newest first.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Requests passing the filter, newest first.
    pub fn list(&self, filter: &RequestFilter) -> Requests {
        Requests(
            self.requests
                .iter()
                .filter(|request| filter.matches(request))
                .cloned()
                .collect(),
        )
    }

    /// Per-status tallies of the whole collection.
    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats::from_requests(&self.requests)
    }

    /// Receives every mutation made after this call.
    ///
    /// A receiver that falls more than the configured capacity behind gets
    /// `RecvError::Lagged` and skips ahead.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Pretty-printed JSON array of the collection, newest first.
    ///
    /// # Errors
    ///
    /// * `DeskError::Serialization` - When serialization fails
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.requests)?)
    }
}
