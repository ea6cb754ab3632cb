//! Handler operations that take interface parameters for the RequestStore.

use super::RequestStore;
use crate::{
    display::Requests,
    error::Result,
    models::{Request, RequestFilter, UpdateRequestFields},
    params::{CreateRequest, Id, ListRequests, UpdateRequest, UpdateStatus},
};

impl RequestStore {
    /// Handle submitting a request from a form.
    ///
    /// Runs the form checks and creates the request when they pass.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When a required field is blank or the
    ///   email is malformed. Nothing is created.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use desk_core::{
    ///     RequestStore,
    ///     models::{Priority, RequestCategory},
    ///     params::CreateRequest,
    /// };
    ///
    /// let mut store = RequestStore::default();
    /// let params = CreateRequest {
    ///     title: String::new(),
    ///     description: "Needs a title".to_string(),
    ///     category: RequestCategory::Other,
    ///     priority: Priority::Low,
    ///     requester_name: "Ana".to_string(),
    ///     requester_email: "ana@x.com".to_string(),
    ///     department: "IT".to_string(),
    /// };
    /// assert!(store.create_request_validated(&params).is_err());
    /// assert!(store.is_empty());
    /// ```
    pub fn create_request_validated(&mut self, params: &CreateRequest) -> Result<Request> {
        params.validate()?;
        Ok(self.create(params))
    }

    /// Handle a status change given as a string.
    ///
    /// Returns the updated request, or `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When the status string is invalid
    /// * `DeskError::InvalidTransition` - When the workflow forbids the move
    pub fn update_status_validated(&mut self, params: &UpdateStatus) -> Result<Option<Request>> {
        let status = params.validate()?;
        self.update_status(params.id, status)
    }

    /// Handle a partial update given as strings.
    ///
    /// Returns the updated request, or `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When a field fails validation
    /// * `DeskError::InvalidTransition` - When the update carries a status the
    ///   workflow forbids
    pub fn update_request_validated(&mut self, params: &UpdateRequest) -> Result<Option<Request>> {
        let fields = UpdateRequestFields::try_from(params.clone())?;
        self.update_fields(params.id, fields)
    }

    /// Handle showing a specific request.
    pub fn show_request(&self, params: &Id) -> Option<Request> {
        self.find_by_id(params.id).cloned()
    }

    /// Handle deleting a request. Returns the removed request, if any.
    pub fn delete_request(&mut self, params: &Id) -> Option<Request> {
        self.delete(params.id)
    }

    /// Handle listing requests with string-typed criteria.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - When a status, category or priority
    ///   criterion does not parse
    pub fn list_requests(&self, params: &ListRequests) -> Result<Requests> {
        let filter = RequestFilter::try_from(params)?;
        Ok(self.list(&filter))
    }
}
