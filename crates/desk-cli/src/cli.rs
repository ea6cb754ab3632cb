//! Session command definitions and their handlers
//!
//! Every line of a session is parsed with clap into a [`RequestCommands`]
//! value, converted into core parameters and run against the session's
//! [`RequestStore`].
//!
//! ## Parameter Wrapper Pattern
//!
//! ```text
//! Session line → CLI Args (clap) → Core Params → RequestStore
//! ```
//!
//! Core parameter types stay free of clap derives. Each wrapper here owns
//! the argument syntax (flags, help text, value enums) and converts into the
//! core type with `From`, so the mapping is checked at compile time.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use desk_core::{
    DeskError, RequestStore,
    display::{CreateResult, DeleteResult, UpdateResult},
    models::{Priority, RequestCategory, RequestStatus, UpdateRequestFields},
    params::{CreateRequest, Id, ListRequests, UpdateRequest, UpdateStatus},
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// One line of a session.
#[derive(Parser)]
#[command(
    name = "desk",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Session commands"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: RequestCommands,
}

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Submit a new request
///
/// New requests start as pending and are listed first.
#[derive(Args)]
pub struct CreateArgs {
    /// Short title of the request
    pub title: String,
    #[arg(short, long, help = "What is being requested and why")]
    pub description: String,
    #[arg(short, long, value_enum, help = "Kind of request")]
    pub category: CategoryArg,
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
    pub priority: PriorityArg,
    #[arg(long, help = "Name of the person submitting the request")]
    pub requester: String,
    #[arg(long, help = "Email of the person submitting the request")]
    pub email: String,
    #[arg(long, help = "Department of the requester")]
    pub department: String,
}

impl From<CreateArgs> for CreateRequest {
    fn from(val: CreateArgs) -> Self {
        CreateRequest {
            title: val.title,
            description: val.description,
            category: val.category.into(),
            priority: val.priority.into(),
            requester_name: val.requester,
            requester_email: val.email,
            department: val.department,
        }
    }
}

/// List requests, newest first
///
/// Without criteria every request is shown. Criteria combine: a request has
/// to match all of them.
#[derive(Args)]
pub struct ListArgs {
    #[arg(short, long, value_enum, help = "Only requests in this status")]
    pub status: Option<StatusArg>,
    #[arg(short, long, value_enum, help = "Only requests of this category")]
    pub category: Option<CategoryArg>,
    #[arg(short, long, value_enum, help = "Only requests with this priority")]
    pub priority: Option<PriorityArg>,
    #[arg(long, help = "Only requests from this department")]
    pub department: Option<String>,
    #[arg(long, help = "Case-insensitive search in request titles")]
    pub search: Option<String>,
}

impl From<ListArgs> for ListRequests {
    fn from(val: ListArgs) -> Self {
        ListRequests {
            status: val.status.map(|s| s.to_string()),
            category: val.category.map(|c| RequestCategory::from(c).to_string()),
            priority: val.priority.map(|p| Priority::from(p).to_string()),
            department: val.department,
            search: val.search,
        }
    }
}

/// Show every detail of one request
#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "ID of the request to show")]
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// Move a request to another status
///
/// The workflow is pending → in_review → approved | rejected, then
/// approved → completed. Run with --allow-any-transition to lift it.
#[derive(Args)]
pub struct StatusArgs {
    #[arg(help = "ID of the request to move")]
    pub id: u64,
    #[arg(value_enum, help = "Target status")]
    pub status: StatusArg,
}

impl From<StatusArgs> for UpdateStatus {
    fn from(val: StatusArgs) -> Self {
        UpdateStatus {
            id: val.id,
            status: val.status.to_string(),
        }
    }
}

/// Change fields of a request
///
/// Fields left out keep their value. An empty --assignee or --notes clears
/// the field.
#[derive(Args)]
pub struct UpdateArgs {
    #[arg(help = "ID of the request to update")]
    pub id: u64,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, value_enum, help = "New status, checked like 'status'")]
    pub status: Option<StatusArg>,
    #[arg(long)]
    pub requester: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long, help = "Person handling the request")]
    pub assignee: Option<String>,
    #[arg(long, help = "Free-form notes")]
    pub notes: Option<String>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Attachment references as comma-separated list"
    )]
    pub attachments: Option<Vec<String>>,
}

impl From<UpdateArgs> for UpdateRequest {
    fn from(val: UpdateArgs) -> Self {
        UpdateRequest {
            id: val.id,
            title: val.title,
            description: val.description,
            category: val.category.map(|c| RequestCategory::from(c).to_string()),
            priority: val.priority.map(|p| Priority::from(p).to_string()),
            status: val.status.map(|s| s.to_string()),
            requester_name: val.requester,
            requester_email: val.email,
            department: val.department,
            assigned_to: val.assignee,
            notes: val.notes,
            attachments: val.attachments,
        }
    }
}

/// Delete a request
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "ID of the request to delete")]
    pub id: u64,
}

impl From<DeleteArgs> for Id {
    fn from(val: DeleteArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum RequestCommands {
    /// Submit a new request
    #[command(alias = "c")]
    Create(CreateArgs),
    /// List requests
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show details of a request
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Move a request to another status
    #[command(alias = "st")]
    Status(StatusArgs),
    /// Change fields of a request
    #[command(alias = "u")]
    Update(UpdateArgs),
    /// Delete a request
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Show request counts per status
    Dashboard,
    /// Print every request as JSON
    Export,
}

/// Command-line representation of request statuses.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pending,
    #[value(alias = "in_review")]
    InReview,
    Approved,
    Rejected,
    Completed,
}

impl From<StatusArg> for RequestStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Pending => RequestStatus::Pending,
            StatusArg::InReview => RequestStatus::InReview,
            StatusArg::Approved => RequestStatus::Approved,
            StatusArg::Rejected => RequestStatus::Rejected,
            StatusArg::Completed => RequestStatus::Completed,
        }
    }
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", RequestStatus::from(*self).as_str())
    }
}

/// Command-line representation of request categories.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    #[value(alias = "vacation")]
    VacationTime,
    #[value(alias = "expense")]
    ExpenseReimbursement,
    #[value(alias = "equipment")]
    EquipmentRequest,
    #[value(alias = "it")]
    ItSupport,
    #[value(alias = "facility")]
    FacilityMaintenance,
    #[value(alias = "document")]
    DocumentRequest,
    Other,
}

impl From<CategoryArg> for RequestCategory {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::VacationTime => RequestCategory::VacationTime,
            CategoryArg::ExpenseReimbursement => RequestCategory::ExpenseReimbursement,
            CategoryArg::EquipmentRequest => RequestCategory::EquipmentRequest,
            CategoryArg::ItSupport => RequestCategory::ItSupport,
            CategoryArg::FacilityMaintenance => RequestCategory::FacilityMaintenance,
            CategoryArg::DocumentRequest => RequestCategory::DocumentRequest,
            CategoryArg::Other => RequestCategory::Other,
        }
    }
}

/// Command-line representation of priorities.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Session state: the store plus the renderer that presents its output.
pub struct Cli {
    store: RequestStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: RequestStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Run one parsed session command.
    ///
    /// A miss on an unknown id is reported as `DeskError::RequestNotFound`
    /// so the session can count it as a failed line; the store itself is
    /// left untouched.
    pub fn handle_command(&mut self, command: RequestCommands) -> Result<()> {
        match command {
            RequestCommands::Create(args) => self.create(&args.into()),
            RequestCommands::List(args) => self.list(&args.into()),
            RequestCommands::Show(args) => self.show(&args.into()),
            RequestCommands::Status(args) => self.update_status(&args.into()),
            RequestCommands::Update(args) => self.update(args.into()),
            RequestCommands::Delete(args) => self.delete(&args.into()),
            RequestCommands::Dashboard => self.dashboard(),
            RequestCommands::Export => self.export(),
        }
    }

    fn create(&mut self, params: &CreateRequest) -> Result<()> {
        let request = self.store.create_request_validated(params)?;
        debug!("Session created request {}", request.id);
        self.renderer
            .render(&CreateResult::new(request).to_string())
    }

    fn list(&self, params: &ListRequests) -> Result<()> {
        let requests = self.store.list_requests(params)?;
        let title = if requests.is_empty() {
            "No matching requests"
        } else {
            "Requests"
        };
        self.renderer.render(&format!("# {title}\n\n{requests}"))
    }

    fn show(&self, params: &Id) -> Result<()> {
        let request = self
            .store
            .show_request(params)
            .ok_or(DeskError::RequestNotFound { id: params.id })?;
        self.renderer.render(&request.to_string())
    }

    fn update_status(&mut self, params: &UpdateStatus) -> Result<()> {
        let request = self
            .store
            .update_status_validated(params)?
            .ok_or(DeskError::RequestNotFound { id: params.id })?;
        let changes = vec![format!("Changed status to {}", request.status)];
        self.renderer
            .render(&UpdateResult::with_changes(request, changes).to_string())
    }

    fn update(&mut self, params: UpdateRequest) -> Result<()> {
        let id = params.id;
        let fields = UpdateRequestFields::try_from(params)?;
        let changes = fields.change_list();
        let request = self
            .store
            .update_fields(id, fields)?
            .ok_or(DeskError::RequestNotFound { id })?;
        self.renderer
            .render(&UpdateResult::with_changes(request, changes).to_string())
    }

    fn delete(&mut self, params: &Id) -> Result<()> {
        let request = self
            .store
            .delete_request(params)
            .ok_or(DeskError::RequestNotFound { id: params.id })?;
        self.renderer
            .render(&DeleteResult::new(request).to_string())
    }

    fn dashboard(&self) -> Result<()> {
        self.renderer.render(&self.store.dashboard().to_string())
    }

    fn export(&self) -> Result<()> {
        // JSON goes out unstyled so it can be piped
        println!("{}", self.store.export_json()?);
        Ok(())
    }
}
