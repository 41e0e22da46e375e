//! Board state engine
//!
//! [`Board`] owns the authoritative job collection. Columns and sorted rows
//! are projections recomputed on every call; nothing derived is cached.
//!
//! - Loads replace the whole collection. A failed load clears it.
//! - Moves rewrite the status locally and synchronously, then notify the
//!   [`MoveHook`]. No remote call is made.
//! - Removals go to the [`JobSource`] first and only drop the local record
//!   once the job service confirms. They require a [`RemovalConfirmation`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify::{classify, Column};
use crate::error::{Error, Result};
use crate::record::{JobRecord, RecordId};
use crate::sort::{sort_by_date, sorted_by_date, SortDirection};
use crate::sync::{JobSource, NetworkError};

/// How the board is presented. Has no effect on the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Table,
    #[default]
    Board,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Board => "board",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Board,
            ViewMode::Board => ViewMode::Table,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "board" => Ok(ViewMode::Board),
            other => Err(Error::InvalidArgument(format!(
                "unknown view '{other}' (expected table|board)"
            ))),
        }
    }
}

/// Where the board stands with respect to its last load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum LoadState {
    /// No load has completed yet
    Loading,
    /// Records are present (possibly zero of them)
    Ready,
    /// The job service answered with an absent collection
    Empty,
    /// The last load failed; nothing is displayed
    Failed(String),
}

/// Sequence number of one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Result of applying a load response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub count: usize,
    /// A later load was issued before this response was applied. The
    /// response was still applied; the last one to arrive wins.
    pub superseded: bool,
}

/// Emitted after a record changes lanes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEvent {
    pub id: RecordId,
    pub from: Column,
    pub to: Column,
    pub previous_status: String,
    pub status: String,
}

/// Outcome of a move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<MoveEvent>,
}

impl MoveOutcome {
    fn unchanged() -> Self {
        Self {
            changed: false,
            event: None,
        }
    }
}

/// Seam for persisting moves. Called after the local mutation is visible.
pub trait MoveHook: Send + Sync {
    fn after_move(&self, event: &MoveEvent);
}

/// Default hook: moves stay local.
#[derive(Debug, Default)]
pub struct LocalOnly;

impl MoveHook for LocalOnly {
    fn after_move(&self, event: &MoveEvent) {
        tracing::debug!(id = event.id, to = %event.to, "Move not persisted");
    }
}

/// A drag position: lane plus index within the lane's sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub column: Column,
    pub index: usize,
}

/// A finished drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDrop {
    pub record_id: RecordId,
    pub source: Slot,
    /// `None` when the record was released outside any lane
    pub destination: Option<Slot>,
}

/// Proof that the user confirmed a removal. Only [`Board::confirm_removal`]
/// creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalConfirmation {
    id: RecordId,
    company: String,
    title: String,
}

impl RemovalConfirmation {
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Prompt text for the interaction layer.
    pub fn prompt(&self) -> String {
        match (self.company.is_empty(), self.title.is_empty()) {
            (false, false) => format!("Delete '{}' at {}?", self.title, self.company),
            (true, false) => format!("Delete '{}'?", self.title),
            (false, true) => format!("Delete application at {}?", self.company),
            (true, true) => format!("Delete job {}?", self.id),
        }
    }
}

/// The three lanes, each sorted by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Columns {
    pub applied: Vec<JobRecord>,
    pub interview: Vec<JobRecord>,
    pub offer: Vec<JobRecord>,
}

impl Columns {
    pub fn get(&self, column: Column) -> &[JobRecord] {
        match column {
            Column::Applied => &self.applied,
            Column::Interview => &self.interview,
            Column::Offer => &self.offer,
        }
    }

    fn get_mut(&mut self, column: Column) -> &mut Vec<JobRecord> {
        match column {
            Column::Applied => &mut self.applied,
            Column::Interview => &mut self.interview,
            Column::Offer => &mut self.offer,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &[JobRecord])> + '_ {
        Column::ALL.into_iter().map(move |column| (column, self.get(column)))
    }

    pub fn total(&self) -> usize {
        self.applied.len() + self.interview.len() + self.offer.len()
    }
}

/// Board state: records plus presentation flags.
pub struct Board {
    records: Vec<JobRecord>,
    state: LoadState,
    view_mode: ViewMode,
    sort_direction: SortDirection,
    notice: Option<String>,
    issued_loads: u64,
    move_hook: Box<dyn MoveHook>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ViewMode::default(), SortDirection::default())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("records", &self.records.len())
            .field("state", &self.state)
            .field("view_mode", &self.view_mode)
            .field("sort_direction", &self.sort_direction)
            .field("notice", &self.notice)
            .field("issued_loads", &self.issued_loads)
            .finish()
    }
}

impl Board {
    pub fn new(view_mode: ViewMode, sort_direction: SortDirection) -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Loading,
            view_mode,
            sort_direction,
            notice: None,
            issued_loads: 0,
            move_hook: Box::new(LocalOnly),
        }
    }

    pub fn from_config(config: &crate::config::BoardConfig) -> Self {
        Self::new(config.view, config.sort)
    }

    /// Replace the hook notified after each move.
    pub fn with_move_hook(mut self, hook: impl MoveHook + 'static) -> Self {
        self.move_hook = Box::new(hook);
        self
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
    }

    pub fn toggle_sort_direction(&mut self) -> SortDirection {
        self.sort_direction = self.sort_direction.flipped();
        self.sort_direction
    }

    /// Non-fatal message from the last failed removal.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Authoritative records in load order.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&JobRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole collection and clear any error state.
    ///
    /// Ids are expected to be unique; later duplicates are dropped.
    pub fn load(&mut self, records: Vec<JobRecord>) -> usize {
        let mut seen = HashSet::with_capacity(records.len());
        let incoming = records.len();
        let records: Vec<JobRecord> = records
            .into_iter()
            .filter(|record| seen.insert(record.id))
            .collect();
        if records.len() != incoming {
            tracing::warn!(
                dropped = incoming - records.len(),
                "Dropped jobs with duplicate ids"
            );
        }

        tracing::debug!(count = records.len(), "Loaded jobs");
        self.records = records;
        self.state = LoadState::Ready;
        self.notice = None;
        self.records.len()
    }

    /// Record a load that returned no collection at all.
    pub fn load_absent(&mut self) {
        tracing::debug!("Job service returned no collection");
        self.records.clear();
        self.state = LoadState::Empty;
        self.notice = None;
    }

    /// Record a failed load. Nothing stale stays visible.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "Job load failed");
        self.records.clear();
        self.state = LoadState::Failed(message);
        self.notice = None;
    }

    /// Issue a ticket for a load about to be requested.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_loads += 1;
        LoadTicket(self.issued_loads)
    }

    /// Whether a later load has been issued since `ticket`.
    pub fn is_superseded(&self, ticket: LoadTicket) -> bool {
        ticket.0 < self.issued_loads
    }

    /// Apply a fetch response as one state replacement.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        response: std::result::Result<Option<Vec<JobRecord>>, NetworkError>,
    ) -> Result<LoadReport> {
        let superseded = self.is_superseded(ticket);
        if superseded {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued_loads,
                "Applying superseded load response"
            );
        }

        match response {
            Ok(Some(records)) => {
                let count = self.load(records);
                Ok(LoadReport { count, superseded })
            }
            Ok(None) => {
                self.load_absent();
                Err(Error::EmptyCollection)
            }
            Err(err) => {
                let message = err.to_string();
                self.fail_load(message.clone());
                Err(Error::Load(message))
            }
        }
    }

    /// Fetch everything from `source` and replace the collection.
    pub async fn refresh(&mut self, source: &dyn JobSource) -> Result<LoadReport> {
        let ticket = self.begin_load();
        let response = source.fetch_all().await;
        self.finish_load(ticket, response)
    }

    /// The three lanes, each sorted with the current direction.
    pub fn columns(&self) -> Columns {
        let mut columns = Columns::default();
        for record in &self.records {
            columns.get_mut(classify(&record.status)).push(record.clone());
        }
        for column in Column::ALL {
            sort_by_date(columns.get_mut(column), self.sort_direction);
        }
        columns
    }

    /// All records sorted with the current direction, for the table view.
    pub fn rows(&self) -> Vec<JobRecord> {
        sorted_by_date(&self.records, self.sort_direction)
    }

    /// Move a record to `target`. A record already in `target` is left alone.
    pub fn move_record(&mut self, id: RecordId, target: Column) -> Result<MoveOutcome> {
        let record = self.get(id).ok_or(Error::RecordNotFound(id))?;
        if classify(&record.status) == target {
            return Ok(MoveOutcome::unchanged());
        }
        self.apply_move(id, target)
    }

    /// Apply a finished drag gesture.
    pub fn handle_drop(&mut self, drop: DragDrop) -> Result<MoveOutcome> {
        let Some(destination) = drop.destination else {
            return Ok(MoveOutcome::unchanged());
        };
        if destination == drop.source {
            return Ok(MoveOutcome::unchanged());
        }
        self.apply_move(drop.record_id, destination.column)
    }

    fn apply_move(&mut self, id: RecordId, target: Column) -> Result<MoveOutcome> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(Error::RecordNotFound(id))?;

        let from = classify(&record.status);
        let status = target.canonical_status().to_string();
        let previous_status = std::mem::replace(&mut record.status, status.clone());

        let event = MoveEvent {
            id,
            from,
            to: target,
            previous_status,
            status,
        };
        tracing::debug!(id, from = %event.from, to = %event.to, "Moved job");
        self.move_hook.after_move(&event);

        Ok(MoveOutcome {
            changed: true,
            event: Some(event),
        })
    }

    /// First half of a removal: check the record exists and hand back a
    /// confirmation for the interaction layer to present.
    pub fn confirm_removal(&self, id: RecordId) -> Result<RemovalConfirmation> {
        let record = self.get(id).ok_or(Error::RecordNotFound(id))?;
        Ok(RemovalConfirmation {
            id,
            company: record.company.clone(),
            title: record.title.clone(),
        })
    }

    /// Delete a confirmed record remotely, then locally.
    ///
    /// On failure the collection is untouched, the message is kept as a
    /// notice, and `Error::Delete` is returned. A job the service no longer
    /// knows is treated as already deleted.
    pub async fn remove(
        &mut self,
        source: &dyn JobSource,
        confirmation: RemovalConfirmation,
    ) -> Result<()> {
        let id = confirmation.id;
        if self.get(id).is_none() {
            return Err(Error::RecordNotFound(id));
        }

        match source.delete(id).await {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {
                tracing::debug!(id, "Job already deleted remotely");
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(id, error = %message, "Job delete failed");
                self.notice = Some(format!("Could not delete job {id}: {message}"));
                return Err(Error::Delete { id, message });
            }
        }

        self.records.retain(|record| record.id != id);
        self.notice = None;
        tracing::debug!(id, "Deleted job");
        Ok(())
    }
}
