use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::BookingError;
use crate::domain::common::AggregateId;
use crate::enums::ServiceType;

// ============================================================================
// ID Types
// ============================================================================

/// Unique booking identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub Uuid);

impl BookingId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for BookingId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::from_string(s).map(BookingId::new)
    }
}

/// Task identifier, unique within its booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl AggregateId for TaskId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        u32::from_string(s).map(TaskId)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Booking lifecycle. Variant order is the only allowed direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingStatus {
    Upcoming,
    Active,
    Complete,
}

impl BookingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Active => "active",
            BookingStatus::Complete => "complete",
        }
    }

    /// Translation key of the display name
    pub fn label_key(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "statusUpcoming",
            BookingStatus::Active => "statusActive",
            BookingStatus::Complete => "statusComplete",
        }
    }

    /// Badge variant used by the dashboards
    pub fn badge_variant(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "neutral",
            BookingStatus::Active => "warning",
            BookingStatus::Complete => "success",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "upcoming" => Some(BookingStatus::Upcoming),
            "active" => Some(BookingStatus::Active),
            "complete" => Some(BookingStatus::Complete),
            _ => None,
        }
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A single unit of repair work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairTask {
    pub id: TaskId,
    pub description: String,
    pub done: bool,
}

/// A scheduled repair engagement for one client and vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BookingRecord")]
pub struct Booking {
    pub id: BookingId,
    pub client_name: String,
    pub vehicle_description: String,
    pub service_type: ServiceType,
    pub scheduled_at: NaiveDateTime,
    /// Change through `advance_status` or `mark_complete`; direct writes
    /// skip the forward-only check.
    pub status: BookingStatus,
    pub tasks: Vec<RepairTask>,

    /// Next task number to hand out. Never decreases.
    next_task_seq: u32,
}

fn first_task_seq() -> u32 {
    1
}

/// Wire form of a booking. The task counter is optional there and is
/// never allowed to fall to or below an existing task id.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRecord {
    id: BookingId,
    client_name: String,
    vehicle_description: String,
    service_type: ServiceType,
    scheduled_at: NaiveDateTime,
    status: BookingStatus,
    #[serde(default)]
    tasks: Vec<RepairTask>,
    next_task_seq: Option<u32>,
}

impl From<BookingRecord> for Booking {
    fn from(record: BookingRecord) -> Self {
        let after_tasks = record
            .tasks
            .iter()
            .map(|t| t.id.0.saturating_add(1))
            .max()
            .unwrap_or_else(first_task_seq);
        let next_task_seq = record
            .next_task_seq
            .unwrap_or_else(first_task_seq)
            .max(after_tasks);
        Self {
            id: record.id,
            client_name: record.client_name,
            vehicle_description: record.vehicle_description,
            service_type: record.service_type,
            scheduled_at: record.scheduled_at,
            status: record.status,
            tasks: record.tasks,
            next_task_seq,
        }
    }
}

impl Booking {
    /// Create an upcoming booking without tasks
    pub fn new(
        id: BookingId,
        client_name: impl Into<String>,
        vehicle_description: impl Into<String>,
        service_type: ServiceType,
        scheduled_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            client_name: client_name.into(),
            vehicle_description: vehicle_description.into(),
            service_type,
            scheduled_at,
            status: BookingStatus::Upcoming,
            tasks: Vec::new(),
            next_task_seq: first_task_seq(),
        }
    }

    /// Builder used by seed data
    pub fn with_task(mut self, description: &str, done: bool) -> Self {
        if let Ok(id) = self.add_task(description) {
            if let Some(task) = self.task_mut(id) {
                task.done = done;
            }
        }
        self
    }

    /// Builder used by seed data. Only moves forward; a regression is
    /// logged and ignored.
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        if let Err(e) = self.advance_status(status) {
            log::debug!("with_status ignored: {}", e);
        }
        self
    }

    pub fn task(&self, id: TaskId) -> Option<&RepairTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut RepairTask> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Flip `done` on a task, returning the new value
    pub fn toggle_task(&mut self, task_id: TaskId) -> Result<bool, BookingError> {
        let booking = self.id;
        let task = self.task_mut(task_id).ok_or(BookingError::UnknownTask {
            booking,
            task: task_id,
        })?;
        task.done = !task.done;
        Ok(task.done)
    }

    /// Append a pending task. The description is trimmed and must not be empty.
    pub fn add_task(&mut self, description: &str) -> Result<TaskId, BookingError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(BookingError::EmptyDescription);
        }

        let id = TaskId(self.next_task_seq);
        self.next_task_seq += 1;
        self.tasks.push(RepairTask {
            id,
            description: description.to_string(),
            done: false,
        });
        Ok(id)
    }

    /// Manual override: completion does not look at the task list.
    pub fn mark_complete(&mut self) {
        if self.status != BookingStatus::Complete {
            log::info!("booking {} marked complete", self.id.as_string());
        }
        self.status = BookingStatus::Complete;
    }

    /// Move the status forward. Returns whether anything changed.
    pub fn advance_status(&mut self, next: BookingStatus) -> Result<bool, BookingError> {
        if next < self.status {
            return Err(BookingError::StatusRegression {
                from: self.status,
                to: next,
            });
        }
        if next == self.status {
            return Ok(false);
        }
        log::info!(
            "booking {}: {} -> {}",
            self.id.as_string(),
            self.status.code(),
            next.code()
        );
        self.status = next;
        Ok(true)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }

    pub fn completion_percentage(&self) -> u8 {
        completion_percentage(&self.tasks)
    }
}

/// Share of done tasks in percent, rounded half up; 0 for an empty list.
pub fn completion_percentage(tasks: &[RepairTask]) -> u8 {
    let total = tasks.len();
    if total == 0 {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.done).count();
    // round(100 * done / total) == floor((200 * done + total) / (2 * total))
    ((200 * done + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking() -> Booking {
        let at = NaiveDate::from_ymd_opt(2025, 10, 15)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .unwrap();
        Booking::new(
            BookingId::new_v4(),
            "Athman Ibrahim",
            "Toyota Premio 2018",
            ServiceType::Repairs,
            at,
        )
    }

    fn tasks(done: &[bool]) -> Vec<RepairTask> {
        done.iter()
            .enumerate()
            .map(|(i, d)| RepairTask {
                id: TaskId(i as u32 + 1),
                description: format!("task {}", i + 1),
                done: *d,
            })
            .collect()
    }

    #[test]
    fn test_completion_percentage_empty_is_zero() {
        assert_eq!(completion_percentage(&[]), 0);
    }

    #[test]
    fn test_completion_percentage_rounds_half_up() {
        assert_eq!(completion_percentage(&tasks(&[true, false, false, false])), 25);
        assert_eq!(completion_percentage(&tasks(&[true, false, false])), 33);
        assert_eq!(completion_percentage(&tasks(&[true, true, false])), 67);
        // 1/8 = 12.5 -> 13
        let mut eight = vec![false; 8];
        eight[0] = true;
        assert_eq!(completion_percentage(&tasks(&eight)), 13);
        assert_eq!(completion_percentage(&tasks(&[true, true])), 100);
    }

    #[test]
    fn test_completion_percentage_matches_formula() {
        for total in 1..=12usize {
            for done in 0..=total {
                let flags: Vec<bool> = (0..total).map(|i| i < done).collect();
                let expected = (100.0 * done as f64 / total as f64 + 0.5).floor() as u8;
                assert_eq!(completion_percentage(&tasks(&flags)), expected, "{done}/{total}");
            }
        }
    }

    #[test]
    fn test_toggle_twice_restores_and_leaves_others_alone() {
        let mut b = booking()
            .with_task("Engine diagnostics", true)
            .with_task("Oil change", false);
        let before = b.tasks.clone();

        assert_eq!(b.toggle_task(TaskId(2)), Ok(true));
        assert!(b.task(TaskId(1)).unwrap().done);
        assert_eq!(b.toggle_task(TaskId(2)), Ok(false));
        assert_eq!(b.tasks, before);
    }

    #[test]
    fn test_toggle_unknown_task() {
        let mut b = booking().with_task("Oil change", false);
        let err = b.toggle_task(TaskId(99)).unwrap_err();
        assert_eq!(
            err,
            BookingError::UnknownTask {
                booking: b.id,
                task: TaskId(99)
            }
        );
    }

    #[test]
    fn test_add_task_rejects_blank_descriptions() {
        let mut b = booking().with_task("Oil change", false);
        assert_eq!(b.add_task(""), Err(BookingError::EmptyDescription));
        assert_eq!(b.add_task("   \t"), Err(BookingError::EmptyDescription));
        assert_eq!(b.tasks.len(), 1);
    }

    #[test]
    fn test_add_task_ids_are_unique_and_monotonic() {
        let mut b = booking();
        let a = b.add_task("Wheel alignment").unwrap();
        let c = b.add_task("  Tyre rotation  ").unwrap();
        assert!(c > a);
        assert_eq!(b.task(c).unwrap().description, "Tyre rotation");
        assert!(!b.task(c).unwrap().done);
    }

    #[test]
    fn test_mark_complete_is_unconditional() {
        for status in [
            BookingStatus::Upcoming,
            BookingStatus::Active,
            BookingStatus::Complete,
        ] {
            let mut b = booking()
                .with_task("Oil change", false)
                .with_task("Brake replacement", false)
                .with_status(status);
            b.mark_complete();
            assert_eq!(b.status, BookingStatus::Complete);
            assert_eq!(b.completion_percentage(), 0);
        }
    }

    #[test]
    fn test_advance_status_never_regresses() {
        let mut b = booking();
        assert_eq!(b.advance_status(BookingStatus::Active), Ok(true));
        assert_eq!(b.advance_status(BookingStatus::Active), Ok(false));
        assert_eq!(
            b.advance_status(BookingStatus::Upcoming),
            Err(BookingError::StatusRegression {
                from: BookingStatus::Active,
                to: BookingStatus::Upcoming
            })
        );
        b.mark_complete();
        assert!(b.advance_status(BookingStatus::Active).is_err());
        assert_eq!(b.status, BookingStatus::Complete);
    }

    #[test]
    fn test_serializes_camel_case() {
        let b = booking().with_task("Oil change", false);
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["clientName"], "Athman Ibrahim");
        assert_eq!(json["status"], "upcoming");
        assert_eq!(json["serviceType"], "repairs");
        assert_eq!(json["tasks"][0]["done"], false);
    }

    #[test]
    fn test_task_counter_survives_missing_field() {
        let b = booking()
            .with_task("Engine diagnostics", true)
            .with_task("Oil change", false);
        let mut json = serde_json::to_value(&b).unwrap();
        json.as_object_mut().unwrap().remove("nextTaskSeq");

        let mut restored: Booking = serde_json::from_value(json).unwrap();
        let id = restored.add_task("Wheel balancing").unwrap();
        assert_eq!(id, TaskId(3));
        assert_eq!(restored.tasks.iter().filter(|t| t.id == id).count(), 1);
    }

    #[test]
    fn test_stale_task_counter_is_raised() {
        let b = booking().with_task("Oil change", false);
        let mut json = serde_json::to_value(&b).unwrap();
        json["nextTaskSeq"] = serde_json::json!(1);

        let mut restored: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(restored.add_task("Brake replacement"), Ok(TaskId(2)));
        assert_eq!(restored.add_task("Interior cleaning"), Ok(TaskId(3)));
    }

    #[test]
    fn test_with_status_does_not_regress() {
        let mut b = booking();
        b.mark_complete();
        let b = b.with_status(BookingStatus::Upcoming);
        assert_eq!(b.status, BookingStatus::Complete);

        let active = booking().with_status(BookingStatus::Active);
        assert_eq!(active.status, BookingStatus::Active);
    }
}
