//! Event (placement request) model.
//!
//! An event is one recurring teaching session to be placed somewhere in
//! the weekly grid. Events are created once from external input and
//! never mutated; events sharing a group identifier are placed together
//! as a single job.

use serde::{Deserialize, Serialize};

/// Room type that routes an event to its class home room.
pub const STANDARD_ROOM_TYPE: &str = "Standard";
/// Teacher token booked by the assembly to cover the whole staff body.
pub const ALL_STAFF_TEACHER: &str = "*ALL_STAFF*";
/// Subject name identifying the weekly assembly event.
pub const ASSEMBLY_SUBJECT: &str = "Assembly";
/// Pseudo-class token booked by the assembly to block every class.
pub const ASSEMBLY_CLASS: &str = "*ASSEMBLY*";

/// An immutable placement request.
///
/// String fields are assumed already trimmed and validated upstream;
/// see [`crate::validation`] for boundary checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable unique identifier.
    pub id: String,
    /// Class attending the session.
    pub class_id: String,
    /// Teacher delivering the session.
    pub teacher_id: String,
    /// Subject name.
    pub subject: String,
    /// Required room type; [`STANDARD_ROOM_TYPE`] routes to the home room.
    pub required_room_type: String,
    /// Designated home room, if any.
    pub home_room: Option<String>,
    /// Length of the session in consecutive periods (≥ 1).
    pub duration: u8,
    /// Session identifier shared by events that must be placed together.
    pub group_id: Option<String>,
}

impl Event {
    /// Creates a single-period event with a Standard room requirement.
    pub fn new(
        id: impl Into<String>,
        class_id: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            class_id: class_id.into(),
            teacher_id: teacher_id.into(),
            subject: String::new(),
            required_room_type: STANDARD_ROOM_TYPE.to_string(),
            home_room: None,
            duration: 1,
            group_id: None,
        }
    }

    /// Sets the subject name.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the required room type.
    pub fn with_room_type(mut self, room_type: impl Into<String>) -> Self {
        self.required_room_type = room_type.into();
        self
    }

    /// Sets the home room.
    pub fn with_home_room(mut self, room: impl Into<String>) -> Self {
        self.home_room = Some(room.into());
        self
    }

    /// Sets the duration in periods.
    pub fn with_duration(mut self, periods: u8) -> Self {
        self.duration = periods;
        self
    }

    /// Sets the group (session) identifier.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Whether this is the weekly assembly event.
    pub fn is_assembly(&self) -> bool {
        self.subject == ASSEMBLY_SUBJECT
    }

    /// Identity used for job grouping and failure-weight lookups:
    /// the group id when present, otherwise the event id.
    pub fn job_key(&self) -> &str {
        self.group_id.as_deref().unwrap_or(&self.id)
    }
}
