//! Input validation for timetabling problems.
//!
//! Checks structural integrity of events and rooms before the engine
//! runs. Malformed rows never reach the hard-constraint loop: callers
//! either reject the whole input via [`validate_input`] or silently
//! skip bad rows via [`drop_malformed`], mirroring the upstream
//! ingestion policy. Detects:
//! - Missing class or teacher identity
//! - Non-positive or overlong durations
//! - Duplicate event ids and room names
//! - Home rooms that name no known room

use crate::models::week::PERIODS_PER_DAY;
use crate::models::{Event, Room};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An event has an empty class identifier.
    MissingClassId,
    /// An event has an empty teacher identifier.
    MissingTeacherId,
    /// An event has a zero duration.
    ZeroDuration,
    /// An event's duration exceeds the day length.
    OverlongDuration,
    /// Two events share the same id.
    DuplicateEventId,
    /// Two rooms share the same name.
    DuplicateRoomName,
    /// An event's home room names no known room.
    UnknownHomeRoom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling problem.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(events: &[Event], rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut room_names = HashSet::new();
    for room in rooms {
        if !room_names.insert(room.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRoomName,
                format!("Duplicate room name: {}", room.name),
            ));
        }
    }

    let mut event_ids = HashSet::new();
    for event in events {
        if !event_ids.insert(event.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEventId,
                format!("Duplicate event id: {}", event.id),
            ));
        }
        if event.class_id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingClassId,
                format!("Event '{}' has no class", event.id),
            ));
        }
        if event.teacher_id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingTeacherId,
                format!("Event '{}' has no teacher", event.id),
            ));
        }
        if event.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Event '{}' has zero duration", event.id),
            ));
        } else if event.duration > PERIODS_PER_DAY {
            errors.push(ValidationError::new(
                ValidationErrorKind::OverlongDuration,
                format!(
                    "Event '{}' spans {} periods (day holds {})",
                    event.id, event.duration, PERIODS_PER_DAY
                ),
            ));
        }
        if let Some(home) = &event.home_room {
            if !room_names.contains(home.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownHomeRoom,
                    format!("Event '{}' references unknown home room '{home}'", event.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Drops malformed events (empty class or teacher, zero duration),
/// keeping the rest. The silent-skip counterpart to [`validate_input`]
/// for callers that prefer a best-effort run over rejection.
pub fn drop_malformed(events: Vec<Event>) -> Vec<Event> {
    events
        .into_iter()
        .filter(|e| !e.class_id.is_empty() && !e.teacher_id.is_empty() && e.duration >= 1)
        .collect()
}
