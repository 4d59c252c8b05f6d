//! Timetabling domain models.
//!
//! Provides the core data types for representing weekly timetabling
//! problems and solutions: immutable placement requests (`Event`),
//! rooms, the per-trial occupancy substrate (`OccupancyGrid`), and the
//! solution types (`Placement`, `Schedule`, `TrialResult`).
//!
//! # Week Structure
//!
//! The week shape is fixed, not data-driven: 5 days × 13 periods, with a
//! break period every day and a blocked tail range on the final day.
//! See [`week`] for the constants.

mod event;
mod grid;
mod room;
mod schedule;
pub mod week;

pub use event::{
    Event, ALL_STAFF_TEACHER, ASSEMBLY_CLASS, ASSEMBLY_SUBJECT, STANDARD_ROOM_TYPE,
};
pub use grid::OccupancyGrid;
pub use room::Room;
pub use schedule::{Placement, Schedule, SlotKey, TrialResult};
pub use week::Day;
