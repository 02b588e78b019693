//! CPU scheduling domain models.
//!
//! Provides the data types for a simulation run: the immutable process
//! specification, the per-run mutable state, the annotated output record,
//! and the execution timeline.
//!
//! # Lifecycle
//!
//! | Type | Created by | Mutated by |
//! |------|-----------|------------|
//! | Process | Caller | Never (once a run starts) |
//! | ProcessState | Algorithm, at run start | That algorithm only |
//! | ScheduledProcess | Algorithm, at run end | Never |
//! | Schedule | Algorithm, at run end | Never |
//! | Timeline | Algorithm | Normalizer, then never |

mod process;
mod schedule;
mod timeline;

pub use process::{Process, ProcessState, ScheduledProcess, DEFAULT_PRIORITY};
pub use schedule::Schedule;
pub use timeline::{EntryKind, Timeline, TimelineEntry};
