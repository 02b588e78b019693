//! Execution timeline model.
//!
//! A timeline is an ordered, gapless partition of `[0, total_time)` into
//! idle intervals and process-execution intervals. It is the Gantt-chart
//! view of a simulation run.
//!
//! # Normalization
//!
//! Preemptive policies emit one entry per dispatch slice, so a process that
//! is re-selected without interruption shows up as several touching
//! entries. [`Timeline::normalized`] folds every such run (and every run of
//! touching idle entries) into a single entry. Normalization is idempotent.

use serde::{Deserialize, Serialize};

/// Kind of a timeline interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// CPU has nothing to run.
    Idle,
    /// CPU runs a process.
    Process,
}

/// One interval `[start, end)` of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub kind: EntryKind,
    pub start: i64,
    pub end: i64,
    /// Running process. Present iff `kind == Process`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<String>,
}

impl TimelineEntry {
    /// Creates an idle interval.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            kind: EntryKind::Idle,
            start,
            end,
            process_id: None,
        }
    }

    /// Creates a process-execution interval.
    pub fn process(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            kind: EntryKind::Process,
            start,
            end,
            process_id: Some(process_id.into()),
        }
    }

    /// Interval length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.kind == EntryKind::Idle
    }

    /// Whether `next` continues this entry: same kind, same process, touching.
    pub fn continues_with(&self, next: &TimelineEntry) -> bool {
        self.end == next.start && self.kind == next.kind && self.process_id == next.process_id
    }
}

/// Ordered sequence of timeline entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry as-is.
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Appends an entry, extending the last entry instead when `entry`
    /// continues it.
    pub fn push_merged(&mut self, entry: TimelineEntry) {
        if let Some(last) = self.entries.last_mut() {
            if last.continues_with(&entry) {
                last.end = entry.end;
                return;
            }
        }
        self.entries.push(entry);
    }

    /// Returns a copy with every continuous run folded into one entry.
    pub fn normalized(&self) -> Timeline {
        let mut merged = Timeline::new();
        for entry in &self.entries {
            merged.push_merged(entry.clone());
        }
        merged
    }

    /// Entries in time order.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last entry (0 for an empty timeline).
    pub fn total_time(&self) -> i64 {
        self.entries.last().map(|e| e.end).unwrap_or(0)
    }

    /// Sum of idle entry durations.
    pub fn idle_time(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.is_idle())
            .map(|e| e.duration())
            .sum()
    }

    /// Sum of process entry durations.
    pub fn busy_time(&self) -> i64 {
        self.total_time() - self.idle_time()
    }

    /// All execution entries of one process.
    pub fn entries_for(&self, process_id: &str) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id.as_deref() == Some(process_id))
            .collect()
    }

    /// CPU time granted to one process.
    pub fn busy_time_for(&self, process_id: &str) -> i64 {
        self.entries_for(process_id)
            .iter()
            .map(|e| e.duration())
            .sum()
    }

    /// Whether the entries partition `[0, total_time)`: first entry starts
    /// at 0, every entry is non-empty and touches its successor.
    pub fn is_contiguous(&self) -> bool {
        if let Some(first) = self.entries.first() {
            if first.start != 0 {
                return false;
            }
        }
        self.entries.iter().all(|e| e.end > e.start)
            && self.entries.windows(2).all(|w| w[0].end == w[1].start)
    }
}

impl From<Vec<TimelineEntry>> for Timeline {
    fn from(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }
}
