//! Request lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Where a streamed page currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Nothing written yet.
    Start,
    ShellSent,
    /// The named section was the last one written.
    SectionSent(String),
    Completion,
}

/// Offsets from request start: free-form marks plus per-section records.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Duration>,
    sections: Vec<SectionTiming>,
    pending: HashMap<String, Duration>,
}

/// Start and sent offsets of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTiming {
    pub name: String,
    pub start: Duration,
    pub sent: Duration,
    /// Time between start and sent.
    pub duration: Duration,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
            sections: Vec::new(),
            pending: HashMap::new(),
        }
    }

    /// Record `name` at the current offset, replacing an earlier mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), self.start.elapsed());
    }

    pub fn mark_section_start(&mut self, section: &str) {
        self.pending
            .insert(section.to_string(), self.start.elapsed());
    }

    /// Record a section as sent. A section is listed once, at its first send.
    pub fn mark_section_sent(&mut self, section: &str) {
        let sent = self.start.elapsed();
        if self.sections.iter().any(|timing| timing.name == section) {
            return;
        }
        let start = self.pending.remove(section).unwrap_or(sent);
        self.sections.push(SectionTiming {
            name: section.to_string(),
            start,
            sent,
            duration: sent.saturating_sub(start),
        });
    }

    pub fn offset(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).copied()
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn time_to_shell(&self) -> Option<Duration> {
        self.offset("shell_sent")
    }

    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.sections.first().map(|timing| timing.sent)
    }

    /// Section names in send order.
    pub fn sections_sent(&self) -> Vec<&str> {
        self.sections
            .iter()
            .map(|timing| timing.name.as_str())
            .collect()
    }

    pub fn section_timing(&self, section: &str) -> Option<&SectionTiming> {
        self.sections.iter().find(|timing| timing.name == section)
    }

    pub fn section_timings(&self) -> &[SectionTiming] {
        &self.sections
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}
