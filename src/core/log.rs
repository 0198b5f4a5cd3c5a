//! Fixed-capacity terminal log.

use super::constants::LOG_CAPACITY;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Category of a log line (drives colouring in the presentation layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Info,
    Success,
    Warning,
    Error,
    System,
    Phase,
    Bounty,
    Mutation,
    Network,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub seq: u64,
    /// Virtual time at which the entry was written
    pub virtual_time: i64,
    /// Short source tag, e.g. "FINANCE" or "HACK"
    pub tag: String,
    pub message: String,
    pub kind: LogKind,
}

/// Ring buffer holding the most recent [`LOG_CAPACITY`] entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    next_seq: u64,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
            next_seq: 0,
        }
    }

    /// Appends an entry, evicting the oldest one when full.
    pub fn push(&mut self, virtual_time: i64, tag: &str, message: String, kind: LogKind) {
        if self.entries.len() >= LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            seq: self.next_seq,
            virtual_time,
            tag: tag.to_string(),
            message,
            kind,
        });
        self.next_seq += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Entries with a sequence number at or after `seq`.
    pub fn since(&self, seq: u64) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.seq >= seq)
    }

    /// Drops every entry. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sequence number the next pushed entry will get.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_seq() {
        let mut log = LogBuffer::new();
        log.push(0, "SYS", "one".to_string(), LogKind::Info);
        log.push(0, "SYS", "two".to_string(), LogKind::Info);
        let seqs: Vec<u64> = log.iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
        assert_eq!(log.next_seq(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = LogBuffer::new();
        for i in 0..(LOG_CAPACITY + 7) {
            log.push(i as i64, "SYS", format!("line {}", i), LogKind::Info);
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.iter().next().map(|e| e.seq), Some(7));
        assert_eq!(
            log.latest().map(|e| e.message.as_str()),
            Some("line 56")
        );
    }

    #[test]
    fn test_since_filters_by_seq() {
        let mut log = LogBuffer::new();
        for i in 0..5 {
            log.push(0, "SYS", format!("{}", i), LogKind::Info);
        }
        assert_eq!(log.since(3).count(), 2);
        assert_eq!(log.since(10).count(), 0);
    }
}
