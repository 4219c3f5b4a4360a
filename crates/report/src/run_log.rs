//! RunLog - Check records for one smoke run

use serde::{Deserialize, Serialize};
use shared::CheckId;
use std::collections::VecDeque;
use std::time::Duration;
use uuid::Uuid;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Passed,
    Failed,
}

/// One check's record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRecord {
    pub timestamp: String,
    pub check: CheckId,
    pub verdict: Verdict,
    pub duration_ms: u64,
    /// Failure reason, absent for passes
    pub detail: Option<String>,
}

impl CheckRecord {
    /// Record for a passing check, stamped now
    pub fn pass(check: CheckId, duration: Duration) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            check,
            verdict: Verdict::Passed,
            duration_ms: duration.as_millis() as u64,
            detail: None,
        }
    }

    /// Record for a failing check, stamped now
    pub fn fail(check: CheckId, duration: Duration, reason: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            check,
            verdict: Verdict::Failed,
            duration_ms: duration.as_millis() as u64,
            detail: Some(reason.into()),
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

/// Bounded log of check records
#[derive(Debug)]
pub struct RunLog {
    run_id: Uuid,
    started_at: String,
    entries: VecDeque<CheckRecord>,
    max_entries: usize,
}

impl RunLog {
    /// Create a new RunLog
    pub fn new(max_entries: usize) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: chrono::Utc::now().to_rfc3339(),
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Append a record, evicting the oldest past capacity
    pub fn record(&mut self, entry: CheckRecord) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// All records in execution order
    pub fn entries(&self) -> impl Iterator<Item = &CheckRecord> {
        self.entries.iter()
    }

    /// Most recent records first
    pub fn recent(&self, limit: usize) -> Vec<&CheckRecord> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Most recent failures first
    pub fn failures(&self, limit: usize) -> Vec<&CheckRecord> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !e.passed())
            .take(limit)
            .collect()
    }

    pub fn stats(&self) -> RunStats {
        let total = self.entries.len();
        let failed = self.entries.iter().filter(|e| !e.passed()).count();

        RunStats {
            total,
            passed: total - failed,
            failed,
        }
    }

    /// At least one check ran and none failed
    pub fn is_success(&self) -> bool {
        let stats = self.stats();
        stats.total > 0 && stats.failed == 0
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        let stats = self.stats();
        serde_json::json!({
            "runId": self.run_id.to_string(),
            "startedAt": self.started_at,
            "success": self.is_success(),
            "stats": {
                "total": stats.total,
                "passed": stats.passed,
                "failed": stats.failed,
            },
            "checks": serde_json::to_value(self.entries.iter().collect::<Vec<_>>())
                .unwrap_or_default(),
        })
    }
}

/// Run statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new(256)
    }
}
