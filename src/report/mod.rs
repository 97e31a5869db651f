use crate::constants::{MAX_STRESS, REPORT_FILE_PREFIX};
use crate::models::Entry;
use chrono::{Local, NaiveDate, TimeZone};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Aggregate view over one local calendar day of entries.
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total: usize,
    /// Integer floor of the stress sum divided by the entry count.
    pub average_stress: i64,
    /// Mode of the emotion labels; ties go to the first label to
    /// reach the running maximum in scan order.
    pub dominant_emotion: String,
    entries: Vec<Entry>,
}

impl DailyReport {
    /// Build the report for `date` from that day's entries, oldest
    /// first. Returns `None` when there is nothing to report.
    pub fn from_entries(date: NaiveDate, entries: &[Entry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let total = entries.len();
        let sum: i64 = entries.iter().map(|e| i64::from(e.stress)).sum();
        let average_stress = sum / total as i64;

        Some(Self {
            date,
            total,
            average_stress,
            dominant_emotion: dominant_emotion(entries),
            entries: entries.to_vec(),
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}{}.txt", REPORT_FILE_PREFIX, self.date.format("%Y-%m-%d"))
    }

    /// Render the human-readable text block: header, summary line,
    /// then one numbered line per entry.
    pub fn render(&self) -> String {
        let mut out = format!(
            "MOODLOG DAILY REPORT - {}\n{}\nTotal: {} | Avg: {}/{} | Dominant: {}\n\n",
            self.date.format("%Y-%m-%d"),
            "=".repeat(50),
            self.total,
            self.average_stress,
            MAX_STRESS,
            self.dominant_emotion,
        );

        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!(
                "{}. [{}] {} ({})\n",
                i + 1,
                local_time_of(entry.timestamp),
                entry.emotion,
                entry.stress,
            ));
        }

        out
    }

    /// Write the rendered report into `dir`, creating the directory
    /// if absent. A report already generated for the same day is
    /// overwritten.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        fs::write(&path, self.render())?;
        Ok(path)
    }
}

/// First label to achieve the running-maximum count while scanning
/// the entries in their given order.
fn dominant_emotion(entries: &[Entry]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best_label = "";
    let mut best_count = 0;

    for entry in entries {
        let count = counts
            .entry(entry.emotion.as_str())
            .and_modify(|c| *c += 1)
            .or_insert(1);
        if *count > best_count {
            best_count = *count;
            best_label = entry.emotion.as_str();
        }
    }

    best_label.to_string()
}

fn local_time_of(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
