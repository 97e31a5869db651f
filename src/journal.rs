use crate::classifier::{Classification, Classifier};
use crate::config::EmotionConfig;
use crate::constants::DEFAULT_RECENT_LIMIT;
use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::models::Entry;
use crate::report::DailyReport;
use crate::validation::normalize_entry_text;
use chrono::Local;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One stored entry, shaped for a UI layer.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: i64,
    pub text: String,
    pub emotion: String,
    pub stress: i32,
    pub timestamp: i64,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.unwrap_or_default(),
            text: entry.text,
            emotion: entry.emotion,
            stress: entry.stress,
            timestamp: entry.timestamp,
        }
    }
}

/// Per-emotion entry count for distribution views.
#[derive(Debug, Serialize)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: i64,
    pub color: String,
}

/// The seam a desktop shell calls: classification plus the persisted
/// entry log, behind one serialized connection. Presentation code
/// never touches SQL; it goes through these operations.
pub struct Journal {
    db: Arc<Mutex<Database>>,
    classifier: Classifier,
    config: EmotionConfig,
    reports_dir: PathBuf,
}

impl Journal {
    pub fn new(
        db: Arc<Mutex<Database>>,
        config: EmotionConfig,
        reports_dir: &Path,
    ) -> Result<Self, AppError> {
        let classifier = Classifier::new(&config)?;
        Ok(Self {
            db,
            classifier,
            config,
            reports_dir: reports_dir.to_path_buf(),
        })
    }

    /// Classify `text` and record the result with a wall-clock
    /// timestamp.
    ///
    /// Blank input records nothing and returns `Ok(None)`.
    pub fn analyze_entry(&self, text: &str) -> Result<Option<Classification>, AppError> {
        let Some(text) = normalize_entry_text(text) else {
            return Ok(None);
        };

        let classification = self.classifier.classify(text);
        let mut entry = Entry::new(
            text,
            &classification.emotion,
            classification.stress,
            Local::now().timestamp(),
        );
        with_connection(&self.db, "record entry", |conn| entry.save(conn))?;

        Ok(Some(classification))
    }

    /// Record a one-click entry for a configured emotion, at that
    /// emotion's constant stress score.
    pub fn quick_entry(&self, name: &str) -> Result<Classification, AppError> {
        let profile = self
            .config
            .find(name)
            .ok_or(AppError::NotFound { entity: "emotion" })?;

        let text = format!("[Quick: {}]", profile.name);
        let mut entry = Entry::new(&text, &profile.name, profile.stress, Local::now().timestamp());
        with_connection(&self.db, "record quick entry", |conn| entry.save(conn))?;

        Ok(Classification {
            emotion: profile.name.clone(),
            stress: profile.stress,
        })
    }

    /// Most recent entries, newest first. `None` means the default
    /// limit.
    pub fn recent_entries(&self, limit: Option<usize>) -> Result<Vec<EntryResponse>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        let entries =
            with_connection(&self.db, "load recent entries", |conn| Entry::find_recent(conn, limit))?;
        Ok(entries.into_iter().map(EntryResponse::from).collect())
    }

    /// Entries recorded on the current local date, in insertion
    /// order.
    pub fn today_entries(&self) -> Result<Vec<EntryResponse>, AppError> {
        let today = Local::now().date_naive();
        let entries = with_connection(&self.db, "load today's entries", |conn| {
            Entry::find_on_day(conn, today)
        })?;
        Ok(entries.into_iter().map(EntryResponse::from).collect())
    }

    /// Entry counts per emotion. Emotions with no entries are absent.
    pub fn emotion_counts(&self) -> Result<Vec<EmotionCount>, AppError> {
        let counts =
            with_connection(&self.db, "load emotion counts", |conn| Entry::counts_by_emotion(conn))?;

        Ok(counts
            .into_iter()
            .map(|(emotion, count)| {
                let color = self
                    .config
                    .find(&emotion)
                    .map(|e| e.color.clone())
                    .unwrap_or_default();
                EmotionCount { emotion, count, color }
            })
            .collect())
    }

    /// Today's aggregate report, or `None` when nothing was recorded
    /// today.
    pub fn daily_summary(&self) -> Result<Option<DailyReport>, AppError> {
        let today = Local::now().date_naive();
        let entries = with_connection(&self.db, "load today's entries", |conn| {
            Entry::find_on_day(conn, today)
        })?;
        Ok(DailyReport::from_entries(today, &entries))
    }

    /// Write today's report file and return its path, or `None` when
    /// there is no data to report.
    pub fn save_daily_report(&self) -> Result<Option<PathBuf>, AppError> {
        let Some(report) = self.daily_summary()? else {
            return Ok(None);
        };

        let path = report.write_to(&self.reports_dir)?;
        info!("Wrote daily report to {}", path.display());
        Ok(Some(path))
    }

    /// Erase every stored entry. Irreversible; confirmation is the
    /// caller's concern.
    pub fn clear_entries(&self) -> Result<(), AppError> {
        let deleted = with_connection(&self.db, "clear entries", |conn| Entry::delete_all(conn))?;
        info!("Cleared {} journal entries", deleted);
        Ok(())
    }
}
