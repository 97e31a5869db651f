/// Maximum stress score an emotion can be configured with
pub const MAX_STRESS: i32 = 100;

/// Default number of entries returned by recent-entry queries
pub const DEFAULT_RECENT_LIMIT: usize = 50;

/// File name prefix for daily report files
pub const REPORT_FILE_PREFIX: &str = "report_";
