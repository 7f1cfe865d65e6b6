pub mod event;
pub mod fetch;
pub mod report;
pub mod taxonomy;
pub mod window;

pub use event::{decode_activities, Activity, Event, EventKind};
pub use fetch::fetch_activity;
pub use report::{KindCounts, Report, ReportGenerator};
pub use window::{filter_recent, RECENCY_WINDOW_HOURS};
