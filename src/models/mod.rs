pub mod daily_summary;
pub mod event_code;
pub mod log_record;
pub mod raw_event;

pub use daily_summary::DailySummary;
pub use event_code::EventCode;
pub use log_record::LogRecord;
pub use raw_event::RawEvent;
