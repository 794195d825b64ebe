//! Per-thread `log` capture. `#[tokio::test]` runs on a current-thread
//! runtime, so records emitted while driving a router land in the calling
//! test's buffer only.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

thread_local! {
    static RECORDS: RefCell<Vec<CapturedRecord>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records.borrow_mut().push(CapturedRecord {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            })
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capture logger once and clear this thread's buffer
pub fn start_capture() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("another logger is already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Drain this thread's captured records
pub fn take_records() -> Vec<CapturedRecord> {
    RECORDS.with(|records| records.take())
}
