//! Captures `log` output so tests can check what a rejected call reports.

extern crate std;

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::string::{String, ToString};
use std::sync::{Mutex, Once};
use std::vec::Vec;

struct Capture;

static CAPTURE: Capture = Capture;
static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            LINES.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

pub(crate) fn install() {
    INIT.call_once(|| {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Debug);
    });
}

/// Whether any captured line contains `needle`.
pub(crate) fn logged(needle: &str) -> bool {
    LINES.lock().unwrap().iter().any(|l| l.contains(needle))
}
