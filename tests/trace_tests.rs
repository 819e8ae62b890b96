use std::sync::Mutex;

use heap_pq::trace::TRACE_TARGET;
use heap_pq::PriorityQueue;
use log::{LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == TRACE_TARGET
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

// Only test in this binary: the logger is process-wide
#[test]
fn test_trace_follows_every_mutation() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let mut queue = PriorityQueue::new();
    for priority in [4, 9, 12, 8, 56, 1, 19, 24, 7] {
        queue.enqueue((), priority);
    }
    queue.dequeue_min().unwrap();
    queue.dequeue_max().unwrap();

    // Empty-queue removals never emit a trace line
    let mut empty: PriorityQueue<()> = PriorityQueue::new();
    assert!(empty.dequeue_min().is_err());

    let expected = vec![
        "4",
        "4 9",
        "4 9 12",
        "4 9 12 8",
        "4 8 12 9",
        "4 8 12 9 56",
        "4 8 12 9 56 1",
        "4 8 1 9 56 12",
        "1 8 4 9 56 12",
        "1 8 4 9 56 12 19",
        "1 8 4 9 56 12 19 24",
        "1 8 4 9 56 12 19 24 7",
        "1 8 4 7 56 12 19 24 9",
        "1 7 4 8 56 12 19 24 9",
        "9 7 4 8 56 12 19 24",
        "4 7 9 8 56 12 19 24",
        "4 7 9 8 24 12 19",
    ];
    assert_eq!(*LOGGER.lines.lock().unwrap(), expected);
}
