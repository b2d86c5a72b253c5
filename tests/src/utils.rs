use std::io;
use std::sync::{Arc, Mutex};

use stowr_common::cargo::Container;
use stowr_common::fleet::{Ship, ShipSpec};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for formatted tracing output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a subscriber writing into a buffer and returns what it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}

pub fn hazard_notices(logs: &str) -> usize {
    logs.matches("Dangerous event detected in container").count()
}

pub fn ship(max_containers: usize, max_weight: f64) -> Ship {
    Ship::new(ShipSpec::new(18.0, max_containers, max_weight)).unwrap()
}

/// A refrigerated container with the given empty weight and cargo loaded.
pub fn reefer(number: &str, empty_weight: f64, cargo: f64) -> Container {
    let mut container =
        Container::refrigerated(number, 1_000.0, empty_weight, 4.0, "vegetables").unwrap();
    container.load(cargo).unwrap();
    container
}
