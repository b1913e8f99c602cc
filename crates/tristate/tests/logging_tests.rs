// Logging tests
// Collapse points emit trace events; errors are returned without being logged

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tristate::{Either, Maybe, MonadError};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_collapse_is_traced_and_errors_are_not_logged() {
    let captured = Captured::default();
    let writer = captured.clone();
    let _guard = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("tristate=trace"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish()
        .set_default();

    let empty = Maybe::<i32>::new(None);
    let neither = Either::<i32, String>::from_right(None);
    assert!(empty.is_none());
    assert!(neither.is_neither());

    let traced = captured.text();
    assert!(traced.contains("collapsed to Maybe::None"));
    assert!(traced.contains("collapsed to Either::Neither"));

    let strict = Maybe::<i32>::try_some(None);
    let projected = Maybe::some(1).select_many::<_, i32, _, _, _>(|x| Maybe::some(*x), |_, _| Option::<i32>::None);
    let direct = MonadError::invalid_operation("no value");

    assert!(matches!(strict, Err(MonadError::InvalidArgument(_))));
    assert!(matches!(projected, Err(MonadError::InvalidOperation(_))));
    assert_eq!(direct.code(), tristate::codes::INVALID_OPERATION);
    assert_eq!(captured.text(), traced);
}
