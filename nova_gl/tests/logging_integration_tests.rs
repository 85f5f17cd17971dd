//! Integration tests for logging and the RenderCore lifecycle
//!
//! The core's statics are process-wide, so everything here runs #[serial].

use nova_gl::novagl::{RenderCore, Error};
use nova_gl::novagl::driver::MockDriver;
use nova_gl::novagl::log::{Logger, LogEntry, LogSeverity};
use nova_gl::novagl::shader::{ProgramBuilder, ShaderSource};
use serial_test::serial;
use std::sync::{Arc, Mutex};

/// Logger capturing entries across the crate boundary
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Bring the core to a known state: initialized, no driver registered
fn setup() {
    RenderCore::initialize().unwrap();
    RenderCore::shutdown();
}

#[test]
#[serial]
fn test_initialize_twice_from_host_code() {
    setup();
    // The duplicated-init pattern from the original programs is harmless
    assert!(RenderCore::initialize().is_ok());
    assert!(RenderCore::initialize().is_ok());
}

#[test]
#[serial]
fn test_driver_lifecycle_through_public_api() {
    setup();

    RenderCore::create_driver(MockDriver::new()).unwrap();

    // A second registration is rejected until the first is destroyed
    assert!(matches!(
        RenderCore::create_driver(MockDriver::new()),
        Err(Error::InitializationFailed(_))
    ));

    // The registered driver backs a working builder
    let builder = ProgramBuilder::new(RenderCore::driver().unwrap());
    let shader = builder.compile(&ShaderSource::vertex("void main() { }"));
    assert!(shader.is_compiled());

    RenderCore::destroy_driver().unwrap();
    assert!(RenderCore::driver().is_err());
}

#[test]
#[serial]
fn test_compile_failure_routes_through_custom_logger() {
    setup();

    let entries = Arc::new(Mutex::new(Vec::new()));
    RenderCore::set_logger(CaptureLogger {
        entries: entries.clone(),
    });

    let driver = Arc::new(Mutex::new(MockDriver::new()));
    let builder = ProgramBuilder::new(driver);
    let shader = builder.compile(&ShaderSource::fragment("garbage"));

    // The diagnostic is data on the shader...
    assert!(shader.log().is_some());

    // ...and an ERROR entry reached the replaceable sink
    let captured = entries.lock().unwrap();
    let error_entry = captured
        .iter()
        .find(|e| e.severity == LogSeverity::Error)
        .expect("error entry routed to custom logger");
    assert!(error_entry.file.is_some());
    drop(captured);

    RenderCore::reset_logger();
}

#[test]
#[serial]
fn test_shutdown_then_reinitialize() {
    setup();

    RenderCore::create_driver(MockDriver::new()).unwrap();
    RenderCore::shutdown();

    // Shutdown cleared the driver; initialize is still a success and a
    // fresh driver can be registered
    assert!(RenderCore::initialize().is_ok());
    assert!(RenderCore::driver().is_err());
    assert!(RenderCore::create_driver(MockDriver::new()).is_ok());

    RenderCore::shutdown();
}
