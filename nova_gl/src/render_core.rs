/// RenderCore - process-wide lifecycle for the driver and the logger
///
/// The GL context is ambient state owned by the windowing collaborator; the
/// core mirrors that with one process-wide driver slot. Initialization is
/// idempotent: the tutorial programs this core was distilled from called
/// their init routine twice in places, so `initialize()` returns success
/// immediately when the core is already up instead of failing.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::driver::GlDriver;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global core state storage
static CORE_STATE: OnceLock<CoreState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding the driver slot
struct CoreState {
    /// Driver singleton (wrapped in Mutex for serialized access)
    driver: RwLock<Option<Arc<Mutex<dyn GlDriver>>>>,
}

impl CoreState {
    /// Create a new empty core state
    fn new() -> Self {
        Self {
            driver: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Process-wide core manager
///
/// Manages the driver and logger lifecycle with explicit init/teardown.
///
/// # Example
///
/// ```no_run
/// use nova_gl::novagl::RenderCore;
/// use nova_gl::novagl::driver::MockDriver;
///
/// // Initialize core (idempotent - a second call is a no-op success)
/// RenderCore::initialize()?;
///
/// // Register a driver (MockDriver here; OpenGlDriver in a real app)
/// RenderCore::create_driver(MockDriver::new())?;
///
/// // Access the driver globally
/// let driver = RenderCore::driver()?;
///
/// // Cleanup
/// RenderCore::shutdown();
/// # Ok::<(), nova_gl::novagl::Error>(())
/// ```
pub struct RenderCore;

impl RenderCore {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::core_error!("novagl::RenderCore", "Initialization failed: {}", msg);
            }
            Error::BackendError(msg) => {
                crate::core_error!("novagl::RenderCore", "Backend error: {}", msg);
            }
            _ => {
                crate::core_error!("novagl::RenderCore", "Core error: {}", error);
            }
        }
        error
    }

    /// Initialize the core
    ///
    /// Must be called once at application startup before registering a
    /// driver. Calling it again is safe and returns success immediately.
    pub fn initialize() -> Result<()> {
        if CORE_STATE.get().is_some() {
            crate::core_trace!("novagl::RenderCore", "initialize() called again, already up");
            return Ok(());
        }
        CORE_STATE.get_or_init(CoreState::new);
        crate::core_info!("novagl::RenderCore", "Core initialized");
        Ok(())
    }

    /// Shutdown the core and drop the registered driver
    ///
    /// After calling this, a new driver can be registered without calling
    /// `initialize()` again (the state slot itself survives).
    pub fn shutdown() {
        if let Some(state) = CORE_STATE.get() {
            if let Ok(mut driver) = state.driver.write() {
                *driver = None;
            }
        }
        crate::core_info!("novagl::RenderCore", "Core shut down");
    }

    /// Create and register the driver singleton
    ///
    /// Wraps the driver in `Arc<Mutex<_>>` and registers it for global
    /// access. The GL context backing the driver must already be current.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The core is not initialized
    /// - A driver is already registered
    pub fn create_driver<D: GlDriver + 'static>(driver: D) -> Result<()> {
        let arc_driver: Arc<Mutex<dyn GlDriver>> = Arc::new(Mutex::new(driver));

        Self::register_driver(arc_driver)?;

        crate::core_info!("novagl::RenderCore", "Driver registered successfully");

        Ok(())
    }

    /// Register a driver singleton (internal use)
    pub(crate) fn register_driver(driver: Arc<Mutex<dyn GlDriver>>) -> Result<()> {
        let state = CORE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Core not initialized. Call RenderCore::initialize() first.".to_string())
            ))?;

        let mut lock = state.driver.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Driver lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("Driver already registered. Call RenderCore::destroy_driver() first.".to_string())
            ));
        }

        *lock = Some(driver);
        Ok(())
    }

    /// Get the driver singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The core is not initialized
    /// - No driver has been registered
    pub fn driver() -> Result<Arc<Mutex<dyn GlDriver>>> {
        let state = CORE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Core not initialized. Call RenderCore::initialize() first.".to_string())
            ))?;

        let lock = state.driver.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Driver lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Driver not registered. Call RenderCore::create_driver() first.".to_string())
            ))
    }

    /// Destroy the driver singleton
    ///
    /// Removes the driver, allowing a new one to be registered. Existing
    /// references stay valid until dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the core is not initialized
    pub fn destroy_driver() -> Result<()> {
        let state = CORE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Core not initialized".to_string())
            ))?;

        let mut lock = state.driver.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("Driver lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::core_info!("novagl::RenderCore", "Driver destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = CORE_STATE.get() {
            if let Ok(mut driver) = state.driver.write() {
                *driver = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation so core
    /// messages route to the host's telemetry sink.
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like core_info!, core_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by the core_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "render_core_tests.rs"]
mod tests;
