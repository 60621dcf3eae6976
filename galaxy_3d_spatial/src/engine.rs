/// Galaxy3D Engine - Singleton manager for engine subsystems
///
/// Holds the global SceneManager and the global logger. Storage is a
/// process-wide OnceLock with RwLock-guarded slots for thread-safe access.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::scene::SceneManager;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

const SOURCE: &str = "galaxy3d::Engine";

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    scene_manager: RwLock<Option<Arc<Mutex<SceneManager>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            scene_manager: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_spatial::galaxy3d::Engine;
///
/// Engine::initialize()?;
/// Engine::create_scene_manager()?;
///
/// let scene_manager = Engine::scene_manager()?;
/// let scene = scene_manager.lock().unwrap().create_scene("world")?;
/// let player = scene.lock().unwrap().create_node("player");
///
/// // Once per frame
/// scene_manager.lock().unwrap().update_all()?;
///
/// Engine::shutdown();
/// # let _ = player;
/// # Ok::<(), galaxy_3d_spatial::galaxy3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Log an error at ERROR severity and hand it back (internal use)
    fn log_and_return_error(error: Error) -> Error {
        crate::engine_error!(SOURCE, "{}", error);
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))
    }

    /// Initialize the engine
    ///
    /// Must be called once at startup before creating any subsystem.
    /// Calling it again is harmless.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Destroy all singletons
    ///
    /// The engine stays initialized; subsystems can be created again.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut scene_manager) = state.scene_manager.write() {
                *scene_manager = None;
            }
        }
    }

    // ===== SCENE MANAGER API =====

    /// Create and register the scene manager singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A scene manager already exists
    /// - The scene manager lock is poisoned
    pub fn create_scene_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.scene_manager.write()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("SceneManager lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("SceneManager already exists. Call Engine::destroy_scene_manager() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(SceneManager::new())));

        crate::engine_info!(SOURCE, "SceneManager singleton created successfully");

        Ok(())
    }

    /// Get the scene manager singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the scene
    /// manager has not been created
    pub fn scene_manager() -> Result<Arc<Mutex<SceneManager>>> {
        let state = Self::state()?;

        let lock = state.scene_manager.read()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("SceneManager lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("SceneManager not created. Call Engine::create_scene_manager() first.".to_string())
            ))
    }

    /// Destroy the scene manager singleton
    ///
    /// Outstanding references stay valid until dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn destroy_scene_manager() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.scene_manager.write()
            .map_err(|_| Self::log_and_return_error(
                Error::InitializationFailed("SceneManager lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!(SOURCE, "SceneManager singleton destroyed");

        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        Self::shutdown();
    }

    // ===== LOGGING API =====

    fn logger() -> &'static RwLock<Box<dyn Logger>> {
        LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
    }

    /// Install a custom logger in place of the colored console output
    ///
    /// # Example
    ///
    /// ```no_run
    /// use galaxy_3d_spatial::galaxy3d::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Append entry.format_plain() to a file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        Self::set_logger(DefaultLogger);
    }

    /// Emit an entry without source location
    ///
    /// Used by the engine_trace!/debug!/info!/warn! macros.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None);
    }

    /// Emit an entry with file:line information
    ///
    /// Used by the engine_error! macro.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some((file, line)));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        location: Option<(&'static str, u32)>,
    ) {
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: location.map(|(file, _)| file),
                line: location.map(|(_, line)| line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
