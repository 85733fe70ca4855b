use log::error;

/// Sink for bridge-internal diagnostics.
///
/// Bridge constructors report failures through this before a usable proxy
/// exists. It is not a channel for recorded business exceptions.
pub trait BridgeLogger {
    fn log(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade.
pub struct StandardLogger;

impl BridgeLogger for StandardLogger {
    fn log(&self, message: &str) {
        error!(target: "bridge", "{}", message);
    }
}

/// Swallows diagnostics, for callers with nowhere to report them.
pub struct NullLogger;

impl BridgeLogger for NullLogger {
    fn log(&self, _message: &str) {}
}
