//! JVM-side bridging for cross-runtime call outcome reporting.

mod marshal;
mod return_info;
mod vm;

pub use return_info::JvmReturnInfo;
pub use vm::{attach_current_thread, init_jvm};

/// Errors raised while bridging into the JVM
#[derive(Debug, thiserror::Error)]
pub enum JavaClrError {
    #[error("Failed to initialize the Java VM handle: {0}")]
    VmInit(String),
    #[error("Failed to attach to the Java VM: {0}")]
    VmAttach(String),
    #[error("Status holder reference is null")]
    NullHolder,
    #[error("Failed to read the status holder class: {0}")]
    HolderClass(String),
    #[error("Method not found: {0}")]
    MethodNotFound(String),
    #[error("Java call failed: {0}")]
    CallFailed(String),
}
