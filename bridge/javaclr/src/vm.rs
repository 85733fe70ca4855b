use crate::JavaClrError;
use jni::{AttachGuard, JavaVM};
use once_cell::sync::OnceCell;

static JVM: OnceCell<JavaVM> = OnceCell::new();

/// Store the embedding host's VM handle (call once at startup)
pub fn init_jvm(vm: JavaVM) -> Result<(), JavaClrError> {
    JVM.set(vm)
        .map_err(|_| JavaClrError::VmInit("Already initialized".into()))
}

/// Attach the current thread and hand out an env for bridge calls
pub fn attach_current_thread() -> Result<AttachGuard<'static>, JavaClrError> {
    let vm = JVM
        .get()
        .ok_or(JavaClrError::VmInit("Not initialized".into()))?;
    vm.attach_current_thread()
        .map_err(|e| JavaClrError::VmAttach(e.to_string()))
}
