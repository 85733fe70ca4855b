//! Conversions between Rust values and their JVM representations, plus the
//! single mapping point from `jni` errors to bridge errors.

use crate::JavaClrError;
use jni::errors::Error;
use jni::objects::{JObject, JString};
use jni::JNIEnv;

/// Copy a Rust string into a new Java string local reference.
pub(crate) fn to_java_string<'local>(
    env: &mut JNIEnv<'local>,
    value: &str,
) -> Result<JObject<'local>, JavaClrError> {
    env.new_string(value)
        .map(JObject::from)
        .map_err(|e| call_error(env, e))
}

/// Map a failed JNI call to a bridge error.
///
/// If a throwable is pending on `env` it is taken off the env (cleared) and
/// rendered into the error text, so the env stays usable for further calls.
pub(crate) fn call_error(env: &mut JNIEnv<'_>, err: Error) -> JavaClrError {
    if matches!(err, Error::JavaException) {
        if let Some(text) = pending_throwable_text(env) {
            return JavaClrError::CallFailed(text);
        }
    }
    JavaClrError::CallFailed(err.to_string())
}

/// Materialize the pending throwable, clear it, and render its `toString`.
fn pending_throwable_text(env: &mut JNIEnv<'_>) -> Option<String> {
    let throwable = env.exception_occurred().ok()?;
    if throwable.as_raw().is_null() {
        return None;
    }
    // Must clear before calling back into the JVM.
    env.exception_clear().ok()?;
    let rendered = env
        .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .ok()?;
    let text: String = env.get_string(&JString::from(rendered)).ok()?.into();
    Some(text)
}
