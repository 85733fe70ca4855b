use crate::marshal::{call_error, to_java_string};
use crate::JavaClrError;
use api::{BridgeLogger, ReturnInfo};
use anyhow::{Context, Result};
use jni::objects::{JClass, JMethodID, JObject, JValue};
use jni::signature::{Primitive, ReturnType};
use jni::JNIEnv;
use log::debug;

// Method (name, signature) pairs the holder's class must expose.
const ADD_EXCEPTION_STRING: (&str, &str) = ("addExceptionString", "(Ljava/lang/String;)V");
const HAS_EXCEPTIONS: (&str, &str) = ("hasExceptions", "()Z");
const SET_RETURN_CODE: (&str, &str) = ("setReturnCode", "(I)V");
const GET_RETURN_CODE: (&str, &str) = ("getReturnCode", "()I");

/// Proxy for one JVM-resident status holder.
///
/// Holds the env handed over at construction, a non-owning reference to the
/// holder, and the four method ids resolved once against the holder's
/// class. Every operation forwards through a cached id; nothing is resolved
/// after construction. The env and the holder reference are borrowed from
/// the embedding host, which must keep them valid for the proxy's lifetime.
pub struct JvmReturnInfo<'local> {
    env: JNIEnv<'local>,
    holder: JObject<'local>,
    add_exception_string: JMethodID,
    has_exceptions: JMethodID,
    set_return_code: JMethodID,
    get_return_code: JMethodID,
}

impl<'local> JvmReturnInfo<'local> {
    /// Bind a proxy to `holder`, resolving all four protocol methods.
    ///
    /// Fails without producing a proxy if `holder` is null or its class
    /// lacks any of the methods; the failure is reported once through
    /// `logger` before returning.
    pub fn new(
        mut env: JNIEnv<'local>,
        holder: JObject<'local>,
        logger: &dyn BridgeLogger,
    ) -> Result<Self, JavaClrError> {
        if holder.as_raw().is_null() {
            logger.log("Status holder reference is null");
            return Err(JavaClrError::NullHolder);
        }

        let class = match env.get_object_class(&holder) {
            Ok(class) => class,
            Err(e) => {
                logger.log(&format!("Failed to read the status holder class: {e}"));
                return Err(JavaClrError::HolderClass(e.to_string()));
            }
        };

        let add_exception_string = resolve(&mut env, &class, ADD_EXCEPTION_STRING, logger)?;
        let has_exceptions = resolve(&mut env, &class, HAS_EXCEPTIONS, logger)?;
        let set_return_code = resolve(&mut env, &class, SET_RETURN_CODE, logger)?;
        let get_return_code = resolve(&mut env, &class, GET_RETURN_CODE, logger)?;
        debug!("Cached status holder method ids");

        Ok(Self {
            env,
            holder,
            add_exception_string,
            has_exceptions,
            set_return_code,
            get_return_code,
        })
    }
}

fn resolve(
    env: &mut JNIEnv<'_>,
    class: &JClass<'_>,
    (name, sig): (&str, &str),
    logger: &dyn BridgeLogger,
) -> Result<JMethodID, JavaClrError> {
    match env.get_method_id(class, name, sig) {
        Ok(id) => Ok(id),
        Err(_) => {
            // GetMethodID leaves a NoSuchMethodError pending; drop it so
            // the env stays usable for the caller.
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            let describing = format!("{name} {sig}");
            logger.log(&format!(
                "Failed to resolve {describing} on the status holder"
            ));
            Err(JavaClrError::MethodNotFound(describing))
        }
    }
}

impl ReturnInfo for JvmReturnInfo<'_> {
    fn add_exception_string(&mut self, message: &str) -> Result<()> {
        let jmessage = to_java_string(&mut self.env, message)?;
        // SAFETY: the id was resolved against this holder's class with the
        // matching signature at construction.
        unsafe {
            self.env.call_method_unchecked(
                &self.holder,
                self.add_exception_string,
                ReturnType::Primitive(Primitive::Void),
                &[JValue::Object(&jmessage).as_jni()],
            )
        }
        .map_err(|e| call_error(&mut self.env, e))
        .context("Failed to forward an exception string to the JVM holder")?;
        Ok(())
    }

    fn has_exceptions(&mut self) -> Result<bool> {
        // SAFETY: see add_exception_string.
        let value = unsafe {
            self.env.call_method_unchecked(
                &self.holder,
                self.has_exceptions,
                ReturnType::Primitive(Primitive::Boolean),
                &[],
            )
        }
        .map_err(|e| call_error(&mut self.env, e))?;
        value.z().context("hasExceptions returned a non-boolean")
    }

    fn set_return_code(&mut self, code: i32) -> Result<()> {
        // SAFETY: see add_exception_string.
        unsafe {
            self.env.call_method_unchecked(
                &self.holder,
                self.set_return_code,
                ReturnType::Primitive(Primitive::Void),
                &[JValue::Int(code).as_jni()],
            )
        }
        .map_err(|e| call_error(&mut self.env, e))
        .context("Failed to forward the return code to the JVM holder")?;
        Ok(())
    }

    fn get_return_code(&mut self) -> Result<i32> {
        // SAFETY: see add_exception_string.
        let value = unsafe {
            self.env.call_method_unchecked(
                &self.holder,
                self.get_return_code,
                ReturnType::Primitive(Primitive::Int),
                &[],
            )
        }
        .map_err(|e| call_error(&mut self.env, e))?;
        value.i().context("getReturnCode returned a non-int")
    }
}
