use crate::ReturnInfo;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// In-process status holder.
///
/// Speaks the same protocol as a far-runtime holder, without a boundary to
/// cross: an ordered message list plus a single return-code cell. A fresh
/// holder reports no exceptions and a return code of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalReturnInfo {
    exceptions: Vec<String>,
    return_code: i32,
}

impl LocalReturnInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded messages, oldest first.
    pub fn exception_strings(&self) -> &[String] {
        &self.exceptions
    }
}

impl ReturnInfo for LocalReturnInfo {
    fn add_exception_string(&mut self, message: &str) -> Result<()> {
        self.exceptions.push(message.to_owned());
        Ok(())
    }

    fn has_exceptions(&mut self) -> Result<bool> {
        Ok(!self.exceptions.is_empty())
    }

    fn set_return_code(&mut self, code: i32) -> Result<()> {
        self.return_code = code;
        Ok(())
    }

    fn get_return_code(&mut self) -> Result<i32> {
        Ok(self.return_code)
    }
}
