use crate::debug_if_enabled;
use crate::error::{PadError, Result};
use std::io::ErrorKind;
use tokio::process::Command;
use tracing::warn;

use super::r#trait::PaddingSetterTrait;

/// `kitty @ set-spacing padding=<n>` через remote control
pub struct KittyPaddingSetter {
    program: String,
    remote_to: Option<String>,
}

impl KittyPaddingSetter {
    pub fn new(program: &str, remote_to: Option<String>) -> Self {
        Self {
            program: program.to_string(),
            remote_to,
        }
    }

    pub fn build_args(&self, padding: u32) -> Vec<String> {
        let mut args = vec!["@".to_string()];
        if let Some(to) = &self.remote_to {
            args.push("--to".to_string());
            args.push(to.clone());
        }
        args.push("set-spacing".to_string());
        args.push(format!("padding={}", padding));
        args
    }

    async fn apply(&self, padding: u32) -> Result<()> {
        let args = self.build_args(padding);
        debug_if_enabled!("Запуск {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => crate::pad_error!(tool_not_found, "{}: {}", self.program, e),
                _ => PadError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return PadError::command_failed(format!(
                "{} set-spacing ({}): {}",
                self.program,
                output.status,
                stderr.trim()
            ));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl PaddingSetterTrait for KittyPaddingSetter {
    async fn set_padding(&self, padding: u32) {
        if let Err(e) = self.apply(padding).await {
            warn!("Не удалось установить padding={}: {}", padding, e);
        }
    }

    fn name(&self) -> &'static str {
        "kitty"
    }
}
