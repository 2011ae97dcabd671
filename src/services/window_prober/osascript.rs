use crate::error::{PadError, Result};
use crate::trace_if_enabled;
use std::io::ErrorKind;
use tokio::process::Command;
use tracing::debug;

use super::r#trait::WindowProberTrait;

/// Собрать AppleScript, читающий AXFullScreen переднего окна процесса
pub fn build_fullscreen_script(process_name: &str) -> String {
    let escaped = process_name.replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        r#"tell application "System Events"
    tell process "{}"
        get value of attribute "AXFullScreen" of front window
    end tell
end tell"#,
        escaped
    )
}

/// Только точное `true` (после trim) считается полноэкранным режимом
pub fn parse_fullscreen_output(stdout: &str) -> bool {
    stdout.trim() == "true"
}

pub struct OsascriptProber {
    program: String,
    script: String,
}

impl OsascriptProber {
    pub fn new(program: &str, process_name: &str) -> Self {
        Self {
            program: program.to_string(),
            script: build_fullscreen_script(process_name),
        }
    }

    async fn query(&self) -> Result<bool> {
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(&self.script)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => crate::pad_error!(tool_not_found, "{}: {}", self.program, e),
                _ => PadError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return PadError::command_failed(format!(
                "{} ({}): {}",
                self.program,
                output.status,
                stderr.trim()
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        trace_if_enabled!("{} вернул: '{}'", self.program, stdout.trim());

        Ok(parse_fullscreen_output(&stdout))
    }
}

#[async_trait::async_trait]
impl WindowProberTrait for OsascriptProber {
    async fn is_fullscreen(&self) -> bool {
        match self.query().await {
            Ok(is_fullscreen) => is_fullscreen,
            Err(e) => {
                debug!("Не удалось получить состояние окна, считаем оконным: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "osascript"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_targets_process() {
        let script = build_fullscreen_script("kitty");
        assert!(script.contains(r#"tell process "kitty""#));
        assert!(script.contains(r#"attribute "AXFullScreen" of front window"#));
        assert!(script.starts_with(r#"tell application "System Events""#));
    }

    #[test]
    fn test_script_escapes_quotes() {
        let script = build_fullscreen_script(r#"my "term""#);
        assert!(script.contains(r#"tell process "my \"term\"""#));
    }

    #[test]
    fn test_parse_output_is_exact_match() {
        assert!(parse_fullscreen_output("true"));
        assert!(parse_fullscreen_output("  true\n"));
        assert!(!parse_fullscreen_output("TRUE"));
        assert!(!parse_fullscreen_output("True"));
        assert!(!parse_fullscreen_output("false"));
        assert!(!parse_fullscreen_output(""));
        assert!(!parse_fullscreen_output("true true"));
    }

    #[tokio::test]
    async fn test_missing_program_reads_as_windowed() {
        let prober = OsascriptProber::new("/nonexistent/osascript-missing", "kitty");
        assert!(matches!(prober.query().await, Err(PadError::ToolNotFound(_))));
        assert!(!prober.is_fullscreen().await);
    }

    #[cfg(unix)]
    mod with_fake_tool {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn fake_tool(dir: &TempDir, body: &str) -> String {
            let path = dir.path().join("fake-osascript");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().into_owned()
        }

        #[tokio::test]
        async fn test_true_output_is_fullscreen() {
            let dir = TempDir::new().unwrap();
            let prober = OsascriptProber::new(&fake_tool(&dir, "echo '  true  '"), "kitty");
            assert!(prober.is_fullscreen().await);
        }

        #[tokio::test]
        async fn test_wrong_case_is_windowed() {
            let dir = TempDir::new().unwrap();
            let prober = OsascriptProber::new(&fake_tool(&dir, "echo TRUE"), "kitty");
            assert!(!prober.is_fullscreen().await);
        }

        #[tokio::test]
        async fn test_nonzero_exit_is_windowed() {
            let dir = TempDir::new().unwrap();
            let prober = OsascriptProber::new(&fake_tool(&dir, "echo true; exit 1"), "kitty");
            assert!(matches!(prober.query().await, Err(PadError::CommandFailed(_))));
            assert!(!prober.is_fullscreen().await);
        }

        #[tokio::test]
        async fn test_script_passed_with_dash_e() {
            let dir = TempDir::new().unwrap();
            let tool = fake_tool(&dir, r#"[ "$1" = "-e" ] && case "$2" in *AXFullScreen*) echo true;; esac"#);
            let prober = OsascriptProber::new(&tool, "kitty");
            assert!(prober.is_fullscreen().await);
        }
    }
}
