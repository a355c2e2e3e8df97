use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use super::TextConverter;
use crate::config::ConversionConfig;
use crate::error::{DocsiftError, Result};

/// Runs `pandoc --from <from> --to <to> --standalone`, feeding the input on stdin.
pub struct PandocConverter {
    program: String,
}

impl PandocConverter {
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            program: config.pandoc_path.clone(),
        }
    }
}

impl TextConverter for PandocConverter {
    fn convert(&self, input: &str, from: &str, to: &str) -> Result<String> {
        debug!(program = %self.program, from, to, "running pandoc");

        let mut child = Command::new(&self.program)
            .args(["--from", from, "--to", to, "--standalone"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DocsiftError::Conversion(format!("Failed to execute {}: {e}", self.program))
            })?;

        // pandoc may fill its stdout pipe before draining stdin
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| DocsiftError::Conversion("pandoc stdin unavailable".to_string()))?;
        let input = input.to_owned();
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| DocsiftError::Conversion(format!("pandoc did not finish: {e}")))?;
        let written = writer.join();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DocsiftError::Conversion(format!(
                "pandoc exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        match written {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(DocsiftError::Conversion(format!(
                    "Failed to write pandoc input: {e}"
                )))
            }
            Err(_) => {
                return Err(DocsiftError::Conversion(
                    "pandoc input writer panicked".to_string(),
                ))
            }
        }

        String::from_utf8(output.stdout)
            .map_err(|e| DocsiftError::Conversion(format!("pandoc returned invalid UTF-8: {e}")))
    }
}
