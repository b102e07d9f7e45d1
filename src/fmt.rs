use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context};

/// Pipe Go source through `gofmt` and return the formatted text.
pub fn gofmt(input: String) -> anyhow::Result<String> {
    let mut command = Command::new("gofmt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to start gofmt")?;

    let mut stdin = command.stdin.take().context("gofmt stdin unavailable")?;
    stdin.write_all(input.as_bytes())?;
    drop(stdin);

    let output = command.wait_with_output()?;
    if !output.status.success() {
        bail!("gofmt failed: {}", String::from_utf8_lossy(&output.stderr).trim());
    }
    let stdout = String::from_utf8(output.stdout)?;
    Ok(stdout)
}
