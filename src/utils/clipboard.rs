//! Best-effort copy-to-clipboard.
//!
//! There is no in-process clipboard on a plain terminal host, so the adapter
//! drives whichever system clipboard tool is installed. The primary path
//! feeds the text to the first discovered tool over stdin; the fallback path
//! re-invokes a tool with stdin redirected from a temporary file, which
//! survives tools that mis-handle piped writes. The temporary file is removed
//! on every exit path.
//!
//! [`copy_text`] never errors: every failure resolves to `false` so callers
//! can branch without exception handling.

use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// A clipboard tool and the arguments that make it read from stdin.
struct ToolSpec {
    name: &'static str,
    args: &'static [&'static str],
}

/// Candidate tools in preference order across platforms. `which` filters the
/// list down to what the host actually has.
const CLIPBOARD_TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "wl-copy",
        args: &[],
    },
    ToolSpec {
        name: "xclip",
        args: &["-selection", "clipboard"],
    },
    ToolSpec {
        name: "xsel",
        args: &["--clipboard", "--input"],
    },
    ToolSpec {
        name: "pbcopy",
        args: &[],
    },
    ToolSpec {
        name: "clip",
        args: &[],
    },
];

/// Copies `text` to the system clipboard, reporting success.
///
/// Tries the stdin path first, then the temp-file fallback. Returns `false`
/// when no tool is installed or both paths fail; never panics or errors.
pub async fn copy_text(text: &str) -> bool {
    let Some((tool, path)) = discover_tool() else {
        tracing::debug!("no clipboard tool found on this host");
        return false;
    };

    if copy_via_stdin(tool, &path, text).await {
        return true;
    }

    tracing::debug!(tool = tool.name, "stdin copy failed, trying temp-file fallback");
    copy_via_tempfile(tool, &path, text).await
}

/// First installed candidate, with its resolved executable path.
fn discover_tool() -> Option<(&'static ToolSpec, PathBuf)> {
    CLIPBOARD_TOOLS
        .iter()
        .find_map(|tool| which::which(tool.name).ok().map(|path| (tool, path)))
}

async fn copy_via_stdin(tool: &ToolSpec, path: &PathBuf, text: &str) -> bool {
    let child = Command::new(path)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!(tool = tool.name, error = %e, "failed to spawn clipboard tool");
            return false;
        }
    };

    if let Some(mut stdin) = child.stdin.take()
        && stdin.write_all(text.as_bytes()).await.is_err()
    {
        tracing::debug!(tool = tool.name, "failed to write clipboard payload");
        return false;
    }

    match child.wait().await {
        Ok(status) => status.success(),
        Err(e) => {
            tracing::debug!(tool = tool.name, error = %e, "clipboard tool did not exit cleanly");
            false
        }
    }
}

/// Fallback path: stage the payload in a temp file and hand the tool a plain
/// file descriptor. The `NamedTempFile` guard removes the file when this
/// function returns, whatever the outcome.
async fn copy_via_tempfile(tool: &ToolSpec, path: &PathBuf, text: &str) -> bool {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(error = %e, "failed to create clipboard staging file");
            return false;
        }
    };

    if file.write_all(text.as_bytes()).is_err() || file.flush().is_err() {
        return false;
    }

    let stdin = match std::fs::File::open(file.path()) {
        Ok(handle) => Stdio::from(handle),
        Err(_) => return false,
    };

    let status = Command::new(path)
        .args(tool.args)
        .stdin(stdin)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) => status.success(),
        Err(e) => {
            tracing::debug!(tool = tool.name, error = %e, "fallback clipboard invocation failed");
            false
        }
    }
}
