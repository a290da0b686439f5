//! Process start: spawn a target file as a detached child.

use std::path::Path;
use std::process::Command;

use chrono::Local;
use tracing::debug;

use super::{ActivityFields, ActivityKind, ActivityRecord};
use crate::errors::{OpsError, OpsResult};

/// Spawn `file_path` as a new OS process, fire-and-forget.
///
/// The recorded command line is the path joined with the arguments by single
/// spaces, without quoting or escaping. Arguments pass through to the child
/// verbatim; callers are trusted with the content. The child is never waited
/// on and its exit status is not observed.
pub fn execute_file(file_path: &Path, args: &[String]) -> OpsResult<ActivityRecord> {
    let command_line = build_command_line(file_path, args);
    debug!("exec: {}", command_line);

    if !file_path.exists() {
        return Ok(ActivityRecord::new(
            ActivityKind::ProcessStart,
            ActivityFields::ProcessFailed {
                process_command_line: command_line,
                error: format!("File '{}' does not exist", file_path.display()),
            },
        ));
    }

    let start_time = Local::now();
    let child = Command::new(file_path)
        .args(args)
        .spawn()
        .map_err(|source| OpsError::Spawn {
            command_line: command_line.clone(),
            source,
        })?;

    // child handle dropped without wait: it outlives this invocation
    Ok(ActivityRecord::new(
        ActivityKind::ProcessStart,
        ActivityFields::ProcessStart {
            start_time,
            process_command_line: command_line,
            spawned_process_id: child.id(),
        },
    ))
}

fn build_command_line(file_path: &Path, args: &[String]) -> String {
    let mut command_line = file_path.display().to_string();
    for arg in args {
        command_line.push(' ');
        command_line.push_str(arg);
    }
    command_line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_is_path_joined_with_args() {
        let args = vec!["hello".to_string(), "there".to_string()];
        assert_eq!(
            build_command_line(Path::new("/bin/echo"), &args),
            "/bin/echo hello there"
        );
        assert_eq!(build_command_line(Path::new("/bin/echo"), &[]), "/bin/echo");
    }
}
