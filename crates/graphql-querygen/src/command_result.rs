use crate::output_utils;
use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn from_error(err: anyhow::Error) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(output_utils::format_error(&err)),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
impl std::convert::From<anyhow::Result<String>> for CommandResult {
    fn from(result: anyhow::Result<String>) -> Self {
        match result {
            Ok(stdout) => Self::stdout(format_args!("{stdout}")),
            Err(err) => Self::from_error(err),
        }
    }
}
