use anyhow::Error;
use rolodex_config::ConfigError;
use rolodex_core::{CoreError, CoreErrorKind};
use rolodex_store::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub const BAD_VALUE_MESSAGE: &str = "Give me name and phone, please.";
pub const MISSING_KEY_MESSAGE: &str = "This contact does not exist.";
pub const MISSING_ARGUMENT_MESSAGE: &str = "Not enough arguments.";

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("expected at least {expected} arguments, got {got}")]
    TooFewValues { expected: usize, got: usize },
    #[error("no argument at position {0}")]
    MissingArgument(usize),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

/// The three ways a command can fail, as far as the user is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    BadValue,
    MissingKey,
    MissingArgument,
}

impl FailureClass {
    pub fn message(self) -> &'static str {
        match self {
            FailureClass::BadValue => BAD_VALUE_MESSAGE,
            FailureClass::MissingKey => MISSING_KEY_MESSAGE,
            FailureClass::MissingArgument => MISSING_ARGUMENT_MESSAGE,
        }
    }
}

pub fn classify(err: &Error) -> FailureClass {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::MissingArgument(_) => FailureClass::MissingArgument,
                CliError::InvalidInput(_) | CliError::TooFewValues { .. } => {
                    FailureClass::BadValue
                }
            };
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return match store_err.kind() {
                StoreErrorKind::NotFound => FailureClass::MissingKey,
                StoreErrorKind::Core => FailureClass::BadValue,
            };
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return match core_err.kind() {
                CoreErrorKind::NotFound => FailureClass::MissingKey,
                CoreErrorKind::Validation => FailureClass::BadValue,
            };
        }
    }
    FailureClass::BadValue
}

/// Fixed text shown in place of a failed command's output.
pub fn user_message(err: &Error) -> &'static str {
    classify(err).message()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if cause.downcast_ref::<CliError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if cause.downcast_ref::<CoreError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
