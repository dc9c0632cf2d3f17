use mongodb::error::{ErrorKind, WriteFailure};
use regex::Regex;
use std::sync::LazyLock;

/// MongoDB server error code for a unique index violation.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Matches the offending value in `... dup key: { code: "shoes1" }`.
static DUP_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"dup key: \{ code: "([^"]*)" \}"#).expect("valid dup key regex")
});

/// Returns true if the error is a duplicate key violation raised by a unique index.
pub fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// Extracts the link code named in a duplicate key error message, if any.
pub fn duplicated_value(e: &mongodb::error::Error) -> Option<String> {
    let message = match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => &write_error.message,
        ErrorKind::Command(command_error) => &command_error.message,
        _ => return None,
    };

    DUP_CODE_REGEX
        .captures(message)
        .map(|caps| caps[1].to_string())
}
