use std::str::FromStr;

use filekit_domain::FileOptions;
use tracing::warn;

pub const DIR_MODE_VAR: &str = "FILEKIT_DIR_MODE";
pub const FILE_MODE_VAR: &str = "FILEKIT_FILE_MODE";
pub const CREATE_PARENTS_VAR: &str = "FILEKIT_CREATE_PARENTS";

/// Builds [`FileOptions`] from the process environment, loading `.env`
/// first. Unset variables keep their defaults; invalid ones are logged and
/// ignored.
pub fn options_from_env() -> FileOptions {
    dotenv::dotenv().ok();
    let defaults = FileOptions::default();

    FileOptions {
        dir_mode: read_var(DIR_MODE_VAR, parse_mode).unwrap_or(defaults.dir_mode),
        file_mode: read_var(FILE_MODE_VAR, parse_mode).unwrap_or(defaults.file_mode),
        create_parents: read_var(CREATE_PARENTS_VAR, parse_bool)
            .unwrap_or(defaults.create_parents),
    }
}

fn read_var<T>(key: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let value = std::env::var(key).ok()?;
    let parsed = parse(value.trim());
    if parsed.is_none() {
        warn!(key, value = %value, "Ignoring invalid option value");
    }
    parsed
}

/// Octal permission bits, with or without a `0o` prefix.
fn parse_mode(value: &str) -> Option<u32> {
    let digits = value.strip_prefix("0o").unwrap_or(value);
    u32::from_str_radix(digits, 8)
        .ok()
        .filter(|mode| *mode <= 0o7777)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "yes" | "on" => Some(true),
        "0" | "no" | "off" => Some(false),
        other => bool::from_str(other).ok(),
    }
}
