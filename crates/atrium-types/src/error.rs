//! Error types for ATRIUM DESK.

use std::io;

/// Errors produced by the ATRIUM DESK framework.
#[derive(Debug, thiserror::Error)]
pub enum AtriumError {
    #[error("store error: {0}")]
    Store(String),

    #[error("window manager error: {0}")]
    Wm(String),

    #[error("generator error: {0}")]
    Gen(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AtriumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let e = AtriumError::Store("key not writable".into());
        assert_eq!(format!("{e}"), "store error: key not writable");
    }

    #[test]
    fn wm_error_display() {
        let e = AtriumError::Wm("window not found".into());
        assert_eq!(format!("{e}"), "window manager error: window not found");
    }

    #[test]
    fn gen_error_display() {
        let e = AtriumError::Gen("template missing".into());
        assert_eq!(format!("{e}"), "generator error: template missing");
    }

    #[test]
    fn config_error_display() {
        let e = AtriumError::Config("bad import".into());
        assert_eq!(format!("{e}"), "config error: bad import");
    }

    #[test]
    fn surface_error_display() {
        let e = AtriumError::Surface("node missing".into());
        assert_eq!(format!("{e}"), "surface error: node missing");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: AtriumError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: AtriumError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: AtriumError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(7);
        assert_eq!(r.unwrap(), 7);
    }
}
