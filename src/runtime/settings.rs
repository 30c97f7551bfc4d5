use crate::config;
use crate::error::AppError;

/// Load settings, falling back to defaults when the file or environment is
/// unusable. The error is handed back so it can be logged once logging is up.
pub fn load_settings() -> (config::Settings, Option<AppError>) {
    match config::Settings::load().and_then(|s| s.validate().map(|()| s)) {
        Ok(s) => (s, None),
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (config::Settings::default(), Some(e)),
    }
}
