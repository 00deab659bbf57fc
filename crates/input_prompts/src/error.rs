use thiserror::Error;

/// Why a single action path could not be turned into prompts.
///
/// The `Display` output doubles as the token embedded into formatted text in
/// place of the failed tag, so a broken prompt stays visible in-product.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("NOT_INITIALIZED")]
    NotInitialized,

    #[error("NO_ACTIVE_DEVICE")]
    NoActiveDevice,

    #[error("MISSING_DEVICE '{0}'")]
    UnregisteredDevice(String),

    #[error("MISSING_ACTION {0}")]
    UnknownAction(String),

    #[error("MISSING_DEVICE_ENTRIES '{device}'")]
    NoPromptEntriesResolved { action: String, device: String },
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ron error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("unsupported settings format: {0:?}")]
    UnsupportedFormat(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_errors_render_as_text_tokens() {
        assert_eq!(ResolveError::NoActiveDevice.to_string(), "NO_ACTIVE_DEVICE");
        assert_eq!(
            ResolveError::UnknownAction("Player/Fly".into()).to_string(),
            "MISSING_ACTION Player/Fly"
        );
        assert_eq!(
            ResolveError::UnregisteredDevice("Joystick".into()).to_string(),
            "MISSING_DEVICE 'Joystick'"
        );
        let err = ResolveError::NoPromptEntriesResolved {
            action: "Player/Jump".into(),
            device: "Keyboard".into(),
        };
        assert_eq!(err.to_string(), "MISSING_DEVICE_ENTRIES 'Keyboard'");
    }
}
