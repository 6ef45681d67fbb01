use std::io;
use thiserror::Error;

/// Everything that can go wrong around the demo. The domain types themselves
/// never fail; only output and config loading do.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to write demo output: {0}")]
    Output(#[from] io::Error),

    #[error("Invalid demo config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_display() {
        let source = toml::from_str::<toml::Value>("age = ").unwrap_err();
        let error = DemoError::from(source);
        assert!(error.to_string().starts_with("Invalid demo config"));
    }

    #[test]
    fn test_io_error_converts_to_output() {
        let error: DemoError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(error, DemoError::Output(_)));
        assert!(error.to_string().starts_with("Failed to write demo output"));
    }
}
