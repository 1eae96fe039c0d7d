use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("format error: {0}")]
    Format(String),
}

impl Error {
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn io_error_converts_and_reports_kind() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_io());
        assert!(!err.is_format());
        assert_eq!(err.to_string(), "io error: gone");
    }

    #[test]
    fn format_error_displays_reason() {
        let err = Error::Format("missing cookie".to_string());
        assert!(err.is_format());
        assert_eq!(err.to_string(), "format error: missing cookie");
    }
}
