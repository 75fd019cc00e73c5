/// Broad category of an [`AppError`].
///
/// The category decides the process exit code and lets tests assert on the
/// failure class without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad optimizer or run settings (`n_iter < 1`, `η ≤ 0`, dimension mismatch).
    InvalidConfiguration,
    /// Empty or inconsistent dataset.
    Data,
    /// A numerical routine could not produce a finite result.
    Numerical,
    /// File creation, read or write failure.
    Io,
    /// Chart rendering failure.
    Render,
}

impl ErrorKind {
    fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidConfiguration | ErrorKind::Io => 2,
            ErrorKind::Data => 3,
            ErrorKind::Numerical | ErrorKind::Render => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfiguration, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code())
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
