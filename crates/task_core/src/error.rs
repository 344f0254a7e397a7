use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    Validation(String),
    NotFound(String),
    CorruptStore(String),
    Io(String),
}

impl TaskError {
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<M: Into<String>>(message: M) -> Self {
        Self::NotFound(message.into())
    }

    pub fn corrupt_store<M: Into<String>>(message: M) -> Self {
        Self::CorruptStore(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::CorruptStore(_) => "corrupt_store",
            Self::Io(_) => "io_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) => message,
            Self::NotFound(message) => message,
            Self::CorruptStore(message) => message,
            Self::Io(message) => message,
        }
    }
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for TaskError {}
