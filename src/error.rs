use thiserror::Error;

/// Типы ошибок, которые могут возникнуть при работе с субтитрами
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Ошибка ввода/вывода
    Io,
    /// Ошибка буфера обмена
    Clipboard,
    /// Неверные параметры
    InvalidParameters,
}

/// Ошибки, которые могут возникнуть при загрузке и синхронизации субтитров
#[derive(Debug, Error)]
pub enum Error {
    #[error("Ошибка ввода/вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка буфера обмена: {0}")]
    Clipboard(String),

    #[error("Неверные параметры: {0}")]
    InvalidParameters(String),

    #[error("Ошибка сериализации JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("{0}")]
    LoggedError(String),
}

impl Error {
    /// Создает новую ошибку указанного типа с сообщением
    pub fn new(error_type: ErrorType, message: &str) -> Self {
        match error_type {
            ErrorType::Io => Self::Io(std::io::Error::new(std::io::ErrorKind::Other, message)),
            ErrorType::Clipboard => Self::Clipboard(message.to_string()),
            ErrorType::InvalidParameters => Self::InvalidParameters(message.to_string()),
        }
    }
}

/// Результат с обработкой ошибок
pub type Result<T> = std::result::Result<T, Error>;
