use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Команда завершилась с ошибкой: {0}")]
    CommandFailed(String),

    #[error("Утилита не найдена: {0}")]
    ToolNotFound(String),
}

impl PadError {
    pub fn command_failed<T>(msg: impl Into<String>) -> Result<T> {
        Err(PadError::CommandFailed(msg.into()))
    }
}

pub type Result<T> = std::result::Result<T, PadError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! pad_error {
    (command_failed, $($arg:tt)*) => {
        $crate::error::PadError::CommandFailed(format!($($arg)*))
    };
    (tool_not_found, $($arg:tt)*) => {
        $crate::error::PadError::ToolNotFound(format!($($arg)*))
    };
}
