use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CnpjError {
    #[error("no CNPJ was entered")]
    EmptyInput,

    #[error("CNPJ must have 14 digits, got {digits}")]
    InvalidCnpj { digits: usize },

    #[error("CNPJ {cnpj} not found (HTTP {status})")]
    NotFound { cnpj: String, status: u16 },

    #[error("Registry request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Input,
    Registry,
    System,
    Config,
}

impl ErrorCategory {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Input => 1,
            ErrorCategory::Registry => 2,
            ErrorCategory::System => 3,
            ErrorCategory::Config => 4,
        }
    }
}

impl CnpjError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CnpjError::EmptyInput | CnpjError::InvalidCnpj { .. } => ErrorCategory::Input,
            CnpjError::NotFound { .. } => ErrorCategory::Registry,
            CnpjError::Transport(_) | CnpjError::SerializationError(_) | CnpjError::IoError(_) => {
                ErrorCategory::System
            }
            CnpjError::InvalidConfigValueError { .. } | CnpjError::ConfigError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// Message shown to whoever typed the CNPJ.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CnpjError::EmptyInput => "Por favor, insira um CNPJ para buscar.".to_string(),
            CnpjError::InvalidCnpj { .. } => {
                "CNPJ inválido. Certifique-se de que possui 14 dígitos.".to_string()
            }
            CnpjError::NotFound { .. } => "CNPJ não encontrado na base de dados.".to_string(),
            CnpjError::Transport(e) => format!("Ocorreu um erro ao buscar o CNPJ: {}", e),
            CnpjError::SerializationError(e) => {
                format!("Ocorreu um erro ao buscar o CNPJ: {}", e)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }
}

pub type Result<T> = std::result::Result<T, CnpjError>;
