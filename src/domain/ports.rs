use crate::domain::model::{Cnpj, CompanyRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to a CNPJ registry.
///
/// One call is one request: `Ok` for a found record, `CnpjError::NotFound` for
/// any non-200 answer, `CnpjError::Transport` when the request itself failed.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn fetch(&self, cnpj: &Cnpj) -> Result<CompanyRecord>;
}

pub trait ConfigProvider: Send + Sync {
    fn registry_base_url(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn column_width(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALUES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
