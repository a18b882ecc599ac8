use crate::core::normalizer::parse_cnpj;
use crate::core::presenter::{present, CompanyView};
use crate::domain::ports::RegistryClient;
use crate::utils::error::{ErrorCategory, Result};
use serde::Serialize;

/// What a single lookup ends up showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Screen {
    Found {
        cnpj: String,
        company: CompanyView,
    },
    Failed {
        category: ErrorCategory,
        message: String,
    },
}

impl Screen {
    pub fn exit_code(&self) -> i32 {
        match self {
            Screen::Found { .. } => 0,
            Screen::Failed { category, .. } => category.exit_code(),
        }
    }
}

/// Handles one search request at a time: normalize, fetch, present.
///
/// Holds no state between calls; every request stands on its own.
pub struct LookupService<C: RegistryClient> {
    client: C,
}

impl<C: RegistryClient> LookupService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn lookup(&self, raw: &str) -> Result<(String, CompanyView)> {
        let cnpj = parse_cnpj(raw)?;
        tracing::debug!(cnpj = %cnpj, "Looking up CNPJ");

        let record = self.client.fetch(&cnpj).await?;
        Ok((cnpj.to_string(), present(&record)))
    }

    /// Like [`lookup`](Self::lookup), with failures turned into the message the
    /// user gets to see.
    pub async fn handle(&self, raw: &str) -> Screen {
        match self.lookup(raw).await {
            Ok((cnpj, company)) => {
                tracing::info!(cnpj = %cnpj, "CNPJ found");
                Screen::Found { cnpj, company }
            }
            Err(e) => {
                let category = e.category();
                match category {
                    ErrorCategory::Input | ErrorCategory::Registry => {
                        tracing::debug!("Lookup rejected: {}", e)
                    }
                    ErrorCategory::System | ErrorCategory::Config => {
                        tracing::warn!("Lookup failed: {}", e)
                    }
                }
                Screen::Failed {
                    category,
                    message: e.user_friendly_message(),
                }
            }
        }
    }
}
