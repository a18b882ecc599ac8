use crate::core::{Cnpj, CompanyRecord, ConfigProvider, RegistryClient};
use crate::utils::error::{CnpjError, Result};
use reqwest::{Client, StatusCode};

pub const DEFAULT_BASE_URL: &str = "http://brasilapi.com.br";

/// BrasilAPI CNPJ endpoint: `GET {base_url}/api/cnpj/v1/{cnpj}`.
#[derive(Debug, Clone)]
pub struct BrasilApiClient {
    base_url: String,
    client: Client,
}

impl BrasilApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.registry_base_url())
    }

    pub fn lookup_url(&self, cnpj: &Cnpj) -> String {
        format!(
            "{}/api/cnpj/v1/{}",
            self.base_url.trim_end_matches('/'),
            cnpj
        )
    }
}

impl Default for BrasilApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl RegistryClient for BrasilApiClient {
    async fn fetch(&self, cnpj: &Cnpj) -> Result<CompanyRecord> {
        let url = self.lookup_url(cnpj);
        tracing::debug!("Making registry request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Registry response status: {}", status);

        // Any answer other than 200 counts as "not found".
        if status != StatusCode::OK {
            return Err(CnpjError::NotFound {
                cnpj: cnpj.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let record = serde_json::from_str(&body)?;
        Ok(record)
    }
}
