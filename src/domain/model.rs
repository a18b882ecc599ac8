use serde::Deserialize;
use std::fmt;

/// Fixed-length numeric identifiers used by the Brazilian registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// CNPJ, legal entities.
    Company,
    /// CPF, individuals.
    Person,
    /// CEP.
    PostalCode,
}

impl IdentifierKind {
    pub const fn digits(self) -> usize {
        match self {
            IdentifierKind::Company => 14,
            IdentifierKind::Person => 11,
            IdentifierKind::PostalCode => 8,
        }
    }
}

/// A normalized CNPJ: exactly 14 ASCII digits.
///
/// Only obtainable through [`crate::core::normalizer::parse_cnpj`] (or `str::parse`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(pub(crate) String);

impl Cnpj {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Company record as returned by the registry.
///
/// Nothing in the payload is guaranteed: every field defaults when absent or null,
/// and text fields accept numbers too. Read through the accessors, which treat
/// blank strings as absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompanyRecord {
    #[serde(deserialize_with = "lenient::text")]
    cnpj: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    razao_social: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    nome_fantasia: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    capital_social: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    data_inicio_atividade: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    ddd_telefone_1: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    ddd_telefone_2: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    email: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    descricao_tipo_de_logradouro: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    logradouro: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    numero: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    complemento: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    bairro: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    municipio: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    uf: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    cep: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    descricao_situacao_cadastral: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    data_situacao_cadastral: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    regime_tributario: Vec<TaxRegime>,

    #[serde(deserialize_with = "lenient::list")]
    qsa: Vec<Partner>,

    #[serde(deserialize_with = "lenient::text")]
    cnae_fiscal: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    cnae_fiscal_descricao: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    cnaes_secundarios: Vec<Activity>,
}

impl CompanyRecord {
    pub fn cnpj(&self) -> Option<&str> {
        present(&self.cnpj)
    }

    pub fn legal_name(&self) -> Option<&str> {
        present(&self.razao_social)
    }

    pub fn trade_name(&self) -> Option<&str> {
        present(&self.nome_fantasia)
    }

    /// Share capital; zero when the registry omits it.
    pub fn share_capital(&self) -> f64 {
        self.capital_social.unwrap_or(0.0)
    }

    pub fn opening_date(&self) -> Option<&str> {
        present(&self.data_inicio_atividade)
    }

    /// Up to two phone numbers, in registry order, blanks skipped.
    pub fn phones(&self) -> Vec<&str> {
        [&self.ddd_telefone_1, &self.ddd_telefone_2]
            .into_iter()
            .filter_map(present)
            .collect()
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn street_type(&self) -> Option<&str> {
        present(&self.descricao_tipo_de_logradouro)
    }

    pub fn street(&self) -> Option<&str> {
        present(&self.logradouro)
    }

    pub fn number(&self) -> Option<&str> {
        present(&self.numero)
    }

    pub fn complement(&self) -> Option<&str> {
        present(&self.complemento)
    }

    pub fn neighborhood(&self) -> Option<&str> {
        present(&self.bairro)
    }

    pub fn city(&self) -> Option<&str> {
        present(&self.municipio)
    }

    pub fn state(&self) -> Option<&str> {
        present(&self.uf)
    }

    pub fn postal_code(&self) -> Option<&str> {
        present(&self.cep)
    }

    pub fn registration_status(&self) -> Option<&str> {
        present(&self.descricao_situacao_cadastral)
    }

    pub fn registration_status_date(&self) -> Option<&str> {
        present(&self.data_situacao_cadastral)
    }

    pub fn tax_regimes(&self) -> &[TaxRegime] {
        &self.regime_tributario
    }

    /// The last regime entry is taken as the current one; the registry lists
    /// them by year.
    pub fn current_tax_regime(&self) -> Option<&TaxRegime> {
        self.regime_tributario.last()
    }

    pub fn partners(&self) -> &[Partner] {
        &self.qsa
    }

    pub fn primary_activity_code(&self) -> Option<&str> {
        present(&self.cnae_fiscal)
    }

    pub fn primary_activity(&self) -> Option<&str> {
        present(&self.cnae_fiscal_descricao)
    }

    pub fn secondary_activities(&self) -> &[Activity] {
        &self.cnaes_secundarios
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaxRegime {
    #[serde(deserialize_with = "lenient::text")]
    ano: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    forma_de_tributacao: Option<String>,
}

impl TaxRegime {
    pub fn year(&self) -> Option<&str> {
        present(&self.ano)
    }

    pub fn form(&self) -> Option<&str> {
        present(&self.forma_de_tributacao)
    }
}

/// One row of the QSA (partners and officers).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Partner {
    #[serde(deserialize_with = "lenient::text")]
    nome_socio: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    cnpj_cpf_do_socio: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    qualificacao_socio: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    data_entrada_socio: Option<String>,
}

impl Partner {
    pub fn name(&self) -> Option<&str> {
        present(&self.nome_socio)
    }

    /// CPF (often masked by the registry) or CNPJ of the partner.
    pub fn document(&self) -> Option<&str> {
        present(&self.cnpj_cpf_do_socio)
    }

    pub fn qualification(&self) -> Option<&str> {
        present(&self.qualificacao_socio)
    }

    pub fn entry_date(&self) -> Option<&str> {
        present(&self.data_entrada_socio)
    }
}

/// A CNAE entry.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Activity {
    #[serde(deserialize_with = "lenient::text")]
    codigo: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    descricao: Option<String>,
}

impl Activity {
    pub fn code(&self) -> Option<&str> {
        present(&self.codigo)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.descricao)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
