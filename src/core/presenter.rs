//! Maps a [`CompanyRecord`] onto the labeled sections shown to the user.
//!
//! Everything here is pure: no I/O, no failure paths. Missing values become
//! [`MISSING`] (or are skipped inside composite lines).

use crate::core::formatter::{format_cep, format_cnpj, format_cpf, format_currency};
use crate::domain::model::{CompanyRecord, Partner};
use serde::Serialize;

pub const MISSING: &str = "N/A";
pub const NO_PARTNERS: &str = "Nenhum sócio encontrado.";

/// A label and one or more display lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub lines: Vec<String>,
}

impl Field {
    fn single(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            lines: vec![value.into()],
        }
    }

    fn optional(label: &'static str, value: Option<&str>) -> Self {
        Self::single(label, value.unwrap_or(MISSING))
    }

    /// First line, or the empty string for a field without lines.
    pub fn value(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnerView {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "entries", rename_all = "snake_case")]
pub enum PartnersView {
    Empty,
    Listed(Vec<PartnerView>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitiesView {
    pub primary: String,
    pub secondary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyView {
    pub identity: Vec<Field>,
    pub address: Vec<Field>,
    pub status: Vec<Field>,
    pub tax_regime: Field,
    pub partners: PartnersView,
    pub activities: ActivitiesView,
}

pub fn present(record: &CompanyRecord) -> CompanyView {
    CompanyView {
        identity: identity(record),
        address: address(record),
        status: status(record),
        tax_regime: tax_regime(record),
        partners: partners(record.partners()),
        activities: activities(record),
    }
}

fn identity(record: &CompanyRecord) -> Vec<Field> {
    let phones = record.phones();
    vec![
        Field::optional("Razão Social", record.legal_name()),
        Field::optional("Nome Fantasia", record.trade_name()),
        Field::single(
            "CNPJ",
            record.cnpj().map(format_cnpj).unwrap_or_else(|| MISSING.to_string()),
        ),
        Field::single("Capital Social", format_currency(record.share_capital())),
        Field::optional("Data de Abertura", record.opening_date()),
        Field::single(
            "Telefones",
            if phones.is_empty() {
                MISSING.to_string()
            } else {
                phones.join(", ")
            },
        ),
    ]
}

fn address(record: &CompanyRecord) -> Vec<Field> {
    let street = join_present(&[record.street_type(), record.street()], " ");
    let street_line = join_present(
        &[non_empty(&street), record.number(), record.complement()],
        ", ",
    );

    let locality = join_present(&[record.neighborhood(), record.city()], ", ");
    let locality_line = join_present(&[non_empty(&locality), record.state()], " - ");

    vec![
        Field {
            label: "Endereço",
            lines: vec![or_missing(street_line), or_missing(locality_line)],
        },
        Field::single(
            "CEP",
            record.postal_code().map(format_cep).unwrap_or_else(|| MISSING.to_string()),
        ),
        Field::optional("E-mail", record.email()),
    ]
}

fn status(record: &CompanyRecord) -> Vec<Field> {
    vec![
        Field::optional("Situação Cadastral", record.registration_status()),
        Field::optional(
            "Data da Situação Cadastral",
            record.registration_status_date(),
        ),
    ]
}

fn tax_regime(record: &CompanyRecord) -> Field {
    Field::optional(
        "Regime de Tributação",
        record.current_tax_regime().and_then(|regime| regime.form()),
    )
}

fn partners(partners: &[Partner]) -> PartnersView {
    if partners.is_empty() {
        return PartnersView::Empty;
    }

    PartnersView::Listed(
        partners
            .iter()
            .map(|partner| PartnerView {
                fields: vec![
                    Field::optional("Nome", partner.name()),
                    Field::single(
                        "CPF/CNPJ",
                        partner
                            .document()
                            .map(format_cpf)
                            .unwrap_or_else(|| MISSING.to_string()),
                    ),
                    Field::optional("Qualificação", partner.qualification()),
                    Field::optional("Data de Entrada na sociedade", partner.entry_date()),
                ],
            })
            .collect(),
    )
}

fn activities(record: &CompanyRecord) -> ActivitiesView {
    ActivitiesView {
        primary: record.primary_activity().unwrap_or(MISSING).to_string(),
        secondary: record
            .secondary_activities()
            .iter()
            .map(|activity| activity.description().unwrap_or(MISSING).to_string())
            .collect(),
    }
}

fn join_present(parts: &[Option<&str>], separator: &str) -> String {
    parts.iter().flatten().copied().collect::<Vec<_>>().join(separator)
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

fn or_missing(value: String) -> String {
    if value.is_empty() {
        MISSING.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> CompanyRecord {
        serde_json::from_value(value).unwrap()
    }

    fn field<'a>(fields: &'a [Field], label: &str) -> &'a Field {
        fields
            .iter()
            .find(|f| f.label == label)
            .unwrap_or_else(|| panic!("missing field {}", label))
    }

    fn full_record() -> CompanyRecord {
        record(json!({
            "cnpj": "19131243000197",
            "razao_social": "OPEN KNOWLEDGE BRASIL",
            "nome_fantasia": "REDE PELO CONHECIMENTO LIVRE",
            "capital_social": 1500000.5,
            "data_inicio_atividade": "2013-10-03",
            "ddd_telefone_1": "1123851939",
            "ddd_telefone_2": "",
            "email": "contato@ok.org.br",
            "descricao_tipo_de_logradouro": "AVENIDA",
            "logradouro": "PAULISTA 37",
            "numero": "37",
            "complemento": "ANDAR 4",
            "bairro": "BELA VISTA",
            "municipio": "SAO PAULO",
            "uf": "SP",
            "cep": "01311902",
            "descricao_situacao_cadastral": "ATIVA",
            "data_situacao_cadastral": "2013-10-03",
            "regime_tributario": [
                {"ano": 2020, "forma_de_tributacao": "LUCRO PRESUMIDO"},
                {"ano": 2021, "forma_de_tributacao": "IMUNE DO IRPJ"}
            ],
            "qsa": [
                {
                    "nome_socio": "NATALIA PASSOS MAZOTTE CORTEZ",
                    "cnpj_cpf_do_socio": "***059967**",
                    "qualificacao_socio": "Presidente",
                    "data_entrada_socio": "2019-02-14"
                }
            ],
            "cnae_fiscal": 9430800,
            "cnae_fiscal_descricao": "Atividades de associações de defesa de direitos sociais",
            "cnaes_secundarios": [
                {"codigo": 9493600, "descricao": "Atividades de organizações associativas ligadas à cultura e à arte"},
                {"codigo": 9499500, "descricao": "Atividades associativas não especificadas anteriormente"}
            ]
        }))
    }

    #[test]
    fn test_identity_section_order_and_formatting() {
        let view = present(&full_record());

        let labels: Vec<&str> = view.identity.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec![
                "Razão Social",
                "Nome Fantasia",
                "CNPJ",
                "Capital Social",
                "Data de Abertura",
                "Telefones"
            ]
        );
        assert_eq!(field(&view.identity, "CNPJ").value(), "19.131.243/0001-97");
        assert_eq!(
            field(&view.identity, "Capital Social").value(),
            "R$ 1,500,000.50"
        );
        assert_eq!(field(&view.identity, "Telefones").value(), "1123851939");
    }

    #[test]
    fn test_address_lines() {
        let view = present(&full_record());

        let address = field(&view.address, "Endereço");
        assert_eq!(
            address.lines,
            vec![
                "AVENIDA PAULISTA 37, 37, ANDAR 4".to_string(),
                "BELA VISTA, SAO PAULO - SP".to_string()
            ]
        );
        assert_eq!(field(&view.address, "CEP").value(), "01311-902");
        assert_eq!(field(&view.address, "E-mail").value(), "contato@ok.org.br");
    }

    #[test]
    fn test_address_skips_missing_parts() {
        let view = present(&record(json!({
            "logradouro": "DAS FLORES",
            "municipio": "CURITIBA",
            "cep": "8000"
        })));

        let address = field(&view.address, "Endereço");
        assert_eq!(
            address.lines,
            vec!["DAS FLORES".to_string(), "CURITIBA".to_string()]
        );
        assert_eq!(field(&view.address, "CEP").value(), "8000");
    }

    #[test]
    fn test_status_and_current_tax_regime() {
        let view = present(&full_record());

        assert_eq!(field(&view.status, "Situação Cadastral").value(), "ATIVA");
        assert_eq!(view.tax_regime.value(), "IMUNE DO IRPJ");
    }

    #[test]
    fn test_empty_tax_regime_list_renders_placeholder() {
        let view = present(&record(json!({"regime_tributario": []})));
        assert_eq!(view.tax_regime.value(), MISSING);
    }

    #[test]
    fn test_tax_regime_without_form_renders_placeholder() {
        let view = present(&record(json!({"regime_tributario": [{"ano": 2022}]})));
        assert_eq!(view.tax_regime.value(), MISSING);
    }

    #[test]
    fn test_empty_partner_list_has_no_entries() {
        let view = present(&record(json!({"qsa": []})));
        assert_eq!(view.partners, PartnersView::Empty);
    }

    #[test]
    fn test_partner_document_is_formatted() {
        let view = present(&full_record());

        let PartnersView::Listed(partners) = &view.partners else {
            panic!("expected partners");
        };
        assert_eq!(partners.len(), 1);
        assert_eq!(
            field(&partners[0].fields, "Nome").value(),
            "NATALIA PASSOS MAZOTTE CORTEZ"
        );
        assert_eq!(
            field(&partners[0].fields, "CPF/CNPJ").value(),
            "***.059.967-**"
        );
        assert_eq!(
            field(&partners[0].fields, "Data de Entrada na sociedade").value(),
            "2019-02-14"
        );
    }

    #[test]
    fn test_activities() {
        let view = present(&full_record());

        assert_eq!(
            view.activities.primary,
            "Atividades de associações de defesa de direitos sociais"
        );
        assert_eq!(view.activities.secondary.len(), 2);
        assert_eq!(
            view.activities.secondary[1],
            "Atividades associativas não especificadas anteriormente"
        );
    }

    #[test]
    fn test_empty_record_renders_placeholders() {
        let view = present(&CompanyRecord::default());

        for f in view.identity.iter().filter(|f| f.label != "Capital Social") {
            assert_eq!(f.value(), MISSING, "{}", f.label);
        }
        assert_eq!(field(&view.identity, "Capital Social").value(), "R$ 0.00");
        assert_eq!(
            field(&view.address, "Endereço").lines,
            vec![MISSING.to_string(), MISSING.to_string()]
        );
        assert_eq!(view.partners, PartnersView::Empty);
        assert_eq!(view.activities.primary, MISSING);
        assert!(view.activities.secondary.is_empty());
    }

    #[test]
    fn test_view_serializes_partners_state() {
        let view = present(&record(json!({"qsa": []})));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["partners"]["state"], "empty");
        assert_eq!(json["tax_regime"]["lines"][0], MISSING);
    }
}
