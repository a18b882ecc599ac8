use busca_cnpj::adapters::terminal::{render_screen, RenderOptions};
use busca_cnpj::app::session::run_session;
use busca_cnpj::config::toml_config::TomlConfig;
use busca_cnpj::domain::ports::OutputFormat;
use busca_cnpj::utils::error::ErrorCategory;
use busca_cnpj::{BrasilApiClient, LookupService, Screen, Settings};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn company_body() -> serde_json::Value {
    serde_json::json!({
        "cnpj": "33000167000101",
        "razao_social": "PETROLEO BRASILEIRO S A PETROBRAS",
        "nome_fantasia": "PETROBRAS",
        "capital_social": 205431960490.52,
        "data_inicio_atividade": "1966-09-28",
        "ddd_telefone_1": "2132242164",
        "ddd_telefone_2": null,
        "email": null,
        "descricao_tipo_de_logradouro": "AVENIDA",
        "logradouro": "REPUBLICA DO CHILE",
        "numero": "65",
        "complemento": "",
        "bairro": "CENTRO",
        "municipio": "RIO DE JANEIRO",
        "uf": "RJ",
        "cep": "20031912",
        "descricao_situacao_cadastral": "ATIVA",
        "data_situacao_cadastral": "2005-11-03",
        "regime_tributario": [
            {"ano": 2019, "forma_de_tributacao": "LUCRO PRESUMIDO"},
            {"ano": 2022, "forma_de_tributacao": "LUCRO REAL"}
        ],
        "qsa": [
            {
                "nome_socio": "JOAO DA SILVA",
                "cnpj_cpf_do_socio": "***123456**",
                "qualificacao_socio": "Diretor",
                "data_entrada_socio": "2021-04-12"
            },
            {
                "nome_socio": "MARIA SOUZA",
                "cnpj_cpf_do_socio": "***654321**",
                "qualificacao_socio": "Presidente do Conselho de Administração",
                "data_entrada_socio": "2022-01-03"
            }
        ],
        "cnae_fiscal": 600001,
        "cnae_fiscal_descricao": "Extração de petróleo e gás natural",
        "cnaes_secundarios": [
            {"codigo": 1921700, "descricao": "Fabricação de produtos do refino de petróleo"},
            {"codigo": 4681801, "descricao": "Comércio atacadista de álcool carburante"}
        ]
    })
}

#[tokio::test]
async fn test_end_to_end_lookup_renders_company() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/cnpj/v1/33000167000101");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(company_body());
        })
        .await;

    let service = LookupService::new(BrasilApiClient::new(server.base_url()));
    let screen = service.handle("33.000.167/0001-01").await;

    api_mock.assert_async().await;
    assert_eq!(screen.exit_code(), 0);

    let out = render_screen(&screen, &RenderOptions::default()).unwrap();
    assert!(out.starts_with("✅ Dados encontrados com sucesso!"));
    assert!(out.contains("Razão Social: PETROLEO BRASILEIRO S A PETROBRAS"));
    assert!(out.contains("CNPJ: 33.000.167/0001-01"));
    assert!(out.contains("Capital Social: R$ 205,431,960,490.52"));
    assert!(out.contains("Telefones: 2132242164"));
    assert!(out.contains("Endereço: AVENIDA REPUBLICA DO CHILE, 65"));
    assert!(out.contains("CENTRO, RIO DE JANEIRO - RJ"));
    assert!(out.contains("CEP: 20031-912"));
    assert!(out.contains("E-mail: N/A"));
    assert!(out.contains("Regime de Tributação: LUCRO REAL"));
    assert!(out.contains("CPF/CNPJ: ***.123.456-**"));
    assert!(out.contains("Nome: MARIA SOUZA"));
    assert!(out.contains("- Extração de petróleo e gás natural"));
    assert!(out.contains("- Comércio atacadista de álcool carburante"));
}

#[tokio::test]
async fn test_end_to_end_not_found() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/cnpj/v1/11222333000181");
            then.status(404).json_body(serde_json::json!({
                "message": "CNPJ 11222333000181 não encontrado.",
                "type": "not_found"
            }));
        })
        .await;

    let service = LookupService::new(BrasilApiClient::new(server.base_url()));
    let screen = service.handle("11222333000181").await;

    api_mock.assert_async().await;
    assert_eq!(
        screen,
        Screen::Failed {
            category: ErrorCategory::Registry,
            message: "CNPJ não encontrado na base de dados.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_invalid_input_makes_no_request() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(company_body());
        })
        .await;

    let service = LookupService::new(BrasilApiClient::new(server.base_url()));
    let screen = service.handle("123").await;

    assert_eq!(screen.exit_code(), 1);
    assert_eq!(api_mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_sparse_response_renders_defaults() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/cnpj/v1/11222333000181");
            then.status(200).json_body(serde_json::json!({
                "cnpj": "11222333000181",
                "qsa": [],
                "regime_tributario": []
            }));
        })
        .await;

    let service = LookupService::new(BrasilApiClient::new(server.base_url()));
    let out = render_screen(
        &service.handle("11222333000181").await,
        &RenderOptions::default(),
    )
    .unwrap();

    assert!(out.contains("Nenhum sócio encontrado."));
    assert!(!out.contains("Qualificação:"));
    assert!(out.contains("Regime de Tributação: N/A"));
    assert!(out.contains("Capital Social: R$ 0.00"));
    assert!(!out.contains("Atividades Secundárias"));
}

#[tokio::test]
async fn test_settings_from_file_drive_client_and_output() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/cnpj/v1/33000167000101");
            then.status(200).json_body(company_body());
        })
        .await;

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        "[registry]\nbase_url = \"{}\"\n\n[output]\nformat = \"json\"\n",
        server.base_url()
    )
    .unwrap();

    let settings = Settings::from_toml(&TomlConfig::from_file(config_file.path()).unwrap()).unwrap();
    assert_eq!(settings.format, OutputFormat::Json);

    let service = LookupService::new(BrasilApiClient::from_config(&settings));
    let out = render_screen(
        &service.handle("33000167000101").await,
        &settings.render_options(),
    )
    .unwrap();

    api_mock.assert_async().await;
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["status"], "found");
    assert_eq!(value["company"]["partners"]["state"], "listed");
    assert_eq!(
        value["company"]["partners"]["entries"].as_array().unwrap().len(),
        2
    );
}

#[tokio::test]
async fn test_interactive_session_against_registry() {
    let server = MockServer::start_async().await;
    let found = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/cnpj/v1/33000167000101");
            then.status(200).json_body(company_body());
        })
        .await;
    let missing = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/cnpj/v1/11222333000181");
            then.status(404);
        })
        .await;

    let service = LookupService::new(BrasilApiClient::new(server.base_url()));
    let mut output = Vec::new();
    let searches = run_session(
        &service,
        &RenderOptions::default(),
        "33.000.167/0001-01\n11.222.333/0001-81\nsair\n".as_bytes(),
        &mut output,
    )
    .await
    .unwrap();

    found.assert_async().await;
    missing.assert_async().await;
    assert_eq!(searches, 2);

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("PETROBRAS"));
    assert!(text.contains("❌ CNPJ não encontrado na base de dados."));
}
