//! End-to-end CNPJ lookups against wiremock stand-ins for BrasilAPI and CNPJá.
//!
//! ## Endpoints Mocked
//!
//! | Provider | Method | Path |
//! |----------|--------|------|
//! | BrasilAPI | GET | `/api/cnpj/v1/{cnpj}` |
//! | CNPJá | GET | `/office/{cnpj}` |
//!
//! Neither provider's failure is authoritative, so every primary failure,
//! 404 included, must reach the secondary.

use locar_lookup::{CompanyResult, LookupClient, LookupConfig, LookupErrorKind};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zeroize::Zeroizing;

fn test_client(mock_server: &MockServer) -> LookupClient {
    let config = LookupConfig::local_mock(&mock_server.uri()).unwrap();
    LookupClient::new(config).unwrap()
}

fn cnpja_office() -> serde_json::Value {
    serde_json::json!({
        "taxId": "12345678000199",
        "alias": "Padaria Central",
        "founded": "2010-06-15",
        "company": {
            "id": 12345678,
            "name": "PADARIA CENTRAL LTDA",
            "size": { "id": 3, "acronym": "EPP", "text": "Empresa de Pequeno Porte" }
        },
        "mainActivity": { "id": 1091102, "text": "Fabricação de produtos de padaria" },
        "registrations": [
            { "number": "444555666", "state": "SP", "enabled": true }
        ]
    })
}

async fn mount_failing_brasilapi(mock_server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/api/cnpj/v1/12345678000199"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(mock_server)
        .await;
}

// ── Primary path ─────────────────────────────────────────────────────

#[tokio::test]
async fn formatted_cnpj_resolves_through_brasilapi() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cnpj/v1/12345678000199"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cnpj": "12345678000199",
            "razao_social": "PADARIA CENTRAL LTDA",
            "nome_fantasia": "Padaria Central",
            "data_inicio_atividade": "2010-06-15",
            "cnae_fiscal_descricao": "Fabricação de produtos de padaria",
            "porte": "EMPRESA DE PEQUENO PORTE"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/office/12345678000199"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cnpja_office()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let company = client.resolve_cnpj("12.345.678/0001-99").await.unwrap();
    assert_eq!(company.legal_name, "PADARIA CENTRAL LTDA");
    assert_eq!(company.trade_name, "Padaria Central");
    assert_eq!(company.incorporation_date, "2010-06-15");
    assert_eq!(company.size, "Empresa de Pequeno Porte");
    assert_eq!(company.municipal_registration, "");
}

// ── Fallback path ────────────────────────────────────────────────────

#[tokio::test]
async fn brasilapi_outage_falls_back_to_cnpja() {
    let mock_server = MockServer::start().await;
    mount_failing_brasilapi(&mock_server, 503).await;

    Mock::given(method("GET"))
        .and(path("/office/12345678000199"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cnpja_office()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let company = client.resolve_cnpj("12345678000199").await.unwrap();
    assert_eq!(
        company,
        CompanyResult {
            legal_name: "PADARIA CENTRAL LTDA".into(),
            trade_name: "Padaria Central".into(),
            incorporation_date: "2010-06-15".into(),
            primary_activity: "Fabricação de produtos de padaria".into(),
            size: "Empresa de Pequeno Porte".into(),
            state_registration: "444555666".into(),
            municipal_registration: String::new(),
        }
    );
}

#[tokio::test]
async fn brasilapi_404_still_falls_back() {
    let mock_server = MockServer::start().await;
    mount_failing_brasilapi(&mock_server, 404).await;

    Mock::given(method("GET"))
        .and(path("/office/12345678000199"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cnpja_office()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let company = client.resolve_cnpj("12345678000199").await.unwrap();
    assert_eq!(company.legal_name, "PADARIA CENTRAL LTDA");
}

#[tokio::test]
async fn both_providers_failing_is_unavailable_never_not_found() {
    let mock_server = MockServer::start().await;
    mount_failing_brasilapi(&mock_server, 404).await;

    Mock::given(method("GET"))
        .and(path("/office/12345678000199"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.resolve_cnpj("12345678000199").await.unwrap_err();
    assert_eq!(err.kind(), LookupErrorKind::ProviderUnavailable);
}

#[tokio::test]
async fn cnpja_receives_configured_api_key() {
    let mock_server = MockServer::start().await;
    mount_failing_brasilapi(&mock_server, 500).await;

    Mock::given(method("GET"))
        .and(path("/office/12345678000199"))
        .and(header("authorization", "cnpja-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cnpja_office()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = LookupConfig::local_mock(&mock_server.uri()).unwrap();
    config.cnpja_api_key = Some(Zeroizing::new("cnpja-test-key".to_string()));
    let client = LookupClient::new(config).unwrap();

    let company = client.resolve_cnpj("12345678000199").await.unwrap();
    assert_eq!(company.size, "Empresa de Pequeno Porte");
}

#[tokio::test]
async fn cnpja_brazilian_date_is_normalized() {
    let mock_server = MockServer::start().await;
    mount_failing_brasilapi(&mock_server, 502).await;

    let mut office = cnpja_office();
    office["founded"] = serde_json::json!("15/06/2010");
    Mock::given(method("GET"))
        .and(path("/office/12345678000199"))
        .respond_with(ResponseTemplate::new(200).set_body_json(office))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let company = client.resolve_cnpj("12345678000199").await.unwrap();
    assert_eq!(company.incorporation_date, "2010-06-15");
}

// ── Local validation ─────────────────────────────────────────────────

#[tokio::test]
async fn thirteen_digit_cnpj_makes_no_network_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.resolve_cnpj("1234567800019").await.unwrap_err();
    assert_eq!(err.kind(), LookupErrorKind::InvalidShape);
    assert!(err.to_string().contains("got 13"));
}
