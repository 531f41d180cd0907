//! Exit-code behavior of the lookup subcommands against a wiremock provider.

use locar_cli::lookup::{
    run_cep, run_cnpj, LookupArgs, EXIT_INVALID_SHAPE, EXIT_NOT_FOUND, EXIT_OK,
    EXIT_PROVIDER_UNAVAILABLE,
};
use locar_lookup::{LookupClient, LookupConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> LookupClient {
    LookupClient::new(LookupConfig::local_mock(&mock_server.uri()).unwrap()).unwrap()
}

fn args(raw: &str) -> LookupArgs {
    LookupArgs {
        raw: raw.to_string(),
        plain: true,
    }
}

#[tokio::test]
async fn cep_success_exits_zero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/01310100/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "logradouro": "Avenida Paulista",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let code = run_cep(&args("01310-100"), &test_client(&mock_server)).await.unwrap();
    assert_eq!(code, EXIT_OK);
}

#[tokio::test]
async fn cep_not_found_exits_three() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "erro": "true" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let code = run_cep(&args("99999-999"), &test_client(&mock_server)).await.unwrap();
    assert_eq!(code, EXIT_NOT_FOUND);
}

#[tokio::test]
async fn cnpj_outage_exits_four() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let code = run_cnpj(&args("12.345.678/0001-99"), &test_client(&mock_server))
        .await
        .unwrap();
    assert_eq!(code, EXIT_PROVIDER_UNAVAILABLE);
}

#[tokio::test]
async fn malformed_cnpj_exits_two_without_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let code = run_cnpj(&args("12.345.678/0001"), &test_client(&mock_server))
        .await
        .unwrap();
    assert_eq!(code, EXIT_INVALID_SHAPE);
}
