//! End-to-end resolver tests: real schema execution against a wiremock
//! Admin API. Mock expectations double as fetch-count assertions — every
//! relationship resolution must hit its endpoint exactly as often as the
//! resolution rules say.

use async_graphql::Request;
use kongql_admin::AdminClient;
use kongql_graphql::build_schema;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ───────────────────────────────────────────────────

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}

async fn mock_get(server: &MockServer, at: &str, body: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(json_response(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn execute(server: &MockServer, query: &str) -> async_graphql::Response {
    let client = AdminClient::with_base_url(&server.uri()).unwrap();
    build_schema().execute(Request::new(query).data(client)).await
}

const SERVICE_S1: &str = r#"{"id": "s1", "name": "billing", "protocol": "http",
                             "host": "billing.internal", "port": 80, "created_at": 1563208000}"#;

// ── Relationship resolution ──────────────────────────────────

#[tokio::test]
async fn service_resolves_routes_and_plugins_from_scoped_collections() {
    let server = MockServer::start().await;
    mock_get(&server, "/services/s1", SERVICE_S1, 1).await;
    mock_get(
        &server,
        "/services/s1/routes",
        r#"{"data": [
            {"id": "r1", "service": {"id": "s1"}},
            {"id": "r2", "service": {"id": "s1"}}
        ]}"#,
        1,
    )
    .await;
    mock_get(
        &server,
        "/services/s1/plugins",
        r#"{"data": [{"id": "p1", "name": "rate-limiting", "enabled": true}]}"#,
        1,
    )
    .await;

    let response = execute(
        &server,
        r#"{ service(id: "s1") { id name routes { id } plugins { id name } } }"#,
    )
    .await;

    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let service = &data["service"];
    assert_eq!(service["name"], "billing");
    assert_eq!(service["routes"].as_array().unwrap().len(), 2);
    assert_eq!(service["plugins"].as_array().unwrap().len(), 1);
    assert_eq!(service["plugins"][0]["name"], "rate-limiting");
}

#[tokio::test]
async fn route_service_is_refetched_from_the_embedded_reference() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/routes/r1",
        r#"{"id": "r1", "https_redirect_status_code": 426, "service": {"id": "s1"}}"#,
        1,
    )
    .await;
    mock_get(&server, "/services/s1", SERVICE_S1, 1).await;

    let response = execute(&server, r#"{ route(id: "r1") { id service { id host } } }"#).await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["route"]["service"]["host"], "billing.internal");
}

#[tokio::test]
async fn unattached_route_fails_the_service_field_only() {
    let server = MockServer::start().await;
    mock_get(&server, "/routes/r2", r#"{"id": "r2", "service": null}"#, 1).await;

    let response = execute(&server, r#"{ route(id: "r2") { id service { id } } }"#).await;

    assert_eq!(response.errors.len(), 1);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["route"]["id"], "r2");
    assert!(data["route"]["service"].is_null());
}

#[tokio::test]
async fn plugin_without_owner_resolves_null_and_never_fetches() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/plugins/p1",
        r#"{"id": "p1", "name": "zipkin", "service": null, "route": null, "consumer": null}"#,
        1,
    )
    .await;
    // Any owner fetch would be a contract violation.
    Mock::given(method("GET"))
        .and(path_regex("^/(services|routes|consumers)/.+"))
        .respond_with(json_response("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let response = execute(
        &server,
        r#"{ plugin(id: "p1") { id service { id } route { id } consumer { id } } }"#,
    )
    .await;

    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert!(data["plugin"]["service"].is_null());
    assert!(data["plugin"]["route"].is_null());
    assert!(data["plugin"]["consumer"].is_null());
}

#[tokio::test]
async fn plugin_owner_reference_triggers_exactly_one_fetch() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/plugins/p2",
        r#"{"id": "p2", "name": "key-auth", "service": {"id": "s1"}, "route": null, "consumer": null}"#,
        1,
    )
    .await;
    mock_get(&server, "/services/s1", SERVICE_S1, 1).await;

    let response = execute(&server, r#"{ plugin(id: "p2") { service { id name } } }"#).await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["plugin"]["service"]["id"], "s1");
}

#[tokio::test]
async fn consumer_resolves_scoped_plugins() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/consumers/c1",
        r#"{"id": "c1", "username": "alice", "custom_id": "crm-42"}"#,
        1,
    )
    .await;
    mock_get(
        &server,
        "/consumers/c1/plugins",
        r#"{"data": [{"id": "p3", "name": "rate-limiting"}]}"#,
        1,
    )
    .await;

    let response = execute(
        &server,
        r#"{ consumer(id: "c1") { username plugins { id name } } }"#,
    )
    .await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["consumer"]["username"], "alice");
    assert_eq!(data["consumer"]["plugins"].as_array().unwrap().len(), 1);
}

// ── Map→list reshapes through the full stack ─────────────────

#[tokio::test]
async fn status_exposes_shared_dicts_as_an_ordered_list() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/status",
        r#"{
            "database": {"reachable": true},
            "memory": {
                "lua_shared_dicts": {
                    "kong_locks": {"allocated_slabs": "0.06 MiB", "capacity": "8.00 MiB"},
                    "kong": {"allocated_slabs": "0.04 MiB", "capacity": "5.00 MiB"},
                    "kong_db_cache": {"allocated_slabs": "0.80 MiB", "capacity": "128.00 MiB"}
                }
            },
            "server": {"total_requests": 42}
        }"#,
        1,
    )
    .await;

    let response = execute(
        &server,
        r#"{ status { database { reachable } memory { lua_shared_dicts { name capacity } } } }"#,
    )
    .await;

    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let dicts = data["status"]["memory"]["lua_shared_dicts"].as_array().unwrap();
    assert_eq!(dicts.len(), 3);
    let names: Vec<&str> = dicts.iter().map(|d| d["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["kong_locks", "kong", "kong_db_cache"]);
    assert_eq!(data["status"]["database"]["reachable"], true);
}

#[tokio::test]
async fn node_exposes_plugin_availability_as_an_ordered_list() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/",
        r#"{
            "hostname": "gw-1",
            "node_id": "6a72192c-a3a1-4c8d-95c6-efabae9fb969",
            "version": "1.2.1",
            "plugins": {
                "available_on_server": {"zipkin": true, "acl": false},
                "enabled_in_cluster": ["zipkin"]
            }
        }"#,
        1,
    )
    .await;

    let response = execute(
        &server,
        r#"{ node { node_id plugins { available_on_server { name available } enabled_in_cluster } } }"#,
    )
    .await;

    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let available = data["node"]["plugins"]["available_on_server"].as_array().unwrap();
    assert_eq!(available.len(), 2);
    assert_eq!(available[0]["name"], "zipkin");
    assert_eq!(available[0]["available"], true);
    assert_eq!(available[1]["name"], "acl");
    assert_eq!(available[1]["available"], false);
}

// ── Error isolation ──────────────────────────────────────────

#[tokio::test]
async fn failed_root_field_does_not_abort_siblings() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/services",
        r#"{"data": [{"id": "s1", "protocol": "http", "host": "a.local", "port": 80}]}"#,
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/services/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"message": "Not found"}"#.to_string(),
            "application/json",
        ))
        .mount(&server)
        .await;

    let response = execute(
        &server,
        r#"{ services { id } service(id: "missing") { id } }"#,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["services"].as_array().unwrap().len(), 1);
    assert!(data["service"].is_null());
}
