use super::*;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jobdeck_protocols::FilterItem;

fn job_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "nightly-backup",
        "jobType": "scheduledJobs",
        "status": "ACTIVE",
        "username": "alice",
        "schedule": "0 2 * * *"
    })
}

async fn client(server: &MockServer) -> SchedulerApiClient {
    let base_url = Url::parse(&server.uri()).unwrap();
    SchedulerApiClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_list_sends_canonical_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scheduledJobs"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "50"))
        .and(query_param("search", "backup"))
        .and(query_param("status", "ACTIVE"))
        .and(query_param("not_username", "bob"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "count": 1, "results": [job_json("1")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut query = QueryState::new("scheduledJobs");
    query.page = 2;
    query.limit = 50;
    query.search = "backup".to_string();
    query.filters = query
        .filters
        .add(FilterItem::include("status", "ACTIVE"))
        .unwrap()
        .add(FilterItem::exclude("username", "bob"))
        .unwrap();

    let page = client(&server).await.list(&query).await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].id, "1");
}

#[tokio::test]
async fn test_list_omits_empty_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scheduledJobs"))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "count": 0, "results": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let query = QueryState::new("scheduledJobs");
    let page = client(&server).await.list(&query).await.unwrap();
    assert_eq!(page.count, 0);
}

#[tokio::test]
async fn test_error_status_maps_detail_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scheduledJobs/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "No such job" })),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .await
        .get("scheduledJobs", "99")
        .await
        .unwrap_err();
    match err {
        ApiError::Status { code, message } => {
            assert_eq!(code, 404);
            assert_eq!(message, "No such job");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_posts_job() {
    let server = MockServer::start().await;
    let new_job = NewJob {
        name: "nightly-backup".to_string(),
        job_type: "scheduledJobs".to_string(),
        status: "ACTIVE".to_string(),
        username: "alice".to_string(),
        schedule: "0 2 * * *".to_string(),
    };
    Mock::given(method("POST"))
        .and(path("/api/scheduledJobs"))
        .and(body_json(&new_job))
        .respond_with(ResponseTemplate::new(201).set_body_json(job_json("7")))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .await
        .create("scheduledJobs", &new_job)
        .await
        .unwrap();
    assert_eq!(created.id, "7");
}

#[tokio::test]
async fn test_update_patches_job() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/scheduledJobs/7"))
        .and(body_json(json!({ "status": "PAUSED" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json("7")))
        .expect(1)
        .mount(&server)
        .await;

    let update = JobUpdate {
        status: Some("PAUSED".to_string()),
        ..JobUpdate::default()
    };
    client(&server)
        .await
        .update("scheduledJobs", "7", &update)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_many_posts_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scheduledJobs/bulk-delete"))
        .and(body_json(json!({ "ids": ["1", "2"] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ids = vec!["1".to_string(), "2".to_string()];
    client(&server)
        .await
        .delete_many("scheduledJobs", &ids)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_csv_returns_accepted_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scheduledJobs/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accepted": 12 })))
        .expect(1)
        .mount(&server)
        .await;

    let accepted = client(&server)
        .await
        .upload_csv("scheduledJobs", b"name,schedule\n".to_vec())
        .await
        .unwrap();
    assert_eq!(accepted, 12);
}

#[tokio::test]
async fn test_export_csv_returns_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scheduledJobs/export"))
        .and(query_param("status", "ACTIVE"))
        .respond_with(ResponseTemplate::new(200).set_body_string("id,name\n1,n\n"))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = QueryState::new("scheduledJobs");
    query.filters = query
        .filters
        .add(FilterItem::include("status", "ACTIVE"))
        .unwrap();

    let bytes = client(&server).await.export_csv(&query).await.unwrap();
    assert_eq!(bytes, b"id,name\n1,n\n");
}
