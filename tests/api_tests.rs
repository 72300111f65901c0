// tests/api_tests.rs

use examhub::{config::Config, routes, state::AppState, store};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;

/// Spawns the app on a random port, backed by a fresh in-memory database.
/// Returns the base URL and the state the server runs with.
async fn spawn_app(config: Config) -> (String, AppState) {
    // A single connection: every new connection gets its own empty in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    store::schema::create_tables(&pool)
        .await
        .expect("Failed to create tables");

    let state = AppState::new(pool, config);
    let app = routes::create_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, state)
}

fn assessment(title: &str, description: &str, time_limit: i64) -> Value {
    json!({
        "title": title,
        "description": description,
        "time_limit": time_limit,
        "section": "BSCS-1A",
        "shuffle_questions": false,
        "questions": [
            {
                "id": 1,
                "question": "2 + 2 = ?",
                "type": "multiple_choice",
                "options": ["3", "4", "5"],
                "correctAnswers": [1],
                "required": true,
                "points": 1,
                "shuffleOptions": true
            },
            {
                "id": 2,
                "question": "The earth is flat.",
                "type": "true_false",
                "correctAnswers": [false],
                "required": true,
                "points": 1,
                "shuffleOptions": false
            }
        ]
    })
}

async fn post_json(client: &reqwest::Client, url: String, body: &Value) -> Value {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    response.json().await.expect("Failed to parse json")
}

async fn get_json(client: &reqwest::Client, url: String) -> Value {
    let response = client.get(url).send().await.expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    response.json().await.expect("Failed to parse json")
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (address, _) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn saving_the_same_title_and_description_updates() {
    let (address, state) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let first = post_json(
        &client,
        format!("{}/assessments/save", address),
        &assessment("Quiz 1", "Arithmetic", 300),
    )
    .await;
    assert_eq!(first["status"], "success");
    assert_eq!(first["created"], true);

    let second = post_json(
        &client,
        format!("{}/assessments/save", address),
        &assessment("Quiz 1", "Arithmetic", 900),
    )
    .await;
    assert_eq!(second["status"], "success");
    assert_eq!(second["message"], "Assessment updated!");
    assert_eq!(second["id"], first["id"]);

    assert_eq!(store::assessments::count(&state.pool).await.unwrap(), 1);

    let fetched = get_json(&client, format!("{}/assessments/get/{}", address, first["id"])).await;
    assert_eq!(fetched["assessment"]["time_limit"], 900);
    assert_eq!(fetched["assessment"]["questions"][0]["type"], "multiple_choice");
    assert_eq!(fetched["assessment"]["questions"][1]["correctAnswers"], json!([false]));

    let listed = get_json(&client, format!("{}/assessments/list", address)).await;
    assert_eq!(listed["assessments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_assessment_is_reported_as_data() {
    let (address, state) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let body = post_json(
        &client,
        format!("{}/assessments/save", address),
        &assessment("", "No title", 300),
    )
    .await;

    assert_eq!(body["status"], "error");
    assert_eq!(store::assessments::count(&state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn missing_assessment_is_an_error_envelope() {
    let (address, _) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let body = get_json(&client, format!("{}/assessments/get/42", address)).await;

    assert_eq!(body, json!({"status": "error", "message": "Assessment not found!"}));
}

#[tokio::test]
async fn delete_requires_a_state_changing_verb() {
    let (address, state) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let saved = post_json(
        &client,
        format!("{}/assessments/save", address),
        &assessment("Quiz 1", "Arithmetic", 300),
    )
    .await;
    let url = format!("{}/assessments/delete/{}", address, saved["id"]);

    let via_get = client.get(&url).send().await.unwrap();
    assert_eq!(via_get.status().as_u16(), 405);
    assert_eq!(store::assessments::count(&state.pool).await.unwrap(), 1);

    let deleted: Value = client.delete(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(deleted["message"], "Assessment deleted!");

    let again = post_json(&client, url, &json!({})).await;
    assert_eq!(again["message"], "Assessment not found!");
}

#[tokio::test]
async fn distributing_twice_is_rejected() {
    let (address, state) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();
    let payload = assessment("Midterm", "Chapters 1-4", 3600);

    let first = post_json(&client, format!("{}/assessments/distribute", address), &payload).await;
    assert_eq!(first, json!({"status": "success", "message": "Assessment distributed!"}));

    let second = post_json(&client, format!("{}/assessments/distribute", address), &payload).await;
    assert_eq!(
        second,
        json!({"status": "error", "message": "Assessment is already ongoing!"})
    );

    assert_eq!(state.distributions.len(), 1);

    let history: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM distributed_assessments")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(history, 1);

    let ongoing = get_json(&client, format!("{}/assessments/ongoing", address)).await;
    assert_eq!(ongoing["ongoing"][0]["title"], "Midterm");
}

#[tokio::test]
async fn another_section_does_not_reopen_an_ongoing_assessment() {
    let (address, state) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();
    let url = format!("{}/assessments/distribute", address);

    post_json(&client, url.clone(), &assessment("Midterm", "Chapters 1-4", 3600)).await;

    let mut other_section = assessment("Midterm", "Chapters 1-4", 3600);
    other_section["section"] = json!("BSCS-2B");
    let rejected = post_json(&client, url, &other_section).await;

    assert_eq!(rejected["message"], "Assessment is already ongoing!");
    assert_eq!(state.distributions.len(), 1);
    assert_eq!(state.distributions.list()[0].section, "BSCS-1A");
}

#[tokio::test]
async fn distribution_survives_a_failed_history_insert() {
    let (address, state) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    sqlx::query("DROP TABLE distributed_assessments")
        .execute(&state.pool)
        .await
        .unwrap();

    let body = post_json(
        &client,
        format!("{}/assessments/distribute", address),
        &assessment("Midterm", "Chapters 1-4", 3600),
    )
    .await;

    assert_eq!(body, json!({"status": "success", "message": "Assessment distributed!"}));
    assert_eq!(state.distributions.len(), 1);

    let ongoing = get_json(&client, format!("{}/assessments/ongoing", address)).await;
    assert_eq!(ongoing["ongoing"][0]["title"], "Midterm");
}

#[tokio::test]
async fn malformed_assessment_body_is_an_error_envelope() {
    let (address, state) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();
    let url = format!("{}/assessments/save", address);

    let mut unknown_type = assessment("Quiz 1", "Arithmetic", 300);
    unknown_type["questions"][0]["type"] = json!("matching");
    let body = post_json(&client, url.clone(), &unknown_type).await;
    assert_eq!(body["status"], "error");

    let response = client
        .post(url)
        .header("content-type", "application/json")
        .body("{\"title\": ")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse json");
    assert_eq!(body["status"], "error");

    assert_eq!(store::assessments::count(&state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn stopping_follows_title_and_description() {
    let (address, state) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    post_json(
        &client,
        format!("{}/assessments/distribute", address),
        &assessment("Midterm", "Chapters 1-4", 3600),
    )
    .await;

    let missing = post_json(
        &client,
        format!("{}/control/stop-assessment", address),
        &json!({"title": "Midterm", "description": "Chapters 5-8"}),
    )
    .await;
    assert_eq!(missing["status"], "error");
    assert_eq!(missing["message"], "Assessment not found!");
    assert_eq!(state.distributions.len(), 1);

    let stopped = post_json(
        &client,
        format!("{}/control/stop-assessment", address),
        &json!({"title": "Midterm", "description": "Chapters 1-4"}),
    )
    .await;
    assert_eq!(stopped["message"], "Assessment stopped!");
    assert!(state.distributions.is_empty());

    // Once stopped it can be distributed again.
    let again = post_json(
        &client,
        format!("{}/assessments/distribute", address),
        &assessment("Midterm", "Chapters 1-4", 3600),
    )
    .await;
    assert_eq!(again["status"], "success");
}

#[tokio::test]
async fn manage_assessments_page_shows_both_registries() {
    let (address, state) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    post_json(
        &client,
        format!("{}/assessments/distribute", address),
        &assessment("Midterm", "Chapters 1-4", 3600),
    )
    .await;
    state
        .restrictions
        .report_activity("2024-001", 1, "minimized", "Ada Reyes");

    let page = get_json(&client, format!("{}/page/manage-assessments", address)).await;

    assert_eq!(page["status"], "success");
    assert_eq!(page["ongoing"].as_array().unwrap().len(), 1);
    assert_eq!(
        page["restricted"],
        json!([{
            "assessment_id": 1,
            "student_number": "2024-001",
            "reason": "minimized",
            "student_name": "Ada Reyes"
        }])
    );
}

#[tokio::test]
async fn reset_is_only_routed_when_enabled() {
    let (address, _) = spawn_app(Config::default()).await;
    let client = reqwest::Client::new();

    let response = client.post(format!("{}/reset", address)).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let config = Config {
        enable_reset: true,
        ..Config::default()
    };
    let (address, state) = spawn_app(config).await;

    post_json(
        &client,
        format!("{}/assessments/save", address),
        &assessment("Quiz 1", "Arithmetic", 300),
    )
    .await;
    let reset = post_json(&client, format!("{}/reset", address), &json!({})).await;

    assert_eq!(reset["deleted"], 1);
    assert_eq!(store::assessments::count(&state.pool).await.unwrap(), 0);
}
