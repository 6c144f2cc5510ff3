//! HTTP-level integration tests for the public portfolio endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use serde_json::json;
use showreel_core::team::TeamMember;
use showreel_db::models::project::CreateProject;
use showreel_db::repositories::ProjectRepo;
use sqlx::PgPool;

fn project(title: &str, slug: &str, order: i32, published: bool) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        slug: slug.to_string(),
        order: Some(order),
        published: Some(published),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Test: Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_shows_published_in_rank_order(pool: PgPool) {
    ProjectRepo::create(&pool, &project("Third", "third", 2, true)).await.unwrap();
    ProjectRepo::create(&pool, &project("Hidden", "hidden", 0, false)).await.unwrap();
    ProjectRepo::create(&pool, &project("First", "first", 1, true)).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let slugs: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["first", "third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_summary_fields(pool: PgPool) {
    let input = CreateProject {
        client: Some("Acme".into()),
        thumbnail: Some("https://cdn.test/t.jpg".into()),
        color: Some("#55b8d8".into()),
        description: Some("not part of the summary".into()),
        ..project("Card", "card", 0, true)
    };
    ProjectRepo::create(&pool, &input).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects").await).await;
    let card = &json["data"][0];

    assert_eq!(card["title"], "Card");
    assert_eq!(card["client"], "Acme");
    assert_eq!(card["thumbnail"], "https://cdn.test/t.jpg");
    assert_eq!(card["color"], "#55b8d8");
    assert!(card.get("description").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_table(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects").await).await;
    assert_eq!(json, json!({ "data": [] }));
}

// ---------------------------------------------------------------------------
// Test: Detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_builds_view_model(pool: PgPool) {
    let input = CreateProject {
        video_url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".into()),
        image1: Some("https://cdn.test/1.jpg".into()),
        image3: Some("https://cdn.test/3.jpg".into()),
        team: Some(vec![TeamMember::new("Director", &["Ana"])]),
        ..project("Detail", "detail", 0, true)
    };
    ProjectRepo::create(&pool, &input).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/detail").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(
        data["embedUrl"],
        "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
    );
    assert_eq!(
        data["images"],
        json!(["https://cdn.test/1.jpg", "https://cdn.test/3.jpg"])
    );
    assert_eq!(data["team"], json!([{ "role": "Director", "names": ["Ana"] }]));
    assert_eq!(data["color"], "#ff6b35");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_detail_passes_unknown_video_urls_through(pool: PgPool) {
    let input = CreateProject {
        video_url: Some("https://cdn.test/reel.mp4".into()),
        ..project("Raw", "raw", 0, true)
    };
    ProjectRepo::create(&pool, &input).await.unwrap();

    let app = common::build_test_app(pool);
    let data = &body_json(get(app, "/api/v1/projects/raw").await).await["data"];
    assert_eq!(data["embedUrl"], "https://cdn.test/reel.mp4");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unpublished_detail_is_404(pool: PgPool) {
    ProjectRepo::create(&pool, &project("Draft", "draft", 0, false)).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/draft").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_slug_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Store failures degrade to no data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_degrades_to_empty_when_store_fails(pool: PgPool) {
    ProjectRepo::create(&pool, &project("One", "one", 0, true)).await.unwrap();
    sqlx::query("DROP TABLE projects").execute(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app.clone(), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "data": [] }));

    let response = get(app, "/api/v1/projects/one").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
