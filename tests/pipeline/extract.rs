use thumbtone::domain::Rgb;
use thumbtone::infrastructure::thumbnails;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::thumb_png;

#[tokio::test]
async fn fetches_and_extracts_accent_color() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/thumb.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(thumb_png((17, 128, 211))),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let color = thumbnails::fetch_accent_color(&client, &format!("{}/thumb.png", server.uri()))
        .await
        .unwrap();

    assert_eq!(color, Rgb::new(17, 128, 211));
}

#[tokio::test]
async fn non_image_content_type_is_a_skip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/thumb.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html>not found</html>"),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let color =
        thumbnails::fetch_accent_color(&client, &format!("{}/thumb.png", server.uri())).await;

    assert!(color.is_none());
}

#[tokio::test]
async fn undecodable_body_is_a_skip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/thumb.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(b"definitely not a png".to_vec()),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let color =
        thumbnails::fetch_accent_color(&client, &format!("{}/thumb.png", server.uri())).await;

    assert!(color.is_none());
}

#[tokio::test]
async fn download_rejects_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/thumb.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(Vec::new()),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let result = thumbnails::download(&client, &format!("{}/thumb.png", server.uri())).await;

    assert!(matches!(result, Err(thumbnails::FetchError::EmptyBody)));
}
