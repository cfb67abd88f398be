mod common;

#[tokio::test]
async fn test_history_empty() {
    let (state, _repo) = common::create_test_state(None);
    let server = common::create_test_server(state);

    let response = server.get("/history").await;

    response.assert_status_ok();
    assert!(response.text().contains("No links shortened yet."));
}

#[tokio::test]
async fn test_history_lists_links_in_order() {
    let (state, repo) = common::create_test_state(None);
    let server = common::create_test_server(state);

    common::create_test_link(repo.as_ref(), "aZ3xQ9", "https://example.com/page").await;
    common::create_test_link(repo.as_ref(), "second", "https://rust-lang.org/").await;

    let response = server.get("/history").await;

    response.assert_status_ok();
    let html = response.text();

    let first = html.find("https://example.com/page").unwrap();
    let second = html.find("https://rust-lang.org/").unwrap();
    assert!(first < second);
    assert!(html.contains("aZ3xQ9"));
    assert!(html.contains("second"));
}

#[tokio::test]
async fn test_history_shows_link_created_through_form() {
    let (state, _repo) = common::create_test_state(None);
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .add_header("Host", common::TEST_HOST)
        .form(&[("long_url", "https://example.com/page")])
        .await;
    let short_url = common::extract_short_url(&response.text());
    let code = short_url.rsplit('/').next().unwrap().to_string();

    let html = server.get("/history").await.text();

    assert_eq!(html.matches("https://example.com/page").count(), 2);
    assert!(html.contains(&code));
}

#[tokio::test]
async fn test_history_escapes_html() {
    let (state, repo) = common::create_test_state(None);
    let server = common::create_test_server(state);

    common::create_test_link(repo.as_ref(), "xss001", "https://example.com/?q=<b>").await;

    let html = server.get("/history").await.text();

    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;") || html.contains("&#60;b&#62;"));
}
