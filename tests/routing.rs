mod utils;

use utils::prelude::*;

#[tokio::test]
async fn unknown_route() {
    let app = setup().await;

    let res = app.get("/api/unknown").send().await;
    assert_error!(res, error::NOT_FOUND);

    let res = app.get("/").send().await;
    assert_error!(res, error::NOT_FOUND);
}

#[tokio::test]
async fn method_not_allowed() {
    let app = setup().await;

    let res = app.put("/api/categories").send().await;
    assert!(res.header("allow").is_some());
    assert_error!(res, error::METHOD_NOT_ALLOWED);

    let res = app.patch("/api/questions/1").send().await;
    assert_error!(res, error::METHOD_NOT_ALLOWED);

    let res = app.get("/api/search").send().await;
    assert_error!(res, error::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn cors_headers() {
    let app = setup().await;
    app.create_category("Science").await;

    let res = app
        .get("/api/categories")
        .header("origin", "http://localhost:3000")
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.header("access-control-allow-origin").unwrap(), "*");
    assert_eq!(
        res.header("access-control-allow-headers").unwrap(),
        "Content-Type, Authorization"
    );
    assert_eq!(
        res.header("access-control-allow-methods").unwrap(),
        "GET, POST, PATCH, DELETE, OPTIONS"
    );
}

#[tokio::test]
async fn cors_headers_on_errors() {
    let app = setup().await;

    let res = app.get("/api/categories").send().await;

    assert_eq!(
        res.header("access-control-allow-headers").unwrap(),
        "Content-Type, Authorization"
    );
    assert_error!(res, error::NOT_FOUND);
}

#[tokio::test]
async fn preflight() {
    let app = setup().await;

    let res = app
        .options("/api/questions")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.header("access-control-allow-origin").unwrap(), "*");
    assert_eq!(
        res.header("access-control-allow-methods").unwrap(),
        "GET, POST, PATCH, DELETE, OPTIONS"
    );
}

#[tokio::test]
async fn liveness() {
    let app = setup().await;

    let res = app.get("/liveness").send().await;

    assert_eq!(res.status(), StatusCode::OK);
}
