use crate::{error, StateTrait};
use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_TYPE,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::map_response,
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    ServiceBuilderExt,
};

const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic message");

    error!("handler panicked: {}", details);

    error::INTERNAL.into_response()
}

/// Gives the empty 405 responses of the router a json body, keeping the `Allow` header.
async fn method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let (parts, _) = response.into_parts();
    let mut res = error::METHOD_NOT_ALLOWED.into_response();

    if let Some(allow) = parts.headers.get(axum::http::header::ALLOW) {
        res.headers_mut()
            .insert(axum::http::header::ALLOW, allow.clone());
    }

    res
}

pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let middlewares = ServiceBuilder::new()
        .layer(CatchPanicLayer::custom(handle_panic))
        .propagate_x_request_id()
        .trace_for_http()
        .compression()
        .override_response_header(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        )
        .override_response_header(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        )
        .layer(cors_layer)
        .into_inner();

    router
        .layer(map_response(method_not_allowed))
        .layer(middlewares)
        .with_state(state)
}
