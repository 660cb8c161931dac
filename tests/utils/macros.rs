#[allow(unused_macros)]
macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        assert_eq!($res.status(), $error.status());

        let res_json: serde_json::Value = $res.json().await;
        assert_eq!(res_json["success"], false);
        assert_eq!(res_json["error"], $error.status().as_u16());
        assert_eq!(res_json["message"], $error.message());
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_error;

/// Asserts a 422 carrying an attached, non-empty message and returns that message.
#[allow(unused_macros)]
macro_rules! assert_unprocessable {
    ($res:expr) => {{
        assert_eq!($res.status(), http::StatusCode::UNPROCESSABLE_ENTITY);

        let res_json: serde_json::Value = $res.json().await;
        assert_eq!(res_json["success"], false);
        assert_eq!(res_json["error"], 422);

        let message = res_json["message"].clone();
        assert!(
            message.as_str().is_some_and(|m| !m.is_empty())
                || message.as_object().is_some_and(|m| !m.is_empty()),
            "missing message: {res_json:#?}"
        );

        message
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_unprocessable;

#[allow(unused_macros)]
macro_rules! enable_logging {
    ($level:ident) => {{
        use ::tracing::level_filters::LevelFilter;
        use ::tracing_subscriber::{
            layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
        };

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::$level.into())
            .from_env_lossy();

        ::tracing_subscriber::registry()
            .with(
                ::tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .init();
    }};
}

#[allow(unused_imports)]
pub(crate) use enable_logging;
