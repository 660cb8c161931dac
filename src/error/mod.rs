mod constants;
mod db;

pub use constants::*;
pub use db::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::{json, Value};

#[derive(Debug, Clone)]
enum Message {
    Static(&'static str),
    Custom(Value),
}

/// An error that is rendered as `{"success": false, "error": <status>, "message": ...}`.
#[derive(Debug, Clone)]
pub struct Error {
    status: StatusCode,
    message: Message,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: StatusCode, message: &'static str) -> Error {
        Self {
            status,
            message: Message::Static(message),
        }
    }

    /// A 422 carrying a custom message, either a plain string or a map of field errors.
    pub fn unprocessable(message: impl Into<Value>) -> Error {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: Message::Custom(message.into()),
        }
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> Value {
        match &self.message {
            Message::Static(message) => Value::from(*message),
            Message::Custom(message) => message.clone(),
        }
    }

    pub fn to_bytes(&self) -> Bytes {
        let body = json!({
            "success": false,
            "error": self.status.as_u16(),
            "message": self.message(),
        });

        let mut buf = BytesMut::with_capacity(128);
        buf.extend_from_slice(body.to_string().as_bytes());
        buf.freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    fn from(error: DbErr) -> Self {
        if let DbErr::RecordNotFound(ref what) = error {
            debug!("record not found: {}", what);
            return constants::NOT_FOUND;
        }

        if error.constraint_violation() {
            warn!("constraint violation: {:?}", error);
            return constants::UNPROCESSABLE;
        }

        error!("database error: {:?}", error);
        constants::INTERNAL
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $msg:literal) => {
        pub const $name: $crate::error::Error =
            $crate::error::Error::new(::axum::http::StatusCode::$status, $msg);
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
