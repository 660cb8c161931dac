use crate::{error, Error};
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

pub struct Json<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => match rejection {
                JsonRejection::JsonDataError(rejection) => {
                    debug!("json data error: {}", rejection.body_text());
                    Err(Error::unprocessable(rejection.body_text()))
                }
                JsonRejection::JsonSyntaxError(_) => Err(error::BAD_REQUEST),
                JsonRejection::MissingJsonContentType(_) => Err(error::BAD_REQUEST),
                JsonRejection::BytesRejection(rejection)
                    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
                {
                    debug!("request body too large: {}", rejection.body_text());
                    Err(error::PAYLOAD_TOO_LARGE)
                }
                JsonRejection::BytesRejection(rejection)
                    if rejection.status().is_client_error() =>
                {
                    debug!("failed to read request body: {}", rejection.body_text());
                    Err(error::BAD_REQUEST)
                }
                err => {
                    warn!("failed to read json body: {}", err.body_text());
                    Err(error::INTERNAL)
                }
            },
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(json) = Json::<T>::from_request(req, state).await?;

        json.validate()
            .map_err(|errors| Error::unprocessable(validation_message(&errors)))?;

        Ok(ValidatedJson(json))
    }
}

/// Flattens validation errors into `{"field": ["message", ...]}`.
pub fn validation_message(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();

    for (field, errors) in errors.field_errors() {
        let messages = errors
            .iter()
            .map(|error| match &error.message {
                Some(message) => Value::from(message.to_string()),
                None => Value::from(error.code.to_string()),
            })
            .collect();

        fields.insert(field.to_string(), Value::Array(messages));
    }

    Value::Object(fields)
}
