use crate::infra::error::AppError;
use axum::async_trait;
use axum::extract::{FromRequest, OriginalUri, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// JSON body extractor answering bad payloads with the `{cause, message}` error body.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(
        request: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let path = request
            .extensions()
            .get::<OriginalUri>()
            .map(|original_uri| original_uri.path().to_string())
            .unwrap_or_else(|| request.uri().path().to_string());

        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError {
                status_code: rejection.status(),
                cause: rejection.body_text(),
                message: Some(format!("Invalid request body for {path}")),
            }),
        }
    }
}
