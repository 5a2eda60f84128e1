//! HTTP handlers for the deck parsing endpoint.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::application::{ParseOutcome, ParsePitchDeck};
use crate::ports::ProfileStore;

use super::dto::{ErrorResponse, ProfileResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DeckHandlers {
    use_case: Arc<ParsePitchDeck>,
    store: Arc<dyn ProfileStore>,
    temp_dir: PathBuf,
}

impl DeckHandlers {
    pub fn new(
        use_case: Arc<ParsePitchDeck>,
        store: Arc<dyn ProfileStore>,
        temp_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            use_case,
            store,
            temp_dir: temp_dir.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/parse-deck - Parse an uploaded pitch deck
pub async fn parse_deck(
    State(handlers): State<DeckHandlers>,
    mut multipart: Multipart,
) -> Response {
    let (file_name, bytes) = match read_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    let temp_path = handlers
        .temp_dir
        .join(format!("{}_{}", Uuid::new_v4(), file_name));

    if let Err(err) = tokio::fs::create_dir_all(&handlers.temp_dir).await {
        tracing::error!(error = %err, "could not create temp directory");
        return (StatusCode::OK, Json(ErrorResponse::could_not_generate())).into_response();
    }

    // Removed on every exit path below, including early returns and panics.
    let _guard = TempFileGuard::new(temp_path.clone());

    if let Err(err) = tokio::fs::write(&temp_path, &bytes).await {
        tracing::error!(error = %err, "could not spool uploaded file");
        return (StatusCode::OK, Json(ErrorResponse::could_not_generate())).into_response();
    }

    match handlers.use_case.execute(&temp_path).await {
        Ok(ParseOutcome::Profile(profile)) => {
            match handlers.store.save(&profile).await {
                Ok(path) => tracing::info!(path = %path.display(), "profile persisted"),
                Err(err) => tracing::error!(error = %err, "failed to persist profile"),
            }
            (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response()
        }
        Ok(ParseOutcome::NoText) | Ok(ParseOutcome::AnalysisFailed) => {
            (StatusCode::OK, Json(ErrorResponse::could_not_generate())).into_response()
        }
        Err(err) => (StatusCode::OK, Json(ErrorResponse::new(err.to_string()))).into_response(),
    }
}

/// Pulls the uploaded file out of the multipart body.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), Response> {
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return Err(bad_request("No file uploaded."));
        }
        Err(err) => {
            tracing::warn!(error = %err, "invalid multipart body");
            return Err(bad_request("Invalid multipart body."));
        }
    };

    // Keep only the final path component of the client-supplied name.
    let file_name = field
        .file_name()
        .map(|name| name.to_string())
        .and_then(|name| {
            Path::new(&name)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "upload.pdf".to_string());

    let bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read uploaded file");
            return Err(bad_request("Failed to read uploaded file."));
        }
    };

    if bytes.is_empty() {
        return Err(bad_request("Uploaded file is empty."));
    }

    Ok((file_name, bytes.to_vec()))
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Temp file cleanup
// ════════════════════════════════════════════════════════════════════════════

/// Removes the spooled upload when the request scope ends, however it ends.
struct TempFileGuard {
    path: PathBuf,
}

impl TempFileGuard {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to remove temp file");
            }
        }
    }
}
