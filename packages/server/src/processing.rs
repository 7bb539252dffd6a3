//! Archive upload processing endpoint.

use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::json;
use tokio::io::AsyncWriteExt;
use tracing::info;
use warc_extraction::pipeline::{extract_corpus, reader};
use warc_extraction::ExtractionError;

use crate::app::AppState;
use crate::error::ApiError;

/// `POST /api/processing`
///
/// Accepts one uploaded archive (`file` form field), runs the extraction
/// pass and returns the summarizer's JSON verbatim under `result`.
pub async fn process_archive(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let upload = spool_upload(&mut multipart).await?;

    let corpus = tokio::task::spawn_blocking(move || extract(upload))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    info!(corpus_bytes = corpus.len(), "extraction pass complete");

    let result = state.summarizer.summarize(&corpus).await?;
    Ok(Json(json!({ "result": result })))
}

/// Stream the `file` field to an anonymous temp file.
///
/// The request must carry exactly one `file` field; zero or several reject
/// the request before the pipeline is ever invoked.
async fn spool_upload(multipart: &mut Multipart) -> Result<File, ApiError> {
    let mut spooled: Option<File> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        if spooled.is_some() {
            return Err(ApiError::NoFile);
        }

        let tmp = tempfile::tempfile().map_err(internal)?;
        let mut writer = tokio::fs::File::from_std(tmp.try_clone().map_err(internal)?);
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| ApiError::Upload(e.to_string()))?
        {
            writer.write_all(&chunk).await.map_err(internal)?;
        }
        writer.flush().await.map_err(internal)?;
        spooled = Some(tmp);
    }

    spooled.ok_or(ApiError::NoFile)
}

/// Blocking half of the request: rewind the spool and run the streaming
/// extraction pass over it.
fn extract(mut upload: File) -> Result<String, ApiError> {
    upload.seek(SeekFrom::Start(0)).map_err(internal)?;
    let input =
        reader::decompress(BufReader::new(upload)).map_err(ExtractionError::from)?;
    Ok(extract_corpus(input)?)
}

fn internal(e: std::io::Error) -> ApiError {
    ApiError::Internal(e.to_string())
}
