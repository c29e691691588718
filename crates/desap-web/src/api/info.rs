use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use desap_core::{Attachment, InfoEntry, NewInfo};

use crate::error::AppError;
use crate::state::AppState;

/// Info entries for an occurrence, newest first.
pub async fn feed(
    State(state): State<AppState>,
    Path(occurrence_id): Path<u64>,
) -> Result<Json<Vec<InfoEntry>>, AppError> {
    let entries = state.source.info_feed(occurrence_id).await?;
    Ok(Json(entries))
}

/// Accepts a multipart form with `informacao`, `data` and any number of
/// `anexos` files, and forwards it to the data source.
pub async fn submit(
    State(state): State<AppState>,
    Path(occurrence_id): Path<u64>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<InfoEntry>), AppError> {
    let info = read_submission(occurrence_id, multipart).await?;
    tracing::info!(
        occurrence = occurrence_id,
        attachments = info.attachments.len(),
        "info submission"
    );

    let entry = state.source.submit_info(info).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

fn bad_multipart(e: MultipartError) -> AppError {
    AppError::BadRequest(format!("Formulário inválido: {}", e.body_text()))
}

async fn read_submission(occurrence_id: u64, mut multipart: Multipart) -> Result<NewInfo, AppError> {
    let mut text = None;
    let mut date = None;
    let mut attachments = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "informacao" => text = Some(field.text().await.map_err(bad_multipart)?),
            "data" => date = Some(field.text().await.map_err(bad_multipart)?),
            "ocoId" => {
                let value = field.text().await.map_err(bad_multipart)?;
                if value.trim().parse::<u64>().ok() != Some(occurrence_id) {
                    return Err(AppError::BadRequest(format!(
                        "ocoId {value} não corresponde à ocorrência {occurrence_id}"
                    )));
                }
            }
            "anexos" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                attachments.push(Attachment {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            other => tracing::debug!("Ignoring multipart field {other:?}"),
        }
    }

    let missing = |field: &str| AppError::BadRequest(format!("Campo obrigatório ausente: {field}"));
    Ok(NewInfo {
        occurrence_id,
        text: text.ok_or_else(|| missing("informacao"))?,
        date: date.ok_or_else(|| missing("data"))?,
        attachments,
    })
}
