use std::io;
use std::path::PathBuf;

use actix_multipart::{Multipart, MultipartError};
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;
use log::{info, warn};

use crate::errors::AppError;
use crate::services::upload::{self, SaveOutcome, FALLBACK_FILE_NAME};
use crate::utils::files;

pub const NO_FILE_MESSAGE: &str = "No file uploaded.";
const FILE_FIELD: &str = "file";

/// Where uploads land and how write failures are reported.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub photos_dir: PathBuf,
    pub strict: bool,
}

struct UploadedFile {
    file_name: String,
    bytes: Vec<u8>,
}

/// `POST /employee/SaveFile`: stores the multipart field `file` and answers
/// with the stored name as a JSON string.
pub async fn save_file(
    settings: web::Data<UploadSettings>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let file = read_file_field(&mut payload)
        .await
        .map_err(|err| {
            warn!("Unreadable upload: {}", err);
            AppError::BadRequest(NO_FILE_MESSAGE.to_owned())
        })?
        .filter(|file| !file.bytes.is_empty())
        .ok_or_else(|| AppError::BadRequest(NO_FILE_MESSAGE.to_owned()))?;

    match upload::save_file(&settings.photos_dir, &file.bytes, &file.file_name).await {
        SaveOutcome::Stored(file_name) => {
            info!("Stored upload {} ({} bytes)", file_name, file.bytes.len());
            Ok(HttpResponse::Ok().json(file_name))
        }
        SaveOutcome::Failed(reason) if settings.strict => Err(AppError::InternalServerError(reason)),
        SaveOutcome::Failed(reason) => {
            warn!("Upload of {:?} failed, answering with {}: {}", file.file_name, FALLBACK_FILE_NAME, reason);
            Ok(HttpResponse::Ok().json(FALLBACK_FILE_NAME))
        }
    }
}

/// `GET /Photos/{filename}`: serves a previously uploaded file.
pub async fn get_photo(
    settings: web::Data<UploadSettings>,
    file_name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let requested = file_name.into_inner();
    let file_name = files::base_name(&requested)
        .filter(|name| *name == requested)
        .ok_or(AppError::NotFound)?;

    match tokio::fs::read(settings.photos_dir.join(file_name)).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type(files::content_type_for(file_name))
            .body(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(AppError::NotFound),
        Err(err) => Err(AppError::InternalServerError(format!("cannot read {file_name}: {err}"))),
    }
}

/// First `file` part that carries a filename. Plain form values named
/// `file` are not files and are skipped.
async fn read_file_field(payload: &mut Multipart) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(mut field) = payload.try_next().await? {
        let disposition = field.content_disposition();
        let file_name = disposition
            .get_filename()
            .filter(|_| disposition.get_name() == Some(FILE_FIELD))
            .map(str::to_owned);
        let Some(file_name) = file_name else {
            while field.try_next().await?.is_some() {}
            continue;
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            bytes.extend_from_slice(&chunk);
        }
        return Ok(Some(UploadedFile { file_name, bytes }));
    }
    Ok(None)
}
