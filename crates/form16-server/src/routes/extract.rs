//! Form-16 extraction endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{debug, error, info, warn};

use form16_core::{extract_from_pdf, ExtractionResult};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Media type accepted by the extraction endpoint.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

struct Upload {
    file_name: Option<String>,
    data: Vec<u8>,
}

/// Upload a Form-16 PDF and extract the ten fields.
/// POST /extract
pub async fn extract_form16(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ExtractionResult>> {
    let upload = read_upload(&mut multipart).await?;
    info!(
        file = upload.file_name.as_deref().unwrap_or("<unnamed>"),
        bytes = upload.data.len(),
        "Extracting Form-16 fields"
    );

    let config = state.config;
    let result = tokio::task::spawn_blocking(move || extract_from_pdf(&upload.data, &config.pdf))
        .await
        .map_err(|e| {
            error!("PDF processing task failed: {}", e);
            ApiError::internal("failed to process PDF")
        })??;

    let missing = result.missing_fields();
    if !missing.is_empty() {
        debug!("Fields not found: {:?}", missing);
    }

    Ok(Json(result))
}

/// Pull the `file` part out of the form, rejecting non-PDF uploads before
/// their bytes are read.
async fn read_upload(multipart: &mut Multipart) -> ApiResult<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        if content_type.as_deref() != Some(PDF_CONTENT_TYPE) {
            warn!("Rejected upload with content type {:?}", content_type);
            return Err(ApiError::bad_request("Only PDF files are allowed."));
        }

        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await?.to_vec();
        return Ok(Upload { file_name, data });
    }

    Err(ApiError::bad_request(format!(
        "Missing multipart field '{}'.",
        FILE_FIELD
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use form16_core::pdf::fixtures;
    use form16_core::{Form16Config, Form16Field, NOT_FOUND};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use crate::routes::test_support::{json_body, multipart_body, upload_request};
    use crate::{create_server, AppState};

    async fn upload_with_content_type(content_type: &str) -> axum::http::Response<axum::body::Body> {
        let app = create_server(AppState::default());
        let body = multipart_body("file", content_type, b"Gross Salary 100");
        app.oneshot(upload_request(body)).await.unwrap()
    }

    #[tokio::test]
    async fn test_rejects_text_plain() {
        let response = upload_with_content_type("text/plain").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(json["error"]["message"], "Only PDF files are allowed.");
    }

    #[tokio::test]
    async fn test_content_type_must_match_exactly() {
        for content_type in ["Application/PDF", "application/pdf; name=x.pdf", "application/pdfx"] {
            let response = upload_with_content_type(content_type).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", content_type);
        }
    }

    #[tokio::test]
    async fn test_missing_file_field() {
        let app = create_server(AppState::default());
        let body = multipart_body("document", "application/pdf", b"%PDF-1.5");

        let response = app.oneshot(upload_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_unprocessable() {
        let app = create_server(AppState::default());
        let body = multipart_body("file", "application/pdf", b"not really a pdf");

        let response = app.oneshot(upload_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "UNPROCESSABLE_PDF");
    }

    #[tokio::test]
    async fn test_oversized_upload() {
        let mut config = Form16Config::default();
        config.server.max_upload_bytes = 64;
        let app = create_server(AppState::new(config));
        let body = multipart_body("file", "application/pdf", &[b'x'; 1024]);

        let response = app.oneshot(upload_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_extracts_fields_from_pdf() {
        let pdf = fixtures::text_pdf(&[
            "FORM NO. 16",
            "Tax Deduction Account Number (TAN) : ABCD12345E",
        ])
        .unwrap();
        let app = create_server(AppState::default());

        let response = app
            .oneshot(upload_request(multipart_body("file", "application/pdf", &pdf)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 10);

        let tan = json["tan"].as_str().unwrap();
        assert!(tan.starts_with("Tax Deduction Account Number (TAN)"), "{}", tan);
        assert!(tan.ends_with("ABCD12345E"), "{}", tan);

        for field in Form16Field::ALL {
            if field != Form16Field::Tan {
                assert_eq!(json[field.key()], NOT_FOUND, "{}", field);
            }
        }
    }
}
