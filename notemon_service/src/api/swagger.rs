use crate::api::health::HealthResponse;
use models_notemon::response::{
    DocumentListEntry, ErrorResponse, FaqEntry, ProcessDocumentResponse, UploadDocumentResponse,
    UploadedDocument,
};
use models_notemon::{Action, ProcessDocumentRequest, UploadDocumentRequest};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::health,
        crate::api::upload::upload_document_handler,
        crate::api::process::process_document_handler,
        crate::api::documents::list_documents_handler,
        crate::api::documents::delete_document_handler,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            Action,
            UploadDocumentRequest,
            UploadDocumentResponse,
            UploadedDocument,
            ProcessDocumentRequest,
            ProcessDocumentResponse,
            FaqEntry,
            DocumentListEntry,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "documents", description = "Document upload, listing, and AI processing endpoints")
    ),
    info(
        title = "Notemon Service API",
        description = "Backend for the notemon document-study app",
        version = "0.1.0"
    )
)]
#[derive(Debug)]
pub struct ApiDoc;
