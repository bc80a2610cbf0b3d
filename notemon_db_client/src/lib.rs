mod db;

pub use db::NotemonDb;

/// Route paths shared between the service router and its tests.
pub mod paths {
    pub const HEALTH: &str = "/health";
    pub const UPLOAD_DOCUMENT: &str = "/upload-document";
    pub const PROCESS_DOCUMENT: &str = "/process-document";
    pub const DOCUMENTS: &str = "/documents";
}
