//! Headless counterpart of the admin frontend.
//!
//! [`fetcher`] talks to the REST surface, [`list_view`] owns the cached record
//! set and its load state, [`projection`] derives the visible rows,
//! [`edit_form`] validates input and [`export`] builds the CSV/XLSX downloads.

pub mod edit_form;
pub mod export;
pub mod fetcher;
pub mod list_view;
pub mod projection;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status, carrying the server's message.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Response is missing `{0}`")]
    MissingPayload(&'static str),

    #[error("No nurses to download")]
    NothingToExport,

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
