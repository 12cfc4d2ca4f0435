use crate::client::ClientError;
use crate::client::edit_form::NurseForm;
use crate::client::export::{self, DateStyle, ExportFile};
use crate::client::fetcher::{NurseDraft, NurseGateway};
use crate::client::projection::{self, SortField, SortState};
use crate::core::models::nurse::Nurse;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{error, info};

pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);

pub const LOAD_FAILED: &str = "Failed to load nurses. Please try again.";
pub const SAVE_FAILED: &str = "Failed to save nurse. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete nurse. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Error(String),
    Loaded,
}

/// State behind the nurse management page.
///
/// Holds a possibly stale copy of the records for display. The visible rows are
/// always [`projection::project`] of that copy, the search term and the sort.
pub struct NurseListView<G: NurseGateway> {
    gateway: G,
    state: LoadState,
    nurses: Vec<Nurse>,
    search: String,
    sort: SortState,
    date_style: DateStyle,
    busy: bool,
    error: Option<String>,
    success: Option<(String, Instant)>,
    editor_open: bool,
    selected: Option<Nurse>,
}

impl<G: NurseGateway> NurseListView<G> {
    pub fn new(gateway: G) -> Self {
        NurseListView {
            gateway,
            state: LoadState::Idle,
            nurses: Vec::new(),
            search: String::new(),
            sort: SortState::default(),
            date_style: DateStyle::default(),
            busy: false,
            error: None,
            success: None,
            editor_open: false,
            selected: None,
        }
    }

    pub fn with_date_style(mut self, date_style: DateStyle) -> Self {
        self.date_style = date_style;
        self
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn nurses(&self) -> &[Nurse] {
        &self.nurses
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub async fn fetch(&mut self) {
        self.state = LoadState::Loading;
        self.busy = true;
        self.error = None;
        match self.gateway.list_nurses().await {
            Ok(nurses) => {
                self.nurses = nurses;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                error!("Failed to fetch nurses: {}", err);
                self.error = Some(LOAD_FAILED.to_string());
                self.state = LoadState::Error(LOAD_FAILED.to_string());
            }
        }
        self.busy = false;
    }

    // Projection

    pub fn rows(&self) -> Vec<Nurse> {
        projection::project(&self.nurses, &self.search, self.sort)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.sort = self.sort.select(field);
    }

    pub fn sort_indicator(&self, field: SortField) -> &'static str {
        self.sort.indicator(field)
    }

    pub fn format_date(&self, nurse: &Nurse) -> String {
        self.date_style.format(nurse.dob)
    }

    pub fn record_count(&self) -> String {
        format!("Showing {} of {} nurses", self.rows().len(), self.nurses.len())
    }

    /// Text for an empty table, `None` when there are rows to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.rows().is_empty() {
            None
        } else if self.nurses.is_empty() {
            Some("No nurses found. Start by adding one!")
        } else {
            Some("No nurses match your search.")
        }
    }

    // Banners

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The success banner, until [`SUCCESS_BANNER_TTL`] has passed since it was raised.
    pub fn success_message(&self) -> Option<&str> {
        self.success
            .as_ref()
            .filter(|(_, raised_at)| raised_at.elapsed() < SUCCESS_BANNER_TTL)
            .map(|(message, _)| message.as_str())
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    fn announce(&mut self, message: &str) {
        info!("{}", message);
        self.success = Some((message.to_string(), Instant::now()));
    }

    // Editor

    /// Opens the editor on `nurse`, or on a blank record when `None`.
    pub fn open_editor(&mut self, nurse: Option<Nurse>) -> NurseForm {
        let form = NurseForm::open(nurse.as_ref());
        self.selected = nurse;
        self.editor_open = true;
        form
    }

    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.selected = None;
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn selected(&self) -> Option<&Nurse> {
        self.selected.as_ref()
    }

    /// Updates the selected record, or creates one when nothing is selected, then re-fetches.
    pub async fn save(&mut self, draft: NurseDraft) -> Result<(), ClientError> {
        let target = self.selected.as_ref().map(|nurse| nurse.id);
        self.save_to(target, draft).await
    }

    /// Updates record `target`, or creates one when `None`, then re-fetches.
    async fn save_to(&mut self, target: Option<i64>, draft: NurseDraft) -> Result<(), ClientError> {
        self.busy = true;
        self.error = None;
        let saved = match target {
            Some(id) => self
                .gateway
                .update_nurse(id, &draft)
                .await
                .map(|_| "Nurse updated successfully!"),
            None => self
                .gateway
                .create_nurse(&draft)
                .await
                .map(|_| "Nurse added successfully!"),
        };
        let result = match saved {
            Ok(message) => {
                self.announce(message);
                self.fetch().await;
                Ok(())
            }
            Err(err) => {
                error!("Failed to save nurse: {}", err);
                self.error = Some(SAVE_FAILED.to_string());
                Err(err)
            }
        };
        self.busy = false;
        result
    }

    /// Runs `form` through its submission cycle and closes the editor. The record the form
    /// was opened on is updated, a blank form creates one.
    /// Returns `false` when validation blocked the submission.
    pub async fn submit_form(&mut self, form: &mut NurseForm) -> bool {
        let target = form.editing();
        let view = &mut *self;
        let submitted = form
            .submit(move |draft| {
                let view = view;
                view.save_to(target, draft)
            })
            .await
            .is_some();
        if submitted {
            self.close_editor();
        }
        submitted
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), ClientError> {
        self.busy = true;
        self.error = None;
        let result = match self.gateway.delete_nurse(id).await {
            Ok(()) => {
                self.announce("Nurse deleted successfully!");
                self.fetch().await;
                Ok(())
            }
            Err(err) => {
                error!("Failed to delete nurse {}: {}", id, err);
                self.error = Some(DELETE_FAILED.to_string());
                Err(err)
            }
        };
        self.busy = false;
        result
    }

    // Export

    /// Exports are only offered for a non-empty projection.
    pub fn can_export(&self) -> bool {
        !self.busy && !self.rows().is_empty()
    }

    pub fn export_csv(&mut self) -> Option<ExportFile> {
        let file = export::to_csv(&self.rows(), self.date_style);
        self.finish_export(file, "CSV downloaded successfully!")
    }

    pub fn export_xlsx(&mut self) -> Option<ExportFile> {
        let file = export::to_xlsx(&self.rows(), self.date_style);
        self.finish_export(file, "XLSX downloaded successfully!")
    }

    fn finish_export(&mut self, file: Result<ExportFile, ClientError>, message: &str) -> Option<ExportFile> {
        match file {
            Ok(file) => {
                self.announce(message);
                Some(file)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}
