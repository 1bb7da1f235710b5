//! Application state for the JobPilot terminal client.
//!
//! [`App`] owns the per-screen state machines and the UI chrome around them:
//! the current input mode, the status line used as the notification channel,
//! the signed-in session, and the worker handle for an in-flight
//! registration. The rendering layer re-reads the whole snapshot after every
//! event, and the event loop drives time through [`App::on_tick`].

use crate::application::carousel::TestimonialCarousel;
use crate::application::form::{FormField, RegistrationForm};
use crate::application::resource::JobListResource;
use crate::domain::{
    redirect_target, search_summary, ApiResult, JobFilters, RegistrationRequest, Testimonial,
    UserInfo,
};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

/// Shown on every home-screen mount.
pub const WELCOME_MESSAGE: &str =
    "Welcome to JobPilot! Find your dream job with our AI-powered matching.";

/// Represents the current mode of the application.
///
/// All modes except `Register` show the home screen; the mode determines how
/// keyboard input is interpreted and which chrome is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Home screen - navigate job cards and the testimonial carousel
    Browse,
    /// Home screen - editing the search filter fields
    Filter,
    /// Home screen - CSV export filename entry
    ExportCsv,
    /// Registration screen - form editing
    Register,
    /// Help screen is displayed
    Help,
}

/// The four search filter fields on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Location,
    Profile,
    Stipend,
}

impl FilterField {
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Search => "Search",
            FilterField::Location => "Location",
            FilterField::Profile => "Job Profile",
            FilterField::Stipend => "Salary Range",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FilterField::Search => FilterField::Location,
            FilterField::Location => FilterField::Profile,
            FilterField::Profile => FilterField::Stipend,
            FilterField::Stipend => FilterField::Search,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FilterField::Search => FilterField::Stipend,
            FilterField::Location => FilterField::Search,
            FilterField::Profile => FilterField::Location,
            FilterField::Stipend => FilterField::Profile,
        }
    }
}

/// Main application state.
pub struct App {
    /// Current application mode
    pub mode: AppMode,
    /// Job-list fetch machine for the current home mount
    pub jobs: JobListResource,
    /// Testimonial carousel for the current home mount
    pub carousel: TestimonialCarousel,
    /// Search filter values
    pub filters: JobFilters,
    /// Filter field being edited in `Filter` mode
    pub active_filter: FilterField,
    /// Registration form machine
    pub form: RegistrationForm,
    /// Form field being edited in `Register` mode
    pub active_field: FormField,
    /// Selected job card on the home screen
    pub selected_job: usize,
    /// Cursor position within the field being edited
    pub cursor_position: usize,
    /// Filename buffer for the CSV export dialog
    pub filename_input: String,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message; doubles as the notification channel
    pub status_message: Option<String>,
    /// Registration collaborator's error, shown alongside the form
    pub register_error: Option<String>,
    /// Signed-in identity, if any
    pub session: Option<UserInfo>,
    /// Opaque post-registration redirect target
    pub redirect: String,
    home_fetch_pending: bool,
    registration: Option<Receiver<ApiResult<UserInfo>>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new("")
    }
}

impl App {
    /// Builds the app from an opaque entry hint such as `"redirect=/jobs"`.
    pub fn new(entry_hint: &str) -> Self {
        Self {
            mode: AppMode::Browse,
            jobs: JobListResource::new(),
            carousel: TestimonialCarousel::new(Testimonial::showcase()),
            filters: JobFilters::default(),
            active_filter: FilterField::Search,
            form: RegistrationForm::new(),
            active_field: FormField::Name,
            selected_job: 0,
            cursor_position: 0,
            filename_input: String::new(),
            help_scroll: 0,
            status_message: Some(WELCOME_MESSAGE.to_string()),
            register_error: None,
            session: None,
            redirect: redirect_target(entry_hint),
            home_fetch_pending: true,
            registration: None,
        }
    }

    /// True when a home mount still needs its fetch kicked off. Consuming
    /// the flag is the caller's cue to call `jobs.start` with a fetch
    /// closure.
    pub fn take_pending_fetch(&mut self) -> bool {
        std::mem::take(&mut self.home_fetch_pending)
    }

    /// Mounts the home screen: fresh job resource and carousel, a pending
    /// fetch, and the welcome notification. Replacing the old resource
    /// drops its channel, so results of the previous mount can no longer
    /// land.
    pub fn enter_home(&mut self) {
        self.mode = AppMode::Browse;
        self.jobs = JobListResource::new();
        self.carousel = TestimonialCarousel::new(Testimonial::showcase());
        self.selected_job = 0;
        self.cursor_position = 0;
        self.home_fetch_pending = true;
        self.status_message = Some(WELCOME_MESSAGE.to_string());
    }

    /// Mounts the registration screen with a fresh form.
    pub fn enter_register(&mut self) {
        self.mode = AppMode::Register;
        self.form = RegistrationForm::new();
        self.active_field = FormField::Name;
        self.cursor_position = 0;
        self.register_error = None;
        self.status_message = None;
    }

    /// Switches to filter entry on the home screen.
    pub fn start_filter_entry(&mut self) {
        self.mode = AppMode::Filter;
        self.active_filter = FilterField::Search;
        self.cursor_position = self.filters.search.len();
        self.status_message = None;
    }

    pub fn select_filter(&mut self, field: FilterField) {
        self.active_filter = field;
        self.cursor_position = self.filter_value(field).len();
    }

    pub fn filter_value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.filters.search,
            FilterField::Location => &self.filters.location,
            FilterField::Profile => &self.filters.profile,
            FilterField::Stipend => &self.filters.stipend,
        }
    }

    pub fn active_filter_value_mut(&mut self) -> &mut String {
        match self.active_filter {
            FilterField::Search => &mut self.filters.search,
            FilterField::Location => &mut self.filters.location,
            FilterField::Profile => &mut self.filters.profile,
            FilterField::Stipend => &mut self.filters.stipend,
        }
    }

    /// Ends filter entry, keeping the entered values.
    pub fn cancel_filter_entry(&mut self) {
        self.mode = AppMode::Browse;
        self.cursor_position = 0;
    }

    /// Hands the search summary to the notification channel and returns to
    /// browsing. The filter values stay put for the next search.
    pub fn perform_search(&mut self) {
        self.status_message = Some(search_summary(&self.filters));
        self.mode = AppMode::Browse;
        self.cursor_position = 0;
    }

    /// Opens the CSV export dialog with a default filename.
    pub fn start_csv_export(&mut self) {
        self.mode = AppMode::ExportCsv;
        self.filename_input = "jobs.csv".to_string();
        self.cursor_position = self.filename_input.len();
        self.status_message = None;
    }

    pub fn get_export_filename(&self) -> String {
        if self.filename_input.is_empty() {
            "jobs.csv".to_string()
        } else {
            self.filename_input.clone()
        }
    }

    pub fn set_export_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(filename) => {
                self.status_message = Some(format!("Exported to {}", filename));
            }
            Err(error) => {
                self.status_message = Some(format!("Export failed: {}", error));
            }
        }
        self.mode = AppMode::Browse;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    pub fn cancel_filename_input(&mut self) {
        self.mode = AppMode::Browse;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    pub fn set_copy_result(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.status_message = Some("Job copied to clipboard".to_string());
            }
            Err(error) => {
                self.status_message = Some(format!("Copy failed: {}", error));
            }
        }
    }

    pub fn select_next_job(&mut self) {
        let len = self.jobs.state().items.len();
        if len > 0 && self.selected_job < len - 1 {
            self.selected_job += 1;
        }
    }

    pub fn select_previous_job(&mut self) {
        if self.selected_job > 0 {
            self.selected_job -= 1;
        }
    }

    /// True while a registration request is outstanding.
    pub fn registration_in_flight(&self) -> bool {
        self.registration.is_some()
    }

    /// Submits the form through the registration collaborator.
    ///
    /// Nothing happens while a previous submission is still in flight, and
    /// the form itself decides whether the fields pass; only then is the
    /// payload handed to a worker thread.
    pub fn submit_registration<F>(&mut self, register: F)
    where
        F: FnOnce(RegistrationRequest) -> ApiResult<UserInfo> + Send + 'static,
    {
        if self.registration.is_some() {
            return;
        }
        let Some(request) = self.form.submit() else {
            return;
        };

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(register(request));
        });
        self.registration = Some(rx);
    }

    /// Applies the registration collaborator's outcome.
    ///
    /// Success establishes the session, resets the form, and navigates to
    /// the redirect target; failure is shown alongside the form without
    /// discarding what the user typed.
    pub fn set_registration_result(&mut self, result: Result<UserInfo, String>) -> Option<UserInfo> {
        match result {
            Ok(user) => {
                self.session = Some(user.clone());
                self.register_error = None;
                self.form = RegistrationForm::new();
                let target = self.redirect.clone();
                self.navigate(&target);
                Some(user)
            }
            Err(error) => {
                self.register_error = Some(error);
                None
            }
        }
    }

    /// Follows an opaque redirect target. This client has a single
    /// destination screen, so every target lands on home.
    pub fn navigate(&mut self, _target: &str) {
        self.enter_home();
    }

    /// Drives time-based work: the carousel while the home screen is
    /// visible, the job fetch, and the registration outcome. Returns a
    /// newly signed-in identity so the caller can persist it.
    pub fn on_tick(&mut self, now: Instant) -> Option<UserInfo> {
        if self.mode != AppMode::Register {
            self.carousel.tick(now);
        }
        if self.jobs.poll() {
            let len = self.jobs.state().items.len();
            self.selected_job = self.selected_job.min(len.saturating_sub(1));
        }
        self.poll_registration()
    }

    /// Next instant at which `on_tick` has due work, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.mode == AppMode::Register {
            None
        } else {
            self.carousel.next_deadline()
        }
    }

    fn poll_registration(&mut self) -> Option<UserInfo> {
        let rx = self.registration.as_ref()?;
        let outcome = match rx.try_recv() {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err("Registration was interrupted".to_string()),
        };
        self.registration = None;
        self.set_registration_result(outcome)
    }
}
