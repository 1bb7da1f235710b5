//! Domain services for the JobPilot client.
//!
//! The validation rules, password strength, search summary, and
//! redirect-hint parsing are total functions of their inputs; the
//! interactive state machines in the application layer call them after each
//! mutation instead of keeping any derived value cached. The CSV exporter
//! rounds out the module with the one file-writing service the home screen
//! offers.

use super::models::{JobFilters, JobSummary};
use std::path::Path;

/// Per-field validity flags for the registration form.
///
/// Always recomputed from the current field values via [`FieldValidity::evaluate`];
/// the form never stores these independently of their inputs.
///
/// # Examples
///
/// ```
/// use jobpilot::domain::FieldValidity;
///
/// let validity = FieldValidity::evaluate("Jo", "jo@x.com", "secret1", "secret1");
/// assert!(validity.all());
///
/// let validity = FieldValidity::evaluate("J", "jo@x.com", "secret1", "secret1");
/// assert!(!validity.name);
/// assert!(!validity.all());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidity {
    pub name: bool,
    pub email: bool,
    pub password: bool,
    pub confirm_password: bool,
}

impl FieldValidity {
    /// Evaluates all four field rules against the current values.
    pub fn evaluate(name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            name: is_valid_name(name),
            email: is_valid_email(email),
            password: is_valid_password(password),
            confirm_password: is_valid_confirmation(password, confirm_password),
        }
    }

    /// True when every field passes.
    pub fn all(&self) -> bool {
        self.name && self.email && self.password && self.confirm_password
    }
}

/// A name needs at least two characters.
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= 2
}

/// Accepts `local@domain.tld` shapes: no whitespace, exactly one `@`, and a
/// dot inside the domain with characters on both sides.
///
/// # Examples
///
/// ```
/// use jobpilot::domain::is_valid_email;
///
/// assert!(is_valid_email("jo@x.com"));
/// assert!(is_valid_email("first.last@mail.example.org"));
/// assert!(!is_valid_email("bad"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("a@b."));
/// assert!(!is_valid_email("a@.com"));
/// assert!(!is_valid_email("a b@x.com"));
/// assert!(!is_valid_email("a@@x.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

/// A password needs at least six characters.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

/// The confirmation must equal the password and be non-empty, so an empty
/// confirmation never validates even against an empty password.
pub fn is_valid_confirmation(password: &str, confirm_password: &str) -> bool {
    password == confirm_password && !confirm_password.is_empty()
}

/// Display-only password strength indicator.
///
/// Uses its own thresholds, not the validity rule's: a five-character
/// password is already invalid but still reports `Weak`, and `Medium`
/// starts right where validity does.
///
/// # Examples
///
/// ```
/// use jobpilot::domain::PasswordStrength;
///
/// assert_eq!(PasswordStrength::of(""), PasswordStrength::None);
/// assert_eq!(PasswordStrength::of("abc12"), PasswordStrength::Weak);
/// assert_eq!(PasswordStrength::of("abc123"), PasswordStrength::Medium);
/// assert_eq!(PasswordStrength::of("abc12345"), PasswordStrength::Strong);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Classifies the password by length alone.
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => PasswordStrength::None,
            1..=5 => PasswordStrength::Weak,
            6..=7 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    /// Label shown next to the strength meter.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::None => "",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Meter fill, 0–100.
    pub fn percent(&self) -> u16 {
        match self {
            PasswordStrength::None => 0,
            PasswordStrength::Weak => 33,
            PasswordStrength::Medium => 66,
            PasswordStrength::Strong => 100,
        }
    }
}

/// Builds the search-initiated summary handed to the notification
/// collaborator.
///
/// An empty search term reads as "all jobs"; the other filters append their
/// clause only when set.
///
/// # Examples
///
/// ```
/// use jobpilot::domain::{search_summary, JobFilters};
///
/// let filters = JobFilters::default();
/// assert_eq!(search_summary(&filters), "Searching for jobs: all jobs");
///
/// let filters = JobFilters {
///     search: "rust".to_string(),
///     location: "Berlin".to_string(),
///     profile: "Backend".to_string(),
///     stipend: "$50,000-$75,000".to_string(),
/// };
/// assert_eq!(
///     search_summary(&filters),
///     "Searching for jobs: rust in Berlin matching \"Backend\" profile with salary range $50,000-$75,000"
/// );
/// ```
pub fn search_summary(filters: &JobFilters) -> String {
    let term = if filters.search.is_empty() {
        "all jobs"
    } else {
        filters.search.as_str()
    };
    let mut summary = format!("Searching for jobs: {}", term);
    if !filters.location.is_empty() {
        summary.push_str(&format!(" in {}", filters.location));
    }
    if !filters.profile.is_empty() {
        summary.push_str(&format!(" matching \"{}\" profile", filters.profile));
    }
    if !filters.stipend.is_empty() {
        summary.push_str(&format!(" with salary range {}", filters.stipend));
    }
    summary
}

/// Extracts the post-registration redirect target from an opaque entry hint
/// such as `"redirect=/jobs"`. An empty hint or one without a value falls
/// back to `/`.
pub fn redirect_target(entry_hint: &str) -> String {
    if entry_hint.is_empty() {
        return "/".to_string();
    }
    match entry_hint.split_once('=') {
        Some((_, target)) if !target.is_empty() => target.to_string(),
        _ => "/".to_string(),
    }
}

pub struct CsvExporter;

impl CsvExporter {
    /// Writes the job list to `filename` as CSV, one row per job with the
    /// skills joined by `;`. Returns the filename on success.
    pub fn export_jobs<P: AsRef<Path>>(jobs: &[JobSummary], filename: P) -> Result<String, String> {
        let path = filename.as_ref();
        let mut writer = csv::Writer::from_path(path).map_err(|e| e.to_string())?;

        writer
            .write_record([
                "title",
                "company",
                "location",
                "salary",
                "job_type",
                "experience_level",
                "created_at",
                "skills",
            ])
            .map_err(|e| e.to_string())?;

        for job in jobs {
            let skills = job.skills.join(";");
            writer
                .write_record([
                    job.title.as_str(),
                    job.company_name.as_str(),
                    job.location.as_str(),
                    job.salary.as_str(),
                    job.job_type.as_str(),
                    job.experience_level.as_str(),
                    job.created_at.as_str(),
                    skills.as_str(),
                ])
                .map_err(|e| e.to_string())?;
        }

        writer.flush().map_err(|e| e.to_string())?;
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RawJobRecord;

    #[test]
    fn test_name_rule() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("J"));
        assert!(is_valid_name("Jo"));
        assert!(is_valid_name("Jo Anne"));
    }

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("jo@x.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("a@sub.domain.tld"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jo"));
        assert!(!is_valid_email("jo@"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jo@x"));
        assert!(!is_valid_email("jo@x."));
        assert!(!is_valid_email("jo@.com"));
        assert!(!is_valid_email("jo o@x.com"));
        assert!(!is_valid_email("jo@x@y.com"));
    }

    #[test]
    fn test_password_rule_and_strength_use_different_thresholds() {
        // Five characters: invalid, yet the indicator still reads Weak.
        assert!(!is_valid_password("abc12"));
        assert_eq!(PasswordStrength::of("abc12"), PasswordStrength::Weak);

        // Six characters: valid and Medium.
        assert!(is_valid_password("abc123"));
        assert_eq!(PasswordStrength::of("abc123"), PasswordStrength::Medium);
    }

    #[test]
    fn test_confirmation_rule() {
        assert!(is_valid_confirmation("secret1", "secret1"));
        assert!(!is_valid_confirmation("secret1", "secret2"));
        // Empty confirmation never validates, even against an empty password.
        assert!(!is_valid_confirmation("", ""));
    }

    #[test]
    fn test_strength_labels_and_percent() {
        assert_eq!(PasswordStrength::None.label(), "");
        assert_eq!(PasswordStrength::Weak.percent(), 33);
        assert_eq!(PasswordStrength::Medium.label(), "Medium");
        assert_eq!(PasswordStrength::Strong.percent(), 100);
    }

    #[test]
    fn test_search_summary_with_partial_filters() {
        let filters = JobFilters {
            search: String::new(),
            location: "Remote".to_string(),
            profile: String::new(),
            stipend: String::new(),
        };
        assert_eq!(search_summary(&filters), "Searching for jobs: all jobs in Remote");
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(redirect_target(""), "/");
        assert_eq!(redirect_target("redirect=/jobs"), "/jobs");
        assert_eq!(redirect_target("?redirect=/profile"), "/profile");
        assert_eq!(redirect_target("redirect="), "/");
        assert_eq!(redirect_target("garbage"), "/");
    }

    #[test]
    fn test_csv_export_writes_header_and_rows() {
        let raw = RawJobRecord {
            title: "Backend Engineer".to_string(),
            company_name: Some("Acme".to_string()),
            location: "Berlin".to_string(),
            required_skills: Some(serde_json::json!(["Rust", "SQL"])),
            ..RawJobRecord::default()
        };
        let jobs = vec![JobSummary::from_raw(&raw)];

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("jobs.csv");
        let written = CsvExporter::export_jobs(&jobs, &path).expect("export should succeed");
        assert_eq!(written, path.display().to_string());

        let content = std::fs::read_to_string(&path).expect("read back");
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "title,company,location,salary,job_type,experience_level,created_at,skills"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Backend Engineer,Acme,Berlin"));
        assert!(row.ends_with("Rust;SQL"));
    }

    #[test]
    fn test_csv_export_rejects_bad_path() {
        let result = CsvExporter::export_jobs(&[], "/nonexistent-dir/jobs.csv");
        assert!(result.is_err());
    }
}
