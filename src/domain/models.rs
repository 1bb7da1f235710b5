use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job document as the remote API returns it.
///
/// The backend is loose about where the company name lives and whether the
/// skills array is present, so the record keeps those parts raw and the
/// [`JobSummary`] derivation normalizes them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawJobRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub experience_level: String,
    pub description: String,
    pub created_at: String,
    /// Posting admin, may carry the company name.
    pub admin: Option<CompanyAdmin>,
    /// Company document reference.
    pub company: Option<CompanyRef>,
    /// Flat company name variant.
    pub company_name: Option<String>,
    /// Kept as a raw value: absent or non-array coerces to no skills.
    pub required_skills: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyAdmin {
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompanyRef {
    pub name: Option<String>,
}

/// Normalized job card data shown on the home screen.
///
/// Derived from a [`RawJobRecord`]; the derivation is pure, so deriving twice
/// from the same record yields equal summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub experience_level: String,
    pub description: String,
    pub created_at: String,
    pub skills: Vec<String>,
}

impl JobSummary {
    /// Normalizes a raw record into card data.
    ///
    /// The company name is resolved through a fallback chain, consulting each
    /// candidate in order until one is non-empty: the posting admin's company
    /// name, the referenced company's name, the flat `companyName` field, and
    /// finally the literal `"Company"`. The skills field becomes an empty
    /// list when it is absent or not an array.
    pub fn from_raw(raw: &RawJobRecord) -> Self {
        let company_name = raw
            .admin
            .as_ref()
            .and_then(|admin| admin.company_name.as_deref())
            .filter(|name| !name.is_empty())
            .or_else(|| {
                raw.company
                    .as_ref()
                    .and_then(|company| company.name.as_deref())
                    .filter(|name| !name.is_empty())
            })
            .or_else(|| raw.company_name.as_deref().filter(|name| !name.is_empty()))
            .unwrap_or("Company")
            .to_string();

        let skills = match raw.required_skills.as_ref() {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| match entry.as_str() {
                    Some(text) => text.to_string(),
                    None => entry.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            id: raw.id.clone(),
            title: raw.title.clone(),
            company_name,
            location: raw.location.clone(),
            salary: raw.salary.clone(),
            job_type: raw.job_type.clone(),
            experience_level: raw.experience_level.clone(),
            description: raw.description.clone(),
            created_at: raw.created_at.clone(),
            skills,
        }
    }

    /// Plain-text rendering of the card, used for the clipboard copy.
    pub fn clipboard_text(&self) -> String {
        let mut text = format!(
            "{} at {} - {} | {} | {}",
            self.title, self.company_name, self.location, self.job_type, self.salary
        );
        if !self.skills.is_empty() {
            text.push_str(&format!(" | Skills: {}", self.skills.join(", ")));
        }
        text
    }
}

/// A fixed showcase entry for the testimonials carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub position: String,
    pub company: String,
    pub rating: u8,
    pub avatar_url: String,
}

impl Testimonial {
    fn new(
        quote: &str,
        author: &str,
        position: &str,
        company: &str,
        rating: u8,
        avatar_url: &str,
    ) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
            position: position.to_string(),
            company: company.to_string(),
            rating,
            avatar_url: avatar_url.to_string(),
        }
    }

    /// The showcase deck. Fixed at configuration time, never derived from
    /// external input.
    pub fn showcase() -> Vec<Testimonial> {
        vec![
            Testimonial::new(
                "JobPilot helped me find my dream job in less than 2 weeks. The AI matching was incredibly accurate and saved me hours of searching through irrelevant listings.",
                "Sarah Johnson",
                "Software Engineer",
                "TechCorp Inc.",
                5,
                "https://randomuser.me/api/portraits/women/44.jpg",
            ),
            Testimonial::new(
                "As a hiring manager, I've been amazed by the quality of candidates JobPilot connects us with. Their resume parsing technology really understands the skills we need.",
                "Michael Chen",
                "Technical Director",
                "InnovateSoft",
                5,
                "https://randomuser.me/api/portraits/men/32.jpg",
            ),
            Testimonial::new(
                "The platform is intuitive and the job matching algorithm is spot on. I received interview requests from companies that were perfect matches for my skill set.",
                "Priya Patel",
                "UX Designer",
                "DesignHub",
                4,
                "https://randomuser.me/api/portraits/women/67.jpg",
            ),
            Testimonial::new(
                "Switching careers seemed impossible until I used JobPilot. Their skill assessment tools helped me identify transferable skills I didn't know I had.",
                "James Wilson",
                "Marketing Director",
                "GrowthLabs",
                5,
                "https://randomuser.me/api/portraits/men/68.jpg",
            ),
        ]
    }
}

/// Signed-in identity returned by the registration endpoint and persisted
/// between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Payload delegated to the registration endpoint after local validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Home-screen search filter fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub search: String,
    pub location: String,
    pub profile: String,
    pub stipend: String,
}
