use crate::domain::UserInfo;
use std::fs;
use std::path::Path;

pub const DEFAULT_SESSION_FILE: &str = "jobpilot-session.json";

pub struct SessionStore;

impl SessionStore {
    pub fn save<P: AsRef<Path>>(user: &UserInfo, filename: P) -> Result<String, String> {
        match serde_json::to_string_pretty(user) {
            Ok(json) => match fs::write(filename.as_ref(), &json) {
                Ok(_) => Ok(filename.as_ref().display().to_string()),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> Result<UserInfo, String> {
        match fs::read_to_string(filename.as_ref()) {
            Ok(content) => match serde_json::from_str::<UserInfo>(&content) {
                Ok(user) => Ok(user),
                Err(e) => Err(format!("Invalid session file - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }
}
