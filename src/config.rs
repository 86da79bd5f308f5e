//! Frontend Configuration
//!
//! Where the Remote Store lives. Baked in at build time.

/// Default server address (matches `todo-server` defaults)
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Remote Store connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Server origin without the `/todos` suffix
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uses `TODO_API_URL` from the build environment when set
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
