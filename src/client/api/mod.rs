//! Endpoint wrappers, one file per API area.
//!
//! Each file adds methods to [`ApiClient`](crate::client::ApiClient); paths are relative
//! to the client's base URL.

pub mod auth;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod reading_module;
pub mod student;

/// Zero-based page request shared by the listing endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub page: u64,
    pub entries: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 0,
            entries: 10,
        }
    }
}

impl Page {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("entries", self.entries.to_string()),
        ]
    }
}
