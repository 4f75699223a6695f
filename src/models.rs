use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Book {
    pub id: i64, // millisecond timestamp at creation, unique and monotonic
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub price: f64,
    pub rating: f64,
    pub isbn: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Book {
    /// Cover image URL, falling back to a generated placeholder derived
    /// from the title when no cover was provided.
    pub fn cover_url(&self) -> String {
        match &self.cover {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "https://ui-avatars.com/api/?name={}&background=random&color=fff&size=200",
                self.title
            ),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    pub user: String,
    pub rating: f64,
    pub text: String,
}

/// Order history entry. Display-only: rendered by the UI, never mutated here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub date: String,
    pub total: String,
    pub status: String,
    pub items: Vec<String>,
}

/// Saved payment method. Display-only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub last4: String,
    pub expiry: String,
    pub holder: String,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
}
