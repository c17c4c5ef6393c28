use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::status::VeganStatus;

/// A single catalog product as the API returns it.
///
/// Fields arrive verbatim and are never validated or persisted; display
/// fallbacks for missing values are applied at render time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_link: Option<String>,
    #[serde(default)]
    pub vegan_status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub vendor: Option<String>,
}

impl Product {
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            "Unnamed Product".to_string()
        } else {
            self.name.clone()
        }
    }

    pub fn display_description(&self) -> String {
        self.description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "No description available.".to_string())
    }

    pub fn display_category(&self) -> String {
        self.category
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| "Uncategorized".to_string())
    }

    pub fn link(&self) -> String {
        self.product_link
            .clone()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| "#".to_string())
    }

    pub fn status(&self) -> VeganStatus {
        VeganStatus::parse(self.vegan_status.as_deref())
    }
}

/// One page of the paginated products endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub results: Vec<Product>,
    #[serde(default)]
    pub has_next: bool,
}

// The backend serializes prices either as a JSON number or as a decimal
// string. Unparseable values degrade to None rather than failing the page.
fn de_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
