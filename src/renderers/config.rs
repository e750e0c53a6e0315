//! Render configuration
//!
//! Defaults reproduce the markup of the product page. Every field
//! may be overridden from JSON or a JavaScript object; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::errors::{RenderError, Result};

pub const DEFAULT_CONTAINER_ID: &str = "product-list";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Id of the pre-existing container element
    pub container_id: String,

    /// Tag of each generated item
    pub item_tag: String,

    /// Class of the item wrapper
    pub item_class: String,

    /// Class of the name field
    pub name_class: String,

    /// Class of the price field
    pub price_class: String,

    /// Text placed between the name and price fields (none when `None`)
    pub separator: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            item_tag: "li".to_string(),
            item_class: "product-item".to_string(),
            name_class: "product-name".to_string(),
            price_class: "product-price".to_string(),
            separator: Some(" - ".to_string()),
        }
    }
}

impl RenderConfig {
    /// Default configuration targeting another container
    pub fn with_container(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RenderError::InvalidInput(format!("config: {}", e)))
    }
}
