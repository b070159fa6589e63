use serde::{Deserialize, Serialize};

/// Query parameters understood by the library route.
/// Values are kept verbatim; only the literals "true"/"false" carry meaning.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LibraryQuery {
    #[serde(default)]
    pub checkout_canceled: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
}

impl LibraryQuery {
    pub fn new(checkout_canceled: Option<&str>, close: Option<&str>) -> Self {
        Self {
            checkout_canceled: checkout_canceled.map(str::to_string),
            close: close.map(str::to_string),
        }
    }

    /// An empty `checkoutCanceled=` counts as absent
    pub fn checkout_canceled(&self) -> Option<&str> {
        self.checkout_canceled.as_deref().filter(|v| !v.is_empty())
    }

    pub fn close(&self) -> Option<&str> {
        self.close.as_deref()
    }
}
