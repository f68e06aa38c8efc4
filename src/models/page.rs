use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A bounded page of upstream items plus the claimed total count.
///
/// The total count is what the API reports; it may exceed the number of
/// distinct records the API will actually return across offsets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// VirtualNamePage
// ---------------------------------------------------------------------------

/// One item of a synthesized virtual page of names.
///
/// `original` is true only for items backed by a distinct upstream record;
/// repeats carry their virtual index so callers can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNameItem {
    pub name: String,
    pub virtual_index: usize,
    pub original: bool,
}

/// A virtual page synthesized by cyclically repeating a small upstream page.
///
/// See [`NameQuery::list_virtual`](crate::queries::names::NameQuery::list_virtual)
/// for the semantics and the caveats.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNamePage {
    pub items: Vec<VirtualNameItem>,
    pub total_count: i64,
    pub has_next: bool,
}
