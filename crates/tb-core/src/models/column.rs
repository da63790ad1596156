use serde::{Deserialize, Serialize};

/// Suffix of the drop region covering a column's empty area.
pub const DROPPABLE_SUFFIX: &str = "-droppable";

/// A named lane on a board. At most one column per board is the done lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_done: bool,
}

impl Column {
    pub fn new(id: String, name: String, is_done: bool) -> Self {
        Self { id, name, is_done }
    }

    /// Id of the drop region covering this column's empty area.
    pub fn droppable_id(&self) -> String {
        format!("{}{}", self.id, DROPPABLE_SUFFIX)
    }
}

/// Strip the empty-area suffix, returning the column id it refers to.
pub fn column_id_from_droppable(id: &str) -> Option<&str> {
    id.strip_suffix(DROPPABLE_SUFFIX)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPatch {
    pub name: Option<String>,
}
