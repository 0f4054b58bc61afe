use serde::{Deserialize, Serialize};

use super::group::Group;
use super::row::Row;

/// Полный план зала. Ряды, сославшиеся на несуществующую группу, не
/// считаются ошибкой: они откладываются в `orphan_rows` как диагностика и
/// не попадают в encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orphan_rows: Vec<Row>,
}

impl Layout {
    pub fn group(&self, code: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.code == code)
    }

    pub fn row_mut(&mut self, grp_code: &str, grp_row_index: u32) -> Option<&mut Row> {
        self.groups
            .iter_mut()
            .find(|g| g.code == grp_code)?
            .rows
            .iter_mut()
            .find(|r| r.grp_row_index == grp_row_index)
    }
}
