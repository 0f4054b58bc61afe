use serde::{Deserialize, Serialize};

use super::row::Row;

/// Ценовая группа (ярус) зала. `order` задаёт порядок показа и сборки,
/// `code` должен быть уникален в пределах layout (инвариант вызывающего,
/// кодек дубликаты не проверяет).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub code: String,
    pub unit_cost: u32,
    pub currency: String,
    pub order: u32,
    pub flag: String,
    pub rows: Vec<Row>,
}
