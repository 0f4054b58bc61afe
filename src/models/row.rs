use serde::{Deserialize, Serialize};

use super::token::Token;

/// Один ряд зала: порядковый номер внутри группы, буквенная метка ряда,
/// код группы и упорядоченный список клеток.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub grp_row_index: u32,
    pub row_head: String,
    pub grp_code: String,
    pub tokens: Vec<Token>,
}
