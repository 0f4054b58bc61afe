use thiserror::Error;

/// Ошибки кодека и движка мутаций.
///
/// Нарушенные grammar-записи групп и рядов сюда не попадают: при decode они
/// молча отбрасываются, чтобы переживать частично собранные строки layout.
/// Ошибки мутации, наоборот, обязаны дойти до вызывающего — иначе UI тихо
/// испортит нумерацию.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("malformed token `{0}`")]
    MalformedToken(String),

    #[error("index {index} out of range for a row of {len} tokens")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no row {grp_row_index} in group `{grp_code}`")]
    RowNotFound {
        grp_code: String,
        grp_row_index: u32,
    },
}
