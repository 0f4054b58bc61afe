//! Единственный владелец текущей строки layout.
//!
//! Между правками ничего, кроме самой строки, не хранится: каждый клик
//! декодирует её заново, прогоняет движок мутаций по одному ряду и целиком
//! заменяет строку результатом. Конкурирующие редакторы обязаны
//! сериализовать правки через один такой объект — сам движок блокировок
//! не навешивает.

use tracing::debug;

use crate::codec;
use crate::error::LayoutError;
use crate::models::Token;

use super::mutation::{self, EditMode};

pub struct LayoutSession {
    layout: String,
    gap: usize,
}

impl LayoutSession {
    pub fn new(layout: impl Into<String>, gap: usize) -> Self {
        Self {
            layout: layout.into(),
            gap,
        }
    }

    /// Текущая персистентная строка layout.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Клетки ряда с синтетическим проходом слева — то, что рисуется и по
    /// чему кликают. Индексы кликов приходят в этой же системе координат.
    pub fn display_row(&self, grp_code: &str, grp_row_index: u32) -> Result<Vec<Token>, LayoutError> {
        let layout = codec::layout::decode(&self.layout);
        let row = layout
            .groups
            .iter()
            .find(|g| g.code == grp_code)
            .and_then(|g| g.rows.iter().find(|r| r.grp_row_index == grp_row_index))
            .ok_or_else(|| LayoutError::RowNotFound {
                grp_code: grp_code.to_string(),
                grp_row_index,
            })?;
        Ok(codec::row::prepend_gap(row, self.gap))
    }

    /// Применяет один клик. `display_index` дан с учётом синтетического
    /// прохода; клики внутри него — no-op. Успешная мутация целиком
    /// заменяет хранимую строку.
    pub fn toggle(
        &mut self,
        grp_code: &str,
        grp_row_index: u32,
        display_index: usize,
        mode: EditMode,
        reverse_order: bool,
    ) -> Result<(), LayoutError> {
        if display_index < self.gap {
            debug!("click at {} lands in the aisle margin, ignoring", display_index);
            return Ok(());
        }

        let mut layout = codec::layout::decode(&self.layout);
        let row = layout
            .row_mut(grp_code, grp_row_index)
            .ok_or_else(|| LayoutError::RowNotFound {
                grp_code: grp_code.to_string(),
                grp_row_index,
            })?;

        let updated = mutation::update_row(
            &row.tokens,
            display_index - self.gap,
            &row.grp_code,
            &row.row_head,
            mode,
            reverse_order,
        )?;
        row.tokens = updated;

        self.layout = codec::layout::encode(&layout);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatStatus;

    const LAYOUT: &str = "VIP:A:500:INR:1:N||1:K:A000:1A&K1+3:1A&K2+2:1A&K3+1";

    #[test]
    fn toggle_replaces_the_whole_string() {
        let mut session = LayoutSession::new(LAYOUT, 2);
        // display index 2 == первый настоящий токен
        session
            .toggle("A", 1, 2, EditMode::Creation, true)
            .unwrap();
        assert_eq!(
            session.layout(),
            "VIP:A:500:INR:1:N||1:K:A000:A0+0:1A&K2+2:1A&K3+1"
        );
    }

    #[test]
    fn clicks_in_the_gap_are_ignored() {
        let mut session = LayoutSession::new(LAYOUT, 2);
        session.toggle("A", 1, 1, EditMode::Creation, true).unwrap();
        assert_eq!(session.layout(), LAYOUT);
    }

    #[test]
    fn selection_through_the_session() {
        let mut session = LayoutSession::new(LAYOUT, 0);
        session.toggle("A", 1, 0, EditMode::Selection, true).unwrap();
        assert_eq!(
            session.layout(),
            "VIP:A:500:INR:1:N||1:K:A000:2A&K1+3:1A&K2+2:1A&K3+1"
        );
    }

    #[test]
    fn display_row_carries_the_gap() {
        let session = LayoutSession::new(LAYOUT, 2);
        let display = session.display_row("A", 1).unwrap();
        assert_eq!(display.len(), 5);
        assert_eq!(display[0], Token::aisle("A"));
        assert!(matches!(
            display[2],
            Token::Seat { status: SeatStatus::Available, .. }
        ));
    }

    #[test]
    fn unknown_row_is_a_hard_failure() {
        let mut session = LayoutSession::new(LAYOUT, 0);
        let err = session
            .toggle("Z", 1, 0, EditMode::Creation, false)
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::RowNotFound {
                grp_code: "Z".into(),
                grp_row_index: 1
            }
        );
    }
}
