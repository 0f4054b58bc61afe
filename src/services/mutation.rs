//! mutation.rs
//!
//! Этот модуль реализует движок редактирования одного ряда.
//!
//! Ключевые компоненты:
//! 1.  **EditMode**: два несовместимых режима клика по клетке. В режиме
//!     `Creation` клик меняет форму ряда (место ↔ проход) и запускает
//!     перенумерацию, в режиме `Selection` — только циклит статус брони,
//!     не трогая ни форму, ни номера.
//! 2.  **Обработка направления**: ряды с обратной нумерацией обслуживаются
//!     тем же алгоритмом — список разворачивается, индекс зеркалится
//!     (`len - 1 - index`), после шагов список разворачивается обратно.
//! 3.  **Инвариант непрерывности**: после любой правки в `Creation` номера
//!     мест ряда читаются сплошной последовательностью без дыр, поэтому на
//!     билетах и табло никогда не появляется разрыв нумерации. Это
//!     гарантирует прямой проход-перенумерация от точки правки, без
//!     пересборки ряда с нуля.
//!
//! Движок чистый и синхронный: на вход срез клеток, на выход новый список,
//! никакого разделяемого состояния между вызовами (см. LayoutSession).

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::models::{SeatStatus, Token};

/// Режим взаимодействия с клеткой ряда.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Конструирование зала: клик переключает место ↔ проход.
    Creation,
    /// Выбор мест: клик циклит статус брони места.
    Selection,
}

/// Применяет один клик к ряду (без синтетического прохода слева) и
/// возвращает новый список клеток. Вход не модифицируется; при ошибке не
/// возвращается ничего частичного.
pub fn update_row(
    tokens: &[Token],
    index: usize,
    grp_code: &str,
    row_head: &str,
    mode: EditMode,
    reverse_order: bool,
) -> Result<Vec<Token>, LayoutError> {
    let len = tokens.len();
    if index >= len {
        return Err(LayoutError::IndexOutOfRange { index, len });
    }

    let mut work: Vec<Token> = tokens.to_vec();
    let mut idx = index;
    if reverse_order {
        work.reverse();
        idx = len - 1 - idx;
    }

    match mode {
        // Физическая колонка нового места считается в естественном
        // (неразвёрнутом) порядке, поэтому index, а не idx.
        EditMode::Creation => toggle_shape(&mut work, idx, grp_code, row_head, index as u32 + 1),
        EditMode::Selection => cycle_status(&mut work, idx),
    }

    if reverse_order {
        work.reverse();
    }
    Ok(work)
}

/// Стратегия режима `Creation`: место ↔ проход плюс перенумерация вперёд,
/// закрывающая (или раздвигающая) дыру в номерах.
fn toggle_shape(work: &mut [Token], idx: usize, grp_code: &str, row_head: &str, col: u32) {
    if let Some(removed) = work[idx].seat_number() {
        // Место снимается: последующие места съезжают на его номер.
        work[idx] = Token::aisle(grp_code);
        renumber_following(work, idx, removed);
    } else {
        // Проход превращается в место: номер продолжает ближайшее место
        // слева (0, если слева мест нет).
        let nearest = work[..idx]
            .iter()
            .rev()
            .find_map(Token::seat_number)
            .unwrap_or(0);
        work[idx] = Token::seat(SeatStatus::Available, grp_code, row_head, col, nearest + 1);
        renumber_following(work, idx, nearest + 2);
    }
}

/// Переприсваивает номера всем местам правее idx сплошной
/// последовательностью, начиная с `next`.
fn renumber_following(work: &mut [Token], idx: usize, mut next: u32) {
    for token in work[idx + 1..].iter_mut() {
        if let Token::Seat { number, .. } = token {
            *number = next;
            next += 1;
        }
    }
}

/// Стратегия режима `Selection`: свободно → выбрано, всё остальное →
/// свободно. Клик по проходу — допустимый no-op (политика вызывающего).
fn cycle_status(work: &mut [Token], idx: usize) {
    if let Token::Seat { status, .. } = &mut work[idx] {
        *status = match *status {
            SeatStatus::Available => SeatStatus::Selected,
            SeatStatus::Sold | SeatStatus::Selected => SeatStatus::Available,
        };
    }
}
