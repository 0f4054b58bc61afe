//! token.rs
//!
//! Грамматика одной клетки ряда. Две формы:
//!
//! 1. **Проход**: `{grp}0+0`, например `AB0+0`. Никакой идентичности места.
//! 2. **Место**: `{status}{grp}&{row}{col}+{number}`, например `1A&K12+19`:
//!    статус 1 (свободно), группа `A`, ряд `K`, физическая колонка 12,
//!    видимый номер 19.
//!
//! Разбор написан руками по байтам, без регулярных выражений: формы
//! различаются первым символом (у прохода буква, у места цифра), поэтому
//! грамматика однозначна без отката.

use crate::error::LayoutError;
use crate::models::{SeatStatus, Token};

use super::{parse_number, split_digits, split_letters};

/// Быстрый дискриминатор прохода, без полного разбора.
pub fn is_aisle(s: &str) -> bool {
    let (letters, rest) = split_letters(s);
    !letters.is_empty() && rest == "0+0"
}

pub fn parse_token(s: &str) -> Result<Token, LayoutError> {
    try_parse(s).ok_or_else(|| LayoutError::MalformedToken(s.to_string()))
}

fn try_parse(s: &str) -> Option<Token> {
    if is_aisle(s) {
        let (letters, _) = split_letters(s);
        return Some(Token::aisle(letters));
    }

    // Форма места: status / grp / '&' / row / col / '+' / number.
    let (status_digits, rest) = split_digits(s);
    let status = SeatStatus::from_code(parse_number(status_digits)?)?;
    let (grp_code, rest) = split_letters(rest);
    if grp_code.is_empty() {
        return None;
    }
    let rest = rest.strip_prefix('&')?;
    let (row, rest) = split_letters(rest);
    if row.is_empty() {
        return None;
    }
    let (col_digits, rest) = split_digits(rest);
    let col = parse_number(col_digits)?;
    let rest = rest.strip_prefix('+')?;
    let number = parse_number(rest)?;
    // 0 зарезервирован под "нет места" внутри прохода.
    if col == 0 || number == 0 {
        return None;
    }
    Some(Token::seat(status, grp_code, row, col, number))
}

pub fn serialize_token(token: &Token) -> String {
    match token {
        Token::Aisle { grp_code } => serialize_aisle(grp_code),
        Token::Seat {
            status,
            grp_code,
            row,
            col,
            number,
        } => serialize_seat(grp_code, row, *col, *number, *status),
    }
}

pub fn serialize_aisle(grp_code: &str) -> String {
    format!("{}0+0", grp_code)
}

pub fn serialize_seat(grp_code: &str, row: &str, col: u32, number: u32, status: SeatStatus) -> String {
    format!("{}{}&{}{}+{}", status.code(), grp_code, row, col, number)
}
