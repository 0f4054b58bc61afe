//! Кодек одного ряда: `{grp_row_index}:{row_head}:{grp_code}000:{tokens}`.
//!
//! Литерал `000` после кода группы — исторический разделитель формата, он
//! не несёт смысла и восстанавливается при сериализации. Ведущий проход
//! ("gap") в персистентной строке отсутствует: он синтезируется слоем
//! показа и срезается до повторной сериализации.

use crate::models::{Row, Token};

use super::{parse_number, split_letters, token};

/// Разбирает одну `|`-запись ряда. `None` вместо ошибки: вызывающие
/// отфильтровывают не-ряды при decode целого layout.
pub fn parse_row(s: &str) -> Option<Row> {
    let mut parts = s.split(':');

    let grp_row_index = parse_number(parts.next()?)?;
    if grp_row_index == 0 {
        return None;
    }

    let row_head = parts.next()?;
    let (head_letters, head_rest) = split_letters(row_head);
    if head_letters.is_empty() || !head_rest.is_empty() {
        return None;
    }

    let code_field = parts.next()?;
    let grp_code = code_field.strip_suffix("000")?;
    let (code_letters, code_rest) = split_letters(grp_code);
    if code_letters.is_empty() || !code_rest.is_empty() {
        return None;
    }

    let mut tokens = Vec::new();
    for part in parts {
        tokens.push(token::parse_token(part).ok()?);
    }
    if tokens.is_empty() {
        return None;
    }

    Some(Row {
        grp_row_index,
        row_head: head_letters.to_string(),
        grp_code: code_letters.to_string(),
        tokens,
    })
}

/// Обратная операция к [`parse_row`], байт-в-байт.
pub fn serialize_row(row: &Row) -> String {
    let tokens = row
        .tokens
        .iter()
        .map(token::serialize_token)
        .collect::<Vec<_>>()
        .join(":");
    format!(
        "{}:{}:{}000:{}",
        row.grp_row_index, row.row_head, row.grp_code, tokens
    )
}

/// Список клеток ряда с синтетическим проходом слева — то, что реально
/// рисует слой показа. В персистентную строку эти проходы не попадают.
pub fn prepend_gap(row: &Row, gap_count: usize) -> Vec<Token> {
    let mut out = Vec::with_capacity(gap_count + row.tokens.len());
    out.extend(std::iter::repeat_with(|| Token::aisle(&row.grp_code)).take(gap_count));
    out.extend(row.tokens.iter().cloned());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatStatus;

    #[test]
    fn parses_row() {
        let row = parse_row("1:K:A000:A0+0:1A&K1+2:1A&K2+1").unwrap();
        assert_eq!(row.grp_row_index, 1);
        assert_eq!(row.row_head, "K");
        assert_eq!(row.grp_code, "A");
        assert_eq!(
            row.tokens,
            vec![
                Token::aisle("A"),
                Token::seat(SeatStatus::Available, "A", "K", 1, 2),
                Token::seat(SeatStatus::Available, "A", "K", 2, 1),
            ]
        );
    }

    #[test]
    fn rejects_non_rows() {
        assert!(parse_row("NOTAROW").is_none());
        assert!(parse_row("").is_none());
        assert!(parse_row("0:K:A000:1A&K1+1").is_none());
        assert!(parse_row("1:K:A00:1A&K1+1").is_none());
        assert!(parse_row("1:K:A000").is_none());
        // испорченная клетка портит весь ряд
        assert!(parse_row("1:K:A000:1A&K1+1:garbage").is_none());
    }

    #[test]
    fn round_trips() {
        let s = "4:H:B000:B0+0:1B&H1+3:0B&H2+2:2B&H3+1";
        let row = parse_row(s).unwrap();
        assert_eq!(serialize_row(&row), s);
    }

    #[test]
    fn gap_is_synthetic() {
        let row = parse_row("1:K:A000:1A&K1+1").unwrap();
        let display = prepend_gap(&row, 2);
        assert_eq!(display.len(), 3);
        assert_eq!(display[0], Token::aisle("A"));
        assert_eq!(display[1], Token::aisle("A"));
        // сама строка ряда проходы не содержит
        assert_eq!(serialize_row(&row), "1:K:A000:1A&K1+1");
    }
}
