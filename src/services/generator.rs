//! Генерация начальной строки layout из параметров групп (имя, цена,
//! количество рядов и колонок). Форма ввода этих параметров — забота
//! внешнего UI, сюда приходит уже собранный список.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec;
use crate::models::{Group, Layout, Row, SeatStatus, Token};

/// Параметры одной группы, как их отдаёт форма конструктора.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSpec {
    pub group_name: String,
    pub group_cost: u32,
    pub row_count: u32,
    pub col_count: u32,
}

/// Буквенный код по позиции: 0 → "A", 25 → "Z", 26 → "BA" (обычная
/// base-26 запись с цифрами A..Z).
pub fn alpha_code(mut n: u32) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Обратная операция к [`alpha_code`].
pub fn alpha_index(code: &str) -> u32 {
    code.bytes()
        .fold(0, |acc, b| acc * 26 + (b - b'A') as u32)
}

/// Собирает полную строку layout: группы получают коды A, B, C, ... по
/// порядку, ряды — глобально убывающие буквенные метки (первый
/// сгенерированный ряд дальше всех от сцены), места — обратную нумерацию
/// (номер 1 у правого края). Проходы-gap в строку не пишутся.
pub fn generate_layout(specs: &[GroupSpec]) -> String {
    let total_rows: u32 = specs.iter().map(|s| s.row_count).sum();
    let mut global_row = 0u32;

    let mut groups = Vec::with_capacity(specs.len());
    for (i, spec) in specs.iter().enumerate() {
        let code = alpha_code(i as u32);
        let mut rows = Vec::with_capacity(spec.row_count as usize);
        for j in 0..spec.row_count {
            let head = alpha_code(total_rows - 1 - global_row);
            global_row += 1;
            let tokens = (1..=spec.col_count)
                .map(|col| {
                    Token::seat(
                        SeatStatus::Available,
                        &code,
                        &head,
                        col,
                        spec.col_count - col + 1,
                    )
                })
                .collect();
            rows.push(Row {
                grp_row_index: j + 1,
                row_head: head,
                grp_code: code.clone(),
                tokens,
            });
        }
        groups.push(Group {
            name: spec.group_name.trim().to_uppercase(),
            code,
            unit_cost: spec.group_cost,
            currency: "INR".to_string(),
            order: i as u32 + 1,
            flag: "N".to_string(),
            rows,
        });
    }

    debug!("generated layout: {} groups, {} rows", groups.len(), total_rows);
    codec::layout::encode(&Layout {
        groups,
        orphan_rows: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_codes() {
        assert_eq!(alpha_code(0), "A");
        assert_eq!(alpha_code(10), "K");
        assert_eq!(alpha_code(25), "Z");
        assert_eq!(alpha_code(26), "BA");
        for n in [0, 1, 25, 26, 27, 700] {
            assert_eq!(alpha_index(&alpha_code(n)), n);
        }
    }

    #[test]
    fn generates_decodable_layout() {
        let specs = vec![
            GroupSpec {
                group_name: "Premium".into(),
                group_cost: 500,
                row_count: 2,
                col_count: 4,
            },
            GroupSpec {
                group_name: "normal ".into(),
                group_cost: 400,
                row_count: 1,
                col_count: 3,
            },
        ];
        let s = generate_layout(&specs);
        let layout = codec::layout::decode(&s);

        assert_eq!(layout.groups.len(), 2);
        assert!(layout.orphan_rows.is_empty());

        let premium = &layout.groups[0];
        assert_eq!(premium.name, "PREMIUM");
        assert_eq!(premium.code, "A");
        assert_eq!(premium.order, 1);
        assert_eq!(premium.rows.len(), 2);
        // 3 ряда всего: метки C, B достаются premium, A — normal
        assert_eq!(premium.rows[0].row_head, "C");
        assert_eq!(premium.rows[1].row_head, "B");
        assert_eq!(layout.groups[1].rows[0].row_head, "A");

        // обратная нумерация: col 1 несёт наибольший номер
        let first_row = &premium.rows[0];
        let numbers: Vec<_> = first_row
            .tokens
            .iter()
            .filter_map(crate::models::Token::seat_number)
            .collect();
        assert_eq!(numbers, vec![4, 3, 2, 1]);
    }

    #[test]
    fn empty_specs_give_empty_layout() {
        let s = generate_layout(&[]);
        let layout = codec::layout::decode(&s);
        assert!(layout.groups.is_empty());
        assert!(layout.orphan_rows.is_empty());
    }
}
