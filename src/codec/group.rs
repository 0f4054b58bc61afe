//! Кодек группы: `{name}:{code}:{cost}:INR:{order}:N`.

use crate::models::Group;

use super::{parse_number, split_letters};

/// Имя группы: один и более прогонов заглавных букв, допускаются пробелы
/// внутри ("ROYAL BOX").
fn is_group_name(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().any(|b| b.is_ascii_uppercase())
        && s.bytes().all(|b| b.is_ascii_uppercase() || b == b' ')
}

/// Разбирает одну `|`-запись группы, `None` при любом отступлении от
/// грамматики (запись молча отбрасывается при decode).
pub fn parse_group(s: &str) -> Option<Group> {
    let mut parts = s.split(':');

    let name = parts.next()?;
    if !is_group_name(name) {
        return None;
    }

    let code = parts.next()?;
    let (code_letters, code_rest) = split_letters(code);
    if code_letters.is_empty() || !code_rest.is_empty() {
        return None;
    }

    let unit_cost = parse_number(parts.next()?)?;

    let currency = parts.next()?;
    if currency != "INR" {
        return None;
    }

    let order = parse_number(parts.next()?)?;
    if order == 0 {
        return None;
    }

    let flag = parts.next()?;
    if flag != "N" || parts.next().is_some() {
        return None;
    }

    Some(Group {
        name: name.to_string(),
        code: code_letters.to_string(),
        unit_cost,
        currency: currency.to_string(),
        order,
        flag: flag.to_string(),
        rows: Vec::new(),
    })
}

pub fn serialize_group(group: &Group) -> String {
    format!(
        "{}:{}:{}:{}:{}:{}",
        group.name, group.code, group.unit_cost, group.currency, group.order, group.flag
    )
}
