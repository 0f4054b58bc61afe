//! Кодек целого layout: `{groups}||{rows}`, секции разделены `||`,
//! записи внутри секций — `|`.
//!
//! Decode терпим к мусору: записи, не прошедшие грамматику, молча
//! отбрасываются (с warn в лог). Так переживаются частично собранные
//! строки во время пошагового конструирования зала. Encode — строгая
//! обратная операция: группы в порядке `order`, ряды каждой группы в
//! порядке `grp_row_index`.

use tracing::warn;

use crate::models::{Layout, Row};

use super::{group, row};

pub fn decode(s: &str) -> Layout {
    let (groups_section, rows_section) = s.split_once("||").unwrap_or((s, ""));

    let mut groups = Vec::new();
    for entry in groups_section.split('|').filter(|e| !e.is_empty()) {
        match group::parse_group(entry) {
            Some(g) => groups.push(g),
            None => warn!("dropping malformed group entry: {}", entry),
        }
    }
    // стабильная сортировка: при равном order сохраняется порядок входа
    groups.sort_by_key(|g| g.order);

    let mut rows = Vec::new();
    for entry in rows_section.split('|').filter(|e| !e.is_empty()) {
        match row::parse_row(entry) {
            Some(r) => rows.push(r),
            None => warn!("dropping malformed row entry: {}", entry),
        }
    }
    rows.sort_by_key(|r| r.grp_row_index);

    let mut orphan_rows: Vec<Row> = Vec::new();
    for r in rows {
        match groups.iter_mut().find(|g| g.code == r.grp_code) {
            Some(g) => g.rows.push(r),
            None => {
                warn!(
                    "row {}:{} references unknown group `{}`",
                    r.grp_row_index, r.row_head, r.grp_code
                );
                orphan_rows.push(r);
            }
        }
    }

    Layout { groups, orphan_rows }
}

pub fn encode(layout: &Layout) -> String {
    let groups = layout
        .groups
        .iter()
        .map(group::serialize_group)
        .collect::<Vec<_>>()
        .join("|");
    let rows = layout
        .groups
        .iter()
        .flat_map(|g| g.rows.iter())
        .map(row::serialize_row)
        .collect::<Vec<_>>()
        .join("|");
    format!("{}||{}", groups, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Token;

    #[test]
    fn decodes_single_group_layout() {
        let layout = decode("VIP:A:500:INR:1:N||1:K:A000:1A&K1+1:1A&K2+2");
        assert_eq!(layout.groups.len(), 1);
        let g = &layout.groups[0];
        assert_eq!(g.name, "VIP");
        assert_eq!(g.code, "A");
        assert_eq!(g.unit_cost, 500);
        assert_eq!(g.order, 1);
        assert_eq!(g.rows.len(), 1);
        let r = &g.rows[0];
        assert_eq!(r.row_head, "K");
        assert_eq!(
            r.tokens.iter().filter_map(Token::seat_number).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn drops_malformed_entries() {
        let s = "VIP:A:500:INR:1:N||1:K:A000:1A&K1+1|NOTAROW";
        let layout = decode(s);
        assert_eq!(layout.groups[0].rows.len(), 1);
        assert_eq!(encode(&layout), "VIP:A:500:INR:1:N||1:K:A000:1A&K1+1");
    }

    #[test]
    fn sorts_groups_and_rows() {
        let s = "BACK:B:100:INR:2:N|FRONT:A:500:INR:1:N||2:J:A000:1A&J1+1|1:K:A000:1A&K1+1";
        let layout = decode(s);
        assert_eq!(layout.groups[0].code, "A");
        assert_eq!(layout.groups[1].code, "B");
        let heads: Vec<_> = layout.groups[0].rows.iter().map(|r| r.row_head.as_str()).collect();
        assert_eq!(heads, vec!["K", "J"]);
    }

    #[test]
    fn keeps_orphan_rows_out_of_encode() {
        let s = "VIP:A:500:INR:1:N||1:K:Z000:1Z&K1+1";
        let layout = decode(s);
        assert!(layout.groups[0].rows.is_empty());
        assert_eq!(layout.orphan_rows.len(), 1);
        assert_eq!(encode(&layout), "VIP:A:500:INR:1:N||");
    }

    #[test]
    fn round_trips() {
        let s = "PREMIUM:A:500:INR:1:N|NORMAL:B:400:INR:2:N||1:K:A000:A0+0:1A&K1+2:1A&K2+1|1:J:B000:1B&J1+1";
        let layout = decode(s);
        assert_eq!(encode(&layout), s);
        assert_eq!(decode(&encode(&layout)), layout);
    }
}
