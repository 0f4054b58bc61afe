pub mod token;
pub mod row;
pub mod group;
pub mod layout;

/// Срезает ведущий прогон заглавных букв, возвращает (буквы, остаток).
pub(crate) fn split_letters(s: &str) -> (&str, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_uppercase())
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Срезает ведущий прогон десятичных цифр, возвращает (цифры, остаток).
pub(crate) fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Строгий разбор непустого числового поля.
pub(crate) fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
