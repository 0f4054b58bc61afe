use serde::{Deserialize, Serialize};

/// Статус места. Кодируется одной цифрой в строке формата.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Sold,
    Available,
    Selected,
}

impl SeatStatus {
    pub fn code(self) -> u32 {
        match self {
            SeatStatus::Sold => 0,
            SeatStatus::Available => 1,
            SeatStatus::Selected => 2,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(SeatStatus::Sold),
            1 => Some(SeatStatus::Available),
            2 => Some(SeatStatus::Selected),
            _ => None,
        }
    }
}

/// Одна клетка ряда: либо проход, либо место.
///
/// Проход несёт только код группы (`{grp}0+0`), место несёт полную
/// идентичность: `{status}{grp}&{row}{col}+{number}`. `col` — физическая
/// позиция слева направо (1-based), `number` — видимый номер места,
/// именно он перенумеровывается при редактировании ряда.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Token {
    Aisle {
        grp_code: String,
    },
    Seat {
        status: SeatStatus,
        grp_code: String,
        row: String,
        col: u32,
        number: u32,
    },
}

impl Token {
    pub fn aisle(grp_code: &str) -> Self {
        Token::Aisle {
            grp_code: grp_code.to_string(),
        }
    }

    pub fn seat(status: SeatStatus, grp_code: &str, row: &str, col: u32, number: u32) -> Self {
        Token::Seat {
            status,
            grp_code: grp_code.to_string(),
            row: row.to_string(),
            col,
            number,
        }
    }

    pub fn is_seat(&self) -> bool {
        matches!(self, Token::Seat { .. })
    }

    /// Номер места, если это место.
    pub fn seat_number(&self) -> Option<u32> {
        match self {
            Token::Seat { number, .. } => Some(*number),
            Token::Aisle { .. } => None,
        }
    }
}
