pub mod token;
pub mod row;
pub mod group;
pub mod layout;

pub use token::{SeatStatus, Token};
pub use row::Row;
pub use group::Group;
pub use layout::Layout;
