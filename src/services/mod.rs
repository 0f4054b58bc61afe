pub mod mutation;
pub mod generator;
pub mod session;

pub use mutation::EditMode;
pub use session::LayoutSession;
