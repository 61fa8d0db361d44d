pub mod punch;
pub mod punch_kind;
pub mod session;

pub use punch::PunchEvent;
pub use punch_kind::PunchKind;
pub use session::Session;
