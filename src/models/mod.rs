pub mod email;
pub mod mover;

pub use email::EmailMessage;
pub use mover::{MoverRecord, MoverSet};
