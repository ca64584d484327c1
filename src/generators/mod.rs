pub mod bitfield;
pub mod message;

pub use bitfield::{Bitfield, Bits};
pub use message::Message;
