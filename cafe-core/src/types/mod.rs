//! Cafe record types

mod cafe;
mod form;

pub use cafe::{Cafe, NewCafe};
pub use form::{parse_flag, CafeForm};
