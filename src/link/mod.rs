//! Link classification and advisory dead-link checking.

mod check;
mod kind;

pub use check::{LinkCheck, Warning};
pub use kind::{LinkKind, is_external_link, without_fragment};
