//! Input Module - Key events consumed by interactive components.

mod keyboard;

pub use keyboard::*;
