//! Calendar and window helpers for indicator series

mod frequency;
mod window;

pub use self::frequency::Frequency;
pub use self::window::moving_average;
