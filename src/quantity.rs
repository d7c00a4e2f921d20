#[macro_use]
pub mod macros;

pub mod electric;
pub mod energy;
pub mod power;
pub mod time;
pub mod weather;
mod zero;

pub use self::zero::Zero;
