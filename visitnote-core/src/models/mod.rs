mod appointment;
mod summary;

pub use appointment::*;
pub use summary::*;
