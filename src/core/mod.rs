pub mod dom;
pub mod services;

#[cfg(test)]
pub mod testing;

pub use dom::*;
pub use services::*;
