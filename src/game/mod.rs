pub mod coords;
pub mod rules;
pub mod utils;
