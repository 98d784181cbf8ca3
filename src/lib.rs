pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod session;

#[cfg(test)]
pub mod test_utils;
