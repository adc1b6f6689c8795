pub mod add;
pub mod calculator;
pub mod del;
pub mod edit;
pub mod log;
pub mod logic;
