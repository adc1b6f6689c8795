// src/import/mod.rs

pub mod csv;
pub mod logic;

pub use logic::ImportLogic;
