pub mod day_record;
pub mod schedule;
pub mod summary;
