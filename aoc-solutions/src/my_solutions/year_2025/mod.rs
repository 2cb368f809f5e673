pub mod day_11;
pub mod day_12;
pub mod day_8;
