pub mod age_bracket;
pub mod category;
pub mod common;
pub mod entry;
pub mod judge;
pub mod modality;
pub mod required_exercise;
pub mod skater;
pub mod team;
pub mod tournament;
