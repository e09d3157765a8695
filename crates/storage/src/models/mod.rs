pub mod age_bracket;
pub mod category;
pub mod entry;
pub mod judge;
pub mod modality;
pub mod required_exercise;
pub mod skater;
pub mod team;
pub mod tournament;

pub use age_bracket::AgeBracket;
pub use category::Category;
pub use entry::Entry;
pub use judge::{Judge, JudgeLevel, JudgeSpecialty, JudgeStatus};
pub use modality::Modality;
pub use required_exercise::RequiredExercise;
pub use skater::Skater;
pub use team::Team;
pub use tournament::Tournament;
