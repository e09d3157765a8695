pub mod denormalize;
pub mod entries;
pub mod filter_chain;
pub mod modalities;
pub mod skaters;
