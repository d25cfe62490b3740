pub mod calendar;
pub mod clock;
pub mod provision;
pub mod puzzle;
pub mod scorer;
pub mod word_loader;
