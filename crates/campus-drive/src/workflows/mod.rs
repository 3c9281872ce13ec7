pub mod catalog;
pub mod matching;
pub mod progression;
pub mod session;
