pub mod check;
pub mod compose;
pub mod preview;
