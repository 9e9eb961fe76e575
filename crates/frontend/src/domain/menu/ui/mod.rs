pub mod preview;
pub mod section;
