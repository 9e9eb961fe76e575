pub mod contact;
pub mod menu;
