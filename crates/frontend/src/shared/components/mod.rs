pub mod card_animated;
pub mod safe_image;
pub mod ui;

pub use card_animated::CardAnimated;
pub use safe_image::SafeImage;
