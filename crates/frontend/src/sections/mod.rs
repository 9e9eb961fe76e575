//! Static home page sections

pub mod gallery;
pub mod hero;
pub mod location;
pub mod marquee;
pub mod story;

pub use gallery::Gallery;
pub use hero::Hero;
pub use location::LocationHours;
pub use marquee::Marquee;
pub use story::Story;
