// Reusable interactive components

mod image_carousel;
mod reveal_section;

pub use image_carousel::ImageCarousel;
pub use reveal_section::RevealSection;
