// Landing page sections, in page order

mod about;
mod app_walkthrough;
mod contact;
mod demo;
mod features;
mod footer;
mod hero;
mod nav;
mod partners;
mod team;
mod technology;
mod testimonials;

pub use about::About;
pub use app_walkthrough::AppWalkthrough;
pub use contact::Contact;
pub use demo::Demo;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use partners::Partners;
pub use team::Team;
pub use technology::Technology;
pub use testimonials::Testimonials;
