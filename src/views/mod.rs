//! The four static pages. Content only; no state lives here.

mod about;
mod cards;
mod home;
mod join;
mod portfolio;

pub use about::About;
pub use home::Home;
pub use join::Join;
pub use portfolio::Portfolio;
