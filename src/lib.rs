//! Single-page site for the LLHS Finance Club.
//!
//! The whole application is one root component with four static pages and a
//! signal holding which page is active. There is no URL routing and nothing is
//! persisted: navigation is a plain state swap, followed by a scroll reset.

pub mod app;
pub mod holdings;
pub mod nav;
pub mod views;
