pub mod cta;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod layout;
pub mod navbar;
pub mod products;
pub mod section;
pub mod toaster;
