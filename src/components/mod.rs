//! UI components for the portfolio page.

pub mod chatbot;
pub mod constellation;
pub mod navbar;
pub mod sections;
