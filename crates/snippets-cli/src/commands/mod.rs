pub mod catalog;
pub mod get;
pub mod put;
pub mod remove;
pub mod search;
