//! FurLogic Library
//!
//! Energy requirements and home-cooked meal planning for dogs.

pub mod build_info;
pub mod catalog;
pub mod db;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
