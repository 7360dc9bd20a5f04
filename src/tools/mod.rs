//! FurLogic Tools module
//!
//! MCP tool implementations for FurLogic.

pub mod energy;
pub mod ingredients;
pub mod kitchen;
pub mod profile;
pub mod status;
