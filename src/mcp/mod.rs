//! MCP server module
//!
//! Exposes the FurLogic tools over the Model Context Protocol.

mod server;

pub use server::FurLogicService;
