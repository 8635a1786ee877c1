//! Domain Layer
//!
//! Deployment vocabulary without I/O.
//!
//! - `entities/` - Deploy outcomes and the Render blueprint
//! - `value_objects/` - Platform, env vars, billing plan, secret keys
//! - `services/` - URL recovery from CLI output
//! - `ports/` - Interfaces for commands, prompts, billing and events

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
