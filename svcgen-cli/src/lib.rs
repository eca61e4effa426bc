//! # svcgen-cli
//!
//! Command-line front end for the svcgen service generator.
//!
//! This crate provides the `svcgen` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `svcgen generate <manifest>` | Render one service file per entity |
//! | `svcgen inspect <manifest>` | List the generated methods without writing |
//! | `svcgen config` | Show configuration properties and their values |
//!
//! Entities are read from a YAML [`manifest`]; naming and rendering options
//! come from `svcgen.yaml`, profile overrides, `.env` files and `SVCGEN__*`
//! environment variables.

pub mod commands;
pub mod logging;
pub mod manifest;
