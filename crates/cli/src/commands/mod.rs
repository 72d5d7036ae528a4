// Path: crates/cli/src/commands/mod.rs

pub mod commit;
pub mod decode;
pub mod encode;
pub mod validators;
