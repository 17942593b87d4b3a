//! build-constants: compile-time build metadata for C# projects.
//!
//! This library turns an ordered list of named build items into a C#
//! `partial class` of `const` members, so build metadata such as the version or
//! configuration is available as compile-time constants.

pub mod constant;
pub mod csharp;
pub mod diagnostic;
pub mod generator;
pub mod item;
pub mod logging;
pub mod manifest;
pub mod project;
pub mod task;
