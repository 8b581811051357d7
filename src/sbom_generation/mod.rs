/// Domain layer - SPDX graph model and pure services
///
/// Nothing in this layer touches the filesystem or the console.
pub mod domain;
pub mod services;
