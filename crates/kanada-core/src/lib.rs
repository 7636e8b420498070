pub mod config;
pub mod dict;
pub mod remap;
pub mod romaji;
pub mod segment;
#[cfg(test)]
mod testutil;
pub mod unicode;
