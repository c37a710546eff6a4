// src/ui/mod.rs
pub mod client;
pub mod session;
pub mod transcript;
