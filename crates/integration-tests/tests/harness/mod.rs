#![allow(dead_code)]

pub mod config;
pub mod modules;
pub mod server;
