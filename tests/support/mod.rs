#![allow(dead_code)]

pub mod architecture;
pub mod catalog;
pub mod config;
pub mod temp_db;
