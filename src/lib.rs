// src/lib.rs
//
// eduvis: animated teaching aids for number bases and sorting,
// drawn with nannou.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod draw;
pub mod models;
pub mod views;
