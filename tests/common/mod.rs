#![allow(dead_code)]

pub mod repo;
