//! Route tables

pub mod trivia;
