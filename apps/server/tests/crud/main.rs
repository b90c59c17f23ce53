//! Question and category CRUD endpoint tests

#[allow(unused)]
#[path = "../support/mod.rs"]
mod support;

mod delete;
mod read;
