// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod args;
pub mod batch;
pub mod commands;
pub mod common;
pub mod constants;
pub mod dseq;
pub mod enzyme;
pub mod errors;
pub mod iupac;
pub mod pattern;
pub mod progress;
pub mod site;
pub mod table;
