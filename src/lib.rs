#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde;

pub mod client;
pub mod config;
pub mod io;
pub mod shared;
pub mod time;
