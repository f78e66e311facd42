#![no_std]

extern crate alloc;

pub use board::*;
pub use config::*;
pub use error::*;
pub use fetcher::*;
pub use lifecycle::*;
pub use source::*;
pub use sampler::*;

pub use jeopardy_protocol as protocol;

mod board;
mod config;
mod error;
mod fetcher;
mod lifecycle;
mod sampler;
mod source;
pub mod view;
