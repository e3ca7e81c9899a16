#![allow(dead_code)]

mod blind_store;
mod harness;

pub use blind_store::BlindLookupStore;
pub use harness::*;
