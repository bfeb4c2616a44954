pub mod harness;

pub use harness::{TestEnv, access_line};
