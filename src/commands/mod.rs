mod auto_push;

pub use auto_push::{Plan, run_auto_push};
