// Report assembly and JSON output.

pub mod builder;
