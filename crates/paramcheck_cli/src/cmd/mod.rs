/// Batch file validation command.
pub mod batch;
/// Single-value validation command.
pub mod check;
/// CLI error type.
pub mod error;
/// Parameter schema resolution command.
pub mod schema;
#[cfg(test)]
mod test_support;
mod util;
