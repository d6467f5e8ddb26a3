pub mod dash_run;
pub mod parsed_window;
pub mod segments;
pub use dash_run::*;
pub use parsed_window::*;
pub use segments::*;

#[cfg(test)]
mod tests;
