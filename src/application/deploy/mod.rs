//! Deploy use case module

mod result;
#[cfg(test)]
mod tests;
mod use_case;

pub use result::DeployReport;
pub use use_case::DeployUseCase;
