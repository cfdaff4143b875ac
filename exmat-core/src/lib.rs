pub mod counts;
pub mod fs;
pub mod phenotypes;

pub use self::counts::CountMatrix;
