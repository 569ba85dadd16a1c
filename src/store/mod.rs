pub mod catalog;
pub mod similarity;

pub use catalog::Catalog;
pub use similarity::SimilarityMatrix;
