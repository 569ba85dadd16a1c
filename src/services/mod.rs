pub mod filter;
pub mod recommend;
pub mod title_search;

pub use filter::filter_movies;
pub use recommend::Recommender;
pub use title_search::search_titles;
