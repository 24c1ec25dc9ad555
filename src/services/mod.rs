pub mod posters;
pub mod recommendations;
pub mod recommender;
