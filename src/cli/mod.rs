pub mod command;
pub mod console;
pub mod genre_recommender;
pub mod movie_bot;

pub use console::Console;
pub use genre_recommender::GenreRecommender;
pub use movie_bot::MovieBot;
