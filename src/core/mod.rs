pub mod duration;
pub mod fetcher;
pub mod logic;
pub mod request;
pub mod summarizer;
