pub mod corpus;
pub mod driver;
pub mod errors;
pub mod information;
pub mod input;
pub mod output;
pub mod project;
