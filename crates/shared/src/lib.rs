pub mod board;
pub mod frames;
pub mod grades;
pub mod layout;
pub mod models;
pub mod roles;
