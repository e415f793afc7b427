pub mod completion;
pub mod config;
pub mod interactive;
pub mod jar;
pub mod session;
