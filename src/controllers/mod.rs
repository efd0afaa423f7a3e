pub mod explore;
pub mod export;
pub mod movie;
pub mod ports;
