//! Concrete rule engines.

pub mod connect_five;

pub use connect_five::ConnectFive;
