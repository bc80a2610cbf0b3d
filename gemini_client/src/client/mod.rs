mod client;
mod generate;

pub use client::Client;
