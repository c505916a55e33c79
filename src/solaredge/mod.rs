mod client;
mod query_builder;
mod site;

pub use client::Client;
pub use site::Site;
