use reqwest::{Client, ClientBuilder};

use crate::prelude::*;

/// Nominatim and friends require an identifying user agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn builder() -> ClientBuilder {
    Client::builder().user_agent(USER_AGENT)
}

/// Build a default client.
///
/// Timeouts are the caller's business: each operation has its own bound.
pub fn try_new() -> Result<Client> {
    Ok(builder().build()?)
}
