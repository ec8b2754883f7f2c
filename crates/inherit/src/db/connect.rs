use crate::Result;
use inherit_core::{driver::Driver, Error};
use url::Url;

/// Opens the entity store named by a connection URL.
pub fn connect(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url).map_err(|err| Error::invalid_connection_url(url, err))?;

    match parsed.scheme() {
        "memory" => connect_memory(url),
        scheme => Err(Error::invalid_connection_url(
            url,
            format_args!("no entity store for scheme `{scheme}`"),
        )),
    }
}

#[cfg(feature = "memory")]
fn connect_memory(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(inherit_driver_memory::Memory::from_url(url)?))
}

#[cfg(not(feature = "memory"))]
fn connect_memory(url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url(
        url,
        "the `memory` feature is not enabled",
    ))
}
