use std::path::Path;

use easyctl_transport::{LinkConfig, SerialLink};
use tracing::debug;

use crate::client::{EasyClient, ExchangeConfig};
use crate::error::Result;

/// Open the serial device at `path` with default settings.
pub fn connect(path: impl AsRef<Path>) -> Result<EasyClient<SerialLink, SerialLink>> {
    connect_with_config(path, &LinkConfig::default(), ExchangeConfig::default())
}

/// Open the serial device with explicit line and exchange settings.
///
/// The link is split into a reader and a writer half on the same port.
pub fn connect_with_config(
    path: impl AsRef<Path>,
    link_config: &LinkConfig,
    config: ExchangeConfig,
) -> Result<EasyClient<SerialLink, SerialLink>> {
    let writer = SerialLink::open_with_config(path, link_config)?;
    let reader = writer.try_clone()?;
    debug!(path = ?writer.path(), "exchange client ready");

    Ok(EasyClient::from_parts(reader, writer, config))
}
