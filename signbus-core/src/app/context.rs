//! Application context
//!
//! Owns everything a route change needs: configuration, catalog, both sign
//! transmitters, the delay source and the current selection. Built once at
//! startup and handed by `&mut` to whatever drives the UI.

use alloc::string::String;
use alloc::vec;

use embedded_hal::delay::DelayNs;
use signbus_hal::{wait_ready, FileStore, UartError, UartErrorKind, UartTx};
use signbus_protocol::{IbisEncoder, RawTransmitter};

use super::selection::Selection;
use crate::catalog::{
    AlfaPayload, Catalog, CatalogError, RouteCategory, RouteEntry, RouteKey, RouteRecord,
};
use crate::config::DeviceConfig;

/// Sign bus a route is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignTarget {
    #[default]
    Ibis,
    Alfa,
}

impl SignTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            SignTarget::Ibis => "IBIS",
            SignTarget::Alfa => "Alfa",
        }
    }
}

/// Dispatch errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ApplyError {
    /// No route selected in the requested category
    NoSelection,
    /// Sign UART did not come up in time
    NotReady(SignTarget),
    /// Route record or payload could not be read
    Catalog(CatalogError),
    /// Route has no Alfa payload
    MissingPayload,
    /// Sign UART reported a fault
    Channel(UartErrorKind),
    /// Sign UART accepted only part of the payload
    ShortWrite { sent: usize, expected: usize },
}

impl From<CatalogError> for ApplyError {
    fn from(e: CatalogError) -> Self {
        ApplyError::Catalog(e)
    }
}

fn channel_error<E: UartError>(e: E) -> ApplyError {
    ApplyError::Channel(e.kind())
}

/// Outcome of a successful route change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub target: SignTarget,
    pub route_name: String,
    /// Line number sent (IBIS only)
    pub line: Option<u16>,
    /// Destination number sent (IBIS only)
    pub destination: Option<u16>,
    /// Bytes put on the wire
    pub bytes_sent: usize,
}

/// Application context
pub struct AppContext<S, I, A, D> {
    config: DeviceConfig,
    catalog: Catalog<S>,
    ibis: IbisEncoder<I>,
    alfa: RawTransmitter<A>,
    delay: D,
    selection: Selection,
}

impl<S, I, A, D> AppContext<S, I, A, D>
where
    S: FileStore,
    I: UartTx,
    A: UartTx,
    D: DelayNs,
{
    /// Build the context once both sign UARTs report ready
    pub fn new(
        config: DeviceConfig,
        catalog: Catalog<S>,
        mut ibis_uart: I,
        mut alfa_uart: A,
        mut delay: D,
    ) -> Result<Self, ApplyError> {
        wait_ready(&mut ibis_uart, &mut delay, config.ibis.ready_timeout_ms).map_err(|_t| {
            warn!("IBIS UART not ready after {} ms", _t.waited_ms);
            ApplyError::NotReady(SignTarget::Ibis)
        })?;
        wait_ready(&mut alfa_uart, &mut delay, config.alfa.ready_timeout_ms).map_err(|_t| {
            warn!("Alfa UART not ready after {} ms", _t.waited_ms);
            ApplyError::NotReady(SignTarget::Alfa)
        })?;

        let ibis = IbisEncoder::new(ibis_uart).with_extended_charset(config.ibis.extended_charset);
        let alfa = RawTransmitter::new(alfa_uart).with_chunk_len(config.alfa.chunk_len);

        info!("Sign UARTs ready");
        Ok(Self {
            config,
            catalog,
            ibis,
            alfa,
            delay,
            selection: Selection::new(),
        })
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// IBIS encoder, for commands outside a route change
    pub fn ibis_mut(&mut self) -> &mut IbisEncoder<I> {
        &mut self.ibis
    }

    pub fn alfa_mut(&mut self) -> &mut RawTransmitter<A> {
        &mut self.alfa
    }

    /// Select an indexed route
    pub fn select(&mut self, key: RouteKey) -> Result<&RouteEntry, CatalogError> {
        if self.catalog.find(&key).is_none() {
            return Err(CatalogError::UnknownRoute);
        }
        debug!("Selected {} route {}", key.category.as_str(), key.file.as_str());
        let category = key.category;
        self.selection.select(key);
        self.selected_entry(category).ok_or(CatalogError::UnknownRoute)
    }

    /// Index entry of the current selection in `category`
    pub fn selected_entry(&self, category: RouteCategory) -> Option<&RouteEntry> {
        self.selection
            .selected(category)
            .and_then(|key| self.catalog.find(key))
    }

    pub fn clear_selection(&mut self, category: RouteCategory) {
        self.selection.clear(category);
    }

    /// Send the selected route of `category` to `target`
    pub fn apply(
        &mut self,
        category: RouteCategory,
        target: SignTarget,
    ) -> Result<ApplyReport, ApplyError> {
        let key = self
            .selection
            .selected(category)
            .cloned()
            .ok_or(ApplyError::NoSelection)?;

        let record = self.catalog.read_route(&key)?;
        info!(
            "Applying {} route {} to {}",
            category.as_str(),
            record.name.as_str(),
            target.as_str()
        );

        match target {
            SignTarget::Ibis => self.apply_ibis(record),
            SignTarget::Alfa => self.apply_alfa(category, record),
        }
    }

    fn apply_ibis(&mut self, record: RouteRecord) -> Result<ApplyReport, ApplyError> {
        let line = record.line();
        let destination = record.destination();
        let gap_ms = self.config.ibis.command_gap_ms;

        let mut bytes_sent = self.ibis.set_line(line).map_err(channel_error)?;
        self.delay.delay_ms(gap_ms);
        bytes_sent += self.ibis.set_destination(destination).map_err(channel_error)?;
        self.delay.delay_ms(gap_ms);

        debug!("IBIS line {} destination {}", line, destination);
        Ok(ApplyReport {
            target: SignTarget::Ibis,
            route_name: record.name,
            line: Some(line),
            destination: Some(destination),
            bytes_sent,
        })
    }

    fn apply_alfa(
        &mut self,
        category: RouteCategory,
        record: RouteRecord,
    ) -> Result<ApplyReport, ApplyError> {
        let bytes_sent = match &record.payload {
            AlfaPayload::Inline(bytes) => {
                let sent = self.alfa.send_raw(bytes).map_err(channel_error)?;
                if sent < bytes.len() {
                    warn!("Alfa short write: {} of {} bytes", sent, bytes.len());
                    return Err(ApplyError::ShortWrite {
                        sent,
                        expected: bytes.len(),
                    });
                }
                sent
            }
            AlfaPayload::File(file) => self.stream_payload(category, file)?,
            AlfaPayload::None => {
                warn!("Route {} has no Alfa payload", record.id.as_str());
                return Err(ApplyError::MissingPayload);
            }
        };

        info!("Alfa sent {} bytes", bytes_sent);
        Ok(ApplyReport {
            target: SignTarget::Alfa,
            route_name: record.name,
            line: None,
            destination: None,
            bytes_sent,
        })
    }

    /// Copy a payload file to the Alfa UART one chunk at a time
    ///
    /// On a short write, `expected` counts the bytes read from the file so
    /// far, since the file size is not known up front.
    fn stream_payload(&mut self, category: RouteCategory, file: &str) -> Result<usize, ApplyError> {
        let mut buffer = vec![0u8; self.alfa.chunk_len()];
        let mut reader = self.catalog.open_payload(category, file)?;
        debug!("Streaming Alfa payload {}", reader.path());

        let mut total = 0;
        loop {
            let n = reader.read(&mut buffer)?;
            if n == 0 {
                return Ok(total);
            }
            let sent = self.alfa.send_raw(&buffer[..n]).map_err(channel_error)?;
            total += sent;
            if sent < n {
                warn!("Alfa short write after {} bytes", total);
                return Err(ApplyError::ShortWrite {
                    sent: total,
                    expected: reader.offset(),
                });
            }
        }
    }

    /// Take the context apart, e.g. to hand the UARTs to another task
    pub fn into_parts(self) -> (Catalog<S>, I, A, D) {
        (
            self.catalog,
            self.ibis.into_inner(),
            self.alfa.into_inner(),
            self.delay,
        )
    }
}
