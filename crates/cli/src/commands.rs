//! Command execution and output rendering.

use std::io::Write;
use std::sync::Arc;

use thiserror::Error;

use skustatus_core::SkuInput;
use skustatus_status::{ProductStatusAdapter, ProductStatusError, ProductStatusManagement};

use crate::args::Command;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Status(#[from] ProductStatusError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Runs parsed commands against a status adapter.
///
/// enable/disable/status call the adapter directly (no-op transitions are
/// reported as errors); get/set go through the management facade.
pub struct CommandRunner<A> {
    adapter: Arc<A>,
    management: ProductStatusManagement<Arc<A>>,
}

impl<A> CommandRunner<A>
where
    A: ProductStatusAdapter,
{
    pub fn new(adapter: A) -> Self {
        let adapter = Arc::new(adapter);
        Self {
            management: ProductStatusManagement::new(adapter.clone()),
            adapter,
        }
    }

    pub fn run(&self, command: &Command, out: &mut impl Write) -> Result<(), CommandError> {
        match command {
            Command::Enable { sku } => {
                self.adapter.enable_product_by_sku(&SkuInput::from(sku.as_str()))?;
                writeln!(out, "\"{sku}\" was successfully enabled")?;
            }
            Command::Disable { sku } => {
                self.adapter.disable_product_by_sku(&SkuInput::from(sku.as_str()))?;
                writeln!(out, "\"{sku}\" was successfully disabled")?;
            }
            Command::Status { sku } => {
                let matches = self
                    .adapter
                    .get_product_status_matching_sku(&SkuInput::from(sku.as_str()))?;
                if matches.is_empty() {
                    writeln!(out, "No SKUs Matching \"{sku}\" found")?;
                }
                for (matched, status) in matches.iter() {
                    writeln!(out, "{matched}: {status}")?;
                }
            }
            Command::Get { sku } => {
                let status = self.management.get(&SkuInput::from(sku.as_str()))?;
                writeln!(out, "{status}")?;
            }
            Command::Set { sku, status } => {
                let status = self.management.set(&SkuInput::from(sku.as_str()), status)?;
                writeln!(out, "{status}")?;
            }
        }
        Ok(())
    }
}
