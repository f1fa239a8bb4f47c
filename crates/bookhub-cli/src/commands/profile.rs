//! Profile command handler

use anyhow::Result;

use bookhub_core::{Catalog, Config, ProfileSummary};

use crate::output::Output;

/// Show the reader profile with catalog counts
pub fn show(catalog: &Catalog, config: &Config, output: &Output) -> Result<()> {
    let summary = ProfileSummary::new(&config.profile, catalog.stats());
    let today = chrono::Local::now().date_naive();
    output.print_profile(&summary, summary.years_reading(today))
}
