use clap::ValueEnum;
use ngstore_domain::EntryOrder;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            #[cfg(feature = "yaml")]
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliEntryOrder {
    DirsFirst,
    Unsorted,
}

impl From<CliEntryOrder> for EntryOrder {
    fn from(value: CliEntryOrder) -> Self {
        match value {
            CliEntryOrder::DirsFirst => EntryOrder::DirectoriesFirst,
            CliEntryOrder::Unsorted => EntryOrder::Unsorted,
        }
    }
}
