use thiserror::Error;

pub mod args;
pub mod dataset;
pub mod env;
pub mod model;
pub mod report;
pub mod utils;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Dataset(#[from] dataset::DatasetError),

    #[error(transparent)]
    Report(#[from] report::ReportError)
}
