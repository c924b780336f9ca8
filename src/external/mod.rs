pub mod dataset_provider;
pub mod github_csv;

pub use dataset_provider::{DatasetError, DatasetProvider};
pub use github_csv::GithubCsvProvider;
