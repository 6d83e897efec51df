//! @ai:module:intent Prediction files and their class labels
//! @ai:module:layer domain
//! @ai:module:public_api Label, LabelKind, LabelColumn, PredictionFile

pub mod label;
pub mod loader;

pub use label::{Label, LabelColumn, LabelKind};
pub use loader::{PredictionFile, PREDICTED_COLUMN, TRUE_COLUMN};
