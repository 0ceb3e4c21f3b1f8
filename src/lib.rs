pub mod app;
pub mod config;
pub mod display;
pub mod encoding;
pub mod error;
pub mod form;
pub mod predictor;
pub mod reference;
pub mod ui;

// Re-export commonly used items
pub use app::{submit, AppState};
pub use config::{load_config, AppConfig};
pub use display::{format_currency, Panel, Prediction};
pub use encoding::{encode, FeatureRecord};
pub use error::{EncodeError, FormError, PredictError, SubmitError};
pub use form::{parse_submission, CarInput, Slider};
pub use predictor::{load_predictor, predict_price, LinearModel, Predictor};
pub use reference::{extract_brand, load_reference_data, ReferenceData};
