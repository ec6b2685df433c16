use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Analytics calculation error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("Progress bar template error: {0}")]
    ProgressBarTemplate(String),

    #[error("The price sequence yielded no prices for the requested run.")]
    PricesUnavailable,
}

impl From<indicatif::style::TemplateError> for SimulatorError {
    fn from(error: indicatif::style::TemplateError) -> Self {
        SimulatorError::ProgressBarTemplate(error.to_string())
    }
}
