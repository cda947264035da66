use thiserror::Error;

/// Failures talking to the payment processor.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The processor rejected the request.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Payment processor error: {0}")]
    Processor(String),

    /// Transport failure reaching the processor. Results in 502 Bad Gateway.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The processor answered with a body we could not interpret.
    #[error("Unexpected payment processor response: {0}")]
    UnexpectedResponse(String),
}
