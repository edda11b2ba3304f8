use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server answered with status {0}")]
    Status(u16),
}
