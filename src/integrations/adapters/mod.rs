//! HTTP client implementations of the gateway ports.

pub mod agent;
pub mod fda;
pub mod pubmed;

pub use agent::{AgentServiceClient, AgentServiceConfig};
pub use fda::{OpenFdaClient, OpenFdaConfig};
pub use pubmed::{PubMedProxyClient, PubMedProxyConfig};

use crate::integrations::ports::{GatewayError, GatewayResult};

/// Checks a response status, mapping non-2xx to [`GatewayError::Status`].
pub(crate) fn ensure_success(response: &reqwest::Response) -> GatewayResult<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(GatewayError::Status {
        status: status.as_u16(),
        message: status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_owned(),
    })
}
