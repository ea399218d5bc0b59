//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};

/// Builder for constructing a Client with proper validation.
///
/// Runtime and frontend are both required; `build` fails fast when either is
/// missing.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<runtime::Runtime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime (required).
    ///
    /// It should be constructed via `RuntimeBuilder` from the `client-bootstrap` crate.
    pub fn runtime(mut self, runtime: runtime::Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("Runtime is required. Use .runtime() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { runtime, frontend })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_frontend_is_rejected() {
        let runtime = runtime::Runtime::builder().build().unwrap();
        let error = ClientBuilder::new().runtime(runtime).build().err().unwrap();
        assert!(error.to_string().contains("Frontend is required"));
    }

    #[test]
    fn missing_runtime_is_rejected() {
        let error = ClientBuilder::new().build().err().unwrap();
        assert!(error.to_string().contains("Runtime is required"));
    }
}
