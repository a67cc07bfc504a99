//! CLI route: route table and run context. Dispatches to the robot token service and presentation.

use crate::config::UpConfig;
use crate::directory::{AccountService, HttpDirectoryClient, OrganizationService, RobotService};
use crate::error::ApiError;
use crate::robot::{RobotTokenService, TokenListRequest, TokenSink};
use std::io::Write;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::cli::parse::{Commands, RobotCommands, TokenCommands};
use crate::cli::presentation::{JsonSink, TextTableSink};

/// Runtime context for CLI execution: resolved configuration and the token service.
pub struct RunContext {
    config: UpConfig,
    service: RobotTokenService,
    cancel: CancellationToken,
}

impl RunContext {
    /// Create a run context talking to the configured API endpoint.
    pub fn new(config: UpConfig) -> Result<Self, ApiError> {
        let client = HttpDirectoryClient::new(
            &config.endpoint,
            config.token.clone(),
            config.request_timeout(),
        )
        .map_err(|e| ApiError::ConfigError(e.to_string()))?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a run context over any directory client.
    pub fn with_client<C>(config: UpConfig, client: Arc<C>) -> Self
    where
        C: AccountService + OrganizationService + RobotService + 'static,
    {
        let cancel = CancellationToken::new();
        let service = RobotTokenService::from_client(client)
            .with_request_timeout(config.request_timeout())
            .with_cancellation(cancel.clone());
        Self {
            config,
            service,
            cancel,
        }
    }

    pub fn config(&self) -> &UpConfig {
        &self.config
    }

    /// Execute a CLI command on a single-threaded runtime. Ctrl-C cancels the pending call.
    pub fn execute(&self, command: &Commands, out: &mut dyn Write) -> Result<(), ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create runtime: {}", e)))?;

        runtime.block_on(async {
            let cancel = self.cancel.clone();
            let interrupt = tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("interrupted, cancelling pending request");
                    cancel.cancel();
                }
            });
            let result = self.run(command, out).await;
            interrupt.abort();
            result
        })
    }

    /// Execute a CLI command on the caller's runtime.
    pub async fn run(&self, command: &Commands, out: &mut dyn Write) -> Result<(), ApiError> {
        match command {
            Commands::Robot { command } => self.handle_robot_command(command, out).await,
        }
    }

    async fn handle_robot_command(
        &self,
        command: &RobotCommands,
        out: &mut dyn Write,
    ) -> Result<(), ApiError> {
        match command {
            RobotCommands::Token { command } => match command {
                TokenCommands::List { robot_name, format } => {
                    self.handle_token_list(robot_name, format, out).await
                }
            },
        }
    }

    async fn handle_token_list(
        &self,
        robot_name: &str,
        format: &str,
        out: &mut dyn Write,
    ) -> Result<(), ApiError> {
        let request = TokenListRequest {
            account: self.config.require_account()?.to_string(),
            robot_name: robot_name.to_string(),
        };
        let mut sink: Box<dyn TokenSink + '_> = if format == "json" {
            Box::new(JsonSink::new(out))
        } else {
            Box::new(TextTableSink::new(out))
        };
        self.service.run(&request, sink.as_mut()).await?;
        Ok(())
    }
}
