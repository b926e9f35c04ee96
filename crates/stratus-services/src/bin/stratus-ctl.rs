// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Stratus Control CLI
//!
//! Read-only access to the stratus service APIs. Every command prints the
//! response body as pretty JSON.
//!
//! Usage:
//!   stratus-ctl [--region <id> | --endpoint <url>] [--token <t>] <command>
//!
//! Commands:
//!   get-publication <publication_id>
//!   list-publications --compartment <id> [--listing-type OCI] [--limit <n>]
//!   list-recommendations --compartment <id> [--subtree] [--limit <n>]
//!   get-rover-node <rover_node_id>
//!   get-work-request <work_request_id> --service <name>

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use stratus_sdk::{ApiClient, BearerTokenSigner, ClientConfig, Model, ServiceDescriptor};
use stratus_services::marketplace_publisher::models::ListingType;
use stratus_services::marketplace_publisher::{
    self, ListPublicationsOptions, MarketplacePublisherClient,
};
use stratus_services::optimizer::{self, ListRecommendationsOptions, OptimizerClient};
use stratus_services::rover::{self, RoverNodeClient};
use stratus_services::stack_monitoring::{self, StackMonitoringClient};
use stratus_services::{PageOptions, RequestOptions};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stratus-ctl")]
#[command(about = "Query stratus cloud services", long_about = None)]
struct Cli {
    /// Region identifier, e.g. us-ashburn-1
    #[arg(long, global = true, env = "STRATUS_REGION")]
    region: Option<String>,

    /// Explicit service endpoint; overrides --region
    #[arg(long, global = true, env = "STRATUS_ENDPOINT")]
    endpoint: Option<String>,

    /// Bearer token used to sign requests
    #[arg(long, global = true, env = "STRATUS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a marketplace publication
    GetPublication { publication_id: String },
    /// List marketplace publications in a compartment
    ListPublications {
        #[arg(long)]
        compartment: String,
        #[arg(long, default_value = "OCI")]
        listing_type: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List optimizer recommendations
    ListRecommendations {
        #[arg(long)]
        compartment: String,
        /// Include every compartment below --compartment
        #[arg(long)]
        subtree: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a rover node
    GetRoverNode { rover_node_id: String },
    /// Get a work request
    GetWorkRequest {
        work_request_id: String,
        #[arg(long, value_enum)]
        service: WorkRequestService,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum WorkRequestService {
    MarketplacePublisher,
    Optimizer,
    StackMonitoring,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "stratus=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = build_config(&cli)?;
    let token = cli.token.clone();
    let connect = |service: ServiceDescriptor| -> Result<ApiClient, String> {
        let client = ApiClient::new(config.clone(), service).map_err(|e| e.to_string())?;
        debug!(service = service.name, base_url = client.base_url(), "Client ready");
        match &token {
            Some(token) => {
                let signer = BearerTokenSigner::new(token.clone()).map_err(|e| e.to_string())?;
                Ok(client.with_signer(Arc::new(signer)))
            }
            None => {
                warn!("No --token given, sending unsigned requests");
                Ok(client)
            }
        }
    };
    let options = RequestOptions::default();

    let output = match cli.command {
        Commands::GetPublication { publication_id } => {
            let client = MarketplacePublisherClient::new(connect(marketplace_publisher::SERVICE)?);
            client
                .get_publication(&publication_id, &options)
                .map_err(|e| e.to_string())?
                .data
                .to_json()
        }
        Commands::ListPublications {
            compartment,
            listing_type,
            limit,
        } => {
            let listing_type: ListingType = listing_type.parse().map_err(|e| format!("{}", e))?;
            let client = MarketplacePublisherClient::new(connect(marketplace_publisher::SERVICE)?);
            let options = ListPublicationsOptions::new().with_page(page(limit));
            client
                .list_publications(&compartment, &listing_type, &options)
                .map_err(|e| e.to_string())?
                .data
                .to_json()
        }
        Commands::ListRecommendations {
            compartment,
            subtree,
            limit,
        } => {
            let client = OptimizerClient::new(connect(optimizer::SERVICE)?);
            let options = ListRecommendationsOptions::new().with_page(page(limit));
            client
                .list_recommendations(&compartment, subtree, &options)
                .map_err(|e| e.to_string())?
                .data
                .to_json()
        }
        Commands::GetRoverNode { rover_node_id } => {
            let client = RoverNodeClient::new(connect(rover::SERVICE)?);
            client
                .get_rover_node(&rover_node_id, &options)
                .map_err(|e| e.to_string())?
                .data
                .to_json()
        }
        Commands::GetWorkRequest {
            work_request_id,
            service,
        } => get_work_request(&work_request_id, service, &options, connect)?,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?
    );
    Ok(())
}

fn get_work_request(
    work_request_id: &str,
    service: WorkRequestService,
    options: &RequestOptions,
    connect: impl Fn(ServiceDescriptor) -> Result<ApiClient, String>,
) -> Result<Value, String> {
    let json = match service {
        WorkRequestService::MarketplacePublisher => {
            MarketplacePublisherClient::new(connect(marketplace_publisher::SERVICE)?)
                .get_work_request(work_request_id, options)
                .map_err(|e| e.to_string())?
                .data
                .to_json()
        }
        WorkRequestService::Optimizer => OptimizerClient::new(connect(optimizer::SERVICE)?)
            .get_work_request(work_request_id, options)
            .map_err(|e| e.to_string())?
            .data
            .to_json(),
        WorkRequestService::StackMonitoring => {
            StackMonitoringClient::new(connect(stack_monitoring::SERVICE)?)
                .get_work_request(work_request_id, options)
                .map_err(|e| e.to_string())?
                .data
                .to_json()
        }
    };
    Ok(json)
}

fn build_config(cli: &Cli) -> Result<ClientConfig, String> {
    let mut config =
        ClientConfig::from_env().map_err(|e| format!("Configuration error: {}", e))?;
    if let Some(region) = &cli.region {
        config = config.with_region(region.clone());
    }
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint.clone());
    }
    Ok(config)
}

fn page(limit: Option<u32>) -> PageOptions {
    match limit {
        Some(limit) => PageOptions::new().with_limit(limit),
        None => PageOptions::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_work_request() {
        let cli = Cli::try_parse_from([
            "stratus-ctl",
            "get-work-request",
            "wr1",
            "--service",
            "stack-monitoring",
            "--endpoint",
            "http://localhost:9000",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000"));
        match cli.command {
            Commands::GetWorkRequest {
                work_request_id,
                service,
            } => {
                assert_eq!(work_request_id, "wr1");
                assert!(matches!(service, WorkRequestService::StackMonitoring));
            }
            _ => panic!("expected get-work-request"),
        }
    }

    #[test]
    fn test_page_limit() {
        assert_eq!(page(Some(5)).limit, Some(5));
        assert_eq!(page(None).limit, None);
    }
}
