use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cfn_template_builder::remote::{TemplateValidator, ValidationSummary};
use cfn_template_builder::{config, writer, Format, Stack, StackContext};

/// Render CloudFormation templates for an environment.
#[derive(Debug, Parser)]
#[command(name = "cfn-template-builder", version, about)]
struct Cli {
    /// Environment name interpolated into names and descriptions
    environment: String,

    /// Stack to render when no config file is given
    #[arg(long, default_value = "cognito")]
    stack: Stack,

    /// Application name used as the resource name prefix
    #[arg(long, default_value = cfn_template_builder::stacks::DEFAULT_APPLICATION)]
    application: String,

    /// Output format when printing to stdout
    #[arg(long, default_value = "json")]
    format: Format,

    /// YAML file listing the stacks to render and where to write them
    #[arg(long)]
    config: Option<PathBuf>,

    /// Check each rendered document with CloudFormation ValidateTemplate
    #[arg(long)]
    validate: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the document, so logs go to stderr
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();

    if log_result.is_err() {
        warn!("Logging was already initialized");
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let context = StackContext::new(cli.environment)
        .with_application(cli.application);

    let config_path = match cli.config {
        Some(path) => path,
        None => {
            let document = cli
                .stack
                .build(&context)
                .and_then(|template| template.render(cli.format))
                .with_context(|| format!("Failed to render stack `{}`", cli.stack))?;

            if cli.validate {
                let validator = TemplateValidator::new(None).await;
                let summary = validator.validate(&document).await?;
                report_capabilities(cli.stack, &summary);
            }

            println!("{}", document);
            return Ok(());
        }
    };

    let config = config::parse(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    for config_entry in config {
        let stack = config_entry
            .stack
            .ok_or_else(|| anyhow!("Config entry without a stack"))?;
        let format = match config_entry.output.format() {
            Some(format) => format,
            None => {
                let location = config_entry.output.location.display();
                return Err(anyhow!("No output format for {}", location));
            }
        };

        let document = stack
            .build(&context)
            .and_then(|template| template.render(format))
            .with_context(|| format!("Failed to render stack `{}`", stack))?;

        if cli.validate {
            let validator = TemplateValidator::new(config_entry.region.as_deref()).await;
            let summary = validator
                .validate(&document)
                .await
                .with_context(|| format!("CloudFormation rejected `{}`", stack))?;
            report_capabilities(stack, &summary);
        }

        writer::write(&config_entry.output.location, &document)?;
        info!(stack = %stack, location = %config_entry.output.location.display(), "Rendered stack");
    }

    return Ok(());
}

fn report_capabilities(stack: Stack, summary: &ValidationSummary) {
    if let Some(notice) = summary.capabilities_notice() {
        warn!(stack = %stack, "{}", notice);
    }
}
