mod config;
mod display;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use triagem_core::{
    Jurisdiction, Protocol, ProtocolDraft, ProtocolStatus, RoutingForm, change_status, classify,
    determine_queue_assignment, format_process_number, is_valid_cnj_format, parse_process_number,
    prepare_protocol,
};
use triagem_sync::ProtocolClient;

#[derive(Parser)]
#[command(name = "triagem", version, about = "CNJ classification and queue routing for protocols")]
struct Cli {
    /// TOML config file with [router] and [sync] tables.
    #[arg(long, global = true, env = "TRIAGEM_CONFIG")]
    config: Option<PathBuf>,

    /// Handler that receives protocols the robot cannot take.
    #[arg(long, global = true, env = "TRIAGEM_FALLBACK_HANDLER")]
    fallback_handler: Option<String>,

    /// Base URL of the protocol service.
    #[arg(long, global = true, env = "TRIAGEM_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that a process number has the CNJ format.
    Validate { number: String },

    /// Infer court, system and case type from a process number.
    Classify {
        number: String,
        /// Print the classification as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },

    /// Apply the CNJ mask to 20 digits.
    Format { digits: String },

    /// Decide the queue for a set of form values.
    Route {
        #[arg(long)]
        system: String,
        #[arg(long)]
        court: String,
        /// "1", "2", "1º Grau" or "2º Grau".
        #[arg(long, value_parser = parse_jurisdiction)]
        jurisdiction: Option<Jurisdiction>,
        #[arg(long, default_value = "")]
        observations: String,
        #[arg(long)]
        distribution: bool,
        #[arg(long)]
        json: bool,
    },

    /// Classify and route a draft protocol read from a JSON file.
    Intake {
        draft: PathBuf,
        /// Send the prepared protocol to the protocol service.
        #[arg(long)]
        submit: bool,
    },

    /// Move a stored protocol (JSON file) to a new status.
    Transition {
        protocol: PathBuf,
        /// Target status, e.g. "Em Execução" or "Devolvido".
        #[arg(value_parser = parse_status)]
        status: ProtocolStatus,
        /// Send the updated protocol to the protocol service.
        #[arg(long)]
        submit: bool,
    },

    /// List the system groups behind the queue filter and robot eligibility.
    Groups,

    /// List the court table.
    Courts {
        /// Only this justice branch (J digit).
        #[arg(long)]
        branch: Option<String>,
    },
}

fn parse_jurisdiction(s: &str) -> Result<Jurisdiction, String> {
    match s.trim() {
        "1" => Ok(Jurisdiction::PrimeiroGrau),
        "2" => Ok(Jurisdiction::SegundoGrau),
        other => other.parse::<Jurisdiction>().map_err(|e| e.to_string()),
    }
}

fn parse_status(s: &str) -> Result<ProtocolStatus, String> {
    s.parse::<ProtocolStatus>().map_err(|e| e.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!("triagem v{}", env!("CARGO_PKG_VERSION"));

    let settings = config::resolve(cli.config.as_deref(), cli.fallback_handler, cli.api_url)?;

    match cli.command {
        Command::Validate { number } => {
            if is_valid_cnj_format(&number) {
                println!("valid");
                return Ok(ExitCode::SUCCESS);
            }
            println!("invalid");
            return Ok(ExitCode::FAILURE);
        }

        Command::Classify { number, json } => {
            let result = classify(&number);
            if json {
                println!("{}", serde_json::to_string_pretty(&result.as_ref().ok())?);
            } else {
                let parsed = parse_process_number(&number).ok();
                print!("{}", display::classification_card(&number, parsed.as_ref(), &result));
            }
        }

        Command::Format { digits } => match format_process_number(&digits) {
            Some(formatted) => println!("{formatted}"),
            None => anyhow::bail!("expected exactly 20 digits, got {:?}", digits),
        },

        Command::Route {
            system,
            court,
            jurisdiction,
            observations,
            distribution,
            json,
        } => {
            let form = RoutingForm {
                system: &system,
                court: &court,
                jurisdiction,
                observations: &observations,
                is_distribution: distribution,
            };
            let decision = determine_queue_assignment(&form, distribution, &settings.router);
            if json {
                println!("{}", serde_json::to_string_pretty(&decision)?);
            } else {
                print!("{}", display::decision_card(&form, &decision));
            }
        }

        Command::Intake { draft, submit } => {
            let content = std::fs::read_to_string(&draft)
                .with_context(|| format!("reading draft {}", draft.display()))?;
            let draft: ProtocolDraft =
                serde_json::from_str(&content).context("parsing draft protocol JSON")?;
            let prepared = prepare_protocol(draft, &settings.router);

            if submit {
                let base_url = settings
                    .api_url
                    .context("--submit needs --api-url, TRIAGEM_API_URL or [sync] base_url")?;
                let client = ProtocolClient::new(base_url);
                let created = client
                    .create_protocol(&prepared.protocol)
                    .await
                    .context("submitting protocol")?;
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&prepared)?);
            }
        }

        Command::Transition {
            protocol: path,
            status,
            submit,
        } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading protocol {}", path.display()))?;
            let mut protocol: Protocol =
                serde_json::from_str(&content).context("parsing protocol JSON")?;
            if let Some(decision) = change_status(&mut protocol, status, &settings.router)? {
                eprintln!("re-routed to {}", decision.target());
            }

            if submit {
                let base_url = settings
                    .api_url
                    .context("--submit needs --api-url, TRIAGEM_API_URL or [sync] base_url")?;
                let client = ProtocolClient::new(base_url);
                let updated = client
                    .update_protocol(&protocol)
                    .await
                    .context("updating protocol")?;
                println!("{}", serde_json::to_string_pretty(&updated)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&protocol)?);
            }
        }

        Command::Groups => print!("{}", display::groups_listing()),

        Command::Courts { branch } => print!("{}", display::courts_listing(branch.as_deref())),
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn jurisdiction_shorthands() {
        assert_eq!(parse_jurisdiction("1"), Ok(Jurisdiction::PrimeiroGrau));
        assert_eq!(parse_jurisdiction("2º Grau"), Ok(Jurisdiction::SegundoGrau));
        assert!(parse_jurisdiction("3").is_err());
    }

    #[test]
    fn route_arguments_parse() {
        let cli = Cli::try_parse_from([
            "triagem",
            "route",
            "--system",
            "PJe",
            "--court",
            "Tribunal de Justiça de Minas Gerais",
            "--jurisdiction",
            "1",
        ])
        .unwrap();
        match cli.command {
            Command::Route {
                system,
                jurisdiction,
                distribution,
                ..
            } => {
                assert_eq!(system, "PJe");
                assert_eq!(jurisdiction, Some(Jurisdiction::PrimeiroGrau));
                assert!(!distribution);
            }
            _ => panic!("expected route"),
        }
    }

    #[test]
    fn transition_arguments_parse() {
        let cli = Cli::try_parse_from([
            "triagem",
            "transition",
            "protocol.json",
            "Em Execução",
            "--submit",
        ])
        .unwrap();
        match cli.command {
            Command::Transition {
                protocol,
                status,
                submit,
            } => {
                assert_eq!(protocol, PathBuf::from("protocol.json"));
                assert_eq!(status, ProtocolStatus::EmExecucao);
                assert!(submit);
            }
            _ => panic!("expected transition"),
        }
    }

    #[test]
    fn transition_rejects_unknown_status() {
        let result = Cli::try_parse_from(["triagem", "transition", "p.json", "Arquivado"]);
        assert!(result.is_err());
    }
}
