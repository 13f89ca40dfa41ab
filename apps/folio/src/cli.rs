//! # CLI
//!
//! `folio serve` runs the HTTP server. `folio check` validates the gate
//! configuration without binding a port.
//!
//! Every setting can come from a flag or its environment variable; the
//! result is a [`GateConfig`] built once and handed to the server.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use folio_core::{CookiePolicy, GateConfig, ProtectedAsset, Secret};
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Folio portfolio server.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to bind.
        #[arg(long, default_value_t = 8080)]
        port: u16,

        #[command(flatten)]
        gate: GateArgs,
    },

    /// Validate the gate configuration and the protected file.
    Check {
        #[command(flatten)]
        gate: GateArgs,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Settings shared by `serve` and `check`.
#[derive(Debug, Clone, Default, Args)]
pub struct GateArgs {
    /// Password unlocking the résumé download. Unset or blank disables it.
    #[arg(long, env = "RESUME_PASSWORD", hide_env_values = true)]
    pub resume_password: Option<String>,

    /// Path of the protected PDF (default: private/resume.pdf).
    #[arg(long, env = "RESUME_FILE_PATH")]
    pub resume_path: Option<PathBuf>,

    /// Production mode: mark the access cookie `Secure`.
    ///
    /// The environment variable accepts `1`/`0`, `yes`/`no`, `on`/`off` and
    /// `true`/`false`.
    #[arg(
        long,
        env = "FOLIO_PRODUCTION",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub production: bool,
}

impl GateArgs {
    /// Resolve into the config injected into the handlers.
    pub fn into_config(self) -> GateConfig {
        let cookie = if self.production {
            CookiePolicy::production()
        } else {
            CookiePolicy::development()
        };
        GateConfig::new(self.resume_password.and_then(Secret::new))
            .with_asset(ProtectedAsset::from_override(self.resume_path))
            .with_cookie(cookie)
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Serve { host, port, gate } => cmd_serve(host, port, gate.into_config()).await,
        Commands::Check { gate, json } => cmd_check(&gate.into_config(), json),
    }
}

/// Run the server until shutdown.
pub async fn cmd_serve(host: IpAddr, port: u16, config: GateConfig) -> Result<(), Box<dyn Error>> {
    crate::api::serve(SocketAddr::new(host, port), config).await?;
    Ok(())
}

/// Result of `folio check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub gate_enabled: bool,
    pub secure_cookie: bool,
    pub asset_path: String,
    pub asset_readable: bool,
    pub asset_bytes: Option<u64>,
}

impl CheckReport {
    /// Whether the download would work for a token holder.
    pub fn is_ready(&self) -> bool {
        self.gate_enabled && self.asset_readable
    }
}

/// Inspect `config` and the protected file.
pub fn check_report(config: &GateConfig) -> CheckReport {
    let path = config.asset.path();
    let asset_bytes = File::open(path)
        .and_then(|f| f.metadata())
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.len());

    CheckReport {
        gate_enabled: config.is_enabled(),
        secure_cookie: config.cookie.secure,
        asset_path: path.display().to_string(),
        asset_readable: asset_bytes.is_some(),
        asset_bytes,
    }
}

/// Print the check report. Fails when the protected file is unreadable.
///
/// A missing password is reported but is not an error: it just means the
/// download is switched off.
pub fn cmd_check(config: &GateConfig, json: bool) -> Result<(), Box<dyn Error>> {
    let report = check_report(config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "gate:          {}",
            if report.gate_enabled { "enabled" } else { "disabled (RESUME_PASSWORD unset)" }
        );
        println!("secure cookie: {}", report.secure_cookie);
        match report.asset_bytes {
            Some(n) => println!("asset:         {} ({} bytes)", report.asset_path, n),
            None => println!("asset:         {} (unreadable)", report.asset_path),
        }
    }

    if !report.gate_enabled {
        tracing::warn!("resume download is disabled");
    }
    if !report.asset_readable {
        return Err(format!("protected file is not readable: {}", report.asset_path).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_password_disables_gate() {
        let args = GateArgs {
            resume_password: Some("  ".to_string()),
            ..GateArgs::default()
        };
        assert!(!args.into_config().is_enabled());
    }

    #[test]
    fn production_sets_secure_cookie() {
        let args = GateArgs {
            production: true,
            ..GateArgs::default()
        };
        assert!(args.into_config().cookie.secure);
        assert!(!GateArgs::default().into_config().cookie.secure);
    }

    #[test]
    fn production_flag_without_value() {
        let Ok(Cli {
            command: Commands::Check { gate, .. },
        }) = Cli::try_parse_from(["folio", "check", "--production"])
        else {
            unreachable!("--production should parse");
        };
        assert!(gate.production);
    }

    #[test]
    fn parses_serve_flags() {
        let cli = Cli::try_parse_from([
            "folio",
            "serve",
            "--port",
            "3000",
            "--resume-password",
            "abc123",
            "--resume-path",
            "/tmp/cv.pdf",
        ]);
        let Ok(Cli {
            command: Commands::Serve { port, gate, .. },
        }) = cli
        else {
            unreachable!("serve flags should parse");
        };
        assert_eq!(port, 3000);
        let config = gate.into_config();
        assert!(config.is_enabled());
        assert_eq!(config.asset.path(), std::path::Path::new("/tmp/cv.pdf"));
    }
}
