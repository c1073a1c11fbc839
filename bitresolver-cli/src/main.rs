//! Command-line driver for resolving a single `.bit` name.
//!
//! A thin wrapper around [`bitresolver_core::BitResolver`] with no logic of its own beyond
//! argument parsing and result formatting.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bitresolver_core::{BitResolver, ResolverConfig};

/// Resolve a `.bit` name against a Namecoin-anchored DNSSEC chain.
#[derive(Debug, Parser)]
#[command(name = "bitresolver", version, about)]
struct Args {
    /// Name to resolve, e.g. `www.example.bit`.
    name: String,

    /// DNS query type.
    #[arg(default_value = "A")]
    qtype: String,

    /// Path to the system stub resolver config.
    #[arg(long, default_value = "/etc/resolv.conf")]
    resolv_conf: PathBuf,

    /// Path to the public DNSSEC trust anchor file.
    #[arg(long, default_value = "/usr/local/etc/unbound/root.key")]
    dnssec_root_key: PathBuf,

    /// Namecoin node RPC host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Namecoin node RPC port.
    #[arg(long, default_value_t = 8336)]
    port: u16,

    /// Namecoin node RPC username.
    #[arg(long, default_value = "")]
    user: String,

    /// Namecoin node RPC password.
    #[arg(long, default_value = "")]
    password: String,

    /// Scratch directory for forward-zone config files; defaults to the OS temp dir.
    #[arg(long)]
    temp_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = ResolverConfig {
        resolv_conf: args.resolv_conf,
        dnssec_root_key: args.dnssec_root_key,
        host: args.host,
        port: args.port,
        user: args.user,
        password: args.password,
        temp_dir: args.temp_dir,
    };

    let resolver = BitResolver::new(config);

    match resolver.resolve(&args.name, &args.qtype).await {
        Ok(value) => {
            println!("{value:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("resolve failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
