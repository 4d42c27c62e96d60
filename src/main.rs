//! samlsec CLI
//!
//! Entry point for the `samlsec` command-line tool.

use clap::{Args, Parser, Subcommand};
use samlsec::{
    AlgorithmKind, AlgorithmRegistry, EffectiveChain, Precedence, SecurityConfiguration,
    SignatureSigningParametersResolver, SignatureValidationParametersResolver,
    SigningConfiguration,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "samlsec")]
#[command(about = "Resolve SAML/XML-Security algorithm policy", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective whitelist, blacklist and precedence
    Resolve {
        #[command(flatten)]
        chain: ChainArgs,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Also write the effective chain snapshot to this file
        #[arg(long)]
        write: Option<PathBuf>,
    },

    /// Decide whether signature algorithms would be accepted
    Check {
        #[command(flatten)]
        chain: ChainArgs,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Algorithm URIs to check
        #[arg(required = true)]
        algorithms: Vec<String>,
    },

    /// Resolve signing credential and algorithms
    Signing {
        #[command(flatten)]
        chain: ChainArgs,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List registered algorithms with support and policy status
    Algorithms {
        #[command(flatten)]
        chain: ChainArgs,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Only list this kind (signature, mac, digest, key_transport, block_encryption)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<AlgorithmKind>,
    },
}

/// Options that assemble the configuration chain.
#[derive(Args)]
struct ChainArgs {
    /// Configuration layer (repeatable, first has highest priority)
    #[arg(long, short = 'c')]
    config: Vec<PathBuf>,

    /// Whitelist for the CLI layer (comma-separated)
    #[arg(long, value_delimiter = ',')]
    whitelist: Vec<String>,

    /// Merge lower-priority whitelists into the CLI whitelist
    #[arg(long)]
    whitelist_merge: bool,

    /// Blacklist for the CLI layer (comma-separated)
    #[arg(long, value_delimiter = ',')]
    blacklist: Vec<String>,

    /// Merge lower-priority blacklists into the CLI blacklist
    #[arg(long)]
    blacklist_merge: bool,

    /// Precedence for the CLI layer: whitelist or blacklist
    #[arg(long, value_parser = parse_precedence)]
    precedence: Option<Precedence>,
}

impl ChainArgs {
    /// CLI layer, if any list or precedence was given.
    fn cli_layer(&self) -> Option<SigningConfiguration> {
        if self.whitelist.is_empty() && self.blacklist.is_empty() && self.precedence.is_none() {
            return None;
        }
        let policy = SecurityConfiguration::new()
            .with_whitelist(&self.whitelist)
            .with_whitelist_merge(self.whitelist_merge)
            .with_blacklist(&self.blacklist)
            .with_blacklist_merge(self.blacklist_merge)
            .with_precedence(self.precedence.unwrap_or_default());
        Some(SigningConfiguration::from_policy(policy))
    }

    fn build(&self) -> EffectiveChain {
        match EffectiveChain::build(&self.config, self.cli_layer()) {
            Ok(chain) => chain,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        }
    }
}

fn parse_precedence(s: &str) -> Result<Precedence, String> {
    match s {
        "whitelist" => Ok(Precedence::Whitelist),
        "blacklist" => Ok(Precedence::Blacklist),
        other => Err(format!(
            "invalid precedence '{}': expected 'whitelist' or 'blacklist'",
            other
        )),
    }
}

fn parse_kind(s: &str) -> Result<AlgorithmKind, String> {
    AlgorithmKind::ALL
        .into_iter()
        .find(|kind| kind.name() == s)
        .ok_or_else(|| format!("invalid algorithm kind '{}'", s))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SAMLSEC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { chain, json, write } => run_resolve(&chain, json, write),
        Commands::Check {
            chain,
            json,
            algorithms,
        } => run_check(&chain, json, &algorithms),
        Commands::Signing { chain, json } => run_signing(&chain, json),
        Commands::Algorithms { chain, json, kind } => run_algorithms(&chain, json, kind),
    }
}

fn run_resolve(args: &ChainArgs, json_output: bool, write: Option<PathBuf>) {
    let chain = args.build();
    let policy = chain.policy();

    if let Some(path) = write {
        if let Err(e) = chain.write_to_file(&path) {
            eprintln!("Error writing {}: {}", path.display(), e);
            process::exit(1);
        }
        eprintln!("Wrote: {}", path.display());
    }

    if json_output {
        let output = serde_json::json!({
            "whitelist": policy.whitelist,
            "blacklist": policy.blacklist,
            "precedence": policy.precedence,
            "mode": policy.predicate().mode(),
            "sources": chain.sources,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("Precedence: {}", policy.precedence.name());
    println!("Mode: {}", policy.predicate().mode());
    println!("Whitelist ({}):", policy.whitelist.len());
    for uri in &policy.whitelist {
        println!("  {}", uri);
    }
    println!("Blacklist ({}):", policy.blacklist.len());
    for uri in &policy.blacklist {
        println!("  {}", uri);
    }
    println!("Sources:");
    for source in &chain.sources {
        match (&source.path, &source.digest) {
            (Some(path), Some(digest)) => println!("  {:?} {} ({})", source.origin, path, digest),
            _ => println!("  {:?}", source.origin),
        }
    }
}

fn run_check(args: &ChainArgs, json_output: bool, algorithms: &[String]) {
    let chain = args.build();
    let registry = AlgorithmRegistry::with_defaults();
    let resolver = SignatureValidationParametersResolver::new(&registry);

    let criteria = match chain.criteria() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let params = match resolver.resolve(&criteria) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let decisions: Vec<_> = algorithms
        .iter()
        .map(|uri| resolver.validate_algorithm(&params, uri))
        .collect();

    if json_output {
        match serde_json::to_string_pretty(&decisions) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        for decision in &decisions {
            if decision.allowed {
                println!("ALLOWED  {}", decision.identifier);
            } else {
                println!("DENIED   {}", decision.to_code());
            }
        }
    }

    if decisions.iter().any(|d| !d.allowed) {
        process::exit(1);
    }
}

fn run_signing(args: &ChainArgs, json_output: bool) {
    let chain = args.build();
    let registry = AlgorithmRegistry::with_defaults();
    let resolver = SignatureSigningParametersResolver::new(&registry);

    let criteria = match chain.criteria() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let params = match resolver.resolve(&criteria) {
        Ok(Some(p)) => p,
        Ok(None) => {
            eprintln!("No signing parameters could be resolved");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if json_output {
        match serde_json::to_string_pretty(&params) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!(
        "Credential: {} ({})",
        params.credential.name,
        params.credential.key_family.name()
    );
    println!("Signature algorithm: {}", params.signature_algorithm);
    println!("Reference digest: {}", params.reference_digest_method);
    println!("Canonicalization: {}", params.canonicalization_algorithm);
    if let Some(bits) = params.hmac_output_length {
        println!("HMAC output length: {}", bits);
    }
}

fn run_algorithms(args: &ChainArgs, json_output: bool, kind: Option<AlgorithmKind>) {
    let chain = args.build();
    let registry = AlgorithmRegistry::with_defaults();
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => AlgorithmKind::ALL.to_vec(),
    };
    let statuses = registry.statuses(&kinds, &chain.predicate());

    if json_output {
        match serde_json::to_string_pretty(&statuses) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    for status in &statuses {
        let state = match (status.allowed, status.supported) {
            (true, true) => "usable",
            (false, _) => "denied",
            (true, false) => "unsupported",
        };
        println!("{:<16} {:<12} {}", status.kind.name(), state, status.uri);
    }
}
