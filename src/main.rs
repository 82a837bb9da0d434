use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use carepage::placeholder::Encoding;
use carepage::serve::{self, PreviewServer};
use carepage::{BasePath, Document, Placeholder, SiteBuilder, SiteConfig};

#[derive(Parser)]
#[command(name = "carepage", version, about = "Build and check the S-Rock Care site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into an output directory
    Build {
        #[command(flatten)]
        site: SiteArgs,
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        /// Copyright year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Run the smoke test against an existing HTML file
    Check {
        file: PathBuf,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Print a placeholder image data URI
    Placeholder {
        label: String,
        #[arg(long, default_value_t = 640)]
        width: u32,
        #[arg(long, default_value_t = 480)]
        height: u32,
        #[arg(long)]
        background: Option<String>,
        #[arg(long)]
        foreground: Option<String>,
        #[arg(long)]
        base64: bool,
    },
    /// Serve a built site for local preview
    Serve {
        #[arg(long, default_value = "dist")]
        dir: PathBuf,
        #[arg(long)]
        base: Option<String>,
        #[arg(long, default_value = "127.0.0.1:4173")]
        addr: String,
    },
}

#[derive(Args)]
struct SiteArgs {
    /// JSON site config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Base path the site is deployed under, e.g. /care-agency-webpage/
    #[arg(long)]
    base: Option<String>,
    /// Origin the site is served from
    #[arg(long)]
    origin: Option<String>,
}

impl SiteArgs {
    fn load(&self) -> anyhow::Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SiteConfig::default(),
        };
        if let Some(base) = &self.base {
            config.base_path = BasePath::new(base);
        }
        if let Some(origin) = &self.origin {
            config.origin = origin.clone();
        }
        Ok(config)
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Build { site, out, year } => {
            let mut config = site.load()?;
            if year.is_some() {
                config.year = year;
            }
            let manifest = SiteBuilder::new(config, &out)
                .build()
                .with_context(|| format!("building into {}", out.display()))?;
            for (path, entry) in &manifest.files {
                println!("{}  {}", entry.sha256, path);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { file, site } => {
            let config = site.load()?;
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let report = carepage::verify(&config, &Document::from_html(html));
            for outcome in &report.outcomes {
                let mark = if outcome.passed { "ok  " } else { "FAIL" };
                println!("{} {}: {}", mark, outcome.check, outcome.detail);
            }
            Ok(if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Placeholder {
            label,
            width,
            height,
            background,
            foreground,
            base64,
        } => {
            let mut placeholder = Placeholder::new(label, width, height);
            if let Some(bg) = background {
                placeholder = placeholder.background(bg);
            }
            if let Some(fg) = foreground {
                placeholder = placeholder.foreground(fg);
            }
            if base64 {
                placeholder = placeholder.encoding(Encoding::Base64);
            }
            println!("{}", placeholder.to_data_uri());
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { dir, base, addr } => {
            let base_path = match base {
                Some(base) => BasePath::new(&base),
                None => serve::manifest_base_path(&dir),
            };
            let server = PreviewServer::bind(&addr, dir, base_path)?;
            server.run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("carepage failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
