#![forbid(unsafe_code)]

use clap::{Parser, Subcommand, ValueEnum};
use folio_api::SkillPayloadDto;
use folio_cli::{commands, ApiClient};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio admin CLI")]
struct Cli {
    /// Base URL of the running folio-server.
    #[arg(long, global = true, default_value = "http://127.0.0.1:3000")]
    base_url: String,
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Skills {
        #[command(subcommand)]
        command: SkillsCommand,
    },
    /// Upload a logo file and print its public URL.
    Upload {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SkillsCommand {
    /// Admin listing (requires the admin-enabled deployment).
    List,
    /// Public listing with the built-in fallback.
    Show,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, value_enum)]
        category: CategoryCli,
        #[arg(long)]
        logo: Option<String>,
        #[arg(long, value_enum)]
        logo_type: Option<LogoTypeCli>,
        /// Upload this file first and store its URL as the logo.
        #[arg(long, conflicts_with_all = ["logo", "logo_type"])]
        logo_file: Option<PathBuf>,
    },
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, value_enum)]
        category: CategoryCli,
        #[arg(long)]
        logo: Option<String>,
        #[arg(long, value_enum)]
        logo_type: Option<LogoTypeCli>,
        #[arg(long, conflicts_with_all = ["logo", "logo_type"])]
        logo_file: Option<PathBuf>,
    },
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryCli {
    Frontend,
    Backend,
    Tools,
}

impl CategoryCli {
    const fn as_wire(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogoTypeCli {
    Emoji,
    Url,
    Upload,
}

impl LogoTypeCli {
    const fn as_wire(self) -> &'static str {
        match self {
            Self::Emoji => "emoji",
            Self::Url => "url",
            Self::Upload => "upload",
        }
    }
}

fn payload(
    name: String,
    category: CategoryCli,
    logo: Option<String>,
    logo_type: Option<LogoTypeCli>,
) -> SkillPayloadDto {
    SkillPayloadDto {
        name: Some(name),
        category: Some(category.as_wire().to_string()),
        logo,
        logo_type: logo_type.map(|t| t.as_wire().to_string()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = ApiClient::new(cli.base_url.clone());

    let result = match cli.command {
        Commands::Skills { command } => match command {
            SkillsCommand::List => commands::list_admin(&client, cli.json).await,
            SkillsCommand::Show => commands::show_public(&client, cli.json).await,
            SkillsCommand::Create {
                name,
                category,
                logo,
                logo_type,
                logo_file,
            } => {
                commands::create_skill(
                    &client,
                    payload(name, category, logo, logo_type),
                    logo_file.as_deref(),
                    cli.json,
                )
                .await
            }
            SkillsCommand::Update {
                id,
                name,
                category,
                logo,
                logo_type,
                logo_file,
            } => {
                commands::update_skill(
                    &client,
                    id,
                    payload(name, category, logo, logo_type),
                    logo_file.as_deref(),
                    cli.json,
                )
                .await
            }
            SkillsCommand::Delete { id } => commands::delete_skill(&client, id, cli.json).await,
        },
        Commands::Upload { file } => commands::upload_file(&client, &file, cli.json).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
