mod render;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use vincentius::state::certificate::{CertificateDetailView, DeleteOutcome};
use vincentius::state::create_family::CreateFamilyView;
use vincentius::state::families::FamiliesView;
use vincentius::state::family::FamilyDetailView;
use vincentius::state::forms::{CertificateForm, FamilyForm, MemberForm};
use vincentius::state::member::MemberDetailView;
use vincentius::state::{Confirm, Phase};
use vincentius::util::routes::RouteId;
use vincentius::{ApiClient, ApiConfig, ApiError, ConfigError, FamilyApi, HttpTransport};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Failed(String),
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "vincentius", about = "Sint-Vincentius family administration CLI")]
struct Cli {
    /// Family API base URL (overrides VINCENTIUS_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Accept self-signed TLS certificates.
    #[arg(long, global = true, default_value_t = false)]
    insecure: bool,

    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the home menu.
    Menu,
    Families(FamiliesCommand),
    Members(MembersCommand),
    Certificates(CertificatesCommand),
}

#[derive(Args, Debug)]
struct FamiliesCommand {
    #[command(subcommand)]
    command: FamiliesSubcommand,
}

#[derive(Subcommand, Debug)]
enum FamiliesSubcommand {
    List,
    Show {
        family_id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
    },
    Update {
        family_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    Delete {
        family_id: String,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct MembersCommand {
    #[command(subcommand)]
    command: MembersSubcommand,
}

#[derive(Subcommand, Debug)]
enum MembersSubcommand {
    Add {
        family_id: String,
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date_of_birth: String,
    },
    Show {
        family_id: String,
        member_id: String,
    },
}

#[derive(Args, Debug)]
struct CertificatesCommand {
    #[command(subcommand)]
    command: CertificatesSubcommand,
}

#[derive(Subcommand, Debug)]
enum CertificatesSubcommand {
    Add {
        family_id: String,
        #[arg(long)]
        title: String,
        /// YYYY-MM-DD
        #[arg(long)]
        issue_date: String,
        /// YYYY-MM-DD
        #[arg(long)]
        expiry_date: String,
    },
    Show {
        family_id: String,
        certificate_id: String,
    },
    Delete {
        family_id: String,
        certificate_id: String,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

/// Terminal confirmation: `--yes` or a `j/N` answer on stdin.
struct Prompt {
    assume_yes: bool,
}

impl Confirm for Prompt {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{prompt} [j/N] ");
        if let Err(e) = io::stderr().flush() {
            tracing::debug!(error = %e, "stderr flush failed");
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "j" | "ja" | "y" | "yes")
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("warning: ignoring .env: {e}");
        }
    }
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut config = ApiConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url)?;
    }
    config.accept_invalid_certs |= cli.insecure;
    tracing::debug!(base_url = %config.base_url, "using family API");
    let api: ApiClient<HttpTransport> = ApiClient::from_config(&config)?;

    match cli.command {
        Command::Menu => {
            print!("{}", render::menu());
            Ok(())
        }
        Command::Families(cmd) => run_families(&api, cmd.command).await,
        Command::Members(cmd) => run_members(&api, cmd.command).await,
        Command::Certificates(cmd) => run_certificates(&api, cmd.command).await,
    }
}

fn init_tracing(verbose: bool) -> Result<(), CliError> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("VINCENTIUS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

/// The loaded value, or the message the browser would show instead.
fn settled<'a, T>(phase: &'a Phase<T>, not_found: &str) -> Result<&'a T, CliError> {
    match phase {
        Phase::Success(data) => Ok(data),
        Phase::NotFound => Err(CliError::Failed(not_found.to_owned())),
        Phase::Error(message) => Err(CliError::Failed(message.clone())),
        Phase::Idle | Phase::Loading => Err(CliError::Failed("Geen antwoord ontvangen.".to_owned())),
    }
}

fn mutation_failed(message: Option<String>) -> CliError {
    CliError::Failed(message.unwrap_or_else(|| "Bewerking mislukt.".to_owned()))
}

async fn load_family<A: FamilyApi>(api: &A, family_id: &str) -> Result<FamilyDetailView, CliError> {
    let mut view = FamilyDetailView::new(Some(family_id));
    view.load(api).await;
    settled(view.phase(), "Familie niet gevonden.")?;
    Ok(view)
}

async fn run_families<A: FamilyApi>(api: &A, command: FamiliesSubcommand) -> Result<(), CliError> {
    match command {
        FamiliesSubcommand::List => {
            let mut view = FamiliesView::new();
            view.load(api).await;
            settled(view.phase(), "Failed to fetch families: 404 Not Found")?;
            print!("{}", render::families(&view.rows()));
            Ok(())
        }
        FamiliesSubcommand::Show { family_id } => {
            let view = load_family(api, &family_id).await?;
            print!("{}", render::family(settled(view.phase(), "Familie niet gevonden.")?));
            Ok(())
        }
        FamiliesSubcommand::Create { name, address } => {
            let mut view = CreateFamilyView::new();
            view.form = FamilyForm { name, address };
            match view.submit(api).await {
                Some(route) => {
                    println!("Familie aangemaakt. Zie {route}");
                    Ok(())
                }
                None => Err(mutation_failed(view.mutation().error_message())),
            }
        }
        FamiliesSubcommand::Update { family_id, name, address } => {
            let mut view = load_family(api, &family_id).await?;
            view.open_edit();
            if let Some(name) = name {
                view.edit_modal.form.name = name;
            }
            if let Some(address) = address {
                view.edit_modal.form.address = address;
            }
            if !view.update(api).await {
                return Err(mutation_failed(view.edit_modal.mutation().error_message()));
            }
            print!("{}", render::family(settled(view.phase(), "Familie niet gevonden.")?));
            Ok(())
        }
        FamiliesSubcommand::Delete { family_id, yes } => {
            let id = RouteId::parse(Some(&family_id));
            if let Some(problem) = id.problem("familie") {
                return Err(CliError::Failed(problem));
            }
            let Some(id) = id.value() else {
                return Ok(());
            };
            let prompt = Prompt { assume_yes: yes };
            if !prompt.confirm("Weet je zeker dat je deze familie wilt verwijderen?") {
                println!("Geannuleerd.");
                return Ok(());
            }
            api.delete_family(id)
                .await
                .map_err(|e| CliError::Failed(format!("Failed to delete family: {e}")))?;
            tracing::info!(family_id = id, "family deleted");
            println!("Familie verwijderd.");
            Ok(())
        }
    }
}

async fn run_members<A: FamilyApi>(api: &A, command: MembersSubcommand) -> Result<(), CliError> {
    match command {
        MembersSubcommand::Add { family_id, name, date_of_birth } => {
            let mut view = load_family(api, &family_id).await?;
            view.member_modal.open_with(MemberForm { name, date_of_birth });
            if !view.add_member(api).await {
                return Err(mutation_failed(view.member_modal.mutation().error_message()));
            }
            print!("{}", render::family(settled(view.phase(), "Familie niet gevonden.")?));
            Ok(())
        }
        MembersSubcommand::Show { family_id, member_id } => {
            let mut view = MemberDetailView::new(Some(&family_id), Some(&member_id));
            view.load(api).await;
            print!("{}", render::member(settled(view.phase(), "Lid niet gevonden.")?));
            println!("Terug naar Familie: {}", view.back_route());
            Ok(())
        }
    }
}

async fn run_certificates<A: FamilyApi>(api: &A, command: CertificatesSubcommand) -> Result<(), CliError> {
    match command {
        CertificatesSubcommand::Add { family_id, title, issue_date, expiry_date } => {
            let mut view = load_family(api, &family_id).await?;
            view.certificate_modal.open_with(CertificateForm { title, issue_date, expiry_date });
            if !view.add_certificate(api).await {
                return Err(mutation_failed(view.certificate_modal.mutation().error_message()));
            }
            print!("{}", render::family(settled(view.phase(), "Familie niet gevonden.")?));
            Ok(())
        }
        CertificatesSubcommand::Show { family_id, certificate_id } => {
            let mut view = CertificateDetailView::new(Some(&family_id), Some(&certificate_id));
            view.load(api).await;
            print!("{}", render::certificate(settled(view.phase(), "Attest niet gevonden.")?));
            Ok(())
        }
        CertificatesSubcommand::Delete { family_id, certificate_id, yes } => {
            let mut view = CertificateDetailView::new(Some(&family_id), Some(&certificate_id));
            view.load(api).await;
            settled(view.phase(), "Attest niet gevonden.")?;
            match view.delete(api, &Prompt { assume_yes: yes }).await {
                DeleteOutcome::Cancelled => println!("Geannuleerd."),
                DeleteOutcome::Deleted { redirect } => println!("Attest verwijderd. Terug naar {redirect}"),
                DeleteOutcome::Failed(message) => return Err(CliError::Failed(message)),
            }
            Ok(())
        }
    }
}
