use chat_client::{
    ChatApi, ClientConfig, Page, PageDocument, TerminalPrompt,
    config::parse_base_url,
    document::ids,
    forms::{FORGOT_PASSWORD_FORM, FormSpec, REGISTER_FORM},
    snapshot::{resolve_snapshot_path, write_snapshot},
    ui::render_dashboard,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::{path::PathBuf, process::ExitCode};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "chat_client", version, about = "Moderation and analytics client for the chat backend")]
struct Cli {
    /// Backend origin; overrides CHAT_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Answer every confirmation with yes.
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    FlagMessage { message_id: String },
    BanUser { user_id: String },
    SuspendUser { user_id: String },
    IgnoreFlag { message_id: String },
    DeleteFlaggedMessage { message_id: String },
    SearchUser { query: String },
    /// Fetch analytics and write the dashboard page.
    Analytics {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check a form's required fields, given as FIELD=VALUE pairs.
    Validate {
        form: FormName,
        fields: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormName {
    Register,
    ForgotPassword,
}

impl FormName {
    fn spec(self) -> &'static FormSpec {
        match self {
            Self::Register => &REGISTER_FORM,
            Self::ForgotPassword => &FORGOT_PASSWORD_FORM,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config.base_url = parse_base_url(base_url)?;
    }
    config.assume_yes |= cli.yes;

    let api = ChatApi::new(&config)?;
    let mut page = Page::ready(api, PageDocument::host_page(), TerminalPrompt::new(config.assume_yes));

    let ok = match cli.command {
        Command::FlagMessage { message_id } => page.flag_message(&message_id).await.is_success(),
        Command::BanUser { user_id } => page.ban_user(&user_id).await.is_success(),
        Command::SuspendUser { user_id } => page.suspend_user(&user_id).await.is_success(),
        Command::IgnoreFlag { message_id } => page.ignore_flag(&message_id).await.is_success(),
        Command::DeleteFlaggedMessage { message_id } => {
            page.delete_flagged_message(&message_id).await.is_success()
        }
        Command::SearchUser { query } => {
            page.document_mut().set_value(ids::SEARCH_INPUT, &query);
            let outcome = page.search_user().await;
            if let Some(results) = page.document().element(ids::SEARCH_RESULTS) {
                println!("{}", results.inner_html);
            }
            outcome.is_some_and(|outcome| !outcome.is_failure())
        }
        Command::Analytics { out } => match page.load_analytics().await {
            Some(_) => {
                let path = out.unwrap_or_else(resolve_snapshot_path);
                write_snapshot(&path, &render_dashboard(page.document())).await?;
                println!("{}", path.display());
                true
            }
            None => false,
        },
        Command::Validate { form, fields } => {
            let spec = form.spec();
            for pair in &fields {
                match pair.split_once('=') {
                    Some((field, value)) => page.document_mut().set_form_field(spec.name, field, value),
                    None => warn!("ignoring malformed field {pair:?}, expected FIELD=VALUE"),
                }
            }
            match form {
                FormName::Register => page.validate_register_form(),
                FormName::ForgotPassword => page.validate_forgot_password_form(),
            }
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
