use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use intake_client::{
    ConfirmPrompt, IntakeApi, Notifier, SubmitError, SubmitFlow, SubmitOutcome, ViewReset,
};
use intake_core::{catalog, IntakeForm, Role};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "University clinic intake form CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the symptom catalog
    Symptoms,
    /// Submit an intake form
    Submit {
        /// Requester's full name
        #[arg(long)]
        name: String,
        /// Student/staff id (ignored for external visitors)
        #[arg(long)]
        student_id: Option<String>,
        /// Role: student, internal-staff or external-visitor (Thai labels also accepted)
        #[arg(long)]
        role: String,
        /// Symptom ids, comma-separated (e.g. 1,5,12)
        #[arg(long)]
        symptoms: String,
        /// Free-text description, used when symptom id 12 is selected
        #[arg(long)]
        other: Option<String>,
        /// Backend base URL
        #[arg(long, default_value = "http://localhost:3000")]
        endpoint: String,
        /// Skip the interactive confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Confirmation dialog on the terminal.
struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, summary: &str) -> bool {
        println!("{summary}");
        print!("Confirm submission? [y/N] ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

/// Non-interactive confirmation for `--yes`.
struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, summary: &str) -> bool {
        println!("{summary}");
        true
    }
}

struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("Data submitted: {message}");
    }

    fn failure(&self, message: &str) {
        eprintln!("Submission failed: {message}");
    }
}

/// The terminal has no page to reload; the form itself is reset after the
/// flow returns.
struct NoView;

impl ViewReset for NoView {
    fn reset(&self) {}
}

fn parse_role(value: &str) -> anyhow::Result<Role> {
    if let Some(role) = Role::from_wire(value) {
        return Ok(role);
    }
    match value {
        "student" => Ok(Role::Student),
        "internal-staff" => Ok(Role::InternalStaff),
        "external-visitor" => Ok(Role::ExternalVisitor),
        _ => bail!("unknown role: {value}"),
    }
}

fn parse_symptom_ids(value: &str) -> anyhow::Result<Vec<u32>> {
    value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .with_context(|| format!("invalid symptom id: {part}"))
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("intake=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Symptoms) => {
            for (id, label) in catalog::symptoms() {
                println!("{id:>2}  {label}");
            }
        }
        Some(Commands::Submit {
            name,
            student_id,
            role,
            symptoms,
            other,
            endpoint,
            yes,
        }) => {
            let role = parse_role(&role)?;
            let symptom_ids = parse_symptom_ids(&symptoms)?;

            let mut form = IntakeForm::new();
            form.set_student_name(name);
            if let Some(id) = student_id {
                form.set_student_id(id);
            }
            // Role last, so an external-visitor choice clears the id the same
            // way it does on the form.
            form.set_role(Some(role));
            form.set_symptoms(symptom_ids);
            if let Some(text) = other {
                form.set_other_symptom(text);
            }

            let flow = SubmitFlow::new(IntakeApi::new(endpoint));
            let confirm: &dyn ConfirmPrompt = if yes { &AutoConfirm } else { &TerminalPrompt };

            match flow.submit(&form, confirm, &TerminalNotifier, &NoView).await {
                Ok(SubmitOutcome::Submitted) => {
                    form.reset();
                }
                Ok(SubmitOutcome::Cancelled) => {
                    println!("Submission cancelled.");
                }
                Err(err @ SubmitError::Validation(_)) => {
                    // Already surfaced by the notifier; exit non-zero.
                    tracing::debug!(error = %err, "validation rejected the form");
                    std::process::exit(1);
                }
                Err(err) => {
                    tracing::error!(error = %err, "submission did not go through");
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("Use 'intake --help' for commands");
        }
    }

    Ok(())
}
