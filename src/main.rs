use micro_claude::commands::{info, install};
use micro_claude::config::{parse_args, CliAction, InstallArgs};
use micro_claude::ui::{AssumeYes, Confirm, LinePrompt};
use micro_claude::{logging, Config, InstallError, InstallOutcome};
use std::io;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("micro-claude: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let code = match parse_args(std::env::args_os()) {
        CliAction::Help => {
            info::print_help(io::stdout())?;
            ExitCode::SUCCESS
        }
        CliAction::Version => {
            info::print_version(io::stdout())?;
            ExitCode::SUCCESS
        }
        CliAction::Unknown(token) => {
            info::print_unknown(io::stdout(), &token)?;
            ExitCode::FAILURE
        }
        CliAction::Invalid(message) => {
            info::print_invalid(io::stdout(), &message)?;
            ExitCode::FAILURE
        }
        CliAction::Install(args) => match run_install(args) {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                error!(error = %err, path = ?err.path(), "installation failed");
                info::print_install_failure(io::stdout(), &err)?;
                ExitCode::FAILURE
            }
        },
    };
    Ok(code)
}

/// Declined and installed both count as success
fn run_install(args: InstallArgs) -> Result<InstallOutcome, InstallError> {
    let config = Config::try_from(args)?;
    let mut prompt: Box<dyn Confirm> = if config.assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(LinePrompt::stdio())
    };
    install::run(&config, prompt.as_mut(), io::stdout())
}
