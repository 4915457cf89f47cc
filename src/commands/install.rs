//! Main install command

use crate::config::{Config, MARKER_PREFIX};
use crate::executor::apply_tree;
use crate::scanner::scan_tree;
use crate::types::{InstallError, InstallOutcome, InstallReport};
use crate::ui::messages::{
    command_bullet, ALREADY_INSTALLED, CANCELLED, COMMANDS_INSTALLED, COMMAND_SUMMARIES,
    INSTALLING, INSTALL_BANNER, OVERWRITE_QUESTION, SUCCESS_FOOTER, TASK_DIR_CREATED,
};
use crate::ui::{Confirm, Printer, Tone};
use indicatif::HumanBytes;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Run the installation
///
/// Steps, in order: detect a previous installation, ask before overwriting
/// it, create the commands directory, mirror the bundled commands into it,
/// create the task-storage directory, and print the summary.
///
/// A refusal at the prompt returns [`InstallOutcome::Declined`] before
/// anything is written. Any filesystem error is returned as-is; files copied
/// before the failure stay in place.
pub fn run<W: Write>(
    config: &Config,
    prompt: &mut dyn Confirm,
    out: W,
) -> Result<InstallOutcome, InstallError> {
    let mut printer = Printer::new(out);
    printer.lines(INSTALL_BANNER)?;

    let commands_dir = config.commands_dir();
    let already_installed = has_existing_install(&commands_dir)?;
    debug!(path = %commands_dir.display(), already_installed, "checked for previous install");

    if already_installed {
        printer.line(Tone::Warning, ALREADY_INSTALLED)?;
        printer.flush()?;

        if !prompt
            .confirm(OVERWRITE_QUESTION)
            .map_err(InstallError::Prompt)?
        {
            printer.line(Tone::Warning, CANCELLED)?;
            printer.flush()?;
            info!("overwrite declined");
            return Ok(InstallOutcome::Declined);
        }
    }

    printer.line(Tone::Info, INSTALLING)?;
    info!(project = %config.target_dir.display(), source = %config.source_dir.display(), "installing");

    fs::create_dir_all(&commands_dir)
        .map_err(InstallError::fs("create directory", &commands_dir))?;

    let mut report = InstallReport {
        overwrote_existing: already_installed,
        ..InstallReport::default()
    };

    if config.source_dir.exists() {
        let tree = scan_tree(&config.source_dir)?;
        report.stats = apply_tree(&tree, &commands_dir)?;
        report.installed_files = tree.files().map(|entry| entry.path.clone()).collect();
        report.commands_installed = true;

        printer.line(Tone::Success, COMMANDS_INSTALLED)?;
        for (name, summary) in COMMAND_SUMMARIES {
            printer.line(Tone::Detail, &command_bullet(name, summary))?;
        }
        printer.line(
            Tone::Detail,
            &format!(
                "   ({} file(s), {})",
                report.stats.files_copied,
                HumanBytes(report.stats.bytes_copied)
            ),
        )?;
    } else {
        warn!(
            path = %config.source_dir.display(),
            "bundled commands directory not found, nothing copied"
        );
    }

    let task_dir = config.task_dir();
    if !task_dir.exists() {
        fs::create_dir_all(&task_dir).map_err(InstallError::fs("create directory", &task_dir))?;
        report.task_dir_created = true;
        printer.line(Tone::Success, TASK_DIR_CREATED)?;
    }

    printer.lines(SUCCESS_FOOTER)?;
    printer.flush()?;

    info!(
        files = report.stats.files_copied,
        bytes = report.stats.bytes_copied,
        "install complete"
    );
    Ok(InstallOutcome::Installed(report))
}

/// True when `commands_dir` is a directory holding at least one `mc-*` entry
pub fn has_existing_install(commands_dir: &Path) -> Result<bool, InstallError> {
    if !commands_dir.is_dir() {
        return Ok(false);
    }

    for entry in fs::read_dir(commands_dir).map_err(InstallError::fs("read", commands_dir))? {
        let entry = entry.map_err(InstallError::fs("read", commands_dir))?;
        if entry.file_name().to_string_lossy().starts_with(MARKER_PREFIX) {
            return Ok(true);
        }
    }

    Ok(false)
}
