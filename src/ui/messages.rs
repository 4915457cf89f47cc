//! Fixed text shown by the installer

use super::Tone;

pub const PROJECT_URL: &str = "https://github.com/ayoubben18/micro-claude";

pub const INSTALL_BANNER: &[(Tone, &str)] = &[
    (Tone::Title, "\n🧠 Micro-Claude Installation"),
    (Tone::Heading, "==============================\n"),
];

pub const ALREADY_INSTALLED: &str = "⚠️  Micro-Claude commands already exist in this project!";
pub const OVERWRITE_QUESTION: &str = "Do you want to overwrite? (y/N): ";
pub const CANCELLED: &str = "Installation cancelled.";
pub const INSTALLING: &str = "📦 Installing Micro-Claude files...";
pub const COMMANDS_INSTALLED: &str = "✅ Installed Micro-Claude commands";
pub const TASK_DIR_CREATED: &str = "✅ Created .micro-claude directory";
pub const INSTALL_FAILED: &str = "\n❌ Installation failed";

/// Slash commands shipped in the bundle, with one-line summaries
pub const COMMAND_SUMMARIES: &[(&str, &str)] = &[
    ("/mc:interrogate", "Deep user interrogation"),
    ("/mc:mini-explode", "High-level task explosion"),
    ("/mc:explode", "Fine-grained task explosion"),
    ("/mc:implement", "Task implementation loop"),
];

pub const SUCCESS_FOOTER: &[(Tone, &str)] = &[
    (Tone::Done, "\n✨ Micro-Claude installed successfully!"),
    (Tone::Heading, "\n📋 Workflow:"),
    (Tone::Detail, "1. /mc:interrogate  → Creates detailed plan.md"),
    (Tone::Detail, "2. /mc:mini-explode → Explodes into high-level tasks"),
    (Tone::Detail, "   /mc:explode      → Explodes into atomic tasks"),
    (Tone::Detail, "3. /mc:implement    → Implements tasks with notes"),
    (Tone::Heading, "\n📁 Files created per task:"),
    (Tone::Detail, "   .micro-claude/[task-name]/"),
    (Tone::Detail, "   ├── plan.md    # Detailed specifications"),
    (Tone::Detail, "   ├── prd.json   # Task definitions"),
    (Tone::Detail, "   └── notes.md   # Implementation notes"),
    (Tone::Info, "\nFor more information, visit:"),
    (Tone::Detail, PROJECT_URL),
];

pub const HELP: &[(Tone, &str)] = &[
    (Tone::Title, "\n📚 Micro-Claude CLI"),
    (Tone::Heading, "===================\n"),
    (Tone::Warning, "Usage:"),
    (Tone::Plain, "  micro-claude            Install Micro-Claude in current project"),
    (Tone::Plain, "  micro-claude install    Install Micro-Claude in current project"),
    (Tone::Plain, "  micro-claude --help     Show this help message"),
    (Tone::Plain, "  micro-claude --version  Show the installed version"),
    (Tone::Warning, "\nOptions (install):"),
    (Tone::Plain, "  --target <DIR>  Install into DIR instead of the current directory"),
    (Tone::Plain, "  --source <DIR>  Copy command files from DIR"),
    (Tone::Plain, "  -y, --yes       Overwrite an existing installation without asking"),
    (Tone::Warning, "\nCommands installed:"),
    (Tone::Plain, "  /mc:interrogate   Deep user interrogation to create plan"),
    (Tone::Plain, "  /mc:mini-explode  Explode plan into high-level tasks"),
    (Tone::Plain, "  /mc:explode       Explode plan into atomic tasks"),
    (Tone::Plain, "  /mc:implement     Implement tasks with notes tracking"),
    (Tone::Info, "\nMore info: https://github.com/ayoubben18/micro-claude"),
];

pub const UNKNOWN_COMMAND_HINT: &str = "Run \"micro-claude --help\" for usage information";

/// `Unknown command: <token>`
pub fn unknown_command(token: &str) -> String {
    format!("Unknown command: {token}")
}

/// `micro-claude v<version>`
pub fn version_line(version: &str) -> String {
    format!("micro-claude v{version}")
}

/// Bullet line for one installed slash command
pub fn command_bullet(name: &str, summary: &str) -> String {
    format!("   • {name} - {summary}")
}
