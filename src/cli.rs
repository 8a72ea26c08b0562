//! Command-line interface definition.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::{PluginManager, ShellDialect};

/// Top-level CLI entry point for the termrig engine.
#[derive(Parser, Debug)]
#[command(
    name = "termrig",
    about = "Declarative terminal configuration engine",
    version
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Directory containing resource documents (YAML or TOML)
    #[arg(short, long, global = true)]
    pub resources: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a resource into its target configuration format
    Render(RenderOpts),
    /// Show a package's resolved components and their provenance
    Show(ShowOpts),
    /// List available resources
    List(ListOpts),
    /// Generate shell completions
    Completion(CompletionOpts),
    /// Print version information
    Version,
}

/// Options for the `render` subcommand.
#[derive(Parser, Debug)]
pub struct RenderOpts {
    /// Which target format to render
    #[command(subcommand)]
    pub target: RenderTarget,
}

/// What to render.
#[derive(Subcommand, Debug)]
pub enum RenderTarget {
    /// Render a prompt definition to prompt-engine TOML
    Prompt(RenderArgs),
    /// Render an emulator preset to a Lua config script
    Emulator(RenderArgs),
    /// Render a shell definition to startup snippets
    Shell(RenderArgs),
    /// Render a package's plugin list to registration statements
    Plugins(PluginsArgs),
}

/// Arguments shared by the prompt, emulator, and shell render targets.
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Name of the resource to render
    pub name: String,

    /// Palette to render with (overrides the definition's own choice)
    #[arg(short, long)]
    pub palette: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for rendering a package's plugin list.
#[derive(Parser, Debug, Clone)]
pub struct PluginsArgs {
    /// Name of the package whose plugins to render
    pub name: String,

    /// Shell dialect to generate for
    #[arg(long, value_enum, default_value_t = ShellDialect::Zsh)]
    pub shell: ShellDialect,

    /// Plugin manager syntax to generate
    #[arg(long, value_enum, default_value_t = PluginManager::Zinit)]
    pub manager: PluginManager,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options for the `show` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ShowOpts {
    /// Name of the package to resolve
    pub name: String,

    /// Emit machine-readable JSON instead of the listing
    #[arg(long)]
    pub json: bool,
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ListOpts {
    /// Restrict the listing to one resource kind
    #[arg(value_enum)]
    pub kind: Option<ResourceKindArg>,

    /// Emit machine-readable JSON instead of the listing
    #[arg(long)]
    pub json: bool,
}

/// Resource kinds accepted by `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKindArg {
    /// Packages.
    Packages,
    /// Palettes.
    Palettes,
    /// Prompt definitions.
    Prompts,
    /// Emulator presets.
    Emulators,
    /// Shell definitions.
    Shells,
}

/// Options for the `completion` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_render_prompt() {
        let cli = Cli::parse_from(["termrig", "render", "prompt", "minimal"]);
        let Command::Render(opts) = cli.command else {
            panic!("expected render command");
        };
        let RenderTarget::Prompt(args) = opts.target else {
            panic!("expected prompt target");
        };
        assert_eq!(args.name, "minimal");
        assert!(args.palette.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn parse_render_prompt_with_palette_and_output() {
        let cli = Cli::parse_from([
            "termrig",
            "render",
            "prompt",
            "minimal",
            "--palette",
            "tokyonight-night",
            "-o",
            "starship.toml",
        ]);
        let Command::Render(opts) = cli.command else {
            panic!("expected render command");
        };
        let RenderTarget::Prompt(args) = opts.target else {
            panic!("expected prompt target");
        };
        assert_eq!(args.palette.as_deref(), Some("tokyonight-night"));
        assert_eq!(args.output, Some(PathBuf::from("starship.toml")));
    }

    #[test]
    fn parse_render_plugins_defaults() {
        let cli = Cli::parse_from(["termrig", "render", "plugins", "developer"]);
        let Command::Render(opts) = cli.command else {
            panic!("expected render command");
        };
        let RenderTarget::Plugins(args) = opts.target else {
            panic!("expected plugins target");
        };
        assert_eq!(args.shell, ShellDialect::Zsh);
        assert_eq!(args.manager, PluginManager::Zinit);
    }

    #[test]
    fn parse_render_plugins_with_manager() {
        let cli = Cli::parse_from([
            "termrig", "render", "plugins", "core", "--manager", "oh-my-zsh", "--shell", "zsh",
        ]);
        let Command::Render(opts) = cli.command else {
            panic!("expected render command");
        };
        let RenderTarget::Plugins(args) = opts.target else {
            panic!("expected plugins target");
        };
        assert_eq!(args.manager, PluginManager::OhMyZsh);
    }

    #[test]
    fn parse_show_with_json() {
        let cli = Cli::parse_from(["termrig", "show", "developer", "--json"]);
        let Command::Show(opts) = cli.command else {
            panic!("expected show command");
        };
        assert_eq!(opts.name, "developer");
        assert!(opts.json);
    }

    #[test]
    fn parse_list_with_kind() {
        let cli = Cli::parse_from(["termrig", "list", "palettes"]);
        let Command::List(opts) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(opts.kind, Some(ResourceKindArg::Palettes));
    }

    #[test]
    fn parse_resources_override() {
        let cli = Cli::parse_from(["termrig", "--resources", "/tmp/rig", "list"]);
        assert_eq!(cli.global.resources, Some(PathBuf::from("/tmp/rig")));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["termrig", "-v", "version"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["termrig", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_completion() {
        let cli = Cli::parse_from(["termrig", "completion", "zsh"]);
        let Command::Completion(opts) = cli.command else {
            panic!("expected completion command");
        };
        assert_eq!(opts.shell, clap_complete::Shell::Zsh);
    }
}
