//! The `render` command: resource definition to target-format text.

use anyhow::Result;

use crate::builtin;
use crate::cli::{GlobalOpts, PluginsArgs, RenderArgs, RenderOpts, RenderTarget};
use crate::error::StoreError;
use crate::model::{ColorTable, Palette, PluginRef};
use crate::render;
use crate::resolve;
use crate::store::Store;

/// Run the render command.
///
/// # Errors
///
/// Returns an error if the resource or palette cannot be found, the
/// emitter rejects its input, or the output file cannot be written.
pub fn run(global: &GlobalOpts, opts: &RenderOpts) -> Result<()> {
    let store = super::load_store(global)?;

    match &opts.target {
        RenderTarget::Prompt(args) => render_prompt(&store, args),
        RenderTarget::Emulator(args) => render_emulator(&store, args),
        RenderTarget::Shell(args) => render_shell(&store, args),
        RenderTarget::Plugins(args) => render_plugins(&store, args),
    }
}

fn render_prompt(store: &Store, args: &RenderArgs) -> Result<()> {
    let prompt = store.prompt(&args.name)?;
    let palette = select_palette(store, args.palette.as_deref(), prompt.palette.as_deref())?;
    let text = render::render_prompt(prompt, palette)?;
    super::write_output(&text, args.output.as_deref())
}

fn render_emulator(store: &Store, args: &RenderArgs) -> Result<()> {
    let def = store.emulator(&args.name)?;
    let palette = select_palette(store, args.palette.as_deref(), def.theme.as_deref())?;

    // Theme references are resolved here, before the emitter runs; the
    // emitter itself never touches the palette store.
    let text = if def.colors.is_none() && def.theme.is_some() {
        let mut resolved = def.clone();
        resolved.colors = Some(ColorTable::from_palette(palette));
        render::render_emulator(&resolved, palette)?
    } else {
        render::render_emulator(def, palette)?
    };
    super::write_output(&text, args.output.as_deref())
}

fn render_shell(store: &Store, args: &RenderArgs) -> Result<()> {
    let def = store.shell(&args.name)?;
    let text = render::render_shell(def)?;
    super::write_output(&text, args.output.as_deref())
}

fn render_plugins(store: &Store, args: &PluginsArgs) -> Result<()> {
    let pkg = store.package(&args.name)?;
    let set = resolve::resolve(pkg, &store.packages)?;
    let refs: Vec<PluginRef> = set
        .plugins
        .iter()
        .map(|name| PluginRef::from_name(name))
        .collect();
    let text = render::render_plugins(&refs, args.shell, args.manager);
    super::write_output(&text, args.output.as_deref())
}

/// Pick the palette for a render: the CLI flag wins, then the
/// definition's own preference, then the built-in default.
fn select_palette<'a>(
    store: &'a Store,
    cli_choice: Option<&str>,
    definition_choice: Option<&str>,
) -> Result<&'a Palette, StoreError> {
    let name = cli_choice
        .or(definition_choice)
        .unwrap_or(builtin::DEFAULT_PALETTE);
    store.palette(name)
}
