//! Command implementations, written against [`DeskOps`] so they run on any backend.

use std::io::Write;

use config::Config;
use moveit_core::{
    DeskOps, FocusSelector, Heads, Outcome, PlacementEngine, ScanPolicy, WindowScan,
};
use tracing::info;

use crate::{
    cli::{Commands, FocusArgs, PlaceArgs},
    error::Result,
};

/// Dispatch `command`, writing any listing to `out`.
pub fn run<O, W>(ops: &O, cfg: &Config, command: &Commands, out: &mut W) -> Result<()>
where
    O: DeskOps + ?Sized,
    W: Write,
{
    match command {
        Commands::Place(args) => place(ops, cfg, args).map(report),
        Commands::Focus(args) => focus(ops, cfg, args).map(report),
        Commands::List => list(ops, cfg, out),
        Commands::Heads => heads(ops, cfg, out),
    }
}

/// Log what a placement or focus command did.
fn report(outcome: Outcome) {
    info!(%outcome, "done");
}

/// Move the focused (or given) window to a position on its head.
pub fn place<O: DeskOps + ?Sized>(ops: &O, cfg: &Config, args: &PlaceArgs) -> Result<Outcome> {
    let heads = Heads::discover(ops, cfg.strut_policy())?;
    let engine = PlacementEngine::new(ops, &heads);
    let split = args.split.unwrap_or(cfg.split);
    let outcome = match args.window {
        Some(id) => engine.place_window(id, &args.position, split)?,
        None => engine.place_active(&args.position, split)?,
    };
    Ok(outcome)
}

/// Focus the next window at a position.
pub fn focus<O: DeskOps + ?Sized>(ops: &O, cfg: &Config, args: &FocusArgs) -> Result<Outcome> {
    let heads = Heads::discover(ops, cfg.strut_policy())?;
    let selector = FocusSelector::new(ops, &heads, cfg.focus_options(args.margin));
    let split = args.split.unwrap_or(cfg.split);
    Ok(selector.focus_from_active(&args.position, split)?)
}

/// Print the windows on the current desktop, bottom-to-top.
fn list<O: DeskOps + ?Sized, W: Write>(ops: &O, cfg: &Config, out: &mut W) -> Result<()> {
    let heads = Heads::discover(ops, cfg.strut_policy())?;
    let scan = WindowScan::new(ops)?;
    writeln!(out, "Desktop #{}", scan.current_desktop())?;
    for win in scan.collect_with(ScanPolicy::Skip)? {
        let name = ops
            .window_name(win.id)
            .ok()
            .flatten()
            .unwrap_or_else(|| "N/A".to_string());
        let head = heads.head_for_window(&win.geometry);
        let hidden = if win.visible { "" } else { " hidden" };
        writeln!(out, "Window {}: {name}", win.id)?;
        writeln!(out, "\tGeometry: {} (head #{head}){hidden}", win.geometry)?;
    }
    Ok(())
}

/// Print raw and strut-adjusted head rectangles.
fn heads<O: DeskOps + ?Sized, W: Write>(ops: &O, cfg: &Config, out: &mut W) -> Result<()> {
    let heads = Heads::discover(ops, cfg.strut_policy())?;
    writeln!(out, "Desktop: {}", heads.desktop())?;
    for head in heads.raw() {
        writeln!(out, "\tHead              #{}: {}", head.index, head.rect)?;
    }
    for head in heads.usable() {
        writeln!(out, "\tHead minus struts #{}: {}", head.index, head.rect)?;
    }
    Ok(())
}
