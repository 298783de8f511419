//! Print propscope descriptions of demo components as JSON.
//!
//! Each demo component is described through a [`Registry`] the same way an
//! inspector plugin would describe the nodes of a live tree, and printed as
//! `{"component": ..., "props": [...], "state": {"name": "State", "value": ...}}`.
//!
//! Set `RUST_LOG=propscope_describe=trace` to follow the describer field by
//! field.

mod demo;

use clap::Parser;
use propscope::{InspectorObject, Named, Registry};
use serde::Serialize;

use crate::demo::Demo;

/// CLI arguments for propscope-dump
#[derive(Parser, Debug)]
#[command(name = "propscope-dump")]
#[command(about = "Print inspector descriptions of demo components as JSON")]
struct Args {
    /// Demo component to describe (repeatable, defaults to all)
    #[arg(short, long = "component")]
    components: Vec<String>,

    /// List the demo components and exit
    #[arg(long)]
    list: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Description of one demo component.
#[derive(Debug, Serialize)]
struct Dump {
    component: &'static str,
    props: Vec<Named<InspectorObject>>,
    state: Option<Named<InspectorObject>>,
}

fn describe(registry: &Registry, demo: &Demo) -> propscope::Result<Dump> {
    log::debug!("describing demo `{}`", demo.name);
    Ok(Dump {
        component: demo.name,
        props: registry.describe_props(&*demo.node)?,
        state: registry.describe_state(demo.state.as_deref())?,
    })
}

/// Pick the requested demos, in request order.
fn select(demos: Vec<Demo>, names: &[String]) -> Result<Vec<Demo>, String> {
    if names.is_empty() {
        return Ok(demos);
    }

    let mut demos: Vec<Option<Demo>> = demos.into_iter().map(Some).collect();
    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        let slot = demos
            .iter_mut()
            .find(|d| d.as_ref().is_some_and(|d| d.name == name.as_str()))
            .ok_or_else(|| format!("unknown component `{}`; see --list", name))?;
        if let Some(demo) = slot.take() {
            selected.push(demo);
        }
    }
    Ok(selected)
}

fn run(args: &Args) -> Result<(), String> {
    let demos = demo::demos();

    if args.list {
        for demo in &demos {
            println!("{}", demo.name);
        }
        return Ok(());
    }

    let registry = demo::registry();
    let dumps = select(demos, &args.components)?
        .iter()
        .map(|d| describe(&registry, d))
        .collect::<propscope::Result<Vec<_>>>()
        .map_err(|e| e.to_string())?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&dumps)
    } else {
        serde_json::to_string(&dumps)
    }
    .map_err(|e| format!("Failed to serialize output: {}", e))?;

    println!("{}", output);
    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("[propscope-dump] Error: {}", e);
        std::process::exit(1);
    }
}
