//! metrics-runner: headless driver for the sales-metrics core.
//!
//! Usage:
//!   metrics-runner --params inputs.json --name "Q3 plan"
//!   metrics-runner --ipc-mode
//!
//! One-shot mode computes and saves a single simulation and prints it.
//! IPC mode reads newline-delimited JSON commands on stdin and answers
//! one JSON line per command — this is the seam the presentation layer
//! talks to. The runner owns exactly one SimulationStore for its
//! lifetime: one session, one store.

use anyhow::Result;
use salesmetrics_core::{
    config::EngineConfig,
    engine::MetricsEngine,
    params::ParameterSet,
    store::{SimulationRecord, SimulationStore},
};
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    /// Compute the metric chain and save the result in one step —
    /// the submit-form flow of the UI.
    Compute {
        params: ParameterSet,
        #[serde(default)]
        name: Option<String>,
    },
    Get {
        id: String,
    },
    List,
    Delete {
        id: String,
    },
    Clear,
    Compare {
        ids: Vec<String>,
        metrics: Vec<String>,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct HistoryState {
    count: usize,
    simulations: Vec<SimulationRecord>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let params_path = string_arg(&args, "--params");
    let config_path = string_arg(&args, "--config");
    let name = string_arg(&args, "--name");

    let config = match config_path {
        Some(path) => EngineConfig::from_json_file(Path::new(path))?,
        None => EngineConfig::default(),
    };
    let engine = MetricsEngine::new(config);
    let mut store = SimulationStore::new();

    if ipc_mode {
        run_ipc_loop(&engine, &mut store)
    } else {
        run_once(&engine, &mut store, params_path, name)
    }
}

fn run_once(
    engine: &MetricsEngine,
    store: &mut SimulationStore,
    params_path: Option<&str>,
    name: Option<&str>,
) -> Result<()> {
    let params = match params_path {
        Some(path) => ParameterSet::from_json_str(&fs::read_to_string(path)?)?,
        None => {
            log::info!("no --params file given, using the example set");
            ParameterSet::example()
        }
    };

    let metrics = engine.compute(&params);
    let record = store.save(name, metrics);

    println!("{}", serde_json::to_string_pretty(&record)?);
    println!("{}", serde_json::to_string_pretty(&record.data.merged_view()?)?);
    Ok(())
}

fn run_ipc_loop(engine: &MetricsEngine, store: &mut SimulationStore) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let response = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Compute { params, name } => {
                let metrics = engine.compute(&params);
                let record = store.save(name.as_deref(), metrics);
                serde_json::to_value(&record)?
            }
            IpcCommand::Get { id } => match store.get(&id) {
                Ok(record) => serde_json::to_value(record)?,
                Err(e) => serde_json::json!({ "error": e.to_string() }),
            },
            IpcCommand::List => serde_json::to_value(HistoryState {
                count: store.len(),
                simulations: store.list().to_vec(),
            })?,
            IpcCommand::Delete { id } => {
                let deleted = store.delete(&id);
                serde_json::json!({ "deleted": deleted })
            }
            IpcCommand::Clear => {
                store.clear();
                serde_json::json!({ "cleared": true })
            }
            IpcCommand::Compare { ids, metrics } => {
                let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                let metrics: Vec<&str> = metrics.iter().map(String::as_str).collect();
                serde_json::to_value(store.compare(&ids, &metrics)?)?
            }
        };

        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }
    Ok(())
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
