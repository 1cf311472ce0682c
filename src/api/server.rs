use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::api::dto::{CompareRequest, CompareResponse};
use crate::application::compare;
use crate::domain::equivalence::EquivalenceChecker;
use crate::infrastructure::fixture_loader::FixtureLoader;
use crate::infrastructure::symbol_table::SymbolTable;

#[derive(Debug, Deserialize)]
struct CommandReq {
    command: String,
    params: Option<serde_json::Value>,
}

pub fn start_server(port: u16) -> Result<()> {
    let address = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("Failed to bind to {}", address))?;
    serve(listener)
}

/// Accept connections until the process exits. One thread per connection.
pub fn serve(listener: TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    info!(%address, "equivalence server listening");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                thread::spawn(move || {
                    if let Err(e) = handle_connection(stream) {
                        warn!(error = %e, "connection error");
                    }
                });
            }
            Err(e) => error!(error = %e, "accept error"),
        }
    }

    Ok(())
}

fn handle_connection(mut stream: TcpStream) -> Result<()> {
    let peer = stream.peer_addr().ok();
    debug!(?peer, "client connected");
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let shutdown = matches!(
            serde_json::from_str::<CommandReq>(trimmed),
            Ok(ref req) if req.command == "SHUTDOWN"
        );

        let response = match process_command(trimmed) {
            Ok(data) => json!({
                "status": "success",
                "data": data
            }),
            Err(e) => json!({
                "status": "error",
                "message": format!("{:#}", e)
            }),
        };

        let response_str = serde_json::to_string(&response)?;
        stream.write_all(response_str.as_bytes())?;
        stream.write_all(b"\n")?;
        stream.flush()?;

        if shutdown {
            info!("shutdown requested");
            std::process::exit(0);
        }
    }
    debug!(?peer, "client disconnected");
    Ok(())
}

fn process_command(json_str: &str) -> Result<serde_json::Value> {
    let req: CommandReq = serde_json::from_str(json_str).context("Invalid JSON format")?;

    match req.command.as_str() {
        "PING" => Ok(json!("PONG")),
        "COMPARE" => handle_compare(req.params),
        "SHUTDOWN" => Ok(json!("Shutting down...")),
        _ => bail!("Unknown command: {}", req.command),
    }
}

fn handle_compare(params: Option<serde_json::Value>) -> Result<serde_json::Value> {
    let params = params.ok_or_else(|| anyhow!("Missing params for COMPARE"))?;
    let request: CompareRequest =
        serde_json::from_value(params).context("Invalid COMPARE params")?;

    let (mut fragments, symbols) = request.into_fragments();
    FixtureLoader::prepare(&mut fragments)?;
    let table: SymbolTable = symbols.into_iter().collect();
    let checker = EquivalenceChecker::new(&table);

    let comparison = compare::compare(&checker, &fragments[0], &fragments[1]);
    debug!(equivalent = comparison.equivalent, "COMPARE handled");
    Ok(serde_json::to_value(CompareResponse::from(comparison))?)
}
