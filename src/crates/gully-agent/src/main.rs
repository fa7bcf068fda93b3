//! Interactive console driver for the cricket agent.
//!
//! Invokes the graph with an opening message, services any interrupts by
//! prompting on stdin, then loops through user turns and prints the session
//! counters at exit.

use anyhow::Result;
use clap::Parser;
use gully_agent::{build_agent, extract, ScriptedModel};
use gully_graph::{AgentGraph, AgentState, Message, ResumeMap, RunResult};
use rand::Rng;
use serde_json::Value;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "gully", version, about = "Interactive cricket agent demo")]
struct Args {
    /// Session identifier; a random one is generated when omitted
    #[arg(long, env = "GULLY_SESSION")]
    session: Option<String>,

    /// Number of follow-up user turns after the opening exchange
    #[arg(long, default_value_t = 1)]
    turns: usize,

    /// Print a structured extraction of each settled reply
    #[arg(long)]
    extract: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let session_id = args
        .session
        .unwrap_or_else(|| format!("session-{}", rand::thread_rng().gen_range(1000..10000)));

    tracing::info!(session = %session_id, "starting session");

    let model = Arc::new(ScriptedModel::new());
    let agent = build_agent(model.clone());

    let state = AgentState::with_messages(vec![Message::human("Can you introduce yourself?")]);
    let result = agent.invoke(state, &session_id).await?;
    let result = handle_interrupts(&agent, &session_id, result).await?;
    let mut state = result.into_state();
    print_reply(&state, args.extract, model.as_ref()).await?;

    for _ in 0..args.turns {
        let input = read_line("You: ")?;
        if input.trim().is_empty() {
            continue;
        }
        state.push_message(Message::human(input));

        let result = agent.invoke(state, &session_id).await?;
        let result = handle_interrupts(&agent, &session_id, result).await?;
        state = result.into_state();
        print_reply(&state, args.extract, model.as_ref()).await?;
    }

    println!();
    println!("total messages count {}", state.messages.len());
    println!("total llm calls count {}", state.model_calls);
    println!("total tool calls count {}", state.tool_calls);

    Ok(())
}

/// Service pending interrupts by prompting on stdin, re-prompting on empty
/// input, until the run settles.
async fn handle_interrupts(
    agent: &AgentGraph,
    session_id: &str,
    mut result: RunResult,
) -> Result<RunResult> {
    while let RunResult::Paused { interrupts, .. } = &result {
        let mut resume = ResumeMap::new();
        for interrupt in interrupts {
            let value = loop {
                let line = read_line(&interrupt.prompt())?;
                if !line.trim().is_empty() {
                    break line.trim().to_string();
                }
            };
            resume.insert(interrupt.id.clone(), Value::String(value));
        }
        result = agent.resume(session_id, resume).await?;
    }
    Ok(result)
}

async fn print_reply(
    state: &AgentState,
    extract_structured: bool,
    model: &ScriptedModel,
) -> Result<()> {
    let Some(reply) = state.last_message() else {
        return Ok(());
    };
    println!("Agent: {}", reply.content);

    if extract_structured {
        match extract(model, &reply.content).await {
            Ok(structured) => {
                println!("Structured: {}", serde_json::to_string_pretty(&structured)?)
            }
            Err(error) => eprintln!("Extraction failed: {error}"),
        }
    }

    Ok(())
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
