use clap::Parser;
use scorecard::app::console::{self, ConsoleCommand};
use scorecard::config::LogFormat;
use scorecard::utils::logger;
use scorecard::{CliConfig, ConfigProvider, Fixture, MatchSession, Snapshot};
use std::io::BufRead;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    match config.log_format() {
        LogFormat::Compact => logger::init_cli_logger(config.verbose()),
        LogFormat::Json => logger::init_json_logger(config.verbose()),
    }

    let fixture = config.fixture();
    let json_output = config.json_output();
    tracing::info!(
        "Starting scorecard: {} vs {} at {} ({})",
        fixture.home.name,
        fixture.away.name,
        fixture.venue,
        fixture.competition
    );
    tracing::debug!("Config: {:?}", config);

    let (handle, session) = MatchSession::spawn_from_config(&config);

    // 每次 snapshot 變更都重新輸出
    let mut updates = handle.subscribe();
    let printer_fixture = fixture.clone();
    let printer = tokio::spawn(async move {
        loop {
            let snapshot = updates.borrow_and_update().clone();
            print_snapshot(&printer_fixture, &snapshot, json_output);
            if updates.changed().await.is_err() {
                break;
            }
        }
    });

    eprintln!("{}", console::HELP);
    let mut lines = spawn_stdin_reader();

    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping the clock");
                None
            }
        };
        let Some(line) = line else {
            break;
        };

        match line.parse::<ConsoleCommand>() {
            Ok(ConsoleCommand::Clock(command)) => {
                handle.send(command).await?;
            }
            Ok(ConsoleCommand::Status) => print_snapshot(&fixture, &handle.snapshot(), json_output),
            Ok(ConsoleCommand::Help) => eprintln!("{}", console::HELP),
            Ok(ConsoleCommand::Quit) => break,
            Err(e) => {
                tracing::debug!("Rejected console input: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
    }

    handle.shutdown().await?;
    let clock = session.await?;
    printer.await?;

    let final_snapshot = clock.snapshot();
    tracing::info!(
        "Final: {} {} {} at {} ({})",
        fixture.home.code,
        final_snapshot.scoreline(),
        fixture.away.code,
        final_snapshot.formatted_time,
        final_snapshot.status
    );

    Ok(())
}

/// Blocking stdin reads live on their own thread so shutdown never waits on them.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

fn print_snapshot(fixture: &Fixture, snapshot: &Snapshot, json_output: bool) {
    if json_output {
        match console::render_json(fixture, snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!("Failed to encode snapshot: {}", e),
        }
    } else {
        println!("{}", console::render_text(fixture, snapshot));
    }
}
