use sentiment_client::{
    ClientConfig, ClientController, HttpApi, TerminalSurface,
    api::{AnalyzeEndpoint, HistoryEndpoint},
    command::{Command, HELP},
    ui::RenderSurface,
};
use std::io::{self, BufRead};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    let api = HttpApi::new(&config)?;
    let surface = TerminalSurface::new(io::stdout(), config.color);
    let controller = ClientController::new(surface, api.clone(), api);

    info!("using sentiment service at {}", config.base_url);
    controller.with_surface(|surface| surface.notify("Type :help for commands."));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    // same as the page load: show whatever history the server already has
    tokio::select! {
        _ = &mut ctrl_c => {
            info!("shutting down");
            return Ok(());
        }
        _ = controller.refresh_history() => {}
    }

    let mut lines = spawn_stdin_reader();
    loop {
        let line = tokio::select! {
            _ = &mut ctrl_c => break,
            line = lines.recv() => line.transpose()?,
        };
        let Some(line) = line else {
            break;
        };

        let keep_going = tokio::select! {
            _ = &mut ctrl_c => break,
            keep_going = handle(&controller, Command::parse(&line)) => keep_going,
        };
        if !keep_going {
            break;
        }
    }

    info!("shutting down");
    Ok(())
}

// tokio's stdin reads on the blocking pool, and runtime shutdown waits for it
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

async fn handle<S, A, H>(controller: &ClientController<S, A, H>, command: Command) -> bool
where
    S: RenderSurface,
    A: AnalyzeEndpoint,
    H: HistoryEndpoint,
{
    let outcome = match command {
        Command::Analyze(text) => {
            controller.set_input(&text);
            controller.analyze(&text).await.map(|_| ())
        }
        Command::AnalyzeInput => controller.analyze_input().await.map(|_| ()),
        Command::Sample(index) => controller.fill_sample(index).map(|_| ()),
        Command::History => {
            // failures are already logged and leave the panel as it was
            let _ = controller.refresh_history().await;
            Ok(())
        }
        Command::Stats => controller.stats().await.map(|_| ()),
        Command::Batch(texts) => controller.analyze_batch(&texts).await.map(|_| ()),
        Command::Help => {
            controller.with_surface(|surface| surface.notify(HELP));
            Ok(())
        }
        Command::Quit => return false,
        Command::Unknown(raw) => {
            controller.with_surface(|surface| {
                surface.notify(&format!("Unknown command {raw}; type :help"))
            });
            Ok(())
        }
    };

    if let Err(err) = outcome {
        controller.report(&err);
    }
    true
}
