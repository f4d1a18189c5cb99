//! Terminal client for the todo API.

use clap::{Parser, Subcommand};
use todo_core::{TodoApp, TodoClient};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use todo_cli::UreqTransport;

#[derive(Parser, Debug)]
#[command(name = "todo-cli")]
#[command(about = "List and edit todos on a running todo server")]
#[command(version)]
struct Args {
    /// Base URL of the todo API.
    #[arg(long, env = "API_URL", default_value = "http://localhost:3001")]
    api_url: String,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all todos (default).
    List,

    /// Add a todo.
    Add {
        /// Title of the new todo.
        title: String,
    },

    /// Flip a todo between done and not done.
    Toggle { id: u64 },

    /// Delete a todo.
    Delete { id: u64 },

    /// Show the server identity only.
    Info,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("todo_cli=debug,todo_core=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut transport = UreqTransport::new();
    let mut app = TodoApp::new(TodoClient::new(&args.api_url));
    app.load(&mut transport);

    match args.command.unwrap_or(Command::List) {
        Command::List => {}
        Command::Add { title } => app.add(&mut transport, &title),
        Command::Toggle { id } => app.toggle(&mut transport, id),
        Command::Delete { id } => app.delete(&mut transport, id),
        Command::Info => {
            let info = app
                .server_info()
                .ok_or_else(|| anyhow::anyhow!("server info unavailable at {}", args.api_url))?;
            println!("Hostname:    {}", info.hostname);
            println!("Environment: {}", info.environment);
            println!("Version:     {}", info.version);
            println!("Platform:    {}", info.platform);
            println!("Uptime:      {:.0}s", info.uptime);
            return Ok(());
        }
    }

    print!("{}", app.render());
    if let Some(error) = app.error() {
        anyhow::bail!("{error}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let args = Args::try_parse_from(["todo-cli", "--api-url", "http://h:1", "toggle", "3"]).unwrap();
        assert_eq!(args.api_url, "http://h:1");
        assert!(matches!(args.command, Some(Command::Toggle { id: 3 })));

        let args = Args::try_parse_from(["todo-cli", "--api-url", "http://h:1", "add", "Buy milk"]).unwrap();
        assert!(matches!(args.command, Some(Command::Add { ref title }) if title == "Buy milk"));
    }

    #[test]
    fn no_subcommand_means_list() {
        let args = Args::try_parse_from(["todo-cli", "--api-url", "http://h:1"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(Args::try_parse_from(["todo-cli", "delete", "abc"]).is_err());
    }
}
