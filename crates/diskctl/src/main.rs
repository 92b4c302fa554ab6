use clap::{Parser, Subcommand};
use diskctl::cup::{SectorIndex, SlotNumber, SlotStatus};
use diskctl::geom::Point;
use diskctl::proto::{Command, SOCKET_PATH};
use std::io::{Read, Write};
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "diskctl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path of the reaction-disk daemon socket
    #[arg(short = 's', long, default_value = SOCKET_PATH)]
    socket: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Click at a point in disk coordinates (selects the sector under it)
    Click {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Highlight a cup by its global number
    Select { number: u32 },
    /// Set the status of a cup (spare, fill_a, fill_b, wait_clean, disabled or 0-4)
    Status { number: u32, status: SlotStatus },
    /// Clear every selection and status
    Reset,
    /// Print the selected sector as last published (queued updates may not show yet)
    Selected,
    /// Print one cup as last published (queued updates may not show yet)
    Slot { number: u32 },
    /// Print every cup of a sector as last published (queued updates may not show yet)
    Sector { index: usize },
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Click { x, y } => Command::Click(Point::new(x, y)),
            Commands::Select { number } => Command::Select(SlotNumber::new(number)),
            Commands::Status { number, status } => {
                Command::Status(SlotNumber::new(number), status)
            }
            Commands::Reset => Command::Reset,
            Commands::Selected => Command::Selected,
            Commands::Slot { number } => Command::Slot(SlotNumber::new(number)),
            Commands::Sector { index } => Command::Sector(SectorIndex::new(index)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let response = send_command(&cli.socket, &Command::from(cli.command))?;
    if !response.is_empty() {
        print!("{}", response);
    }
    Ok(())
}

fn send_command(socket: &Path, cmd: &Command) -> anyhow::Result<String> {
    let mut stream = UnixStream::connect(socket).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to reaction-disk daemon at {}: {}. Is it running?",
            socket.display(),
            e
        )
    })?;

    log::debug!("Sending '{}'", cmd);
    writeln!(stream, "{}", cmd)?;
    stream.shutdown(Shutdown::Write)?;

    let mut response = String::new();
    if cmd.is_query() {
        stream.read_to_string(&mut response)?;
    }
    Ok(response)
}
