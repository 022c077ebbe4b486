pub(crate) mod cli;
pub(crate) mod error;

fn main() {
    let cli = cli::Cli::new();

    if let Err(e) = cli.execute() {
        log::error!("Error: {e}");
        std::process::exit(1);
    }
}
