use clap::{Parser, Subcommand};
use kbmod::AppError;

#[derive(Parser)]
#[command(name = "kbmod")]
#[command(version)]
#[command(
    about = "Scaffold and validate standardized service module layouts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new module directory with the standard layout
    #[clap(visible_alias = "i")]
    Init {
        /// Module name, used as the directory name
        name: String,
        /// Owning user recorded in generated boilerplate
        #[arg(short, long)]
        user: Option<String>,
        /// Implementation language: python, perl, or java (default python)
        #[arg(short, long)]
        language: Option<String>,
        /// Include the example method and server start script
        #[arg(short, long)]
        example: bool,
    },
    /// Check that an existing module directory contains the expected layout
    #[clap(visible_alias = "v")]
    Verify {
        /// Module name to check
        name: String,
        /// Implementation language the module was created with
        #[arg(short, long)]
        language: Option<String>,
        /// Expect the example method artifacts as well
        #[arg(short, long)]
        example: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { name, user, language, example } => {
            kbmod::init(&name, user.as_deref(), language.as_deref(), example)
        }
        Commands::Verify { name, language, example } => {
            match kbmod::verify(&name, language.as_deref(), example) {
                Ok(true) => Ok(()),
                Ok(false) => {
                    eprintln!("Error: module '{}' layout is incomplete", name);
                    std::process::exit(1);
                }
                Err(e) => Err(e),
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
