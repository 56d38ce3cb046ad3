use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "moodbank", version, about = "MoodBank mood tracking server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the config file path globally
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve,

    /// Print coping suggestions for the given emotion labels
    Solutions {
        /// Emotion labels, e.g. anxiety stress
        #[arg(required = true)]
        emotions: Vec<String>,
    },
}
