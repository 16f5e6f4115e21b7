use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notemap")]
#[command(version, about = "Geo-anchored notes, stored locally")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (defaults to $NOTEMAP_DIR, then ./.notemap)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory with a default config
    Init,

    /// Add a note at a coordinate
    Add {
        /// Note title
        title: String,

        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Description (empty becomes "No description")
        #[arg(long, short = 'd', default_value = "")]
        description: String,

        /// Display date, e.g. 24/12/2024 (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Reference to an attached image
        #[arg(long)]
        image: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all notes in stored order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        /// Note id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields of a note; omitted fields are kept
    Update {
        /// Note id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// New display date
        #[arg(long)]
        date: Option<String>,

        /// New image reference
        #[arg(long, conflicts_with = "clear_image")]
        image: Option<String>,

        /// Detach the image
        #[arg(long)]
        clear_image: bool,

        /// Move the note to this latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Move the note to this longitude
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate the sample notes around a coordinate (once)
    Seed {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
