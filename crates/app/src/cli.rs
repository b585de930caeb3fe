//! Command-line definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use nearby_core::discovery::RECENT_FEED_LEN;
use nearby_core::{Category, Coordinates, Period, SocialProvider};

#[derive(Parser, Debug)]
#[clap(
    name = "nearby",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find, list and enquire about rentable spaces near you"
)]
pub struct Cli {
    /// Config file (defaults to nearby.toml in the platform config directory)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse listings, optionally filtered and ranked by distance
    Spaces(SpacesArgs),
    /// Most recently listed spaces
    Recent {
        #[clap(long, default_value_t = RECENT_FEED_LEN)]
        limit: usize,
    },
    /// Show a single listing
    Show {
        id: String,
    },
    /// Register as a space owner and sign in
    Register(RegisterArgs),
    /// Sign in by email
    Login {
        email: String,
    },
    /// Sign in with a demo social identity
    SocialLogin {
        #[clap(value_enum)]
        provider: ProviderArg,
    },
    /// Sign out
    Logout,
    /// Show the signed-in owner
    Whoami,
    /// List a new space under the signed-in owner
    AddSpace(AddSpaceArgs),
    /// Send an enquiry to a listing's owner
    Enquire(EnquireArgs),
    /// Owner dashboard: listings, analytics and enquiries
    Dashboard {
        /// Restrict analytics to one of your listings
        #[clap(long)]
        space: Option<String>,
    },
    /// AI-written summary of a listing
    Summary {
        id: String,
    },
    /// Reachability of the remote database service
    Status,
}

#[derive(Args, Debug)]
pub struct SpacesArgs {
    /// Category label, or "All"
    #[clap(long, default_value = Category::ALL)]
    pub category: String,
    /// Match against title, location and address
    #[clap(long, short)]
    pub search: Option<String>,
    /// Rank by distance from "lat,lon"
    #[clap(long, conflicts_with = "locate")]
    pub near: Option<Coordinates>,
    /// Rank by distance from the configured position
    #[clap(long)]
    pub locate: bool,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[clap(long)]
    pub first_name: String,
    #[clap(long)]
    pub last_name: String,
    #[clap(long)]
    pub mobile: String,
    #[clap(long)]
    pub email: String,
}

#[derive(Args, Debug, Default)]
pub struct AddSpaceArgs {
    pub title: String,
    #[clap(long)]
    pub price: f64,
    /// Defaults to "Hot Desk"
    #[clap(long)]
    pub category: Option<String>,
    #[clap(long, default_value = "month")]
    pub period: Period,
    #[clap(long, default_value = "")]
    pub location: String,
    #[clap(long, default_value = "")]
    pub address: String,
    #[clap(long, default_value = "")]
    pub description: String,
    /// Repeatable or comma-separated
    #[clap(long = "amenity", value_delimiter = ',')]
    pub amenities: Vec<String>,
    /// Local image file, stored inline
    #[clap(long, conflicts_with = "image_url")]
    pub image: Option<PathBuf>,
    #[clap(long)]
    pub image_url: Option<String>,
    #[clap(long = "gallery")]
    pub gallery: Vec<String>,
    #[clap(long, default_value_t = 0)]
    pub sq_ft: u32,
    #[clap(long, default_value_t = 0)]
    pub capacity: u32,
    /// Position as "lat,lon"
    #[clap(long)]
    pub at: Option<Coordinates>,
}

#[derive(Args, Debug)]
pub struct EnquireArgs {
    /// Listing id
    pub space: String,
    #[clap(long)]
    pub name: String,
    #[clap(long)]
    pub mobile: String,
    #[clap(long)]
    pub email: String,
    #[clap(long, default_value = "")]
    pub message: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderArg {
    Google,
    Github,
}

impl From<ProviderArg> for SocialProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Google => SocialProvider::Google,
            ProviderArg::Github => SocialProvider::GitHub,
        }
    }
}
