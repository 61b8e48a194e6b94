use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use groupli::{cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the catalog with live suggestions and filters
    Search(SearchArgs),

    /// Show one artist's details and tour map
    Artist(ArtistArgs),

    /// Handle the persisted favorites set
    Favorites(FavoritesOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Initial query text
    pub query: Option<String>,

    /// Creation-year window as YEAR or MIN:MAX
    #[clap(long, value_parser = utils::parse_year_range)]
    pub creation_year: Option<(i32, i32)>,

    /// First-album-year window as YEAR or MIN:MAX
    #[clap(long, value_parser = utils::parse_year_range)]
    pub album_year: Option<(i32, i32)>,

    /// Member count to include; can be repeated
    #[clap(long = "members", action = ArgAction::Append, num_args = 1)]
    pub members: Vec<u32>,

    /// Concert city to include; can be repeated
    #[clap(long = "location", action = ArgAction::Append, num_args = 1)]
    pub locations: Vec<String>,

    /// Print a result table instead of the interactive view
    #[clap(long)]
    pub plain: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistArgs {
    /// Catalog id of the artist
    pub id: u32,

    /// Print the details instead of the interactive view
    #[clap(long)]
    pub plain: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Handle the persisted favorites set",
    args_conflicts_with_subcommands = true
)]
pub struct FavoritesOptions {
    /// Subcommands under `favorites` (e.g., `toggle`)
    #[command(subcommand)]
    pub command: Option<FavoritesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesSubcommand {
    /// Add or remove an artist from the favorites
    Toggle(FavoritesToggleOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct FavoritesToggleOpts {
    /// Catalog id of the artist
    pub id: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Search(opt) => {
            cli::run_search(cli::SearchOptions {
                query: opt.query.unwrap_or_default(),
                creation_year: opt.creation_year,
                album_year: opt.album_year,
                members: opt.members,
                locations: opt.locations,
                plain: opt.plain,
            })
            .await
        }
        Command::Artist(opt) => cli::show_artist(opt.id, opt.plain).await,
        Command::Favorites(opt) => match opt.command {
            Some(FavoritesSubcommand::Toggle(t)) => cli::toggle_favorite(t.id).await,
            None => cli::list_favorites().await,
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
