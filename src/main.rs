use std::path::PathBuf;

use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotmood::{
    cli, config,
    cover::CoverSource,
    error, logging,
    recommend::{TimeRange, TrackQuery},
    spotify::{browse::FeaturedQuery, playlist::NewPlaylist},
    types::ChangePlaylistDetailsRequest,
    utils,
};

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
    #[clap(about = "Recommend tracks for a mood, genre or artist")]
    Tracks(TracksOptions),

    #[clap(about = "Manage playlists")]
    Playlist {
        #[command(subcommand)]
        command: PlaylistCommand,
    },

    #[clap(about = "Manage single tracks inside a playlist")]
    PlaylistTrack {
        #[command(subcommand)]
        command: PlaylistTrackCommand,
    },

    #[clap(about = "Upload a playlist cover image")]
    Cover(CoverOptions),

    #[clap(about = "List featured playlists")]
    Featured(FeaturedOptions),

    #[clap(about = "List new album releases")]
    NewReleases(NewReleasesOptions),

    #[clap(about = "Show the current user's profile")]
    User,

    #[clap(about = "Summarise listening preferences from top artists")]
    Preferences(PreferencesOptions),

    #[clap(about = "Suggest a mood and genre for the current time")]
    Time(TimeOptions),

    #[clap(about = "Suggest a mood for the local weather")]
    Weather(WeatherOptions),

    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone)]
pub struct TracksOptions {
    #[clap(long, default_value = "")]
    genre: String,

    #[clap(long, default_value = "")]
    artist: String,

    /// energetic, chill, cozy, melancholy, upbeat, focus, workout, romantic
    #[clap(long, default_value = "")]
    mood: String,

    #[clap(long, default_value_t = 20)]
    limit: u32,

    /// Seed from your top artists in this window
    #[clap(long, value_enum)]
    time_range: Option<TimeRange>,

    #[clap(long, default_value_t = 0)]
    popularity: u32,

    /// Save the result as a new playlist with this name
    #[clap(long)]
    save_as: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistCommand {
    Create(PlaylistCreateOptions),
    Show { id: String },
    Update(PlaylistUpdateOptions),
    Delete { id: String },
}

#[derive(Args, Debug, Clone)]
pub struct PlaylistCreateOptions {
    name: String,

    #[clap(long, default_value = "")]
    description: String,

    #[clap(long)]
    public: bool,

    #[clap(long)]
    collaborative: bool,

    /// Comma separated track IDs, URIs or links
    #[clap(long, default_value = "")]
    tracks: String,
}

#[derive(Args, Debug, Clone)]
pub struct PlaylistUpdateOptions {
    id: String,

    #[clap(long)]
    name: Option<String>,

    #[clap(long)]
    description: Option<String>,

    #[clap(long)]
    public: Option<bool>,

    #[clap(long)]
    collaborative: Option<bool>,

    /// Replace the contents with these tracks
    #[clap(long)]
    tracks: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistTrackCommand {
    Add {
        playlist: String,
        track: String,
        #[clap(long)]
        position: Option<u32>,
    },
    Show {
        playlist: String,
        track: String,
    },
    Move {
        playlist: String,
        track: String,
        position: u32,
    },
    Remove {
        playlist: String,
        track: String,
    },
}

#[derive(Args, Debug, Clone)]
#[clap(group(clap::ArgGroup::new("source").required(true).args(["image_url", "file"])))]
pub struct CoverOptions {
    playlist: String,

    #[clap(long)]
    image_url: Option<String>,

    /// Local JPEG file
    #[clap(long)]
    file: Option<PathBuf>,

    #[clap(long)]
    mood: Option<String>,

    #[clap(long)]
    weather: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct FeaturedOptions {
    #[clap(long)]
    country: Option<String>,

    #[clap(long)]
    locale: Option<String>,

    /// RFC 3339 timestamp
    #[clap(long)]
    timestamp: Option<String>,

    #[clap(long, default_value_t = 20)]
    limit: u32,
}

#[derive(Args, Debug, Clone)]
pub struct NewReleasesOptions {
    #[clap(long)]
    country: Option<String>,

    #[clap(long, default_value_t = 20)]
    limit: u32,
}

#[derive(Args, Debug, Clone)]
pub struct PreferencesOptions {
    #[clap(long, value_enum, default_value = "medium_term")]
    time_range: TimeRange,
}

#[derive(Args, Debug, Clone)]
pub struct TimeOptions {
    #[clap(long)]
    mood: Option<String>,

    #[clap(long)]
    genre: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct WeatherOptions {
    #[clap(long)]
    mood: Option<String>,
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
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Tracks(opt) => {
            let query = TrackQuery::new()
                .genre(opt.genre)
                .artist(opt.artist)
                .mood(&opt.mood)
                .limit(opt.limit)
                .time_range(opt.time_range)
                .popularity(opt.popularity);
            cli::tracks(&cli::client(), query, opt.save_as).await
        }

        Command::Playlist { command } => {
            let client = cli::client();
            match command {
                PlaylistCommand::Create(opt) => {
                    let new = NewPlaylist {
                        name: opt.name,
                        description: opt.description,
                        public: opt.public,
                        collaborative: opt.collaborative,
                        tracks: utils::parse_track_ids(&opt.tracks),
                    };
                    cli::create_playlist(&client, new).await
                }
                PlaylistCommand::Show { id } => {
                    cli::show_playlist(&client, &utils::spotify_id(&id)).await
                }
                PlaylistCommand::Update(opt) => {
                    let details = ChangePlaylistDetailsRequest {
                        name: opt.name,
                        description: opt.description,
                        public: opt.public,
                        collaborative: opt.collaborative,
                    };
                    let tracks = opt.tracks.as_deref().map(utils::parse_track_ids);
                    cli::update_playlist(&client, &utils::spotify_id(&opt.id), details, tracks)
                        .await
                }
                PlaylistCommand::Delete { id } => {
                    cli::delete_playlist(&client, &utils::spotify_id(&id)).await
                }
            }
        }

        Command::PlaylistTrack { command } => {
            let client = cli::client();
            match command {
                PlaylistTrackCommand::Add {
                    playlist,
                    track,
                    position,
                } => {
                    cli::add_track(
                        &client,
                        &utils::spotify_id(&playlist),
                        &utils::spotify_id(&track),
                        position,
                    )
                    .await
                }
                PlaylistTrackCommand::Show { playlist, track } => {
                    cli::show_track(
                        &client,
                        &utils::spotify_id(&playlist),
                        &utils::spotify_id(&track),
                    )
                    .await
                }
                PlaylistTrackCommand::Move {
                    playlist,
                    track,
                    position,
                } => {
                    cli::move_track(
                        &client,
                        &utils::spotify_id(&playlist),
                        &utils::spotify_id(&track),
                        position,
                    )
                    .await
                }
                PlaylistTrackCommand::Remove { playlist, track } => {
                    cli::remove_track(
                        &client,
                        &utils::spotify_id(&playlist),
                        &utils::spotify_id(&track),
                    )
                    .await
                }
            }
        }

        Command::Cover(opt) => {
            let source = match (opt.image_url, opt.file) {
                (Some(url), _) => CoverSource::Url(url),
                (None, Some(path)) => CoverSource::File(path),
                (None, None) => error!("Either --image-url or --file is required"),
            };
            cli::cover(
                &cli::client(),
                &utils::spotify_id(&opt.playlist),
                source,
                opt.mood,
                opt.weather,
            )
            .await
        }

        Command::Featured(opt) => {
            let query = FeaturedQuery {
                country: opt.country,
                locale: opt.locale,
                timestamp: opt.timestamp,
                limit: opt.limit,
            };
            cli::featured(&cli::client(), query).await
        }

        Command::NewReleases(opt) => {
            cli::new_releases(&cli::client(), opt.country, opt.limit).await
        }

        Command::User => cli::user(&cli::client()).await,

        Command::Preferences(opt) => cli::preferences(&cli::client(), opt.time_range).await,

        Command::Time(opt) => cli::time(opt.mood, opt.genre),

        Command::Weather(opt) => cli::weather(opt.mood).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
