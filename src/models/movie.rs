use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A catalog entry as returned by the movie catalog API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// A video attached to a movie (trailer, teaser, clip, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    /// Provider-specific video key (YouTube id for YouTube videos)
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Video {
    pub fn is_trailer(&self) -> bool {
        self.kind == "Trailer"
    }
}

/// Curated movie lists shown on the browse view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovieCategory {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
}

impl MovieCategory {
    /// All categories in display order
    pub const ALL: [MovieCategory; 4] = [
        MovieCategory::NowPlaying,
        MovieCategory::Popular,
        MovieCategory::TopRated,
        MovieCategory::Upcoming,
    ];

    /// Catalog endpoint path, relative to the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            MovieCategory::NowPlaying => "/movie/now_playing",
            MovieCategory::Popular => "/movie/popular",
            MovieCategory::TopRated => "/movie/top_rated",
            MovieCategory::Upcoming => "/movie/upcoming",
        }
    }

    /// The single page fetched for this category
    pub fn page(&self) -> u32 {
        match self {
            MovieCategory::Popular => 2,
            _ => 1,
        }
    }

    /// Heading shown above the category's list
    pub fn heading(&self) -> &'static str {
        match self {
            MovieCategory::NowPlaying => "Now Playing",
            MovieCategory::Popular => "Popular Movies",
            MovieCategory::TopRated => "Top Rated Movies",
            MovieCategory::Upcoming => "Upcoming Movies",
        }
    }
}

impl Display for MovieCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieCategory::NowPlaying => write!(f, "now_playing"),
            MovieCategory::Popular => write!(f, "popular"),
            MovieCategory::TopRated => write!(f, "top_rated"),
            MovieCategory::Upcoming => write!(f, "upcoming"),
        }
    }
}
