//! JSON view models rendered from a store snapshot

use serde::{Deserialize, Serialize};

use crate::{
    i18n::translation,
    models::{Language, Movie, MovieCategory, Video},
    services::navigation::Route,
    store::StoreState,
};

const YOUTUBE_EMBED_URL: &str = "https://www.youtube.com/embed/";
const AI_PICKS_SUFFIX: &str = " 🎬";

/// Settings the views need that do not live in the store
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub image_cdn_url: String,
    /// Fixed backdrop behind the entry and AI-search views
    pub background_url: String,
}

impl ViewSettings {
    /// Image URL for a catalog path fragment
    pub fn image_url(&self, path: &str) -> String {
        format!("{}{}", self.image_cdn_url, path)
    }
}

#[derive(Debug, Serialize)]
pub struct LanguageOption {
    pub identifier: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HeaderView {
    pub signed_in: bool,
    pub display_name: Option<String>,
    /// Language selector options; empty when the selector is hidden
    pub languages: Vec<LanguageOption>,
    pub selected_language: Language,
    pub toggle_label: &'static str,
    pub show_avatar: bool,
}

#[derive(Debug, Serialize)]
pub struct MovieCardView {
    pub id: u64,
    pub title: String,
    pub poster_url: String,
}

#[derive(Debug, Serialize)]
pub struct MovieListView {
    pub title: String,
    pub movies: Vec<MovieCardView>,
}

#[derive(Debug, Serialize)]
pub struct FeaturedView {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub trailer_url: Option<String>,
}

/// Which of the two entry forms is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Serialize)]
pub struct FormFieldView {
    pub name: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AuthFormView {
    pub mode: FormMode,
    pub heading: &'static str,
    pub fields: Vec<FormFieldView>,
    /// Endpoint the form posts to
    pub action: &'static str,
    pub submit_label: &'static str,
    pub toggle_prompt: &'static str,
    pub toggle_label: &'static str,
    /// Entry URL showing the other form
    pub toggle_href: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub location: &'static str,
    pub header: HeaderView,
    pub background_url: String,
    pub form: AuthFormView,
}

#[derive(Debug, Serialize)]
pub struct BrowseView {
    pub location: &'static str,
    pub header: HeaderView,
    pub featured: Option<FeaturedView>,
    pub lists: Vec<MovieListView>,
}

#[derive(Debug, Serialize)]
pub struct SearchBarView {
    pub placeholder: &'static str,
    pub button: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WelcomeView {
    pub heading: String,
    pub intro: &'static str,
    pub examples: Vec<&'static str>,
    pub outro: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AiSearchView {
    pub location: &'static str,
    pub header: HeaderView,
    pub background_url: String,
    pub search_bar: SearchBarView,
    pub welcome: Option<WelcomeView>,
    pub picks: Option<MovieListView>,
}

#[derive(Debug, Serialize)]
pub struct ErrorView {
    pub status: u16,
    pub status_text: String,
    pub detail: Option<String>,
    pub heading: &'static str,
    pub return_to: &'static str,
}

impl ErrorView {
    pub fn new(status: u16, status_text: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            detail,
            heading: "Oops! Something went wrong",
            return_to: Route::Entry.path(),
        }
    }
}

/// YouTube embed URL that autoplays the trailer muted and looped
pub fn trailer_embed_url(video: &Video) -> String {
    format!(
        "{}{}?autoplay=1&mute=1&loop=1&playlist={}&controls=0&modestbranding=1&showinfo=0&rel=0",
        YOUTUBE_EMBED_URL, video.key, video.key
    )
}

pub fn render_header(state: &StoreState, route: Route) -> HeaderView {
    let on_ai_search = route == Route::AiSearch;
    let signed_in = state.user.is_some();

    let languages = if signed_in && on_ai_search {
        Language::ALL
            .iter()
            .map(|lang| LanguageOption {
                identifier: lang.identifier(),
                name: lang.name(),
            })
            .collect()
    } else {
        Vec::new()
    };

    HeaderView {
        signed_in,
        display_name: state.user.as_ref().and_then(|u| u.display_name.clone()),
        languages,
        selected_language: state.config.lang,
        toggle_label: if on_ai_search { "Browse Movies" } else { "AI Search" },
        show_avatar: signed_in && !on_ai_search,
    }
}

/// Renders a titled poster row. Movies without a poster are left out, and an
/// empty or absent list renders nothing.
pub fn render_movie_list(
    title: &str,
    movies: Option<&[Movie]>,
    settings: &ViewSettings,
) -> Option<MovieListView> {
    let movies = movies.filter(|m| !m.is_empty())?;

    let cards = movies
        .iter()
        .filter_map(|movie| {
            let poster = movie.poster_path.as_deref()?;
            Some(MovieCardView {
                id: movie.id,
                title: movie.title.clone(),
                poster_url: settings.image_url(poster),
            })
        })
        .collect();

    Some(MovieListView {
        title: title.to_string(),
        movies: cards,
    })
}

pub fn render_auth_form(mode: FormMode) -> AuthFormView {
    let email = FormFieldView {
        name: "email",
        input_type: "text",
        placeholder: "Email Address",
    };
    let password = FormFieldView {
        name: "password",
        input_type: "password",
        placeholder: "Password",
    };

    match mode {
        FormMode::SignIn => AuthFormView {
            mode,
            heading: "Sign In",
            fields: vec![email, password],
            action: "/api/v1/auth/sign-in",
            submit_label: "Sign In",
            toggle_prompt: "New to Netflix? ",
            toggle_label: "Sign Up Now.",
            toggle_href: "/?mode=sign_up",
        },
        FormMode::SignUp => AuthFormView {
            mode,
            heading: "Sign Up",
            fields: vec![
                FormFieldView {
                    name: "name",
                    input_type: "text",
                    placeholder: "Full Name",
                },
                email,
                password,
            ],
            action: "/api/v1/auth/sign-up",
            submit_label: "Sign Up",
            toggle_prompt: "Already registered? ",
            toggle_label: "Sign In Now.",
            toggle_href: "/?mode=sign_in",
        },
    }
}

pub fn render_entry(state: &StoreState, settings: &ViewSettings, mode: FormMode) -> EntryView {
    EntryView {
        location: Route::Entry.path(),
        header: render_header(state, Route::Entry),
        background_url: settings.background_url.clone(),
        form: render_auth_form(mode),
    }
}

pub fn render_browse(state: &StoreState, settings: &ViewSettings) -> BrowseView {
    let featured = state
        .movies
        .now_playing
        .loaded()
        .and_then(|movies| movies.first())
        .map(|movie| FeaturedView {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            trailer_url: state
                .movies
                .trailer_for(movie.id)
                .and_then(|slot| slot.loaded())
                .and_then(|video| video.as_ref())
                .map(trailer_embed_url),
        });

    let lists = MovieCategory::ALL
        .iter()
        .filter_map(|&category| {
            render_movie_list(
                category.heading(),
                state.movies.category(category).loaded().map(Vec::as_slice),
                settings,
            )
        })
        .collect();

    BrowseView {
        location: Route::Browse.path(),
        header: render_header(state, Route::Browse),
        featured,
        lists,
    }
}

pub fn render_ai_search(state: &StoreState, settings: &ViewSettings) -> AiSearchView {
    let t = translation(state.config.lang);

    let welcome = state.ai_search.show_welcome.then(|| WelcomeView {
        heading: format!("🔍 {}", t.main_heading),
        intro: t.intro,
        examples: t.examples.to_vec(),
        outro: t.outro,
    });

    let picks = state.ai_search.flattened().and_then(|movies| {
        let title = format!("{}{}", t.ai_picks, AI_PICKS_SUFFIX);
        render_movie_list(&title, Some(movies.as_slice()), settings)
    });

    AiSearchView {
        location: Route::AiSearch.path(),
        header: render_header(state, Route::AiSearch),
        background_url: settings.background_url.clone(),
        search_bar: SearchBarView {
            placeholder: t.search_placeholder,
            button: t.search,
        },
        welcome,
        picks,
    }
}
