//! AI-assisted movie search
//!
//! A generative model turns a free-text mood into a comma-separated list of
//! titles. Each title is looked up in the catalog concurrently, every lookup
//! outcome is gathered, and the merged groups are committed to the store in
//! one write. A generation failure aborts the search without touching the
//! store; a lookup failure only empties that title's group.

use std::sync::Arc;

use serde::Serialize;

use crate::{
    models::Movie,
    services::providers::{CatalogProvider, GenerativeModel},
    store::{Action, Store},
};

const PROMPT_PREFIX: &str =
    "Act as a Movie Recommendation system and suggest some movies for the query ";
const PROMPT_SUFFIX: &str = ". Only give me names of 10 movies, comma separated like the example result given ahead. Example Result: War, Gadar, Sholay, Don, Jurassic World";

/// How a suggested title is compared against catalog titles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleMatch {
    /// Catalog title must equal the lower-cased suggestion exactly. Catalog
    /// titles are not folded, so in practice this nearly always falls back to
    /// the first search result.
    #[default]
    Verbatim,
    /// Both sides are lower-cased before comparing
    CaseInsensitive,
}

/// Settings for the search flow
#[derive(Debug, Clone)]
pub struct AiSearchSettings {
    /// Generative model identifier
    pub model: String,
    pub title_match: TitleMatch,
}

/// Settled result of one catalog lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Movie),
    NoMatch,
    Failed(String),
}

/// What a search submission did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SearchOutcome {
    /// Query was blank; nothing happened
    EmptyQuery,
    /// Suggestion step failed; store left unchanged
    Aborted,
    /// Groups committed to the store
    Committed { groups: usize, failed_lookups: usize },
}

/// Embeds the user's query in the fixed instruction template
pub fn build_prompt(query: &str) -> String {
    format!("{}{}{}", PROMPT_PREFIX, query, PROMPT_SUFFIX)
}

/// Splits the model's reply into candidate titles. Candidates are neither
/// trimmed nor deduplicated.
pub fn split_candidates(text: &str) -> Vec<String> {
    text.split(',').map(str::to_string).collect()
}

/// Picks the catalog entry for a suggested title: an exact title match if one
/// exists under `policy`, otherwise the first search result.
pub fn pick_best_match(candidate: &str, results: Vec<Movie>, policy: TitleMatch) -> Option<Movie> {
    let wanted = candidate.trim().to_lowercase();

    let exact = results.iter().position(|movie| match policy {
        TitleMatch::Verbatim => movie.title == wanted,
        TitleMatch::CaseInsensitive => movie.title.to_lowercase() == wanted,
    });

    let index = exact.unwrap_or(0);
    results.into_iter().nth(index)
}

/// Merges lookup outcomes into display groups, preserving order. Each group
/// holds zero or one movie.
pub fn merge_outcomes(outcomes: Vec<LookupOutcome>) -> Vec<Vec<Movie>> {
    outcomes
        .into_iter()
        .map(|outcome| match outcome {
            LookupOutcome::Found(movie) => vec![movie],
            LookupOutcome::NoMatch | LookupOutcome::Failed(_) => Vec::new(),
        })
        .collect()
}

async fn lookup_candidate(
    catalog: Arc<dyn CatalogProvider>,
    candidate: String,
    policy: TitleMatch,
) -> LookupOutcome {
    let query = candidate.trim();
    if query.is_empty() {
        return LookupOutcome::NoMatch;
    }

    match catalog.search_movies(query).await {
        Ok(results) => match pick_best_match(&candidate, results, policy) {
            Some(movie) => LookupOutcome::Found(movie),
            None => LookupOutcome::NoMatch,
        },
        Err(e) => {
            tracing::error!(candidate = %query, error = %e, "Catalog lookup failed");
            LookupOutcome::Failed(e.to_string())
        }
    }
}

/// Looks every candidate up concurrently and gathers all settled outcomes in
/// candidate order
pub async fn lookup_all(
    catalog: Arc<dyn CatalogProvider>,
    candidates: Vec<String>,
    policy: TitleMatch,
) -> Vec<LookupOutcome> {
    let mut tasks = Vec::new();

    for candidate in candidates {
        let catalog = catalog.clone();
        let task = tokio::spawn(lookup_candidate(catalog, candidate, policy));
        tasks.push(task);
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    for task in tasks {
        match task.await {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                tracing::error!(error = %e, "Task join error");
                outcomes.push(LookupOutcome::Failed(e.to_string()));
            }
        }
    }

    outcomes
}

/// Runs one AI search submission end to end
pub async fn run_search(
    store: &Store,
    model: Arc<dyn GenerativeModel>,
    catalog: Arc<dyn CatalogProvider>,
    settings: &AiSearchSettings,
    query: &str,
) -> SearchOutcome {
    if query.trim().is_empty() {
        return SearchOutcome::EmptyQuery;
    }

    let prompt = build_prompt(query);
    let text = match model.generate(&settings.model, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(query = %query, error = %e, "AI suggestion request failed");
            return SearchOutcome::Aborted;
        }
    };

    let candidates = split_candidates(&text);
    tracing::info!(query = %query, candidates = candidates.len(), "AI suggestions received");

    let outcomes = lookup_all(catalog, candidates, settings.title_match).await;
    let failed_lookups = outcomes
        .iter()
        .filter(|o| matches!(o, LookupOutcome::Failed(_)))
        .count();

    if failed_lookups > 0 {
        tracing::warn!(
            failed = failed_lookups,
            total = outcomes.len(),
            "Partial AI search lookup failure"
        );
    }

    let groups = merge_outcomes(outcomes);
    let group_count = groups.len();

    store.dispatch(Action::AddAiMovieResult(groups)).await;
    store.dispatch(Action::HideWelcome).await;

    SearchOutcome::Committed {
        groups: group_count,
        failed_lookups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        services::providers::{MockCatalogProvider, MockGenerativeModel},
    };

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: None,
            poster_path: Some(format!("/{}.jpg", id)),
            backdrop_path: None,
            release_date: None,
            vote_average: None,
        }
    }

    fn settings() -> AiSearchSettings {
        AiSearchSettings {
            model: "gemini-2.5-flash".to_string(),
            title_match: TitleMatch::Verbatim,
        }
    }

    fn model_replying(reply: &'static str) -> Arc<dyn GenerativeModel> {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate()
            .withf(|model, prompt| {
                model == "gemini-2.5-flash" && prompt.contains("comma separated")
            })
            .times(1)
            .returning(move |_, _| Ok(reply.to_string()));
        Arc::new(model)
    }

    #[test]
    fn test_build_prompt_embeds_query() {
        let prompt = build_prompt("funny retro movies");
        assert!(prompt.starts_with(
            "Act as a Movie Recommendation system and suggest some movies for the query "
        ));
        assert!(prompt.contains("the query funny retro movies. Only give me names"));
        assert!(prompt.ends_with("Example Result: War, Gadar, Sholay, Don, Jurassic World"));
    }

    #[test]
    fn test_split_candidates_keeps_whitespace_and_duplicates() {
        assert_eq!(
            split_candidates("War, Gadar,War"),
            vec!["War".to_string(), " Gadar".to_string(), "War".to_string()]
        );
        assert_eq!(split_candidates(""), vec!["".to_string()]);
    }

    #[test]
    fn test_pick_best_match_verbatim_falls_back_to_first() {
        let results = vec![movie(1, "Sholay 2"), movie(2, "Sholay")];
        // "Sholay" is compared against "sholay", so only the fallback applies
        let picked = pick_best_match(" Sholay", results, TitleMatch::Verbatim).unwrap();
        assert_eq!(picked.id, 1);
    }

    #[test]
    fn test_pick_best_match_verbatim_matches_lowercase_titles() {
        let results = vec![movie(1, "Something Else"), movie(2, "don")];
        let picked = pick_best_match("Don", results, TitleMatch::Verbatim).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn test_pick_best_match_case_insensitive() {
        let results = vec![movie(1, "Sholay 2"), movie(2, "Sholay")];
        let picked = pick_best_match(" Sholay ", results, TitleMatch::CaseInsensitive).unwrap();
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn test_pick_best_match_empty_results() {
        assert_eq!(pick_best_match("War", vec![], TitleMatch::Verbatim), None);
    }

    #[test]
    fn test_merge_outcomes_preserves_order() {
        let groups = merge_outcomes(vec![
            LookupOutcome::Found(movie(1, "War")),
            LookupOutcome::Failed("timeout".to_string()),
            LookupOutcome::NoMatch,
            LookupOutcome::Found(movie(4, "Don")),
        ]);

        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0], vec![movie(1, "War")]);
        assert!(groups[1].is_empty());
        assert!(groups[2].is_empty());
        assert_eq!(groups[3], vec![movie(4, "Don")]);
    }

    #[tokio::test]
    async fn test_search_commits_groups_in_candidate_order() {
        let store = Store::new();
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search_movies()
            .times(3)
            .returning(|query| match query {
                "War" => Ok(vec![movie(1, "War"), movie(11, "War 2")]),
                "Gadar" => Ok(vec![movie(2, "Gadar: Ek Prem Katha")]),
                "Sholay" => Ok(vec![movie(3, "Sholay")]),
                other => panic!("unexpected query {other}"),
            });

        let outcome = run_search(
            &store,
            model_replying("War, Gadar, Sholay"),
            Arc::new(catalog),
            &settings(),
            "indian action classics",
        )
        .await;

        assert_eq!(
            outcome,
            SearchOutcome::Committed {
                groups: 3,
                failed_lookups: 0
            }
        );

        let ai = store.ai_search().await;
        let groups = ai.movie_results.clone().unwrap();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.len() <= 1));

        let flat: Vec<u64> = ai.flattened().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(flat, vec![1, 2, 3]);
        assert!(!ai.show_welcome);
    }

    #[tokio::test]
    async fn test_generation_failure_leaves_store_unchanged() {
        let store = Store::new();
        store
            .dispatch(Action::AddAiMovieResult(vec![vec![movie(9, "Earlier")]]))
            .await;

        let mut model = MockGenerativeModel::new();
        model
            .expect_generate()
            .times(1)
            .returning(|_, _| Err(AppError::ExternalApi("quota exceeded".to_string())));

        let mut catalog = MockCatalogProvider::new();
        catalog.expect_search_movies().times(0);

        let outcome = run_search(
            &store,
            Arc::new(model),
            Arc::new(catalog),
            &settings(),
            "anything",
        )
        .await;

        assert_eq!(outcome, SearchOutcome::Aborted);
        let ai = store.ai_search().await;
        assert_eq!(ai.movie_results, Some(vec![vec![movie(9, "Earlier")]]));
        assert!(ai.show_welcome);
    }

    #[tokio::test]
    async fn test_lookup_failure_yields_empty_group() {
        let store = Store::new();
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search_movies()
            .times(3)
            .returning(|query| match query {
                "Gadar" => Err(AppError::ExternalApi("502".to_string())),
                "Don" => Ok(vec![]),
                _ => Ok(vec![movie(1, "War")]),
            });

        let outcome = run_search(
            &store,
            model_replying("War,Gadar,Don"),
            Arc::new(catalog),
            &settings(),
            "action",
        )
        .await;

        assert_eq!(
            outcome,
            SearchOutcome::Committed {
                groups: 3,
                failed_lookups: 1
            }
        );
        let groups = store.ai_search().await.movie_results.unwrap();
        assert_eq!(groups[0].len(), 1);
        assert!(groups[1].is_empty());
        assert!(groups[2].is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_does_nothing() {
        let store = Store::new();
        let mut model = MockGenerativeModel::new();
        model.expect_generate().times(0);
        let mut catalog = MockCatalogProvider::new();
        catalog.expect_search_movies().times(0);

        let outcome =
            run_search(&store, Arc::new(model), Arc::new(catalog), &settings(), "   ").await;

        assert_eq!(outcome, SearchOutcome::EmptyQuery);
        assert!(store.ai_search().await.show_welcome);
    }

    #[tokio::test]
    async fn test_blank_candidate_is_not_looked_up() {
        let store = Store::new();
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_search_movies()
            .times(1)
            .returning(|_| Ok(vec![movie(1, "War")]));

        run_search(
            &store,
            model_replying("War, "),
            Arc::new(catalog),
            &settings(),
            "action",
        )
        .await;

        let groups = store.ai_search().await.movie_results.unwrap();
        assert_eq!(groups, vec![vec![movie(1, "War")], vec![]]);
    }
}
