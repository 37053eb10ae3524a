//! # Catalog Commands
//!
//! Show listing, search and lookup. Read-only; they never touch the
//! selection.

use serde::{Deserialize, Serialize};
use showtime_core::validation::{validate_search_query, validate_show_date, validate_show_id};
use showtime_core::{Category, Money, ShowFilter, ShowRecord};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Show DTO for front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDto {
    pub id: String,
    pub title: String,
    pub category: Category,
    /// `YYYY-MM-DD`
    pub date: String,
    pub location: String,
    pub venue: String,
    pub price: Money,
    pub image_url: Option<String>,
}

impl From<&ShowRecord> for ShowDto {
    fn from(show: &ShowRecord) -> Self {
        ShowDto {
            id: show.id.clone(),
            title: show.title.clone(),
            category: show.category,
            date: show.date.format("%Y-%m-%d").to_string(),
            location: show.location.clone(),
            venue: show.venue.clone(),
            price: show.price,
            image_url: show.image_url.clone(),
        }
    }
}

/// Lists every show in catalog order.
pub fn list_shows(session: &SessionState) -> Vec<ShowDto> {
    debug!("list_shows command");
    session.with_session(|s| s.catalog().list_shows().iter().map(ShowDto::from).collect())
}

/// Searches the catalog.
///
/// ## Arguments
/// * `location` - Text matched against location and venue (case-insensitive)
/// * `date` - Exact show date, `YYYY-MM-DD`
/// * `genre` - Genre from the search form
/// * `category` - Category chip; `movie`, `concert`, `theatre`, `comedy` or `sports`
///
/// Unset or blank criteria match every show. `genre` and `category` are
/// separate criteria, both must hold.
pub fn search_shows(
    session: &SessionState,
    location: Option<String>,
    date: Option<String>,
    genre: Option<String>,
    category: Option<String>,
) -> Result<Vec<ShowDto>, ApiError> {
    debug!(?location, ?date, ?genre, ?category, "search_shows command");

    let filter = ShowFilter {
        location: validate_search_query(location.as_deref().unwrap_or(""))?,
        date: date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(validate_show_date)
            .transpose()?,
        genre: parse_category(genre.as_deref())?,
        category: parse_category(category.as_deref())?,
    };

    Ok(session.with_session(|s| {
        s.catalog()
            .search(&filter)
            .into_iter()
            .map(ShowDto::from)
            .collect()
    }))
}

fn parse_category(value: Option<&str>) -> Result<Option<Category>, ApiError> {
    Ok(value
        .filter(|c| !c.trim().is_empty())
        .map(str::parse::<Category>)
        .transpose()?)
}

/// Gets one show by id.
pub fn get_show(session: &SessionState, id: String) -> Result<ShowDto, ApiError> {
    debug!(id = %id, "get_show command");
    validate_show_id(&id)?;

    session.with_session(|s| {
        let show = s.catalog().require_show(id.trim())?;
        Ok(ShowDto::from(show))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use showtime_core::{BookingSession, Catalog, GridConfig, RngSource};

    fn session() -> SessionState {
        SessionState::new(BookingSession::new(
            Catalog::showcase(),
            GridConfig::default(),
            RngSource::seeded(1),
        ))
    }

    #[test]
    fn test_list_shows_in_catalog_order() {
        let shows = list_shows(&session());
        assert_eq!(shows.len(), 8);
        assert_eq!(shows[0].id, "mv-neo-noir");
        assert_eq!(shows[0].date, "2025-10-15");
        assert_eq!(shows[0].price, Money::from_major(15));
    }

    #[test]
    fn test_search_by_location_and_category() {
        let session = session();
        let hits = search_shows(&session, Some("london".into()), None, None, None).unwrap();
        assert_eq!(
            hits.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec!["th-hamlet"]
        );

        let movies = search_shows(&session, None, None, None, Some("movie".into())).unwrap();
        assert_eq!(movies.len(), 2);

        let all = search_shows(&session, Some("  ".into()), Some(String::new()), None, None).unwrap();
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_search_rejects_bad_input() {
        let session = session();
        let err = search_shows(&session, None, Some("18/10/2025".into()), None, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = search_shows(&session, None, None, Some("opera".into()), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_search_genre_and_category_are_separate_criteria() {
        let session = session();
        let both = search_shows(
            &session,
            None,
            None,
            Some("comedy".into()),
            Some("comedy".into()),
        )
        .unwrap();
        assert_eq!(both.len(), 1);

        let clash = search_shows(
            &session,
            None,
            None,
            Some("comedy".into()),
            Some("sports".into()),
        )
        .unwrap();
        assert!(clash.is_empty());
    }

    #[test]
    fn test_get_show() {
        let session = session();
        let show = get_show(&session, "th-hamlet".into()).unwrap();
        assert_eq!(show.venue, "Globe Theatre");

        let err = get_show(&session, "th-macbeth".into()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Show not found: th-macbeth");

        let err = get_show(&session, "".into()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
