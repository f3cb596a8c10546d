//! Movie library - the authoritative movie list plus the active filters
//!
//! Once seeded, the list only grows at the tail, so a movie's position is a
//! stable identifier for the rest of the session. The filtered view is derived
//! on demand and never cached.

use super::movie::{Genre, Movie};

/// Criteria controlling which movies are shown
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Substring matched against title, subtitle and storyline
    pub search_text: String,
    /// Only show bookmarked movies
    pub bookmarked_only: bool,
    /// `None` means any genre
    pub selected_genre: Option<Genre>,
}

impl FilterCriteria {
    fn accepts(&self, movie: &Movie, needle: &str) -> bool {
        movie.mentions(needle)
            && (!self.bookmarked_only || movie.bookmarked)
            && self.selected_genre.is_none_or(|genre| movie.genre == genre)
    }
}

/// Stable filter of `movies` by `criteria`, paired with each movie's position
pub fn filter_movies<'a>(
    movies: &'a [Movie],
    criteria: &FilterCriteria,
) -> Vec<(usize, &'a Movie)> {
    let needle = criteria.search_text.to_lowercase();
    movies
        .iter()
        .enumerate()
        .filter(|(_, movie)| criteria.accepts(movie, &needle))
        .collect()
}

/// Owner of the movie list and filter criteria
#[derive(Debug, Clone, Default)]
pub struct MovieLibrary {
    movies: Vec<Movie>,
    criteria: FilterCriteria,
    seeded: bool,
}

impl MovieLibrary {
    /// Seed the library with its initial catalog.
    ///
    /// Seeding happens once. Movies added before the catalog arrived stay
    /// after the seeded ones, in the order they were added. Returns `false`
    /// if the library was already seeded.
    pub fn seed(&mut self, movies: Vec<Movie>) -> bool {
        if self.seeded {
            return false;
        }
        let added = std::mem::replace(&mut self.movies, movies);
        self.movies.extend(added);
        self.seeded = true;
        true
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Append a movie to the end of the list, unconditionally
    pub fn add_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
    }

    pub fn set_bookmarked_only(&mut self, bookmarked_only: bool) {
        self.criteria.bookmarked_only = bookmarked_only;
    }

    pub fn set_selected_genre(&mut self, genre: Option<Genre>) {
        self.criteria.selected_genre = genre;
    }

    /// Movies passing the current criteria, with their position in the list
    pub fn visible(&self) -> Vec<(usize, &Movie)> {
        filter_movies(&self.movies, &self.criteria)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(
        title: &str,
        subtitle: &str,
        storyline: &str,
        genre: Genre,
        bookmarked: bool,
    ) -> Movie {
        Movie {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            storyline: storyline.to_string(),
            image_path: String::new(),
            rating: 4.5,
            genre,
            bookmarked,
        }
    }

    fn fixture() -> Vec<Movie> {
        vec![
            movie(
                "An awesome title",
                "Movie Subtitle 1",
                "Movie Storyline 1",
                Genre::Action,
                true,
            ),
            movie(
                "Movie Title 2",
                "An incredible subtitle",
                "Movie Storyline 2",
                Genre::Comedy,
                false,
            ),
            movie(
                "Movie Title 3",
                "Movie Subtitle 3",
                "An great storyline",
                Genre::Thriller,
                false,
            ),
        ]
    }

    fn seeded(movies: Vec<Movie>) -> MovieLibrary {
        let mut library = MovieLibrary::default();
        library.seed(movies);
        library
    }

    fn visible_titles(library: &MovieLibrary) -> Vec<&str> {
        library
            .visible()
            .into_iter()
            .map(|(_, m)| m.title.as_str())
            .collect()
    }

    #[test]
    fn default_criteria_show_everything_in_order() {
        let library = seeded(fixture());
        assert_eq!(*library.criteria(), FilterCriteria::default());
        assert_eq!(
            visible_titles(&library),
            vec!["An awesome title", "Movie Title 2", "Movie Title 3"]
        );
    }

    #[test]
    fn search_matches_title() {
        let mut library = seeded(fixture());
        library.set_search_text("awesome");
        assert_eq!(visible_titles(&library), vec!["An awesome title"]);
    }

    #[test]
    fn search_matches_subtitle() {
        let mut library = seeded(fixture());
        library.set_search_text("incredible");
        assert_eq!(visible_titles(&library), vec!["Movie Title 2"]);
    }

    #[test]
    fn search_matches_storyline() {
        let mut library = seeded(fixture());
        library.set_search_text("great");
        assert_eq!(visible_titles(&library), vec!["Movie Title 3"]);
    }

    #[test]
    fn search_ignores_case() {
        let mut library = seeded(fixture());
        library.set_search_text("AWESOME");
        assert_eq!(visible_titles(&library), vec!["An awesome title"]);
    }

    #[test]
    fn bookmarked_only_keeps_bookmarked() {
        let mut library = seeded(fixture());
        library.set_bookmarked_only(true);
        assert_eq!(visible_titles(&library), vec!["An awesome title"]);
    }

    #[test]
    fn genre_filter_is_exact() {
        let mut library = seeded(fixture());
        library.set_selected_genre(Some(Genre::Comedy));
        assert_eq!(visible_titles(&library), vec!["Movie Title 2"]);

        library.set_selected_genre(None);
        assert_eq!(library.visible().len(), 3);
    }

    #[test]
    fn criteria_combine_with_and() {
        let mut library = seeded(fixture());
        library.set_search_text("movie");
        library.set_selected_genre(Some(Genre::Thriller));
        assert_eq!(visible_titles(&library), vec!["Movie Title 3"]);

        library.set_bookmarked_only(true);
        assert!(library.visible().is_empty());
    }

    #[test]
    fn visible_matches_predicates_for_every_combination() {
        let movies = fixture();
        let searches = ["", "awesome", "movie", "subtitle", "nothing"];
        let genres = [None, Some(Genre::Action), Some(Genre::Comedy), Some(Genre::Thriller)];

        for search in searches {
            for bookmarked_only in [false, true] {
                for genre in genres {
                    let criteria = FilterCriteria {
                        search_text: search.to_string(),
                        bookmarked_only,
                        selected_genre: genre,
                    };
                    let expected: Vec<(usize, &Movie)> = movies
                        .iter()
                        .enumerate()
                        .filter(|(_, m)| {
                            let needle = search.to_lowercase();
                            (m.title.to_lowercase().contains(&needle)
                                || m.subtitle.to_lowercase().contains(&needle)
                                || m.storyline.to_lowercase().contains(&needle))
                                && (!bookmarked_only || m.bookmarked)
                                && genre.map(|g| g == m.genre).unwrap_or(true)
                        })
                        .collect();
                    assert_eq!(filter_movies(&movies, &criteria), expected);
                }
            }
        }
    }

    #[test]
    fn add_movie_appends_at_tail() {
        let mut library = seeded(fixture());
        let before = library.movies().to_vec();
        let new_movie = movie("Harry Potter VII", "", "Harry dies", Genre::Action, false);

        library.add_movie(new_movie.clone());

        assert_eq!(library.len(), before.len() + 1);
        assert_eq!(library.movies().last(), Some(&new_movie));
        assert_eq!(&library.movies()[..before.len()], before.as_slice());
    }

    #[test]
    fn add_movie_accepts_duplicates() {
        let mut library = seeded(fixture());
        let first = library.movies()[0].clone();
        library.add_movie(first);
        assert_eq!(library.len(), 4);
    }

    #[test]
    fn added_movies_respect_active_filters() {
        let mut library = seeded(fixture());
        library.set_bookmarked_only(true);
        library.add_movie(movie("Fresh", "", "", Genre::Action, false));
        assert_eq!(visible_titles(&library), vec!["An awesome title"]);
    }

    #[test]
    fn visible_positions_index_into_full_list() {
        let mut library = seeded(fixture());
        library.set_selected_genre(Some(Genre::Thriller));
        let visible = library.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, 2);
    }

    #[test]
    fn seed_runs_once_and_keeps_early_additions_last() {
        let mut library = MovieLibrary::default();
        assert!(!library.is_seeded());
        library.add_movie(movie("Early", "", "", Genre::Comedy, false));

        assert!(library.seed(fixture()));
        assert_eq!(library.len(), 4);
        assert_eq!(library.movies()[3].title, "Early");

        assert!(!library.seed(fixture()));
        assert_eq!(library.len(), 4);
    }
}
