//! Brazilian Portuguese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppTitle, "Movie Cards Library");

    // Search bar
    m.insert(Key::SearchTextLabel, "Inclui o texto");
    m.insert(Key::SearchPlaceholder, "Título, subtítulo ou sinopse...");
    m.insert(Key::BookmarkedOnlyLabel, "Mostrar somente favoritos");
    m.insert(Key::GenreFilterLabel, "Filtrar por gênero");
    m.insert(Key::GenreAll, "Todos");

    // Genres
    m.insert(Key::GenreAction, "Ação");
    m.insert(Key::GenreComedy, "Comédia");
    m.insert(Key::GenreThriller, "Suspense");

    // Movie list
    m.insert(Key::NoMoviesMatch, "Nenhum filme encontrado");
    m.insert(Key::LoadingCatalog, "Carregando catálogo...");
    m.insert(Key::Bookmarked, "Favorito");

    // Add movie form
    m.insert(Key::AddMovieTitle, "Novo filme");
    m.insert(Key::TitleLabel, "Título");
    m.insert(Key::SubtitleLabel, "Subtítulo");
    m.insert(Key::ImageLabel, "Imagem");
    m.insert(Key::StorylineLabel, "Sinopse");
    m.insert(Key::RatingLabel, "Avaliação");
    m.insert(Key::GenreLabel, "Gênero");
    m.insert(Key::AddMovieButton, "Adicionar filme");

    // Toasts
    m.insert(Key::MovieAdded, "Filme adicionado");
    m.insert(
        Key::CatalogLoadFailed,
        "Não foi possível carregar o catálogo, usando o catálogo padrão",
    );
    m.insert(Key::SettingsSaveFailed, "Não foi possível salvar as preferências");

    // Preferences
    m.insert(Key::DarkMode, "Modo escuro");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
