mod favorites;

pub use favorites::FavoritesError;
pub use favorites::FavoritesManager;
