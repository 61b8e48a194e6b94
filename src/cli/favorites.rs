use tabled::Table;

use crate::{
    error, info, management::FavoritesManager, success, types::FavoriteTableRow,
};

pub async fn list_favorites() {
    let favorites = FavoritesManager::load().await;

    if favorites.count() == 0 {
        info!("No favorites saved yet.");
        return;
    }

    let rows: Vec<FavoriteTableRow> = favorites
        .ids()
        .iter()
        .map(|id| FavoriteTableRow { artist_id: *id })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

pub async fn toggle_favorite(artist_id: u32) {
    let mut favorites = FavoritesManager::load().await;
    let added = favorites.toggle(artist_id);

    if let Err(e) = favorites.persist().await {
        error!("Failed to save favorites. Err: {:?}", e);
    }

    if added {
        success!("Added artist {} to favorites.", artist_id);
    } else {
        success!("Removed artist {} from favorites.", artist_id);
    }
}
