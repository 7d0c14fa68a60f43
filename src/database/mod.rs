use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

mod game;
mod player;
mod request_error;
pub mod requests;

pub use game::{CustomGame, Game, RiskGame};
pub use player::{GeoPoint, Interest, Player, PointKind};
pub use request_error::*;

/// Handle to the two collections backing the service. Built once at startup
/// and injected into every route handler through Rocket's managed state.
pub struct Store {
    players: Collection<Player>,
    games: Collection<Game>,
}

impl Store {
    /// Opens a client for `url` and binds the `player` and `game` collections
    /// of `db_name`. The driver connects lazily, so this succeeds even before
    /// the store is reachable.
    pub async fn connect(url: &str, db_name: &str) -> mongodb::error::Result<Self> {
        let client = Client::with_uri_str(url).await?;
        let db = client.database(db_name);

        Ok(Self {
            players: db.collection("player"),
            games: db.collection("game"),
        })
    }

    /// Inserts a player and returns it with the store-assigned identity.
    pub async fn add_player(&self, mut player: Player) -> mongodb::error::Result<Player> {
        let inserted = self.players.insert_one(&player, None).await?;
        player.id = inserted.inserted_id.as_object_id();
        Ok(player)
    }

    /// Fetches players, optionally narrowed to those whose interest set
    /// contains `interest`. Order is whatever the store returns.
    pub async fn players(&self, interest: Option<Interest>) -> mongodb::error::Result<Vec<Player>> {
        let filter = interest.map(|interest| doc! { "interest": interest.as_str() });
        let cursor = self.players.find(filter, None).await?;
        cursor.try_collect().await
    }

    /// Inserts a game and returns it with the store-assigned identity.
    pub async fn create_game(&self, mut game: Game) -> mongodb::error::Result<Game> {
        let inserted = self.games.insert_one(&game, None).await?;
        game.id = inserted.inserted_id.as_object_id();
        Ok(game)
    }
}
