//! The business collaborator seam.
//!
//! Every subcommand handler delegates here. The bridge only routes;
//! downloading files, rendering, item handling and scoreboard logic live
//! behind this trait in the embedding application.

use mural_cmd::{ImageFlags, ImageRef, Player, PlayerRef, Sender, WorldRef};

/// Horizontal region a clear operation is anchored to.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearArea {
    /// Block X coordinate of the origin.
    pub x: i64,
    /// Block Z coordinate of the origin.
    pub z: i64,
    /// World the origin lies in.
    pub world: WorldRef,
    /// Radius around the origin, in blocks.
    pub radius: i64,
}

/// Image operations invoked through the command surface.
///
/// `width`/`height` of `0` request auto-sizing, resolved by the
/// implementation.
pub trait ImageService: Send + Sync {
    /// Remove placed images around an origin. `placed_by` restricts the
    /// clear to one player's placements; `None` clears everyone's.
    fn clear_images(&self, sender: &dyn Sender, area: ClearArea, placed_by: Option<PlayerRef>);

    /// Tell the player about the placed image they are looking at.
    fn describe_image(&self, player: &dyn Player);

    /// Fetch a remote image into the file registry.
    fn download_image(&self, sender: &dyn Sender, url: &str, filename: &str);

    /// Hand a player placeable image items.
    #[allow(clippy::too_many_arguments)]
    fn give_image_items(
        &self,
        sender: &dyn Sender,
        recipient: &PlayerRef,
        image: &ImageRef,
        amount: i64,
        width: u32,
        height: u32,
        flags: ImageFlags,
    );

    /// List stored image files, paginated.
    fn list_images(&self, sender: &dyn Sender, page: i64);

    /// Place an image where the player is looking.
    fn place_image(
        &self,
        player: &dyn Player,
        image: &ImageRef,
        width: u32,
        height: u32,
        flags: ImageFlags,
    );

    /// Remove the placed image the player is looking at.
    fn remove_image(&self, player: &dyn Player);

    /// Show the players with the most placed images.
    fn show_top_players(&self, sender: &dyn Sender);
}
