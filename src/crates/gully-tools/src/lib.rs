//! Cricket domain tools for the gully agent
//!
//! Stub implementations of the tools the agent exposes to the model:
//! match listings, team rankings, player statistics, and preferred-team
//! read/update. [`registry`] assembles them into a dispatch table ready to
//! hand to the graph runtime.
//!
//! ```rust
//! let registry = gully_tools::registry();
//! assert!(registry.get("get_team_rankings").is_some());
//! ```

pub mod matches;
pub mod players;
pub mod preferences;
pub mod rankings;

pub use matches::UpcomingMatches;
pub use players::PlayerStats;
pub use preferences::{GetPreferredTeam, UpdatePreferredTeam};
pub use rankings::TeamRankings;

use gully_graph::tool::ToolRegistry;
use std::sync::Arc;

/// Build the registry with the full cricket tool set.
pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(UpcomingMatches));
    registry.register(Arc::new(TeamRankings));
    registry.register(Arc::new(PlayerStats));
    registry.register(Arc::new(GetPreferredTeam));
    registry.register(Arc::new(UpdatePreferredTeam));
    registry
}
