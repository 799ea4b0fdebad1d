use anyhow::Result;
use rand_chacha::ChaCha8Rng;

mod board;
mod flows;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    GridLayout,
    DragThreshold,
    ClickNavigation,
    RelocationToggle,
    StaleLoad,
    ClubCreate,
    AuthRedirect,
    ComposePost,
}

impl Scenario {
    pub const ALL: [Self; 8] = [
        Self::GridLayout,
        Self::DragThreshold,
        Self::ClickNavigation,
        Self::RelocationToggle,
        Self::StaleLoad,
        Self::ClubCreate,
        Self::AuthRedirect,
        Self::ComposePost,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::GridLayout => "grid-layout",
            Self::DragThreshold => "drag-threshold",
            Self::ClickNavigation => "click-navigation",
            Self::RelocationToggle => "relocation-toggle",
            Self::StaleLoad => "stale-load",
            Self::ClubCreate => "club-create",
            Self::AuthRedirect => "auth-redirect",
            Self::ComposePost => "compose-post",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::GridLayout => "Fetched notes land on the two-column grid",
            Self::DragThreshold => "Wiggles inside the threshold never move a note",
            Self::ClickNavigation => "Press and release opens the note exactly once",
            Self::RelocationToggle => "Leaving relocation mid-drag commits only the dragged note",
            Self::StaleLoad => "An older board fetch never replaces a newer one",
            Self::ClubCreate => "Club creation: validation, upload, notices, list refresh",
            Self::AuthRedirect => "Social redirect to onboarding, sign-in and halt",
            Self::ComposePost => "Post validation, insert and return to the board",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == name)
    }

    /// Run one iteration with pointer traces and fixtures drawn from `rng`.
    pub async fn run(self, rng: &mut ChaCha8Rng) -> Result<()> {
        match self {
            Self::GridLayout => board::grid_layout(rng),
            Self::DragThreshold => board::drag_threshold(rng),
            Self::ClickNavigation => board::click_navigation(rng),
            Self::RelocationToggle => board::relocation_toggle(rng),
            Self::StaleLoad => board::stale_load(rng),
            Self::ClubCreate => flows::club_create(rng).await,
            Self::AuthRedirect => flows::auth_redirect(rng).await,
            Self::ComposePost => flows::compose_post(rng).await,
        }
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    Scenario::ALL
        .into_iter()
        .map(|s| (s.key(), s.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::parse(scenario.key()), Some(scenario));
        }
        assert_eq!(Scenario::parse("smoke"), None);
    }

    #[test]
    fn listing_covers_every_scenario() {
        let listed = list_scenarios();
        assert_eq!(listed.len(), Scenario::ALL.len());
        assert!(listed.iter().any(|(key, _)| *key == "stale-load"));
    }
}
