use rollpaper_core::Club;
use rollpaper_core::constants::MSG_LOADING;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `None` while the club is still loading.
    pub club: Option<Club>,
}

/// Thumbnail and name shown at the top of a board.
#[function_component(ClubTitle)]
pub fn club_title(p: &Props) -> Html {
    let Some(club) = p.club.as_ref() else {
        return html! { <div class="club-title">{ MSG_LOADING }</div> };
    };
    html! {
        <div class="club-title">
            { club.thumbnail.as_ref().map(|src| html! {
                <img class="club-title__thumb" src={src.clone()} alt="Thumbnail" />
            }).unwrap_or_default() }
            <span class="club-title__name">{ format!("{} 모임", club.title) }</span>
        </div>
    }
}
