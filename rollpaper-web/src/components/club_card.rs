use rollpaper_core::Club;
use rollpaper_core::constants::DEFAULT_CLUB_IMAGE_URL;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub club: Club,
    pub on_select: Callback<String>,
}

#[function_component(ClubCard)]
pub fn club_card(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_select.clone();
        let id = p.club.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let thumbnail = p
        .club
        .thumbnail
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_CLUB_IMAGE_URL.to_string());
    html! {
        <li class="club-card" {onclick}>
            <img class="club-card__thumb" src={thumbnail} alt={p.club.title.clone()} />
            <span class="club-card__title">{ p.club.title.clone() }</span>
        </li>
    }
}
