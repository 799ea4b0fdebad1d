//! One note, opened from the board.

use crate::components::header::PageHeader;
use rollpaper_core::Note;
use rollpaper_core::constants::{MSG_BOARD_EMPTY, MSG_LOADING};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Found(Note),
    Missing,
}

#[derive(Properties, PartialEq, Clone)]
pub struct PostDetailViewProps {
    pub state: DetailState,
    pub on_back: Callback<()>,
}

#[function_component(PostDetailView)]
pub fn post_detail_view(p: &PostDetailViewProps) -> Html {
    let body = match &p.state {
        DetailState::Loading => html! { <p class="detail__status">{ MSG_LOADING }</p> },
        DetailState::Missing => html! { <p class="detail__status">{ MSG_BOARD_EMPTY }</p> },
        DetailState::Found(note) => html! {
            <article class="detail__note" style={format!("background-color:{};", note.background())}>
                <span class="note__category">{ note.category.clone() }</span>
                <p class="note__content">{ note.content.clone() }</p>
                <p class="note__author">{ format!("From. {}", note.nickname) }</p>
            </article>
        },
    };
    html! {
        <main class="detail">
            <PageHeader on_back={Some(p.on_back.clone())} />
            { body }
        </main>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PostDetailPageProps {
    pub club_id: AttrValue,
    pub post_id: rollpaper_core::NoteId,
}

#[cfg(target_arch = "wasm32")]
#[function_component(PostDetailPage)]
pub fn post_detail_page(props: &PostDetailPageProps) -> Html {
    use crate::router::Route;
    use crate::session::use_session;
    use rollpaper_core::{AppPath, NoteStore};
    use wasm_bindgen_futures::spawn_local;
    use yew_router::prelude::*;

    let session = use_session();
    let navigator = use_navigator();
    let state = use_state(|| DetailState::Loading);

    {
        let state = state.clone();
        use_effect_with((props.club_id.clone(), props.post_id), move |(club_id, post_id)| {
            let post_id = *post_id;
            state.set(DetailState::Loading);
            match session.client() {
                Ok(client) => {
                    let club_id = club_id.to_string();
                    spawn_local(async move {
                        let found = match client.list_notes(&club_id).await {
                            Ok(notes) => notes.into_iter().find(|n| n.id == post_id),
                            Err(err) => {
                                log::warn!("notes for club {club_id} unavailable: {err}");
                                None
                            }
                        };
                        state.set(found.map_or(DetailState::Missing, DetailState::Found));
                    });
                }
                Err(err) => {
                    log::error!("backend is not configured: {err}");
                    state.set(DetailState::Missing);
                }
            }
            || {}
        });
    }

    let on_back = {
        let club_id = props.club_id.to_string();
        Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::from(AppPath::ClubBoard(club_id.clone())));
            }
        })
    };

    html! { <PostDetailView state={(*state).clone()} {on_back} /> }
}
