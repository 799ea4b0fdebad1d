//! Club list with client-side pagination.

use crate::components::club_card::ClubCard;
use crate::components::header::PageHeader;
use crate::components::pagination::Pagination;
use rollpaper_core::constants::{CLUBS_PER_PAGE, MSG_LOADING};
use rollpaper_core::{Club, club_page, page_count};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClubListViewProps {
    /// `None` until the first load finishes.
    pub clubs: Option<Vec<Club>>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Zero-based.
    pub page: usize,
    pub on_page: Callback<usize>,
    pub on_select: Callback<String>,
    pub on_create: Callback<()>,
}

#[function_component(ClubListView)]
pub fn club_list_view(p: &ClubListViewProps) -> Html {
    let on_create = {
        let cb = p.on_create.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let body = match (&p.clubs, &p.error) {
        (_, Some(error)) => html! { <p class="clubs__error" role="alert">{ error.clone() }</p> },
        (None, None) => html! { <p class="clubs__status">{ MSG_LOADING }</p> },
        (Some(clubs), None) => {
            let pages = page_count(clubs.len(), CLUBS_PER_PAGE);
            html! {
                <>
                    <ul class="clubs__grid">
                        { for club_page(clubs, p.page).iter().map(|club| html! {
                            <ClubCard key={club.id.clone()} club={club.clone()} on_select={p.on_select.clone()} />
                        }) }
                    </ul>
                    <Pagination page={p.page} {pages} on_change={p.on_page.clone()} />
                </>
            }
        }
    };

    html! {
        <main class="clubs">
            <PageHeader title={AttrValue::Static("모임 목록")} />
            { body }
            <button type="button" class="btn btn--large clubs__create" onclick={on_create}>
                { "모임 만들기" }
            </button>
        </main>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(ClubsPage)]
pub fn clubs_page() -> Html {
    use crate::router::Route;
    use crate::session::use_session;
    use rollpaper_core::load_clubs;
    use wasm_bindgen_futures::spawn_local;
    use yew_router::prelude::*;

    let session = use_session();
    let navigator = use_navigator();
    let clubs = use_state(|| None::<Vec<Club>>);
    let error = use_state(|| None::<AttrValue>);
    let page = use_state(|| 0_usize);

    {
        let session = session.clone();
        let clubs = clubs.clone();
        let error = error.clone();
        use_effect_with(session.clubs.generation(), move |_| {
            let mut cache = (*session.clubs).clone();
            match session.client() {
                Ok(client) => spawn_local(async move {
                    let cold = cache.get().is_none();
                    match load_clubs(&client, &mut cache).await {
                        Ok(list) => {
                            if cold {
                                session.set_clubs(cache);
                            }
                            error.set(None);
                            clubs.set(Some(list));
                        }
                        Err(err) => {
                            log::warn!("club list unavailable: {err}");
                            error.set(Some(AttrValue::from(err.message().to_string())));
                        }
                    }
                }),
                Err(err) => {
                    log::error!("backend is not configured: {err}");
                    error.set(Some(AttrValue::from(err.to_string())));
                }
            }
            || {}
        });
    }

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: usize| page.set(next))
    };
    let on_select = {
        let navigator = navigator.clone();
        Callback::from(move |club_id: String| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::ClubBoard { club_id });
            }
        })
    };
    let on_create = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::CreateClub);
        }
    });

    html! {
        <ClubListView
            clubs={(*clubs).clone()}
            error={(*error).clone()}
            page={*page}
            {on_page}
            {on_select}
            {on_create}
        />
    }
}
