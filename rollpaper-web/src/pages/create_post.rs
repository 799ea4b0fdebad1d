//! Composer for a new note on a club's board.

use crate::components::button::{Button, ButtonSize};
use crate::components::header::PageHeader;
use rollpaper_core::constants::MSG_LOADING;
use rollpaper_core::{Category, ClubHeading, NoteColor, PostDraft};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Nickname,
    Category,
    Color,
    Content,
}

impl DraftField {
    /// Write `value` into the matching draft field.
    pub fn apply(self, draft: &mut PostDraft, value: String) {
        match self {
            Self::Nickname => draft.nickname = value,
            Self::Category => draft.category = value,
            Self::Color => draft.color = value,
            Self::Content => draft.content = value,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ComposerViewProps {
    /// `None` while the club is loading.
    pub heading: Option<ClubHeading>,
    pub draft: PostDraft,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub busy: bool,
    pub on_field: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
    pub on_back: Callback<()>,
}

fn text_input(field: DraftField, cb: &Callback<(DraftField, String)>) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
            cb.emit((field, input.value()));
        } else if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
            cb.emit((field, area.value()));
        }
    })
}

#[function_component(ComposerView)]
pub fn composer_view(p: &ComposerViewProps) -> Html {
    let heading = match &p.heading {
        None => html! { <div class="spinner" role="status" aria-label={MSG_LOADING}></div> },
        Some(heading) => {
            let failed = !matches!(heading, ClubHeading::Title(_));
            html! {
                <h2 class={classes!("composer__heading", failed.then_some("composer__heading--error"))}>
                    { heading.text() }
                </h2>
            }
        }
    };

    let on_category = {
        let cb = p.on_field.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit((DraftField::Category, select.value()));
            }
        })
    };
    let swatches = NoteColor::ALL.into_iter().map(|color| {
        let cb = p.on_field.clone();
        let onclick = Callback::from(move |_| cb.emit((DraftField::Color, color.as_str().to_string())));
        let selected = p.draft.color == color.as_str();
        html! {
            <button
                type="button"
                class={classes!("swatch", selected.then_some("swatch--selected"))}
                style={format!("background-color:{};", color.css())}
                aria-label={color.as_str()}
                aria-pressed={selected.to_string()}
                {onclick}
            />
        }
    });
    let onsubmit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    html! {
        <main class="composer">
            <PageHeader title={AttrValue::Static("글쓰기")} on_back={Some(p.on_back.clone())} />
            { heading }
            <form class="composer__form" {onsubmit}>
                <label for="post-nickname">{ "닉네임" }</label>
                <input
                    id="post-nickname"
                    type="text"
                    value={p.draft.nickname.clone()}
                    oninput={text_input(DraftField::Nickname, &p.on_field)}
                />
                <label for="post-category">{ "카테고리" }</label>
                <select id="post-category" onchange={on_category}>
                    { for Category::ALL.into_iter().map(|category| html! {
                        <option
                            value={category.label()}
                            selected={p.draft.category == category.label()}
                        >
                            { category.label() }
                        </option>
                    }) }
                </select>
                <fieldset class="composer__colors">
                    <legend>{ "배경색" }</legend>
                    { for swatches }
                </fieldset>
                <label for="post-content">{ "내용" }</label>
                <textarea
                    id="post-content"
                    value={p.draft.content.clone()}
                    oninput={text_input(DraftField::Content, &p.on_field)}
                />
                { p.error.as_ref().map(|msg| html! {
                    <p class="field-error" role="alert">{ msg.clone() }</p>
                }).unwrap_or_default() }
                <Button
                    label="작성 완료"
                    kind="submit"
                    size={ButtonSize::Large}
                    disabled={p.busy || !p.draft.is_complete()}
                />
            </form>
        </main>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CreatePostPageProps {
    pub club_id: AttrValue,
}

#[cfg(target_arch = "wasm32")]
#[function_component(CreatePostPage)]
pub fn create_post_page(props: &CreatePostPageProps) -> Html {
    use crate::router::Route;
    use crate::session::use_session;
    use rollpaper_core::constants::MSG_POST_FAILED;
    use rollpaper_core::{AppPath, ClubStore, ComposeError, submit_post};
    use wasm_bindgen_futures::spawn_local;
    use yew_router::prelude::*;

    let session = use_session();
    let navigator = use_navigator();
    let heading = use_state(|| None::<ClubHeading>);
    let draft = use_state(PostDraft::default);
    let error = use_state(|| None::<AttrValue>);
    let busy = use_state(|| false);

    {
        let heading = heading.clone();
        let session = session.clone();
        use_effect_with(props.club_id.clone(), move |club_id| {
            heading.set(None);
            match session.client() {
                Ok(client) => {
                    let club_id = club_id.to_string();
                    spawn_local(async move {
                        let result = client.fetch_guests(&club_id).await;
                        if let Err(err) = &result {
                            log::warn!("guest payload for club {club_id} failed: {err}");
                        }
                        heading.set(Some(ClubHeading::from_result(&result)));
                    });
                }
                Err(err) => heading.set(Some(ClubHeading::Failed(err.to_string()))),
            }
            || {}
        });
    }

    let on_field = {
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |(field, value): (DraftField, String)| {
            let mut next = (*draft).clone();
            field.apply(&mut next, value);
            error.set(None);
            draft.set(next);
        })
    };
    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let draft = draft.clone();
        let error = error.clone();
        let busy = busy.clone();
        let club_id = props.club_id.to_string();
        Callback::from(move |()| {
            if *busy {
                return;
            }
            let client = match session.client() {
                Ok(client) => client,
                Err(err) => {
                    log::error!("backend is not configured: {err}");
                    error.set(Some(AttrValue::Static(MSG_POST_FAILED)));
                    return;
                }
            };
            let navigator = navigator.clone();
            let draft = (*draft).clone();
            let error = error.clone();
            let busy = busy.clone();
            let club_id = club_id.clone();
            busy.set(true);
            spawn_local(async move {
                let result = submit_post(&client, &club_id, &draft).await;
                busy.set(false);
                match result {
                    Ok(path) => {
                        if let Some(nav) = navigator.as_ref() {
                            nav.push(&Route::from(path));
                        }
                    }
                    Err(ComposeError::Backend(err)) => {
                        log::warn!("note insert failed: {err}");
                        error.set(Some(AttrValue::Static(MSG_POST_FAILED)));
                    }
                    Err(invalid) => log::debug!("draft rejected: {invalid}"),
                }
            });
        })
    };
    let on_back = {
        let club_id = props.club_id.to_string();
        Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::from(AppPath::ClubBoard(club_id.clone())));
            }
        })
    };

    html! {
        <ComposerView
            heading={(*heading).clone()}
            draft={(*draft).clone()}
            error={(*error).clone()}
            busy={*busy}
            {on_field}
            {on_submit}
            {on_back}
        />
    }
}
