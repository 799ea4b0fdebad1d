//! New club form: title plus an optional thumbnail.

use crate::components::button::{Button, ButtonSize};
use crate::components::header::PageHeader;
use crate::components::modal::Modal;
use rollpaper_core::Notice;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CreateClubFormProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub file_name: Option<AttrValue>,
    /// Inline validation message under the title field.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub notice: Option<Notice>,
    pub on_title: Callback<String>,
    pub on_file: Callback<Event>,
    pub on_submit: Callback<()>,
    pub on_confirm: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(CreateClubForm)]
pub fn create_club_form(p: &CreateClubFormProps) -> Html {
    let oninput = {
        let cb = p.on_title.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let onsubmit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let notice = p.notice.as_ref().map(|notice| {
        html! {
            <Modal
                open=true
                title={notice.title.clone()}
                on_close={p.on_confirm.clone()}
                on_confirm={Some(p.on_confirm.clone())}
            >
                <p class="notice__message">{ notice.message.clone() }</p>
            </Modal>
        }
    });

    html! {
        <main class="create-club">
            <PageHeader title={AttrValue::Static("모임 만들기")} on_back={Some(p.on_back.clone())} />
            <form class="create-club__form" {onsubmit}>
                <label for="club-title">{ "모임명" }</label>
                <input
                    id="club-title"
                    type="text"
                    value={p.title.clone()}
                    placeholder="모임명을 입력하세요"
                    {oninput}
                />
                { p.error.as_ref().map(|msg| html! {
                    <p class="field-error" role="alert">{ msg.clone() }</p>
                }).unwrap_or_default() }
                <label for="club-thumbnail">{ "대표 이미지" }</label>
                <input id="club-thumbnail" type="file" accept="image/*" onchange={p.on_file.clone()} />
                { p.file_name.as_ref().map(|name| html! {
                    <span class="create-club__file">{ name.clone() }</span>
                }).unwrap_or_default() }
                <Button label="등록하기" kind="submit" size={ButtonSize::Large} disabled={p.busy} />
            </form>
            { notice.unwrap_or_default() }
        </main>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(CreateClubPage)]
pub fn create_club_page() -> Html {
    use crate::router::Route;
    use crate::session::use_session;
    use rollpaper_core::create_club;
    use wasm_bindgen_futures::spawn_local;
    use yew_router::prelude::*;

    let session = use_session();
    let navigator = use_navigator();
    let title = use_state(String::new);
    let file = use_state(|| None::<web_sys::File>);
    let error = use_state(|| None::<AttrValue>);
    let busy = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    let on_title = {
        let title = title.clone();
        let error = error.clone();
        Callback::from(move |value: String| {
            error.set(None);
            title.set(value);
        })
    };
    let on_file = {
        let file = file.clone();
        Callback::from(move |e: Event| {
            let picked = e
                .target_dyn_into::<web_sys::HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            file.set(picked);
        })
    };
    let on_submit = {
        let session = session.clone();
        let title = title.clone();
        let file = file.clone();
        let error = error.clone();
        let busy = busy.clone();
        let notice = notice.clone();
        Callback::from(move |()| {
            if *busy {
                return;
            }
            let client = match session.client() {
                Ok(client) => client,
                Err(err) => {
                    log::error!("backend is not configured: {err}");
                    notice.set(Some(Notice::club_failed()));
                    return;
                }
            };
            let session = session.clone();
            let title = (*title).clone();
            let file = (*file).clone();
            let error = error.clone();
            let busy = busy.clone();
            let notice = notice.clone();
            busy.set(true);
            spawn_local(async move {
                let mut cache = (*session.clubs).clone();
                let owner_id = session.user.user().map(|u| u.id.clone());
                let result = create_club(
                    &client,
                    &mut cache,
                    owner_id.as_deref(),
                    &title,
                    file.as_ref(),
                    crate::dom::now_ms(),
                )
                .await;
                busy.set(false);
                match result {
                    Ok(outcome) => {
                        session.set_clubs(cache);
                        notice.set(Some(outcome));
                    }
                    Err(err) => error.set(Some(AttrValue::Static(err.message()))),
                }
            });
        })
    };
    let on_confirm = {
        let navigator = navigator.clone();
        let notice = notice.clone();
        Callback::from(move |()| {
            let target = (*notice).as_ref().map(|n| n.confirm.clone());
            notice.set(None);
            if let (Some(path), Some(nav)) = (target, navigator.as_ref()) {
                nav.push(&Route::from(path));
            }
        })
    };
    let on_back = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Clubs);
        }
    });

    html! {
        <CreateClubForm
            title={(*title).clone()}
            file_name={(*file).as_ref().map(|f| AttrValue::from(f.name()))}
            error={(*error).clone()}
            busy={*busy}
            notice={(*notice).clone()}
            {on_title}
            {on_file}
            {on_submit}
            {on_confirm}
            {on_back}
        />
    }
}
