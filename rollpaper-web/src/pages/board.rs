//! A club's board: notes laid out on a grid that can be dragged around, or
//! shown as a plain list.

use crate::components::board_toolbar::BoardToolbar;
use crate::components::club_title::ClubTitle;
use crate::components::header::PageHeader;
use crate::components::modal::Modal;
use crate::components::note_card::{NoteGridItem, NoteListItem};
use crate::components::share_dialog::ShareDialog;
use rollpaper_core::constants::{MSG_BOARD_EMPTY, MSG_LOADING, MSG_SHARE_TITLE};
use rollpaper_core::{BoardController, Club, LoadState, NoteId, Position, ViewMode};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardViewProps {
    pub controller: BoardController,
    pub club: Option<Club>,
    #[prop_or_default]
    pub share_open: bool,
    #[prop_or_default]
    pub share_link: AttrValue,
    #[prop_or_default]
    pub copied: bool,
    pub on_back: Callback<()>,
    pub on_note_down: Callback<(NoteId, Position)>,
    pub on_pointer_move: Callback<Position>,
    pub on_pointer_up: Callback<()>,
    pub on_pointer_leave: Callback<()>,
    pub on_list_select: Callback<NoteId>,
    pub on_toggle_view: Callback<()>,
    pub on_toggle_relocation: Callback<()>,
    pub on_share: Callback<()>,
    pub on_close_share: Callback<()>,
    pub on_copy: Callback<AttrValue>,
    pub on_write: Callback<()>,
}

#[function_component(BoardView)]
pub fn board_view(p: &BoardViewProps) -> Html {
    let board = &p.controller;
    let drag_state = board.drag().state();
    let dragging = drag_state
        .is_dragging()
        .then(|| drag_state.note_id())
        .flatten();

    let body = match board.load_state() {
        LoadState::Loading => html! { <p class="board__status">{ MSG_LOADING }</p> },
        LoadState::NotFound => html! {
            <section class="board__empty" aria-live="polite">
                <img src={crate::paths::asset_path("icons/empty.png")} alt="" />
                <p>{ MSG_BOARD_EMPTY }</p>
            </section>
        },
        LoadState::Loaded => match board.view_mode() {
            ViewMode::Grid => {
                let cards = board.notes().iter().filter_map(|note| {
                    let position = board.position_of(note.id)?;
                    Some(html! {
                        <NoteGridItem
                            key={note.id}
                            note={note.clone()}
                            {position}
                            dragging={dragging == Some(note.id)}
                            on_pointer_down={p.on_note_down.clone()}
                        />
                    })
                });
                html! {
                    <section class={classes!("board__grid", board.is_relocating().then_some("board__grid--relocating"))}>
                        { for cards }
                    </section>
                }
            }
            ViewMode::List => html! {
                <ul class="board__list">
                    { for board.notes().iter().map(|note| html! {
                        <NoteListItem key={note.id} note={note.clone()} on_select={p.on_list_select.clone()} />
                    }) }
                </ul>
            },
        },
    };

    // Gestures are tracked on the whole page, header and toolbar included.
    let onmousemove = {
        let cb = p.on_pointer_move.clone();
        Callback::from(move |e: MouseEvent| cb.emit(Position::new(e.client_x(), e.client_y())))
    };
    let onmouseup = {
        let cb = p.on_pointer_up.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let onmouseleave = {
        let cb = p.on_pointer_leave.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <main
            class="board"
            data-view={board.view_mode().as_str()}
            {onmousemove}
            {onmouseup}
            {onmouseleave}
        >
            <PageHeader on_back={p.on_back.clone()}>
                <ClubTitle club={p.club.clone()} />
            </PageHeader>
            { body }
            <BoardToolbar
                view_mode={board.view_mode()}
                relocating={board.is_relocating()}
                can_relocate={board.can_relocate()}
                on_toggle_view={p.on_toggle_view.clone()}
                on_toggle_relocation={p.on_toggle_relocation.clone()}
                on_share={p.on_share.clone()}
                on_write={p.on_write.clone()}
            />
            <Modal open={p.share_open} title={MSG_SHARE_TITLE} on_close={p.on_close_share.clone()}>
                <ShareDialog link={p.share_link.clone()} copied={p.copied} on_copy={p.on_copy.clone()} />
            </Modal>
        </main>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BoardPageProps {
    pub club_id: AttrValue,
}

#[cfg(target_arch = "wasm32")]
#[function_component(BoardPage)]
pub fn board_page(props: &BoardPageProps) -> Html {
    use crate::router::Route;
    use crate::session::use_session;
    use rollpaper_core::{AppPath, BackendError, ClubStore, NoteStore};
    use wasm_bindgen_futures::spawn_local;
    use yew_router::prelude::*;

    let session = use_session();
    let navigator = use_navigator();
    let board = use_mut_ref(|| BoardController::new(props.club_id.to_string()));
    let redraw = use_force_update();
    let club = use_state(|| None::<Club>);
    let share_open = use_state(|| false);
    let copied = use_state(|| false);

    {
        let board = board.clone();
        let redraw = redraw.clone();
        let club = club.clone();
        let session = session.clone();
        use_effect_with(props.club_id.clone(), move |club_id| {
            let club_id = club_id.to_string();
            let ticket = board.borrow_mut().begin_load(club_id.clone());
            club.set(None);
            redraw.force_update();
            match session.client() {
                Ok(client) => spawn_local(async move {
                    let notes = client.list_notes(&club_id).await;
                    if board.borrow_mut().apply_load(&ticket, notes) {
                        redraw.force_update();
                    }
                    match client.fetch_club(&club_id).await {
                        Ok(found) if board.borrow().club_id() == found.id => club.set(Some(found)),
                        Ok(_) => {}
                        Err(err) => log::warn!("club {club_id} header unavailable: {err}"),
                    }
                }),
                Err(err) => {
                    log::error!("backend is not configured: {err}");
                    board
                        .borrow_mut()
                        .apply_load(&ticket, Err(BackendError::Network(err.to_string())));
                    redraw.force_update();
                }
            }
            || {}
        });
    }

    let go = {
        let navigator = navigator.clone();
        move |path: AppPath| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::from(path));
            }
        }
    };

    let on_note_down = {
        let board = board.clone();
        let redraw = redraw.clone();
        Callback::from(move |(id, pointer): (NoteId, Position)| {
            board.borrow_mut().pointer_down(id, pointer);
            redraw.force_update();
        })
    };
    let on_pointer_move = {
        let board = board.clone();
        let redraw = redraw.clone();
        Callback::from(move |pointer: Position| {
            if board.borrow_mut().pointer_move(pointer).is_some() {
                redraw.force_update();
            }
        })
    };
    let on_pointer_up = {
        let board = board.clone();
        let redraw = redraw.clone();
        let go = go.clone();
        Callback::from(move |()| {
            let target = board.borrow_mut().pointer_up();
            redraw.force_update();
            if let Some(path) = target {
                go(path);
            }
        })
    };
    let on_pointer_leave = {
        let board = board.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            board.borrow_mut().pointer_leave();
            redraw.force_update();
        })
    };
    let on_list_select = {
        let board = board.clone();
        let go = go.clone();
        Callback::from(move |id: NoteId| {
            let target = board.borrow().list_click(id);
            if let Some(path) = target {
                go(path);
            }
        })
    };
    let on_toggle_view = {
        let board = board.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            board.borrow_mut().toggle_view_mode();
            redraw.force_update();
        })
    };
    let on_toggle_relocation = {
        let board = board.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            board.borrow_mut().toggle_relocation();
            redraw.force_update();
        })
    };
    let on_share = {
        let share_open = share_open.clone();
        let copied = copied.clone();
        Callback::from(move |()| {
            copied.set(false);
            share_open.set(true);
        })
    };
    let on_close_share = {
        let share_open = share_open.clone();
        Callback::from(move |()| share_open.set(false))
    };
    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |link: AttrValue| {
            let copied = copied.clone();
            spawn_local(async move {
                match crate::dom::copy_to_clipboard(&link).await {
                    Ok(()) => copied.set(true),
                    Err(err) => log::warn!(
                        "could not copy share link: {}",
                        crate::dom::js_error_message(&err)
                    ),
                }
            });
        })
    };
    let on_write = {
        let go = go.clone();
        let club_id = props.club_id.to_string();
        Callback::from(move |()| go(AppPath::CreatePost(club_id.clone())))
    };
    let on_back = Callback::from(move |()| go(AppPath::Clubs));

    let controller = board.borrow().clone();
    let share_link = controller.share_url(&crate::paths::app_origin(&crate::dom::origin()));

    html! {
        <BoardView
            {controller}
            club={(*club).clone()}
            share_open={*share_open}
            share_link={share_link}
            copied={*copied}
            {on_back}
            {on_note_down}
            {on_pointer_move}
            {on_pointer_up}
            {on_pointer_leave}
            {on_list_select}
            {on_toggle_view}
            {on_toggle_relocation}
            {on_share}
            {on_close_share}
            {on_copy}
            {on_write}
        />
    }
}
