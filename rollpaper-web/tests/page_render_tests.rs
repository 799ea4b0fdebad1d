use futures::executor::block_on;
use rollpaper_core::constants::{
    MSG_BOARD_EMPTY, MSG_CLUB_CREATED, MSG_CLUB_DATA_MISSING, MSG_CLUB_TITLE_REQUIRED,
    MSG_LINK_COPIED, MSG_LOADING, MSG_NICKNAME_REQUIRED, MSG_SIGNING_IN,
};
use rollpaper_core::{
    BackendError, BoardController, Club, ClubHeading, Note, Notice, PostDraft, ViewMode,
};
use rollpaper_web::pages::{
    board::{BoardView, BoardViewProps},
    clubs::{ClubListView, ClubListViewProps},
    create_club::{CreateClubForm, CreateClubFormProps},
    create_post::{ComposerView, ComposerViewProps, DraftField},
    kakao_redirect::SigningInView,
    login::{LoginView, LoginViewProps},
    post_detail::{DetailState, PostDetailView, PostDetailViewProps},
    social_nickname::{NicknameForm, NicknameFormProps},
};
use yew::{AttrValue, Callback, LocalServerRenderer};

fn note(id: i64) -> Note {
    Note {
        id,
        club_id: "1".into(),
        nickname: format!("writer{id}"),
        category: "응원글".into(),
        color: "yellow".into(),
        content: format!("note {id}"),
    }
}

fn clubs(n: usize) -> Vec<Club> {
    (1..=n)
        .map(|i| Club {
            id: i.to_string(),
            title: format!("club {i}"),
            thumbnail: None,
            owner_id: None,
        })
        .collect()
}

fn loaded_board(notes: Vec<Note>) -> BoardController {
    let mut board = BoardController::new("1");
    let ticket = board.begin_load("1");
    assert!(board.apply_load(&ticket, Ok(notes)));
    board
}

fn board_props(controller: BoardController) -> BoardViewProps {
    BoardViewProps {
        controller,
        club: None,
        share_open: false,
        share_link: AttrValue::default(),
        copied: false,
        on_back: Callback::noop(),
        on_note_down: Callback::noop(),
        on_pointer_move: Callback::noop(),
        on_pointer_up: Callback::noop(),
        on_pointer_leave: Callback::noop(),
        on_list_select: Callback::noop(),
        on_toggle_view: Callback::noop(),
        on_toggle_relocation: Callback::noop(),
        on_share: Callback::noop(),
        on_close_share: Callback::noop(),
        on_copy: Callback::noop(),
        on_write: Callback::noop(),
    }
}

fn render_board(props: BoardViewProps) -> String {
    block_on(LocalServerRenderer::<BoardView>::with_props(props).render())
}

fn club_list(clubs: Option<Vec<Club>>, error: Option<&str>, page: usize) -> String {
    block_on(
        LocalServerRenderer::<ClubListView>::with_props(ClubListViewProps {
            clubs,
            error: error.map(|e| AttrValue::from(e.to_string())),
            page,
            on_page: Callback::noop(),
            on_select: Callback::noop(),
            on_create: Callback::noop(),
        })
        .render(),
    )
}

fn composer(heading: Option<ClubHeading>, draft: PostDraft) -> String {
    block_on(
        LocalServerRenderer::<ComposerView>::with_props(ComposerViewProps {
            heading,
            draft,
            error: None,
            busy: false,
            on_field: Callback::noop(),
            on_submit: Callback::noop(),
            on_back: Callback::noop(),
        })
        .render(),
    )
}

#[test]
fn board_lays_notes_out_on_the_grid() {
    let html = render_board(board_props(loaded_board(vec![note(1), note(2), note(3)])));
    assert!(html.contains("left:40px;top:20px;"));
    assert!(html.contains("left:210px;top:20px;"));
    assert!(html.contains("left:40px;top:200px;"));
    assert!(html.contains("data-view=\"grid\""));
    assert!(html.contains("재배치"));
}

#[test]
fn board_without_notes_shows_empty_state() {
    let html = render_board(board_props(loaded_board(Vec::new())));
    assert!(html.contains(MSG_BOARD_EMPTY));
    assert!(!html.contains("재배치"));
}

#[test]
fn board_is_loading_before_the_first_answer() {
    let html = render_board(board_props(BoardController::new("1")));
    assert!(html.contains(MSG_LOADING));
}

#[test]
fn failed_load_renders_like_an_empty_board() {
    let mut board = BoardController::new("1");
    let ticket = board.begin_load("1");
    board.apply_load(&ticket, Err(BackendError::Network("offline".into())));
    let html = render_board(board_props(board));
    assert!(html.contains(MSG_BOARD_EMPTY));
}

#[test]
fn list_view_renders_a_plain_list() {
    let mut board = loaded_board(vec![note(1), note(2)]);
    board.set_view_mode(ViewMode::List);
    let html = render_board(board_props(board));
    assert!(html.contains("board__list"));
    assert!(!html.contains("left:40px"));
    assert!(html.contains("note 2"));
}

#[test]
fn share_modal_shows_the_board_link() {
    let mut props = board_props(loaded_board(vec![note(1)]));
    props.share_open = true;
    props.share_link = AttrValue::from("https://paper.test/clubs/1/comments");
    props.club = Some(Club {
        id: "1".into(),
        title: "졸업".into(),
        thumbnail: None,
        owner_id: None,
    });
    let html = render_board(props);
    assert!(html.contains("share__link"));
    assert!(html.contains("https://paper.test/clubs/1/comments"));
    assert!(html.contains("졸업 모임"));
}

#[test]
fn share_link_keeps_base_path_and_status_waits_for_copy() {
    let board = loaded_board(vec![note(1)]);
    let mut props = board_props(board.clone());
    props.share_open = true;
    props.share_link = AttrValue::from(board.share_url("https://paper.test/app/"));
    let pending = render_board(props.clone());
    assert!(pending.contains("https://paper.test/app/clubs/1/comments"));
    assert!(!pending.contains(MSG_LINK_COPIED));

    props.copied = true;
    assert!(render_board(props).contains(MSG_LINK_COPIED));
}

#[test]
fn club_list_pages_six_at_a_time() {
    let first = club_list(Some(clubs(7)), None, 0);
    assert_eq!(first.matches("club-card__title").count(), 6);
    assert!(first.contains("pagination"));

    let second = club_list(Some(clubs(7)), None, 1);
    assert_eq!(second.matches("club-card__title").count(), 1);
    assert!(second.contains("club 7"));
}

#[test]
fn club_list_shows_loading_and_errors() {
    assert!(club_list(None, None, 0).contains(MSG_LOADING));
    let failed = club_list(None, Some("request failed with status 500"), 0);
    assert!(failed.contains("request failed with status 500"));
    assert!(failed.contains("모임 만들기"));
}

#[test]
fn create_club_form_shows_inline_error_and_notice() {
    let html = block_on(
        LocalServerRenderer::<CreateClubForm>::with_props(CreateClubFormProps {
            title: AttrValue::default(),
            file_name: Some(AttrValue::from("cover.jpg")),
            error: Some(AttrValue::from(MSG_CLUB_TITLE_REQUIRED)),
            busy: false,
            notice: Some(Notice::club_created()),
            on_title: Callback::noop(),
            on_file: Callback::noop(),
            on_submit: Callback::noop(),
            on_confirm: Callback::noop(),
            on_back: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains(MSG_CLUB_TITLE_REQUIRED));
    assert!(html.contains("cover.jpg"));
    assert!(html.contains("알림"));
    assert!(html.contains(MSG_CLUB_CREATED));
}

#[test]
fn composer_heading_follows_the_guest_fetch() {
    assert!(composer(None, PostDraft::default()).contains("spinner"));

    let titled = composer(
        Some(ClubHeading::Title("졸업".into())),
        PostDraft::default(),
    );
    assert!(titled.contains("졸업님의 모임"));

    let missing = composer(Some(ClubHeading::Missing), PostDraft::default());
    assert!(missing.contains(MSG_CLUB_DATA_MISSING));

    let failed = composer(
        Some(ClubHeading::Failed("데이터를 불러올 수 없습니다".into())),
        PostDraft::default(),
    );
    assert!(failed.contains("에러가 발생했습니다: 데이터를 불러올 수 없습니다"));
    assert!(failed.contains("composer__heading--error"));
}

#[test]
fn composer_submit_waits_for_a_complete_draft() {
    let empty = composer(Some(ClubHeading::Title("t".into())), PostDraft::default());
    assert!(empty.contains("disabled"));

    let mut draft = PostDraft::default();
    DraftField::Nickname.apply(&mut draft, "민지".into());
    DraftField::Content.apply(&mut draft, "축하해".into());
    DraftField::Color.apply(&mut draft, "blue".into());
    assert!(draft.is_complete());
    let ready = composer(Some(ClubHeading::Title("t".into())), draft);
    assert!(!ready.contains("disabled"));
    assert!(ready.contains("swatch--selected"));
}

#[test]
fn post_detail_renders_each_state() {
    let render = |state| {
        block_on(
            LocalServerRenderer::<PostDetailView>::with_props(PostDetailViewProps {
                state,
                on_back: Callback::noop(),
            })
            .render(),
        )
    };
    assert!(render(DetailState::Loading).contains(MSG_LOADING));
    assert!(render(DetailState::Missing).contains(MSG_BOARD_EMPTY));
    let found = render(DetailState::Found(note(5)));
    assert!(found.contains("note 5"));
    assert!(found.contains("From. writer5"));
}

#[test]
fn login_offers_sign_in_or_sign_out() {
    let render = |signed_in_as: Option<&str>| {
        block_on(
            LocalServerRenderer::<LoginView>::with_props(LoginViewProps {
                signed_in_as: signed_in_as.map(|n| AttrValue::from(n.to_string())),
                on_login: Callback::noop(),
                on_logout: Callback::noop(),
            })
            .render(),
        )
    };
    assert!(render(None).contains("카카오로 시작하기"));
    let signed_in = render(Some("민지"));
    assert!(signed_in.contains("민지님으로 로그인되어 있습니다."));
    assert!(signed_in.contains("로그아웃"));
}

#[test]
fn redirect_page_shows_progress() {
    let html = block_on(LocalServerRenderer::<SigningInView>::new().render());
    assert!(html.contains(MSG_SIGNING_IN));
}

#[test]
fn nickname_form_shows_required_message() {
    let html = block_on(
        LocalServerRenderer::<NicknameForm>::with_props(NicknameFormProps {
            nickname: AttrValue::default(),
            error: Some(AttrValue::from(MSG_NICKNAME_REQUIRED)),
            busy: false,
            on_input: Callback::noop(),
            on_submit: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains(MSG_NICKNAME_REQUIRED));
}
