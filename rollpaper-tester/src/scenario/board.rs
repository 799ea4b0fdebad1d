//! Board scenarios: layout and the drag machine, driven by random pointer
//! traces.

use anyhow::{Context, Result, ensure};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rollpaper_core::constants::DRAG_THRESHOLD_PX;
use rollpaper_core::{AppPath, BoardController, LoadState, Note, NoteId, Position, PositionMap};

const MAX_TRAVEL: i32 = 200;

fn notes(club_id: &str, count: usize, rng: &mut ChaCha8Rng) -> Vec<Note> {
    let mut id: NoteId = rng.gen_range(1..1_000);
    (0..count)
        .map(|i| {
            id += rng.gen_range(1..5);
            Note {
                id,
                club_id: club_id.to_string(),
                nickname: format!("guest{i}"),
                category: "응원글".to_string(),
                color: "white".to_string(),
                content: format!("note {i}"),
            }
        })
        .collect()
}

fn loaded(club_id: &str, notes: Vec<Note>) -> Result<BoardController> {
    let mut board = BoardController::new(club_id);
    let ticket = board.begin_load(club_id);
    ensure!(board.apply_load(&ticket, Ok(notes)), "fresh ticket was rejected");
    Ok(board)
}

fn pick(board: &BoardController, rng: &mut ChaCha8Rng) -> Result<NoteId> {
    let notes = board.notes();
    ensure!(!notes.is_empty(), "board has no notes");
    Ok(notes[rng.gen_range(0..notes.len())].id)
}

fn press_point(rng: &mut ChaCha8Rng) -> Position {
    Position::new(rng.gen_range(0..400), rng.gen_range(0..1_200))
}

/// Offset that stays inside the drag threshold on both axes.
fn jitter(rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(-DRAG_THRESHOLD_PX..=DRAG_THRESHOLD_PX),
        rng.gen_range(-DRAG_THRESHOLD_PX..=DRAG_THRESHOLD_PX),
    )
}

/// Offset that crosses the threshold on at least one axis.
fn far_delta(rng: &mut ChaCha8Rng) -> Position {
    let magnitude = rng.gen_range(DRAG_THRESHOLD_PX + 1..=MAX_TRAVEL);
    let signed = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
    let other = rng.gen_range(-MAX_TRAVEL..=MAX_TRAVEL);
    if rng.gen_bool(0.5) {
        Position::new(signed, other)
    } else {
        Position::new(other, signed)
    }
}

pub fn grid_layout(rng: &mut ChaCha8Rng) -> Result<()> {
    let count = rng.gen_range(0..=40);
    let notes = notes("grid", count, rng);
    let map = PositionMap::from_notes(&notes);
    ensure!(map.covers_exactly(&notes), "position keys differ from note ids");
    for (index, note) in notes.iter().enumerate() {
        let x = i32::try_from(index % 2)? * 170 + 40;
        let y = i32::try_from(index / 2)? * 180 + 20;
        ensure!(
            map.get(note.id) == Some(Position::new(x, y)),
            "note {} at index {index} placed at {:?}",
            note.id,
            map.get(note.id)
        );
    }
    Ok(())
}

pub fn drag_threshold(rng: &mut ChaCha8Rng) -> Result<()> {
    let count = rng.gen_range(1..=12);
    let mut board = loaded("drag", notes("drag", count, rng))?;
    board.toggle_relocation();
    let id = pick(&board, rng)?;
    let before = board.position_of(id).context("picked note has no position")?;

    let press = press_point(rng);
    board.pointer_down(id, press);
    for _ in 0..rng.gen_range(1..=6) {
        board.pointer_move(press + jitter(rng));
    }
    ensure!(board.pointer_up().is_none(), "wiggle while relocating navigated");
    ensure!(
        board.position_of(id) == Some(before),
        "wiggle moved note {id} to {:?}",
        board.position_of(id)
    );

    let delta = far_delta(rng);
    board.pointer_down(id, press);
    board.pointer_move(press + delta);
    ensure!(board.pointer_up().is_none(), "drag navigated");
    ensure!(
        board.position_of(id) == Some(before + delta),
        "drag by {delta:?} left note {id} at {:?}",
        board.position_of(id)
    );
    Ok(())
}

pub fn click_navigation(rng: &mut ChaCha8Rng) -> Result<()> {
    let count = rng.gen_range(1..=12);
    let mut board = loaded("click", notes("click", count, rng))?;
    let id = pick(&board, rng)?;
    let before = board.positions().clone();

    let press = press_point(rng);
    board.pointer_down(id, press);
    for _ in 0..rng.gen_range(0..=4) {
        board.pointer_move(press + far_delta(rng));
    }
    let first = board.pointer_up();
    let second = board.pointer_up();
    ensure!(
        first
            == Some(AppPath::PostDetail {
                club_id: "click".to_string(),
                post_id: id,
            }),
        "click on {id} resolved to {first:?}"
    );
    ensure!(second.is_none(), "second release navigated again");
    ensure!(
        board.positions() == &before,
        "moves outside relocation changed positions"
    );
    Ok(())
}

pub fn relocation_toggle(rng: &mut ChaCha8Rng) -> Result<()> {
    let count = rng.gen_range(2..=12);
    let mut board = loaded("toggle", notes("toggle", count, rng))?;
    board.toggle_relocation();
    let id = pick(&board, rng)?;
    let before = board.positions().clone();
    let origin = before.get(id).context("picked note has no position")?;

    let press = press_point(rng);
    let delta = far_delta(rng);
    board.pointer_down(id, press);
    board.pointer_move(press + delta);
    board.toggle_relocation();
    board.pointer_move(press + far_delta(rng));
    ensure!(board.pointer_up().is_none(), "release after toggling navigated");
    ensure!(
        board.position_of(id) == Some(origin + delta),
        "dragged note ended at {:?}",
        board.position_of(id)
    );
    for (other, position) in before.iter().filter(|(other, _)| *other != id) {
        ensure!(
            board.position_of(other) == Some(position),
            "note {other} moved while {id} was dragged"
        );
    }
    Ok(())
}

pub fn stale_load(rng: &mut ChaCha8Rng) -> Result<()> {
    let older_club = "older";
    let newer_club = if rng.gen_bool(0.5) { "newer" } else { older_club };
    let older_count = rng.gen_range(0..=8);
    let newer_count = rng.gen_range(0..=8);
    let older_notes = notes(older_club, older_count, rng);
    let newer_notes = notes(newer_club, newer_count, rng);

    let mut board = BoardController::new(older_club);
    let older = board.begin_load(older_club);
    let newer = board.begin_load(newer_club);

    if rng.gen_bool(0.5) {
        ensure!(
            !board.apply_load(&older, Ok(older_notes.clone())),
            "stale ticket applied before the fresh one"
        );
        ensure!(board.load_state() == LoadState::Loading, "stale load ended loading");
    }
    ensure!(board.apply_load(&newer, Ok(newer_notes.clone())), "fresh ticket rejected");
    ensure!(
        !board.apply_load(&older, Ok(older_notes)),
        "stale ticket applied after the fresh one"
    );
    ensure!(board.notes() == newer_notes.as_slice(), "board shows stale notes");
    ensure!(
        board.positions().covers_exactly(board.notes()),
        "position keys differ from note ids"
    );
    Ok(())
}
