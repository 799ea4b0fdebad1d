//! Backend-backed flows run against the in-memory backend.

use anyhow::{Context, Result, ensure};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rollpaper_core::model::{SessionUser, UserProfile};
use rollpaper_core::registry::thumbnail_key;
use rollpaper_core::{
    AppPath, AuthOutcome, Category, ClubFormError, ClubListCache, ComposeError, Fault,
    InMemoryBackend, NicknameError, NoteColor, NoteStore, PostDraft, UserContext,
    complete_onboarding, create_club, load_clubs, resolve_redirect, submit_post,
};

const CDN: &str = "https://cdn.test";

pub async fn club_create(rng: &mut ChaCha8Rng) -> Result<()> {
    let backend = InMemoryBackend::with_base_url(CDN);
    let mut cache = ClubListCache::new();
    let existing = rng.gen_range(0..5);
    for i in 0..existing {
        backend.add_club(&format!("club {i}"), None);
    }
    let listed = load_clubs(&backend, &mut cache).await?;
    ensure!(listed.len() == existing, "listed {} of {existing} clubs", listed.len());

    let blank = " ".repeat(rng.gen_range(0..4));
    let rejected = create_club(&backend, &mut cache, Some("owner"), &blank, None, 1).await;
    ensure!(
        rejected == Err(ClubFormError::EmptyTitle),
        "blank title gave {rejected:?}"
    );
    ensure!(backend.write_count() == 0, "blank title wrote to the backend");

    let now: u64 = rng.gen_range(1_600_000_000_000..1_900_000_000_000);
    let payload: Vec<u8> = (0..rng.gen_range(1..64))
        .map(|_| rng.gen_range(0..=u8::MAX))
        .collect();
    let generation = cache.generation();
    let notice = create_club(&backend, &mut cache, Some("owner"), "졸업", Some(&payload), now).await?;
    ensure!(notice.is_success(), "insert succeeded but notice was {notice:?}");
    ensure!(cache.generation() == generation + 1, "cache not invalidated");
    ensure!(
        backend.object_keys() == vec![thumbnail_key(now)],
        "unexpected objects {:?}",
        backend.object_keys()
    );

    let clubs = load_clubs(&backend, &mut cache).await?;
    ensure!(clubs.len() == existing + 1, "list did not refresh");
    let created = clubs.last().context("created club missing")?;
    let expected_url = format!("{CDN}/{}", thumbnail_key(now));
    ensure!(
        created.thumbnail.as_deref() == Some(expected_url.as_str()),
        "thumbnail was {:?}",
        created.thumbnail
    );

    backend.fail(Fault::Upload);
    let writes = backend.write_count();
    let notice = create_club(&backend, &mut cache, Some("owner"), "업로드 실패", Some(&payload), now + 1).await?;
    ensure!(
        !notice.is_success() && notice.confirm == AppPath::CreateClub,
        "failed upload reported {notice:?}"
    );
    ensure!(backend.write_count() == writes, "insert issued after failed upload");

    backend.heal(Fault::Upload);
    backend.fail(Fault::InsertClub);
    let generation = cache.generation();
    let notice = create_club(&backend, &mut cache, None, "등록 실패", None, now + 2).await?;
    ensure!(!notice.is_success(), "failed insert reported success");
    ensure!(cache.generation() == generation + 1, "cache kept after failure");
    ensure!(backend.clubs().len() == existing + 1, "failed insert left a row");
    Ok(())
}

pub async fn auth_redirect(rng: &mut ChaCha8Rng) -> Result<()> {
    let backend = InMemoryBackend::new();
    let token = format!("tok-{}", rng.gen_range(1_000..10_000));
    let user_id = format!("u-{}", rng.gen_range(1..500));
    backend.add_session(
        &token,
        SessionUser {
            id: user_id.clone(),
            email: Some("guest@kakao.test".to_string()),
        },
    );
    let fragment = format!("#access_token={token}&refresh_token=r&expires_in=3600&token_type=bearer");

    let mut ctx = UserContext::new();
    for bad in ["#error=access_denied", "", "#access_token=bogus"] {
        let outcome = resolve_redirect(&backend, bad, &mut ctx).await;
        ensure!(
            outcome == AuthOutcome::Navigate(AppPath::Login),
            "fragment {bad:?} gave {outcome:?}"
        );
    }

    let outcome = resolve_redirect(&backend, &fragment, &mut ctx).await;
    ensure!(
        outcome == AuthOutcome::Navigate(AppPath::SocialNickname),
        "first visit gave {outcome:?}"
    );
    ensure!(ctx.needs_onboarding(), "session not kept for onboarding");

    let blank = complete_onboarding(&backend, &mut ctx, "   ").await;
    ensure!(blank == Err(NicknameError::Empty), "blank nickname gave {blank:?}");
    let nickname = format!("손님{}", rng.gen_range(1..100));
    let next = complete_onboarding(&backend, &mut ctx, &nickname).await?;
    ensure!(next == AppPath::Clubs, "onboarding went to {next}");
    ensure!(ctx.is_signed_in(), "onboarding did not sign in");
    let stored: Option<UserProfile> = backend.profile(&user_id);
    ensure!(
        stored.is_some_and(|p| p.nickname == nickname),
        "profile row not written"
    );

    let mut returning = UserContext::new();
    let outcome = resolve_redirect(&backend, &fragment, &mut returning).await;
    ensure!(
        outcome == AuthOutcome::Navigate(AppPath::Clubs),
        "returning visit gave {outcome:?}"
    );
    ensure!(
        returning.user().map(|u| u.nickname.as_str()) == Some(nickname.as_str()),
        "returning user not populated"
    );

    backend.fail(Fault::FetchProfile);
    let mut halted = UserContext::new();
    let outcome = resolve_redirect(&backend, &fragment, &mut halted).await;
    ensure!(
        matches!(outcome, AuthOutcome::Halt(_)),
        "profile failure gave {outcome:?}"
    );
    ensure!(halted.session().is_none(), "halted login kept a session");
    Ok(())
}

pub async fn compose_post(rng: &mut ChaCha8Rng) -> Result<()> {
    let backend = InMemoryBackend::new();
    let club = backend.add_club("졸업", None);
    let color = NoteColor::ALL[rng.gen_range(0..NoteColor::ALL.len())];
    let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
    let draft = PostDraft {
        nickname: format!("writer{}", rng.gen_range(0..100)),
        category: category.label().to_string(),
        color: color.as_str().to_string(),
        content: "축하해!".to_string(),
    };

    let mut broken = draft.clone();
    let whitespace = [" ", "\n", "\t "][rng.gen_range(0..3)].to_string();
    match rng.gen_range(0..4) {
        0 => broken.nickname = whitespace,
        1 => broken.category = whitespace,
        2 => broken.color = whitespace,
        _ => broken.content = whitespace,
    }
    ensure!(
        submit_post(&backend, &club, &broken).await.is_err(),
        "incomplete draft was accepted"
    );
    ensure!(backend.write_count() == 0, "incomplete draft was written");

    backend.fail(Fault::InsertNote);
    let failed = submit_post(&backend, &club, &draft).await;
    ensure!(
        matches!(failed, Err(ComposeError::Backend(_))),
        "insert failure gave {failed:?}"
    );
    backend.heal(Fault::InsertNote);

    let back = submit_post(&backend, &club, &draft).await?;
    ensure!(back == AppPath::ClubBoard(club.clone()), "returned to {back}");
    let notes = backend.list_notes(&club).await?;
    ensure!(notes.len() == 1, "expected one note, found {}", notes.len());
    ensure!(notes[0].color == color.as_str(), "color not stored");
    ensure!(notes[0].category == category.label(), "category not stored");
    Ok(())
}
